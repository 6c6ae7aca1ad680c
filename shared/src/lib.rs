//! Shared types, advisory tables and models for the SoilSync platform
//!
//! This crate contains everything that does not need the network: it is used
//! by the backend and, through WASM, by the front-end for offline answers.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
