//! Domain models for the SoilSync platform

mod advisory;
mod chat;
mod disease;
mod weather;

pub use advisory::*;
pub use chat::*;
pub use disease::*;
pub use weather::*;
