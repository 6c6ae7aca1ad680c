//! HTTP middleware

pub mod static_files;

pub use static_files::reject_hidden_paths;
