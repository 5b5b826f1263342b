// Shared HTTP client
pub mod http;

pub use http::*;
