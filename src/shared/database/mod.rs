// Shared database layer
pub mod connection;
pub mod repositories;
pub mod stores;

pub use connection::*;
pub use repositories::*;
pub use stores::*;
