// Auth domain models
pub mod auth;
pub mod company;
pub mod user;
pub mod jwt;
pub mod session;

pub use auth::*;
pub use company::*;
pub use user::*;
pub use jwt::*;
pub use session::*;
