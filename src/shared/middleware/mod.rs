// Shared middleware (인증, 요청 추출기)
pub mod auth;
pub mod extract;

pub use auth::*;
pub use extract::*;
