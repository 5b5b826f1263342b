// All repositories module
pub mod auth;
pub mod orders;
pub mod integrations;
pub mod alerts;
pub mod dashboard;

// Re-export all repositories for convenience
pub use auth::*;
pub use orders::*;
pub use integrations::*;
pub use alerts::*;
pub use dashboard::*;

use anyhow::anyhow;
use std::str::FromStr;

/// DB 문자열 컬럼을 enum으로 변환
/// Parse a text column into one of our enums
pub(crate) fn parse_column<T>(column: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = String>,
{
    raw.parse::<T>()
        .map_err(|e| anyhow!("Invalid value in column '{}': {}", column, e))
}
