// Dashboard domain models
pub mod section;
pub mod metric;

pub use section::*;
pub use metric::*;
