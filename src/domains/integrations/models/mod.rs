// Integrations domain models
pub mod credentials;
pub mod integration;
pub mod metric;
pub mod normalized_order;
pub mod ad_performance;
pub mod tracking;

pub use credentials::*;
pub use integration::*;
pub use metric::*;
pub use normalized_order::*;
pub use ad_performance::*;
pub use tracking::*;
