// Alerts domain models
pub mod alert;
pub mod inventory;
pub mod cash_flow;
pub mod thresholds;

pub use alert::*;
pub use inventory::*;
pub use cash_flow::*;
pub use thresholds::*;
