// Orders domain models
pub mod status;
pub mod order;
pub mod history;
pub mod claim;
pub mod shipping_company;
pub mod stats;
pub mod requests;

pub use status::*;
pub use order::*;
pub use history::*;
pub use claim::*;
pub use shipping_company::*;
pub use stats::*;
pub use requests::*;
