pub mod amount;
pub mod listing;
pub mod metrics;
pub mod pagination;
