//! Services for reading, aggregating, and reporting billing data

pub mod aggregator;
pub mod reader;
pub mod report;

pub use aggregator::{Aggregator, CostParseMode};
pub use reader::BillingExportReader;
