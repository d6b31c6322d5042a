//! Type definitions for chargeback

mod error;
mod record;

pub use error::*;
pub use record::*;
