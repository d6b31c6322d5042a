//! Cloud billing chargeback: parse vendor cost exports, attribute each
//! record to its owning company, and aggregate cost per company and per
//! service. Unattributed records are preserved for operator review.

pub mod adapters;
pub mod cli;
pub mod services;
pub mod types;
