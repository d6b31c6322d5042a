//! Core billing aggregation: company attribution + per-service totals

use crate::adapters::BillingAdapter;
use crate::types::{BillingRecord, ChargebackError, CostAggregate, Result};

/// How to treat cost values that are present but not parseable as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostParseMode {
    /// Coerce unparsable costs to 0.0 and keep going (matches the behavior
    /// of the billing exports we receive, where bad rows are rare noise)
    #[default]
    Lenient,
    /// Fail the run on the first unparsable cost
    Strict,
}

/// Aggregator for attributing billing records and accumulating cost totals
pub struct Aggregator;

impl Aggregator {
    /// Run one aggregation pass over a record stream.
    ///
    /// Every record's cost lands in the per-service totals. Records the
    /// adapter can attribute also land in that company's per-service total;
    /// the rest are collected as unmapped, in encounter order. Per-record
    /// data problems degrade to defaults (cost 0.0, service "unknown",
    /// company unattributed); only a broken stream or a strict-mode cost
    /// error aborts the pass.
    pub fn aggregate<I>(
        records: I,
        adapter: &dyn BillingAdapter,
        mode: CostParseMode,
    ) -> Result<CostAggregate>
    where
        I: IntoIterator<Item = Result<BillingRecord>>,
    {
        let mut aggregate = CostAggregate::new();

        for record in records {
            let record = record?;

            let cost = parse_cost(record.get(adapter.cost_field()), mode)?;
            let service = match record.get(adapter.service_field()) {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => "unknown".to_string(),
            };

            match adapter.attribute(&record) {
                Some(company) => aggregate.add_company_cost(&company, &service, cost),
                None => aggregate.push_unmapped(record),
            }
            aggregate.add_service_cost(&service, cost);
        }

        Ok(aggregate)
    }
}

/// Parse a cost field value. Missing and empty are always 0.0; a non-empty
/// value that is not a number is 0.0 in lenient mode and fatal in strict.
fn parse_cost(raw: Option<&str>, mode: CostParseMode) -> Result<f64> {
    let raw = match raw {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(0.0),
    };
    match raw.trim().parse::<f64>() {
        Ok(cost) => Ok(cost),
        Err(_) => match mode {
            CostParseMode::Lenient => Ok(0.0),
            CostParseMode::Strict => Err(ChargebackError::Parse(format!(
                "invalid cost value: {:?}",
                raw
            ))),
        },
    }
}
