//! Billing record and cost aggregate types

use serde::Serialize;
use std::collections::BTreeMap;

/// One parsed row of a vendor billing export.
///
/// Fields keep the header order of the source CSV so unattributed rows can
/// be re-serialized with the same structure as the input. Immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct BillingRecord {
    fields: Vec<(String, String)>,
}

impl BillingRecord {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Look up a field value by name. Field counts in billing exports are
    /// small (tens), so a linear scan beats a map here.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Field names in original header order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Field values in original header order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Per-run cost accumulator.
///
/// Created empty at run start, mutated once per input record, serialized at
/// run end. Never persisted between runs. BTreeMap keeps serialization
/// byte-stable across runs over the same input.
#[derive(Debug, Default)]
pub struct CostAggregate {
    per_company: BTreeMap<String, BTreeMap<String, f64>>,
    per_service: BTreeMap<String, f64>,
    unmapped: Vec<BillingRecord>,
}

impl CostAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add cost to a company's running total for a service
    pub fn add_company_cost(&mut self, company: &str, service: &str, cost: f64) {
        *self
            .per_company
            .entry(company.to_string())
            .or_default()
            .entry(service.to_string())
            .or_insert(0.0) += cost;
    }

    /// Add cost to the cross-company service total. Called for every record,
    /// attributed or not.
    pub fn add_service_cost(&mut self, service: &str, cost: f64) {
        *self.per_service.entry(service.to_string()).or_insert(0.0) += cost;
    }

    /// Record a row that failed attribution. Encounter order is preserved.
    pub fn push_unmapped(&mut self, record: BillingRecord) {
        self.unmapped.push(record);
    }

    pub fn per_company(&self) -> &BTreeMap<String, BTreeMap<String, f64>> {
        &self.per_company
    }

    pub fn per_service(&self) -> &BTreeMap<String, f64> {
        &self.per_service
    }

    pub fn unmapped(&self) -> &[BillingRecord] {
        &self.unmapped
    }

    /// Serializable view of the totals (unmapped rows are a side channel,
    /// not part of the document)
    pub fn report(&self) -> CostReport<'_> {
        CostReport {
            per_company: &self.per_company,
            per_service: &self.per_service,
        }
    }
}

/// Output document: `{"per_company": {...}, "per_service": {...}}`.
/// Values stay unrounded floats; rounding is an invoicing concern.
#[derive(Debug, Serialize)]
pub struct CostReport<'a> {
    pub per_company: &'a BTreeMap<String, BTreeMap<String, f64>>,
    pub per_service: &'a BTreeMap<String, f64>,
}
