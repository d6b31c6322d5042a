//! GCP billing export adapter

use super::BillingAdapter;

/// Adapter for GCP billing CSV exports.
///
/// Cost comes from `cost`, service from `service.description`. Attribution
/// prefers resource labels (`labels.company_tag`, then `labels.company_id`)
/// and falls back to scanning `resource.name` for a `company-` segment.
pub struct GcpBillingAdapter;

const TAG_FIELDS: &[&str] = &["labels.company_tag", "labels.company_id"];

impl GcpBillingAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GcpBillingAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl BillingAdapter for GcpBillingAdapter {
    fn name(&self) -> &str {
        "gcp"
    }

    fn cost_field(&self) -> &str {
        "cost"
    }

    fn service_field(&self) -> &str {
        "service.description"
    }

    fn tag_fields(&self) -> &[&str] {
        TAG_FIELDS
    }

    fn resource_field(&self) -> &str {
        "resource.name"
    }
}
