//! AWS Cost & Usage export adapter

use super::BillingAdapter;

/// Adapter for AWS Cost & Usage CSV exports.
///
/// Cost comes from `UnblendedCost`, service from `ProductName`. Company
/// attribution prefers the cost-allocation tags our accounts apply
/// (`resourceTags/company_tag`, then `resourceTags/company_id`) and falls
/// back to scanning `ResourceId` for a `company-` segment.
pub struct AwsCostAdapter;

const TAG_FIELDS: &[&str] = &["resourceTags/company_tag", "resourceTags/company_id"];

impl AwsCostAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AwsCostAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl BillingAdapter for AwsCostAdapter {
    fn name(&self) -> &str {
        "aws"
    }

    fn cost_field(&self) -> &str {
        "UnblendedCost"
    }

    fn service_field(&self) -> &str {
        "ProductName"
    }

    fn tag_fields(&self) -> &[&str] {
        TAG_FIELDS
    }

    fn resource_field(&self) -> &str {
        "ResourceId"
    }
}
