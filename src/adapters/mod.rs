//! Provider adapters describing vendor billing export layouts

mod aws;
mod gcp;

pub use aws::AwsCostAdapter;
pub use gcp::GcpBillingAdapter;

use crate::types::BillingRecord;

/// Marker embedded in resource identifiers by our provisioning tooling,
/// e.g. `projects/x/company-acme/bucket1`
const COMPANY_MARKER: &str = "company-";

/// Trait describing one vendor's billing export: which fields carry cost,
/// service name, explicit company tags, and the resource identifier used
/// for fallback attribution.
pub trait BillingAdapter: Send + Sync {
    /// Adapter name (e.g. "aws")
    fn name(&self) -> &str;

    /// Field holding the record's cost as a decimal string
    fn cost_field(&self) -> &str;

    /// Field holding the service/product name
    fn service_field(&self) -> &str;

    /// Tag-like fields checked for an explicit company id, in priority order
    fn tag_fields(&self) -> &[&str];

    /// Resource-identifier field scanned for the `company-` marker when no
    /// tag field is set
    fn resource_field(&self) -> &str;

    /// Map a record to its owning company.
    ///
    /// First non-empty tag field wins; tag fields always take precedence
    /// over the resource-identifier fallback. `None` means unattributed,
    /// which is not an error.
    fn attribute(&self, record: &BillingRecord) -> Option<String> {
        for field in self.tag_fields() {
            if let Some(value) = record.get(field) {
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
        record
            .get(self.resource_field())
            .and_then(extract_company_alias)
    }
}

/// Pull a company alias out of a resource identifier: the text after the
/// last `company-` marker, up to the next `/` or end of string.
fn extract_company_alias(resource_id: &str) -> Option<String> {
    let start = resource_id.rfind(COMPANY_MARKER)? + COMPANY_MARKER.len();
    let rest = &resource_id[start..];
    let alias = match rest.find('/') {
        Some(end) => &rest[..end],
        None => rest,
    };
    if alias.is_empty() {
        None
    } else {
        Some(alias.to_string())
    }
}

/// Registry of available provider adapters
pub struct AdapterRegistry {
    adapters: Vec<Box<dyn BillingAdapter>>,
}

impl AdapterRegistry {
    /// Create a new registry with default adapters
    pub fn new() -> Self {
        Self {
            adapters: vec![
                Box::new(AwsCostAdapter::new()),
                Box::new(GcpBillingAdapter::new()),
            ],
        }
    }

    /// Find an adapter by provider name
    pub fn get(&self, name: &str) -> Option<&dyn BillingAdapter> {
        self.adapters
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// Names of all registered providers
    pub fn names(&self) -> Vec<&str> {
        self.adapters.iter().map(|a| a.name()).collect()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_default_adapters() {
        let registry = AdapterRegistry::new();
        assert!(registry.get("aws").is_some());
        assert!(registry.get("gcp").is_some());
        assert_eq!(registry.names(), vec!["aws", "gcp"]);
    }

    #[test]
    fn test_registry_get_unknown() {
        let registry = AdapterRegistry::new();
        assert!(registry.get("azure").is_none());
    }

    #[test]
    fn test_extract_alias_with_path_separator() {
        assert_eq!(
            extract_company_alias("projects/x/company-beta/y"),
            Some("beta".to_string())
        );
    }

    #[test]
    fn test_extract_alias_at_end_of_string() {
        assert_eq!(
            extract_company_alias("arn:aws:s3:::company-acme"),
            Some("acme".to_string())
        );
    }

    #[test]
    fn test_extract_alias_uses_last_marker() {
        // Two markers: the later one wins, matching the provisioning layout
        // where the company segment is the deepest one
        assert_eq!(
            extract_company_alias("company-outer/sub/company-inner/x"),
            Some("inner".to_string())
        );
    }

    #[test]
    fn test_extract_alias_no_marker() {
        assert_eq!(extract_company_alias("i-1234567890abcdef0"), None);
    }

    #[test]
    fn test_extract_alias_empty_after_marker() {
        assert_eq!(extract_company_alias("bucket/company-"), None);
        assert_eq!(extract_company_alias("bucket/company-/x"), None);
    }
}
