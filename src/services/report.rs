//! Report output: the JSON cost document and the unmapped-rows side channel

use crate::types::{BillingRecord, ChargebackError, CostAggregate, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Render the aggregate's output document as pretty-printed JSON
pub fn render_json(aggregate: &CostAggregate) -> Result<String> {
    serde_json::to_string_pretty(&aggregate.report())
        .map_err(|e| ChargebackError::Output(e.to_string()))
}

/// Write the output document to a file
pub fn write_json(aggregate: &CostAggregate, path: &Path) -> Result<()> {
    fs::write(path, render_json(aggregate)?)?;
    Ok(())
}

/// Persist unattributed rows as a CSV with the rows' own field structure so
/// operators can review them and improve the tagging.
///
/// Returns the path written, or `None` when there was nothing to write (no
/// file is produced for an empty set).
pub fn write_unmapped(
    unmapped: &[BillingRecord],
    reports_dir: &Path,
    provider: &str,
) -> Result<Option<PathBuf>> {
    let first = match unmapped.first() {
        Some(first) => first,
        None => return Ok(None),
    };

    fs::create_dir_all(reports_dir)?;
    let path = reports_dir.join(format!(
        "unmapped_rows_{}_{}.csv",
        provider,
        Utc::now().format("%Y%m%d")
    ));

    let mut writer = csv::Writer::from_path(&path)
        .map_err(|e| ChargebackError::Output(e.to_string()))?;
    writer
        .write_record(first.field_names())
        .map_err(|e| ChargebackError::Output(e.to_string()))?;
    for record in unmapped {
        writer
            .write_record(record.values())
            .map_err(|e| ChargebackError::Output(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| ChargebackError::Output(e.to_string()))?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> BillingRecord {
        BillingRecord::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn sample_aggregate() -> CostAggregate {
        let mut agg = CostAggregate::new();
        agg.add_company_cost("acme", "Compute", 10.0);
        agg.add_service_cost("Compute", 10.0);
        agg.add_service_cost("Storage", 3.0);
        agg.push_unmapped(record(&[("cost", "3"), ("service.description", "Storage")]));
        agg
    }

    #[test]
    fn test_render_json_shape() {
        let json = render_json(&sample_aggregate()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["per_company"]["acme"]["Compute"], 10.0);
        assert_eq!(value["per_service"]["Storage"], 3.0);
        // unmapped rows are a side channel, not part of the document
        assert!(value.get("unmapped").is_none());
    }

    #[test]
    fn test_write_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("per_company.json");
        write_json(&sample_aggregate(), &path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["per_company"]["acme"]["Compute"], 10.0);
    }

    #[test]
    fn test_write_unmapped_skipped_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let reports_dir = dir.path().join("reports");

        let written = write_unmapped(&[], &reports_dir, "gcp").unwrap();
        assert!(written.is_none());
        // not even the directory is created
        assert!(!reports_dir.exists());
    }

    #[test]
    fn test_write_unmapped_rows() {
        let dir = tempfile::tempdir().unwrap();
        let reports_dir = dir.path().join("reports");
        let unmapped = vec![
            record(&[("cost", "3"), ("service.description", "Storage")]),
            record(&[("cost", "1.5"), ("service.description", "Egress")]),
        ];

        let path = write_unmapped(&unmapped, &reports_dir, "gcp")
            .unwrap()
            .unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("unmapped_rows_gcp_"));

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("cost,service.description"));
        assert_eq!(lines.next(), Some("3,Storage"));
        assert_eq!(lines.next(), Some("1.5,Egress"));
    }
}
