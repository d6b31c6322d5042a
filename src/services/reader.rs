//! Streaming CSV reader for vendor billing exports

use crate::types::{BillingRecord, ChargebackError, Result};
use std::fs::File;
use std::io;
use std::path::Path;

/// Streaming reader over a billing export.
///
/// The header row is read eagerly at construction so a structurally broken
/// stream fails before any record is aggregated. Rows are then yielded one
/// at a time; the whole export is never held in memory. Ragged rows are
/// tolerated: short rows are padded with empty fields and extra fields are
/// dropped, so one sloppy row never aborts a run.
pub struct BillingExportReader<R: io::Read> {
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<R>,
}

impl BillingExportReader<File> {
    /// Open a billing export file
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: io::Read> BillingExportReader<R> {
    /// Wrap any byte stream containing a headered CSV export
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| ChargebackError::MalformedInput(format!("unreadable header: {}", e)))?
            .iter()
            .map(String::from)
            .collect();

        if headers.is_empty() {
            return Err(ChargebackError::MalformedInput(
                "missing header row".to_string(),
            ));
        }

        Ok(Self {
            headers,
            records: csv_reader.into_records(),
        })
    }

    /// Field names from the header row, in input order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: io::Read> Iterator for BillingExportReader<R> {
    type Item = Result<BillingRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.records.next()? {
            Ok(row) => row,
            // Undecodable row (e.g. invalid UTF-8): abort the stream
            Err(e) => {
                return Some(Err(ChargebackError::MalformedInput(format!(
                    "unreadable row: {}",
                    e
                ))))
            }
        };

        // Pad short rows with empty fields and drop fields beyond the
        // header, so every record carries exactly the header's field set
        let fields = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), row.get(i).unwrap_or("").to_string()))
            .collect();

        Some(Ok(BillingRecord::new(fields)))
    }
}
