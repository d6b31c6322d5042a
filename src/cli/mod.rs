use crate::adapters::AdapterRegistry;
use crate::services::{report, Aggregator, BillingExportReader, CostParseMode};
use crate::types::ChargebackError;
use clap::Parser;
use std::path::PathBuf;

/// Aggregate a cloud billing export into per-company and per-service costs
#[derive(Parser)]
#[command(name = "chargeback")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Billing provider whose export format to parse (aws, gcp)
    #[arg(long)]
    provider: String,

    /// Path to the billing export CSV
    #[arg(long)]
    input: PathBuf,

    /// Path for the aggregated JSON document
    #[arg(long, required_unless_present = "dry_run")]
    output: Option<PathBuf>,

    /// Print the JSON document to stdout instead of writing --output
    #[arg(long)]
    dry_run: bool,

    /// Fail on unparsable cost values instead of coercing them to 0
    #[arg(long)]
    strict: bool,

    /// Directory for the unmapped-rows report
    #[arg(long, default_value = "reports")]
    reports_dir: PathBuf,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let registry = AdapterRegistry::new();
        let adapter = registry.get(&self.provider).ok_or_else(|| {
            ChargebackError::Config(format!(
                "unknown provider '{}' (available: {})",
                self.provider,
                registry.names().join(", ")
            ))
        })?;

        let mode = if self.strict {
            CostParseMode::Strict
        } else {
            CostParseMode::Lenient
        };

        let records = BillingExportReader::from_path(&self.input)?;
        let aggregate = Aggregator::aggregate(records, adapter, mode)?;

        if self.dry_run {
            println!("{}", report::render_json(&aggregate)?);
        } else if let Some(output) = &self.output {
            report::write_json(&aggregate, output)?;
        }

        if let Some(path) =
            report::write_unmapped(aggregate.unmapped(), &self.reports_dir, adapter.name())?
        {
            println!("Wrote unmapped rows to {}", path.display());
        }

        println!("Done");
        Ok(())
    }
}
