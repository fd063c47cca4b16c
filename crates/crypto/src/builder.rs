//! Transaction record builder.
//!
//! Runs every algorithm over the input text, prices each output with the fee
//! models and assembles a [`TransactionRecord`]. Building is all-or-nothing:
//! if any transform fails, no record is produced.

use calldata_core::{Algorithm, AlgorithmMetrics, TransactionRecord};
use chrono::Utc;
use tracing::{debug, info};

use crate::error::BenchResult;
use crate::runner;

#[derive(Debug, Default, Clone, Copy)]
pub struct RecordBuilder;

impl RecordBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, text: &str) -> BenchResult<TransactionRecord> {
        let data = text.as_bytes();
        runner::check_capacity(data)?;

        let mut metrics = Vec::with_capacity(Algorithm::ALL.len());
        for algorithm in Algorithm::ALL {
            let measurement = runner::run(algorithm, data)?;
            let m = AlgorithmMetrics::from_measurement(
                measurement.elapsed_seconds(),
                measurement.output_size,
            );
            debug!(
                %algorithm,
                output_size = m.output_size,
                arbitrum_fee = m.arbitrum_fee,
                op_stack_fee = m.op_stack_fee,
                "algorithm priced"
            );
            metrics.push((algorithm, m));
        }

        let record = TransactionRecord::new(text.to_string(), Utc::now(), metrics)?;
        info!(input_size = record.input_size(), "transaction record built");
        Ok(record)
    }
}

/// Build a record with a default [`RecordBuilder`].
pub fn build_record(text: &str) -> BenchResult<TransactionRecord> {
    RecordBuilder::new().build(text)
}
