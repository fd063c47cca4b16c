//! Core functionality for calldata-bench.
//!
//! This crate holds the pieces of the benchmark that involve no cryptography:
//! the L2 fee models, the transaction record data model, the in-memory record
//! store, plus configuration and logging shared by the binaries.

pub mod config;
pub mod error;
pub mod fees;
pub mod logging;
pub mod record;
pub mod store;

pub use config::{LogFormat, ServiceConfig};
pub use error::{CoreError, Result};
pub use fees::{estimate_arbitrum_fee, estimate_op_stack_fee, FeeQuote};
pub use record::{Algorithm, AlgorithmMetrics, RecordError, TransactionRecord};
pub use store::TransactionStore;
