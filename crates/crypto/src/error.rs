//! Errors raised by the benchmark transforms.

use calldata_core::{Algorithm, RecordError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    /// Input does not fit the fixed-size cipher (RSA-OAEP).
    #[error("{algorithm}: input of {input_size} bytes exceeds capacity of {max} bytes")]
    EncryptionCapacityExceeded {
        algorithm: Algorithm,
        input_size: usize,
        max: usize,
    },

    /// The underlying primitive failed (entropy, key generation, ...).
    #[error("{algorithm}: cryptographic failure: {reason}")]
    InternalCryptoFailure { algorithm: Algorithm, reason: String },

    #[error("Record assembly failed: {0}")]
    Record(#[from] RecordError),
}

impl BenchError {
    /// Algorithm that failed, if the failure came from a transform.
    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            BenchError::EncryptionCapacityExceeded { algorithm, .. }
            | BenchError::InternalCryptoFailure { algorithm, .. } => Some(*algorithm),
            BenchError::Record(_) => None,
        }
    }

    /// True when the failure is caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, BenchError::EncryptionCapacityExceeded { .. })
    }
}

pub type BenchResult<T> = Result<T, BenchError>;
