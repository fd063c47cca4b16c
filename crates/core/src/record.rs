//! Transaction records: one benchmark run over a piece of input text.
//!
//! A record is assembled once and never mutated. Its JSON form is the flat
//! camelCase layout consumed by the dashboard frontend, e.g.
//! `sha256Time`, `sha256OutputSize`, `sha256ArbitrumPrice`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fees::FeeQuote;

/// The four benchmarked transforms, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Sha256,
    /// Labelled Keccak-256 on the wire; computed with SHA3-256.
    Keccak256,
    Aes256,
    Rsa,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Sha256,
        Algorithm::Keccak256,
        Algorithm::Aes256,
        Algorithm::Rsa,
    ];

    /// Field prefix used in the JSON record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Keccak256 => "keccak256",
            Algorithm::Aes256 => "aes256",
            Algorithm::Rsa => "rsa",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timing, size and fee figures for a single algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmMetrics {
    pub elapsed_seconds: f64,
    pub output_size: usize,
    pub arbitrum_fee: f64,
    pub op_stack_fee: f64,
    pub base_fee: f64,
}

impl AlgorithmMetrics {
    /// Fees are derived from `output_size` alone.
    pub fn from_measurement(elapsed_seconds: f64, output_size: usize) -> Self {
        let quote = FeeQuote::for_output_size(output_size);
        Self {
            elapsed_seconds,
            output_size,
            arbitrum_fee: quote.arbitrum,
            op_stack_fee: quote.op_stack,
            base_fee: quote.base,
        }
    }
}

/// Immutable result of benchmarking one input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RecordWire", try_from = "RecordWire")]
pub struct TransactionRecord {
    text: String,
    created_at: DateTime<Utc>,
    input_size: usize,
    sha256: AlgorithmMetrics,
    keccak256: AlgorithmMetrics,
    aes256: AlgorithmMetrics,
    rsa: AlgorithmMetrics,
}

impl TransactionRecord {
    /// `metrics` yields one entry per algorithm; missing algorithms make the
    /// record incomplete and are reported back as `Err`.
    pub fn new<I>(
        text: String,
        created_at: DateTime<Utc>,
        metrics: I,
    ) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (Algorithm, AlgorithmMetrics)>,
    {
        let mut slots: [Option<AlgorithmMetrics>; 4] = [None; 4];
        for (algorithm, m) in metrics {
            slots[slot(algorithm)] = Some(m);
        }
        let take = |algorithm: Algorithm| {
            slots[slot(algorithm)].ok_or(RecordError::MissingAlgorithm(algorithm))
        };

        Ok(Self {
            input_size: text.len(),
            sha256: take(Algorithm::Sha256)?,
            keccak256: take(Algorithm::Keccak256)?,
            aes256: take(Algorithm::Aes256)?,
            rsa: take(Algorithm::Rsa)?,
            text,
            created_at,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Byte length of the UTF-8 encoded text.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn metrics(&self, algorithm: Algorithm) -> &AlgorithmMetrics {
        match algorithm {
            Algorithm::Sha256 => &self.sha256,
            Algorithm::Keccak256 => &self.keccak256,
            Algorithm::Aes256 => &self.aes256,
            Algorithm::Rsa => &self.rsa,
        }
    }
}

fn slot(algorithm: Algorithm) -> usize {
    match algorithm {
        Algorithm::Sha256 => 0,
        Algorithm::Keccak256 => 1,
        Algorithm::Aes256 => 2,
        Algorithm::Rsa => 3,
    }
}

/// Errors raised while assembling or decoding a record.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordError {
    #[error("Missing metrics for algorithm: {0}")]
    MissingAlgorithm(Algorithm),

    #[error("inputSize {declared} does not match text length {actual}")]
    InputSizeMismatch { declared: usize, actual: usize },
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordWire {
    text: String,
    date: DateTime<Utc>,
    input_size: usize,

    sha256_time: f64,
    sha256_output_size: usize,
    sha256_arbitrum_price: f64,
    sha256_optimism_price: f64,
    sha256_base_price: f64,

    keccak256_time: f64,
    keccak256_output_size: usize,
    keccak256_arbitrum_price: f64,
    keccak256_optimism_price: f64,
    keccak256_base_price: f64,

    aes256_time: f64,
    aes256_output_size: usize,
    aes256_arbitrum_price: f64,
    aes256_optimism_price: f64,
    aes256_base_price: f64,

    rsa_time: f64,
    rsa_output_size: usize,
    rsa_arbitrum_price: f64,
    rsa_optimism_price: f64,
    rsa_base_price: f64,
}

impl From<TransactionRecord> for RecordWire {
    fn from(r: TransactionRecord) -> Self {
        Self {
            text: r.text,
            date: r.created_at,
            input_size: r.input_size,

            sha256_time: r.sha256.elapsed_seconds,
            sha256_output_size: r.sha256.output_size,
            sha256_arbitrum_price: r.sha256.arbitrum_fee,
            sha256_optimism_price: r.sha256.op_stack_fee,
            sha256_base_price: r.sha256.base_fee,

            keccak256_time: r.keccak256.elapsed_seconds,
            keccak256_output_size: r.keccak256.output_size,
            keccak256_arbitrum_price: r.keccak256.arbitrum_fee,
            keccak256_optimism_price: r.keccak256.op_stack_fee,
            keccak256_base_price: r.keccak256.base_fee,

            aes256_time: r.aes256.elapsed_seconds,
            aes256_output_size: r.aes256.output_size,
            aes256_arbitrum_price: r.aes256.arbitrum_fee,
            aes256_optimism_price: r.aes256.op_stack_fee,
            aes256_base_price: r.aes256.base_fee,

            rsa_time: r.rsa.elapsed_seconds,
            rsa_output_size: r.rsa.output_size,
            rsa_arbitrum_price: r.rsa.arbitrum_fee,
            rsa_optimism_price: r.rsa.op_stack_fee,
            rsa_base_price: r.rsa.base_fee,
        }
    }
}

impl TryFrom<RecordWire> for TransactionRecord {
    type Error = RecordError;

    fn try_from(w: RecordWire) -> Result<Self, Self::Error> {
        if w.input_size != w.text.len() {
            return Err(RecordError::InputSizeMismatch {
                declared: w.input_size,
                actual: w.text.len(),
            });
        }

        let metrics = |elapsed_seconds, output_size, arbitrum_fee, op_stack_fee, base_fee| {
            AlgorithmMetrics {
                elapsed_seconds,
                output_size,
                arbitrum_fee,
                op_stack_fee,
                base_fee,
            }
        };

        Ok(Self {
            input_size: w.input_size,
            sha256: metrics(
                w.sha256_time,
                w.sha256_output_size,
                w.sha256_arbitrum_price,
                w.sha256_optimism_price,
                w.sha256_base_price,
            ),
            keccak256: metrics(
                w.keccak256_time,
                w.keccak256_output_size,
                w.keccak256_arbitrum_price,
                w.keccak256_optimism_price,
                w.keccak256_base_price,
            ),
            aes256: metrics(
                w.aes256_time,
                w.aes256_output_size,
                w.aes256_arbitrum_price,
                w.aes256_optimism_price,
                w.aes256_base_price,
            ),
            rsa: metrics(
                w.rsa_time,
                w.rsa_output_size,
                w.rsa_arbitrum_price,
                w.rsa_optimism_price,
                w.rsa_base_price,
            ),
            text: w.text,
            created_at: w.date,
        })
    }
}
