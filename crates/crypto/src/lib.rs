//! Cryptographic transforms and record assembly for calldata-bench.
//!
//! Four fixed transforms are benchmarked against each input:
//!
//! - **SHA-256**: 32-byte digest
//! - **Keccak-256** (computed as SHA3-256): 32-byte digest
//! - **AES-256-CBC** with PKCS#7 padding: fresh key and IV per call
//! - **RSA-2048-OAEP** (SHA-1): fresh key pair per call, 214-byte plaintext limit
//!
//! Key sizes, modes and paddings are constants, not options. Only elapsed
//! time and output size leave this crate; ciphertexts and keys are dropped.

pub mod builder;
pub mod error;
pub mod runner;

pub use builder::{build_record, RecordBuilder};
pub use error::{BenchError, BenchResult};
pub use runner::{check_capacity, run, Measurement, RSA_OAEP_MAX_PLAINTEXT};
