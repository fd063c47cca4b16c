//! Algorithm runner: executes one transform and measures it.
//!
//! Each run encodes nothing itself; callers pass the UTF-8 bytes of the input
//! text. Only the transform call is timed. Key, IV and cipher setup happen
//! before the clock starts, using the monotonic [`Instant`].
//!
//! Key material is generated fresh for every call and dropped afterwards.
//! Nothing is reused, so every measurement pays the same setup cost.

use aes::cipher::{
    block_padding::{NoPadding, Pkcs7, RawPadding},
    BlockEncryptMut, KeyIvInit,
};
use calldata_core::Algorithm;
use rand::{rngs::OsRng, RngCore};
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};
use sha3::Sha3_256;
use std::time::{Duration, Instant};
use zeroize::Zeroize;

use crate::error::{BenchError, BenchResult};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// AES-256 key length in bytes.
pub const AES_KEY_BYTES: usize = 32;

/// AES block and IV length in bytes.
pub const AES_BLOCK_BYTES: usize = 16;

/// RSA modulus size in bits.
pub const RSA_KEY_BITS: usize = 2048;

/// RSA ciphertext length in bytes.
pub const RSA_MODULUS_BYTES: usize = RSA_KEY_BITS / 8;

/// SHA-1 output length, the OAEP hash.
const OAEP_HASH_BYTES: usize = 20;

/// Largest plaintext RSA-2048-OAEP(SHA-1) accepts: k - 2*hLen - 2.
pub const RSA_OAEP_MAX_PLAINTEXT: usize = RSA_MODULUS_BYTES - 2 * OAEP_HASH_BYTES - 2;

/// Outcome of one timed transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub elapsed: Duration,
    pub output_size: usize,
}

impl Measurement {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Run `algorithm` over `data`.
pub fn run(algorithm: Algorithm, data: &[u8]) -> BenchResult<Measurement> {
    let measurement = match algorithm {
        Algorithm::Sha256 => run_sha256(data),
        Algorithm::Keccak256 => run_keccak256(data),
        Algorithm::Aes256 => run_aes256_cbc(data)?,
        Algorithm::Rsa => run_rsa_oaep(data)?,
    };
    tracing::debug!(
        %algorithm,
        elapsed_us = measurement.elapsed.as_micros() as u64,
        output_size = measurement.output_size,
        "transform measured"
    );
    Ok(measurement)
}

/// Fail early if `data` cannot be processed by every algorithm.
pub fn check_capacity(data: &[u8]) -> BenchResult<()> {
    if data.len() > RSA_OAEP_MAX_PLAINTEXT {
        return Err(BenchError::EncryptionCapacityExceeded {
            algorithm: Algorithm::Rsa,
            input_size: data.len(),
            max: RSA_OAEP_MAX_PLAINTEXT,
        });
    }
    Ok(())
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

fn run_sha256(data: &[u8]) -> Measurement {
    let (digest, elapsed) = timed(|| Sha256::digest(data));
    Measurement {
        elapsed,
        output_size: digest.len(),
    }
}

// Uses the FIPS 202 SHA3-256 padding, not legacy Keccak; see DESIGN.md.
fn run_keccak256(data: &[u8]) -> Measurement {
    let (digest, elapsed) = timed(|| Sha3_256::digest(data));
    Measurement {
        elapsed,
        output_size: digest.len(),
    }
}

/// Copy `data` into a fresh buffer with PKCS#7 padding to a block boundary.
fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let padded_len = AES_BLOCK_BYTES * (data.len() / AES_BLOCK_BYTES + 1);
    let mut buf = vec![0u8; padded_len];
    buf[..data.len()].copy_from_slice(data);
    Pkcs7::raw_pad(
        &mut buf[padded_len - AES_BLOCK_BYTES..],
        data.len() % AES_BLOCK_BYTES,
    );
    buf
}

fn run_aes256_cbc(data: &[u8]) -> BenchResult<Measurement> {
    let mut key = [0u8; AES_KEY_BYTES];
    let mut iv = [0u8; AES_BLOCK_BYTES];
    fill_random(Algorithm::Aes256, &mut key)?;
    fill_random(Algorithm::Aes256, &mut iv)?;

    let cipher = Aes256CbcEnc::new(&key.into(), &iv.into());
    key.zeroize();

    // Padding and allocation stay outside the clock; only block encryption
    // of the prepared buffer is timed.
    let mut buf = pkcs7_pad(data);
    let buf_len = buf.len();
    let (result, elapsed) = timed(|| {
        cipher
            .encrypt_padded_mut::<NoPadding>(&mut buf, buf_len)
            .map(|ciphertext| ciphertext.len())
    });
    let output_size = result.map_err(|e| BenchError::InternalCryptoFailure {
        algorithm: Algorithm::Aes256,
        reason: format!("block encryption failed: {}", e),
    })?;

    Ok(Measurement {
        elapsed,
        output_size,
    })
}

fn run_rsa_oaep(data: &[u8]) -> BenchResult<Measurement> {
    check_capacity(data)?;

    let mut rng = OsRng;
    let private_key = RsaPrivateKey::new(&mut rng, RSA_KEY_BITS).map_err(|e| {
        BenchError::InternalCryptoFailure {
            algorithm: Algorithm::Rsa,
            reason: format!("key generation failed: {}", e),
        }
    })?;
    let public_key = RsaPublicKey::from(&private_key);
    let padding = Oaep::new::<sha1::Sha1>();

    let (result, elapsed) = timed(|| public_key.encrypt(&mut rng, padding, data));
    let ciphertext = result.map_err(|e| match e {
        rsa::Error::MessageTooLong => BenchError::EncryptionCapacityExceeded {
            algorithm: Algorithm::Rsa,
            input_size: data.len(),
            max: RSA_OAEP_MAX_PLAINTEXT,
        },
        other => BenchError::InternalCryptoFailure {
            algorithm: Algorithm::Rsa,
            reason: other.to_string(),
        },
    })?;

    Ok(Measurement {
        elapsed,
        output_size: ciphertext.len(),
    })
}

fn fill_random(algorithm: Algorithm, buf: &mut [u8]) -> BenchResult<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| BenchError::InternalCryptoFailure {
            algorithm,
            reason: format!("entropy source unavailable: {}", e),
        })
}
