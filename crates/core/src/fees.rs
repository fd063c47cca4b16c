//! Synthetic Layer-2 calldata fee estimates.
//!
//! Both models price the bytes an L2 would post to L1 as calldata at a fixed
//! gas price, then add a flat L2 execution cost. Every price is a hardcoded
//! constant so results are reproducible; nothing is fetched from a chain.
//!
//! Fees are expressed in native currency units (ETH-equivalent): gas amounts
//! are multiplied by a gwei price and converted with [`GWEI`].

use serde::{Deserialize, Serialize};

/// Worst-case L1 calldata gas per byte (non-zero byte).
pub const CALLDATA_GAS_PER_BYTE: f64 = 16.0;

/// Fixed L1 gas price in gwei.
pub const L1_GAS_PRICE_GWEI: f64 = 30.0;

/// Conversion factor from gwei to native units.
pub const GWEI: f64 = 1e-9;

/// Flat L2 gas charged by the Arbitrum model.
pub const ARBITRUM_L2_GAS_USED: f64 = 30_000.0;

/// Arbitrum L2 gas price in gwei.
pub const ARBITRUM_L2_GAS_PRICE_GWEI: f64 = 0.1;

/// OP-Stack L1 fee scalar applied to the data-posting cost.
pub const OP_STACK_L1_FEE_SCALAR: f64 = 0.684;

/// Flat L2 gas charged by the OP-Stack model (a plain transfer).
pub const OP_STACK_L2_GAS_USED: f64 = 21_000.0;

/// OP-Stack L2 gas price in gwei.
pub const OP_STACK_L2_GAS_PRICE_GWEI: f64 = 0.015;

fn calldata_gas(output_size_bytes: usize) -> f64 {
    output_size_bytes as f64 * CALLDATA_GAS_PER_BYTE
}

/// Arbitrum-style fee for posting `output_size_bytes` of calldata.
pub fn estimate_arbitrum_fee(output_size_bytes: usize) -> f64 {
    let l1_fee = calldata_gas(output_size_bytes) * L1_GAS_PRICE_GWEI * GWEI;
    let l2_fee = ARBITRUM_L2_GAS_USED * ARBITRUM_L2_GAS_PRICE_GWEI * GWEI;
    l1_fee + l2_fee
}

/// OP-Stack-style fee for posting `output_size_bytes` of calldata.
pub fn estimate_op_stack_fee(output_size_bytes: usize) -> f64 {
    let l1_fee =
        calldata_gas(output_size_bytes) * L1_GAS_PRICE_GWEI * OP_STACK_L1_FEE_SCALAR * GWEI;
    let l2_fee = OP_STACK_L2_GAS_USED * OP_STACK_L2_GAS_PRICE_GWEI * GWEI;
    l1_fee + l2_fee
}

/// All fee estimates derived from one output size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub arbitrum: f64,
    pub op_stack: f64,
    /// Base chain fee. Mirrors `op_stack` until a dedicated Base model exists.
    pub base: f64,
}

impl FeeQuote {
    pub fn for_output_size(output_size_bytes: usize) -> Self {
        let op_stack = estimate_op_stack_fee(output_size_bytes);
        Self {
            arbitrum: estimate_arbitrum_fee(output_size_bytes),
            op_stack,
            base: op_stack,
        }
    }
}
