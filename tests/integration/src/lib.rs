//! Integration tests for the calldata-bench service
//!
//! This test suite validates:
//! - The create/list flow over a real TCP listener
//! - Wire compatibility of records with the dashboard client
//! - All-or-nothing record creation on failures
//! - Concurrent creation against the shared store

pub mod test_utils;

#[cfg(test)]
mod transaction_flow_tests;

#[cfg(test)]
mod concurrency_tests;
