//! Batch Size Policy Module
//!
//! Decides which of a product's batch sizes an order line uses:
//! - Minimum: the smallest associated batch size
//! - Maximum: the largest associated batch size
//!
//! The policy for a derivation is resolved from an explicit caller override,
//! then the payload's `useMaximumBatchSize` flag, then the configured default.

mod policies;
mod resolver;

#[cfg(test)]
mod tests;

pub use policies::BatchSizePolicy;
pub use resolver::resolve_policy;
