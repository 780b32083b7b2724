//! Input Payload Module
//!
//! Parses the JSON payload that carries the catalog tables and the optional
//! `useMaximumBatchSize` flag.

mod error;
mod payload;

pub use error::InputError;
pub use payload::OrderInput;
