//! Order Derivation Module
//!
//! Turns catalog tables into one order line per product:
//! - Index: lookups over associations and quantity requests
//! - Engine: batch size selection and line assembly
//!
//! Derivation is a pure function of its arguments. It never fails; missing
//! associations fall back to a generated batch size of one unit and missing
//! quantity requests fall back to a single batch.

mod engine;
mod index;


pub use engine::{
    derive_orders, generated_batch_size, DEFAULT_BATCH_QUANTITY, GENERATED_BATCH_SIZE,
    GENERATED_BATCH_SIZE_PREFIX,
};
