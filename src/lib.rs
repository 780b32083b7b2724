//! This crate derives purchase-order lines from catalog data: for every
//! product it picks a batch size, looks up the requested number of batches
//! and carries the unit price through unchanged. It also ships a small
//! JSON-RPC service that holds a working input and the last derived order.

pub mod types; // Catalog records and derived order lines.
pub mod policy; // Minimum/maximum batch size policy and its resolution.
pub mod deriver; // The order derivation itself.
pub mod input; // Input payload parsing and its errors.
pub mod board; // Working input and last order sheet.
pub mod api; // JSON-RPC interface over the board.
pub mod config; // Defines and loads service configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use deriver::derive_orders;
pub use input::{InputError, OrderInput};
pub use policy::BatchSizePolicy;
