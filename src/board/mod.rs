//! Order Board Module
//!
//! Keeps the working input text and the most recently derived order sheet
//! in memory so clients can edit the input and re-derive on demand.

mod sheet;
mod store;

pub use sheet::OrderSheet;
pub use store::OrderBoard;
