//! API Module
//!
//! This module handles the JSON-RPC API for editing the working input and
//! deriving order sheets from it.

mod server;
pub use server::{router, Server};
