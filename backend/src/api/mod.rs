//! HTTP module.
//!
//! This module provides the static site server and its response types.

pub mod server;
pub mod types;

pub use server::{router, start_server};
pub use types::*;
