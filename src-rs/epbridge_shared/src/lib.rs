//! Shared utilities for the epbridge workspace
//!
//! This crate holds the pieces that every other crate in the workspace needs
//! to agree on: source spans for the model description format and the
//! user-facing error representation used when reporting problems.

pub mod error;
pub mod span;

pub use error::{AsBridgeError, BridgeError, Context, ErrorLocation};
