//! High-level operations.
//!
//! This module contains the implementation of pomgraft commands.

pub mod pomgraft_adapt;

pub use pomgraft_adapt::{
    adapt_model, format_report, unmanaged_diagnostics, AdaptOptions, AdaptOutcome,
};
