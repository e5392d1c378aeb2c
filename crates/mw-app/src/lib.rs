//! Shared application service layer for molweight.
//!
//! This crate provides a unified interface for both the HTTP and CLI
//! frontends: molecular weight computation over the formula parser and an
//! atomic weight provider, one outward-facing error type with a
//! client-input vs internal classification, and the JSON wire types.

pub mod calculator;
pub mod error;
pub mod types;

// Re-export key types for convenience
pub use calculator::{compute_weight, weigh_composition};
pub use error::{AppError, AppResult};
pub use types::{ErrorResponse, WeightRequest, WeightResponse};
