//! Core types and utilities for the Outset padding engine.
//!
//! This crate provides the foundational types used across all other outset crates:
//! - Padding and side-value types
//! - Size-condition types (min/max bounds on width/height)
//! - Rectangle geometry
//! - Error types for strict label decoding

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
