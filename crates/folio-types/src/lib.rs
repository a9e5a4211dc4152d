//! Foundation types for the FOLIO terminal.
//!
//! This crate contains the types shared by every FOLIO crate: input events,
//! terminal configuration, error types, and a small deterministic RNG.

pub mod config;
pub mod error;
pub mod input;
pub mod rng;
