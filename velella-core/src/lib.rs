//! Shared primitives and traits for the Velella classifier-evaluation ecosystem.
//!
//! `velella-core` provides the foundation that the other Velella crates build on:
//!
//! - **Error types** — [`VelellaError`] and [`Result`] for structured error handling
//! - **Traits** — Core abstractions like [`Scored`] and [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{Result, VelellaError};
pub use traits::*;
