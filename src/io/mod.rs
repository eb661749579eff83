//! # Errors and persistence
//!
//! The crate wide error type, and the records that matrices and linear programs are written to.
pub mod error;
pub mod record;
