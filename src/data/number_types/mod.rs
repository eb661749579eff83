//! # Number types
//!
//! Different kernels are defined over different number types. This module defines the contract
//! and provides the two implementations.
//!
//! A benefit of this approach is that the algorithms can be tested well for correctness using
//! fractional numbers, while the same code is used without adaptation with floating point numbers.
pub mod traits;
pub mod rational;
pub mod float;
