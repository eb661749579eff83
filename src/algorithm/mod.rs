//! # Algorithms
//!
//! The double description method computes one representation from the other. The linear
//! program solver decides single rows: redundancy, implicit linearity and, through those,
//! canonical forms and adjacency.
pub mod adjacency;
pub mod canonicalize;
pub mod double_description;
pub mod elimination;
pub mod linear_program;
pub mod redundancy;
