//! # Storing of polyhedra in memory
//!
//! This module provides the number types and the matrices that describe polyhedra and linear
//! programs. Algorithms may introduce their specific data structures in `algorithm::my_algorithm`.
pub mod elements;
pub mod linear_algebra;
pub mod number_types;
