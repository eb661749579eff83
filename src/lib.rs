//! # Polyhedral computation
//!
//! Conversion between the two representations of a convex polyhedron, by inequalities and by
//! generators, using the double description method of Motzkin et al. as refined by Fukuda and
//! Prodon. Around it: redundancy removal, adjacency, elimination of variables and a solver for
//! linear programs, which the redundancy tests are built on.
//!
//! All algorithms are generic over the number type; exact rationals and doubles are provided.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;
pub mod polyhedron;
