//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
mod elimination;
mod linear_program;
mod persistence;
mod polyhedron;
mod properties;
