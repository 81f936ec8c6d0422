//! # Engine Module
//!
//! This module implements the computational core of RAMA++: turning validated backbone
//! chains into phi/psi angle records and organizing the results.
//!
//! ## Architecture
//!
//! - **Dihedral Computation** ([`dihedral`]) - Sliding-window phi/psi extraction with a
//!   configurable policy for residues whose geometry cannot define an angle
//! - **Classification** ([`classify`]) - Partitioning into general, glycine, and proline
//!   populations
//! - **Sampling** ([`sampling`]) - Random selection of one representative entity per
//!   sequence cluster
//! - **Configuration** ([`config`]) - Engine and sampling parameters with a validating builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for front ends
//! - **Error Handling** ([`error`]) - Engine-specific error types and error propagation
//!
//! The engine is stateless between invocations: every call borrows its input read-only
//! and returns owned results, so chains can be processed concurrently.

pub mod classify;
pub mod config;
pub mod dihedral;
pub mod error;
pub mod progress;
pub mod sampling;
