//! # RAMA++ Core Library
//!
//! A library for extracting protein backbone dihedral angles (phi/psi) from atomic
//! coordinates and organizing them for Ramachandran analysis.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture that keeps data, computation, and
//! orchestration apart.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AtomRecord`, `BackboneChain`,
//!   `AngleRecord`), geometric primitives (plane normals, signed angles), and I/O for PDB
//!   coordinates, RCSB FASTA headers, and CSV tables.
//!
//! - **[`engine`]: The Logic Core.** The dihedral engine that walks a validated chain with a
//!   three-residue window, residue classification, and cluster sampling.
//!
//! - **[`workflows`]: The Public API.** Complete procedures such as computing angles for
//!   many chains at once, with progress reporting and per-chain diagnostics.

pub mod core;
pub mod engine;
pub mod workflows;

#[cfg(test)]
mod testing;
