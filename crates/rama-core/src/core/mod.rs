//! # Core Module
//!
//! This module provides the stateless building blocks of RAMA++: the data models that
//! describe protein backbones, the geometric primitives used to measure them, and the
//! readers and writers that move backbone data in and out of files.
//!
//! ## Architecture
//!
//! - **Backbone Representation** ([`models`]) - Atom records, residue triplets, validated
//!   chains, and computed angle records
//! - **File I/O** ([`io`]) - PDB backbone extraction, FASTA chain selection, and CSV tables
//! - **Utilities** ([`utils`]) - Plane normals, signed dihedral angles, and residue codes
//!
//! ## Scientific Foundation
//!
//! Backbone dihedrals follow the IUPAC definition: phi is the torsion about the N-CA bond
//! (C(i-1), N, CA, C) and psi the torsion about the CA-C bond (N, CA, C, N(i+1)). Both are
//! measured as the angle between the normals of the two planes that share the bond, signed
//! by which side of the first plane the outgoing bond points to.

pub mod io;
pub mod models;
pub mod utils;
