//! Provides input/output functionality for structure and table formats.
//!
//! This module turns the files exchanged with the outside world into the typed
//! records used by the angle engine: fixed-column PDB coordinates, RCSB entry FASTA
//! headers, and the CSV atom and angle tables used to persist intermediate results.

pub mod fasta;
pub mod pdb;
pub mod table;
pub mod traits;
