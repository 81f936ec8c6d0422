//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] readers and the
//! [`crate::engine`] computations into complete analyses.
//!
//! ## Architecture
//!
//! - **Ramachandran Workflow** ([`ramachandran`]) - Per-chain phi/psi computation with
//!   short-chain rejection, degenerate-residue reporting, parallel evaluation of
//!   independent chains, and classification of the pooled angles.

pub mod ramachandran;
