//! # Core Models Module
//!
//! This module contains the data structures that carry backbone geometry through
//! RAMA++, from the atom records produced by structure parsers to the angle records
//! consumed by reporting.
//!
//! ## Overview
//!
//! The models are deliberately small and immutable once built:
//!
//! - **Atoms** arrive as a flat, chain-ordered sequence of N/CA/C records
//! - **Chains** regroup that sequence into validated per-residue triplets
//! - **Windows** give a borrowed view over three consecutive residues
//! - **Angles** hold the resulting phi/psi pair for one interior residue
//!
//! ## Key Components
//!
//! - [`atom`] - Backbone atom kinds and atom records with 3D coordinates
//! - [`residue`] - Residue backbone triplets and Ramachandran residue classes
//! - [`chain`] - Validated backbone chains and the sliding residue window
//! - [`angle`] - Computed phi/psi records
//!
//! ## Usage
//!
//! ```ignore
//! use ramapp::core::models::{atom::AtomRecord, chain::BackboneChain};
//!
//! let chain = BackboneChain::from_atoms(&atoms)?;
//! for window in chain.windows() {
//!     println!("{} at {:?}", window.residue_name(), window.ca());
//! }
//! ```

pub mod angle;
pub mod atom;
pub mod chain;
pub mod residue;
