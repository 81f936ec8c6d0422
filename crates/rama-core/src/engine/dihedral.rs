use super::config::{DegeneratePolicy, EngineConfig};
use super::error::EngineError;
use crate::core::models::angle::AngleRecord;
use crate::core::models::atom::AtomRecord;
use crate::core::models::chain::{BackboneChain, ResidueWindow};
use crate::core::utils::geometry::{GeometryError, plane_normal, signed_plane_angle};
use tracing::{trace, warn};

/// A residue left out of the output because its window had undefined geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedResidue {
    /// Position of the residue within its chain.
    pub index: usize,
    pub residue_name: String,
    pub reason: GeometryError,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AngleComputation {
    /// One record per interior residue, in chain order.
    pub angles: Vec<AngleRecord>,
    pub skipped: Vec<SkippedResidue>,
}

/// Computes backbone phi/psi angles for single chains.
///
/// The engine holds no state besides its configuration, so one instance can be shared
/// across threads and reused for any number of chains.
#[derive(Debug, Clone, Default)]
pub struct DihedralEngine {
    config: EngineConfig,
}

impl DihedralEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes angles for a flat, chain-ordered sequence of backbone atoms.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MalformedInput`] if the sequence is not a run of N/CA/C triplets.
    /// - [`EngineError::InsufficientResidues`] if fewer than three residues are present.
    /// - [`EngineError::Geometry`] for undefined geometry under [`DegeneratePolicy::Abort`].
    pub fn compute(&self, atoms: &[AtomRecord]) -> Result<AngleComputation, EngineError> {
        let chain = BackboneChain::from_atoms(atoms)?;
        self.compute_chain(&chain)
    }

    /// Computes angles for an already validated chain.
    pub fn compute_chain(&self, chain: &BackboneChain) -> Result<AngleComputation, EngineError> {
        if chain.len() < 3 {
            return Err(EngineError::InsufficientResidues {
                residues: chain.len(),
            });
        }

        let mut result = AngleComputation {
            angles: Vec::with_capacity(chain.interior_len()),
            skipped: Vec::new(),
        };

        for window in chain.windows() {
            match window_angles(&window, self.config.cosine_tolerance) {
                Ok((phi, psi)) => {
                    trace!(
                        index = window.index,
                        residue = window.residue_name(),
                        phi,
                        psi,
                        "Computed backbone dihedrals."
                    );
                    result
                        .angles
                        .push(AngleRecord::new(window.residue_name(), phi, psi));
                }
                Err(reason) => match self.config.degenerate_policy {
                    DegeneratePolicy::Abort => {
                        return Err(EngineError::Geometry {
                            index: window.index,
                            residue_name: window.residue_name().to_string(),
                            source: reason,
                        });
                    }
                    DegeneratePolicy::Skip => {
                        warn!(
                            "Skipping residue {} ({}): {}",
                            window.index,
                            window.residue_name(),
                            reason
                        );
                        result.skipped.push(SkippedResidue {
                            index: window.index,
                            residue_name: window.residue_name().to_string(),
                            reason,
                        });
                    }
                },
            }
        }

        Ok(result)
    }
}

/// Phi and psi of the window's central residue, in degrees.
///
/// Three plane normals are taken along C(i-1)-N-CA, N-CA-C and CA-C-N(i+1); phi is the
/// angle between the first two, psi between the last two, each signed by the side of the
/// earlier plane on which the following bond (CA->C for phi, C->N(i+1) for psi) lies.
fn window_angles(window: &ResidueWindow<'_>, tolerance: f64) -> Result<(f64, f64), GeometryError> {
    let n1 = plane_normal(window.previous_c(), window.n(), window.ca())?;
    let n2 = plane_normal(window.n(), window.ca(), window.c())?;
    let n3 = plane_normal(window.ca(), window.c(), window.next_n())?;

    let d_phi = window.c() - window.ca();
    let d_psi = window.next_n() - window.c();

    let phi = signed_plane_angle(&n1, &n2, &d_phi, tolerance)?;
    let psi = signed_plane_angle(&n2, &n3, &d_psi, tolerance)?;
    Ok((phi, psi))
}

/// Computes phi/psi for one chain with the default configuration (skip degenerate
/// residues, standard cosine tolerance).
pub fn compute_angles(atoms: &[AtomRecord]) -> Result<Vec<AngleRecord>, EngineError> {
    DihedralEngine::default()
        .compute(atoms)
        .map(|computation| computation.angles)
}
