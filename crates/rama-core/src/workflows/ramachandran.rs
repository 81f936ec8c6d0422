use crate::core::models::angle::AngleRecord;
use crate::core::models::chain::{BackboneChain, ChainAtoms, ChainError};
use crate::core::utils::identifiers::sequence_string;
use crate::engine::classify::{ClassifiedAngles, classify};
use crate::engine::config::EngineConfig;
use crate::engine::dihedral::{DihedralEngine, SkippedResidue};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::fmt;
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Angles computed for one chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainReport {
    pub label: String,
    pub residues: usize,
    pub angles: Vec<AngleRecord>,
    pub skipped: Vec<SkippedResidue>,
}

/// Why a chain produced no angles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Fewer than three residues, so no residue has both neighbours.
    TooFewResidues { residues: usize },
    /// The atoms do not form complete N, CA, C triplets (e.g. a truncated terminal residue).
    Malformed(ChainError),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::TooFewResidues { residues } => {
                write!(f, "only {} residue(s), no angles computed", residues)
            }
            RejectionReason::Malformed(e) => write!(f, "malformed backbone: {}", e),
        }
    }
}

/// A chain that was set aside without stopping the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedChain {
    pub label: String,
    pub reason: RejectionReason,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RamachandranResult {
    /// Reports for every chain that produced output, in input order.
    pub chains: Vec<ChainReport>,
    pub rejected: Vec<RejectedChain>,
}

impl RamachandranResult {
    /// All angle records, chain after chain.
    pub fn angles(&self) -> impl Iterator<Item = &AngleRecord> {
        self.chains.iter().flat_map(|chain| chain.angles.iter())
    }

    pub fn into_angles(self) -> Vec<AngleRecord> {
        self.chains
            .into_iter()
            .flat_map(|chain| chain.angles)
            .collect()
    }

    pub fn classify(&self) -> ClassifiedAngles {
        classify(self.angles().cloned())
    }

    pub fn total_angles(&self) -> usize {
        self.chains.iter().map(|chain| chain.angles.len()).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.chains.iter().map(|chain| chain.skipped.len()).sum()
    }
}

enum ChainOutcome {
    Computed(ChainReport),
    Rejected(RejectedChain),
}

/// Computes phi/psi angles for every chain independently.
///
/// Chains are evaluated in parallel when the `parallel` feature is enabled; results keep
/// the input order. Chains with fewer than three residues and chains whose atoms do not
/// form complete N, CA, C triplets are recorded as rejected and do not stop the run.
/// Degenerate geometry under the abort policy fails the whole run with the offending
/// chain's label attached.
#[instrument(skip_all, name = "ramachandran_workflow", fields(chains = chains.len()))]
pub fn run(
    chains: &[ChainAtoms],
    config: &EngineConfig,
    reporter: &ProgressReporter,
) -> Result<RamachandranResult, EngineError> {
    let engine = DihedralEngine::new(config.clone());

    reporter.report(Progress::PhaseStart {
        name: "Computing Dihedrals",
    });
    info!(
        policy = %config.degenerate_policy,
        "Computing backbone dihedrals for {} chain(s).",
        chains.len()
    );

    reporter.report(Progress::TaskStart {
        total_steps: chains.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = chains.iter();

    #[cfg(feature = "parallel")]
    let iterator = chains.par_iter();

    let outcomes: Vec<Result<ChainOutcome, EngineError>> = iterator
        .map(|chain| {
            let outcome = process_chain(&engine, chain);
            reporter.report(Progress::TaskIncrement);
            outcome
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let mut result = RamachandranResult::default();
    for outcome in outcomes {
        match outcome? {
            ChainOutcome::Computed(report) => {
                if !report.skipped.is_empty() {
                    reporter.report(Progress::Warning(format!(
                        "{}: skipped {} residue(s) with undefined geometry",
                        report.label,
                        report.skipped.len()
                    )));
                }
                result.chains.push(report);
            }
            ChainOutcome::Rejected(rejected) => {
                reporter.report(Progress::Warning(format!(
                    "{}: {}",
                    rejected.label, rejected.reason
                )));
                result.rejected.push(rejected);
            }
        }
    }

    info!(
        angles = result.total_angles(),
        skipped = result.total_skipped(),
        rejected = result.rejected.len(),
        "Dihedral computation complete."
    );
    reporter.report(Progress::PhaseFinish);
    Ok(result)
}

fn process_chain(engine: &DihedralEngine, chain: &ChainAtoms) -> Result<ChainOutcome, EngineError> {
    let label = chain.display_label().to_string();
    let attach_label = |source: EngineError| EngineError::Chain {
        label: label.clone(),
        source: Box::new(source),
    };

    let backbone = match BackboneChain::from_atoms(&chain.atoms) {
        Ok(backbone) => backbone,
        Err(e) => {
            warn!("Chain {} is not a complete backbone: {}", label, e);
            return Ok(ChainOutcome::Rejected(RejectedChain {
                label,
                reason: RejectionReason::Malformed(e),
            }));
        }
    };
    debug!(
        chain = %label,
        sequence = %sequence_string(backbone.residues().iter().map(|r| r.residue_name.as_str())),
        "Validated backbone chain."
    );

    match engine.compute_chain(&backbone) {
        Ok(computation) => Ok(ChainOutcome::Computed(ChainReport {
            label,
            residues: backbone.len(),
            angles: computation.angles,
            skipped: computation.skipped,
        })),
        Err(EngineError::InsufficientResidues { residues }) => {
            warn!(
                "Chain {} has only {} residue(s); no interior residue to measure.",
                label, residues
            );
            Ok(ChainOutcome::Rejected(RejectedChain {
                label,
                reason: RejectionReason::TooFewResidues { residues },
            }))
        }
        Err(e) => Err(attach_label(e)),
    }
}
