use super::atom::{AtomRecord, BackboneAtomKind};
use super::residue::ResidueBackbone;
use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Backbone atom count {len} is not a multiple of 3")]
    LengthNotMultipleOfThree { len: usize },
    #[error("Atom {index} is {found}, expected {expected} (backbone atoms must repeat as N, CA, C)")]
    UnexpectedAtom {
        index: usize,
        expected: BackboneAtomKind,
        found: BackboneAtomKind,
    },
    #[error(
        "Residue starting at atom {index} mixes residue names '{first}' and '{other}' within one N/CA/C triplet"
    )]
    ResidueNameMismatch {
        index: usize,
        first: String,
        other: String,
    },
}

/// Backbone atoms of one chain, in chain order, as read from a table or structure file.
///
/// `label` identifies the chain in logs and tables (e.g. `101M_1:A`); tables without a
/// chain column produce a single unlabelled chain.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChainAtoms {
    pub label: Option<String>,
    pub atoms: Vec<AtomRecord>,
}

impl ChainAtoms {
    pub fn new(label: Option<String>, atoms: Vec<AtomRecord>) -> Self {
        Self { label, atoms }
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or("<unlabelled>")
    }
}

/// A validated chain of residue backbones.
///
/// Construction enforces the strict N, CA, C ordering that the angle computation relies
/// on, so every later stage can index residues instead of raw atom offsets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BackboneChain {
    residues: Vec<ResidueBackbone>,
}

impl BackboneChain {
    pub fn from_residues(residues: Vec<ResidueBackbone>) -> Self {
        Self { residues }
    }

    /// Groups a flat atom sequence into residue triplets.
    ///
    /// # Errors
    ///
    /// Fails before inspecting any coordinates if the length is not a multiple of 3, if
    /// an atom is out of N, CA, C order, or if a triplet spans two residue names.
    pub fn from_atoms(atoms: &[AtomRecord]) -> Result<Self, ChainError> {
        if atoms.len() % 3 != 0 {
            return Err(ChainError::LengthNotMultipleOfThree { len: atoms.len() });
        }

        for (index, atom) in atoms.iter().enumerate() {
            let expected = BackboneAtomKind::CHAIN_ORDER[index % 3];
            if atom.atom_name != expected {
                return Err(ChainError::UnexpectedAtom {
                    index,
                    expected,
                    found: atom.atom_name,
                });
            }
        }

        let residues = atoms
            .chunks_exact(3)
            .enumerate()
            .map(|(i, triplet)| {
                let (n, ca, c) = (&triplet[0], &triplet[1], &triplet[2]);
                for other in [ca, c] {
                    if other.residue_name != n.residue_name {
                        return Err(ChainError::ResidueNameMismatch {
                            index: i * 3,
                            first: n.residue_name.clone(),
                            other: other.residue_name.clone(),
                        });
                    }
                }
                Ok(ResidueBackbone::new(
                    &n.residue_name,
                    n.position,
                    ca.position,
                    c.position,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { residues })
    }

    pub fn residues(&self) -> &[ResidueBackbone] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Number of residues that have both a predecessor and a successor.
    pub fn interior_len(&self) -> usize {
        self.residues.len().saturating_sub(2)
    }

    /// Sliding view over every interior residue together with its neighbours.
    pub fn windows(&self) -> impl Iterator<Item = ResidueWindow<'_>> {
        self.residues
            .windows(3)
            .enumerate()
            .map(|(i, w)| ResidueWindow {
                index: i + 1,
                previous: &w[0],
                current: &w[1],
                next: &w[2],
            })
    }
}

/// Three consecutive residues centred on the residue whose phi/psi is being computed.
#[derive(Debug, Clone, Copy)]
pub struct ResidueWindow<'a> {
    /// Position of `current` within the chain.
    pub index: usize,
    pub previous: &'a ResidueBackbone,
    pub current: &'a ResidueBackbone,
    pub next: &'a ResidueBackbone,
}

impl ResidueWindow<'_> {
    pub fn previous_c(&self) -> &Point3<f64> {
        &self.previous.c
    }

    pub fn n(&self) -> &Point3<f64> {
        &self.current.n
    }

    pub fn ca(&self) -> &Point3<f64> {
        &self.current.ca
    }

    pub fn c(&self) -> &Point3<f64> {
        &self.current.c
    }

    pub fn next_n(&self) -> &Point3<f64> {
        &self.next.n
    }

    pub fn residue_name(&self) -> &str {
        &self.current.residue_name
    }
}
