use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The three main-chain atoms that repeat once per residue.
///
/// Only these atoms take part in the phi/psi computation; every other atom in a
/// structure file is filtered out before the engine sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BackboneAtomKind {
    /// Amide nitrogen (`N`).
    Nitrogen,
    /// Alpha carbon (`CA`).
    AlphaCarbon,
    /// Carbonyl carbon (`C`).
    CarbonylCarbon,
}

impl BackboneAtomKind {
    /// Order in which the atoms of one residue appear along the chain.
    pub const CHAIN_ORDER: [BackboneAtomKind; 3] = [
        BackboneAtomKind::Nitrogen,
        BackboneAtomKind::AlphaCarbon,
        BackboneAtomKind::CarbonylCarbon,
    ];

    /// The PDB atom name (`N`, `CA` or `C`).
    pub fn as_str(&self) -> &'static str {
        match self {
            BackboneAtomKind::Nitrogen => "N",
            BackboneAtomKind::AlphaCarbon => "CA",
            BackboneAtomKind::CarbonylCarbon => "C",
        }
    }
}

impl fmt::Display for BackboneAtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{0}' is not a backbone atom name (expected N, CA or C)")]
pub struct ParseBackboneAtomError(pub String);

impl FromStr for BackboneAtomKind {
    type Err = ParseBackboneAtomError;

    /// Parses an atom name, ignoring the column padding used by PDB files (`" CA "`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "N" => Ok(BackboneAtomKind::Nitrogen),
            "CA" => Ok(BackboneAtomKind::AlphaCarbon),
            "C" => Ok(BackboneAtomKind::CarbonylCarbon),
            other => Err(ParseBackboneAtomError(other.to_string())),
        }
    }
}

/// One backbone atom as handed over by a structure parser or an atom table.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// Which backbone atom this is.
    pub atom_name: BackboneAtomKind,
    /// Three-letter code of the residue the atom belongs to (e.g. "GLY").
    pub residue_name: String,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
}

impl AtomRecord {
    pub fn new(atom_name: BackboneAtomKind, residue_name: &str, position: Point3<f64>) -> Self {
        Self {
            atom_name,
            residue_name: residue_name.trim().to_string(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_padded_pdb_names() {
        assert_eq!(" N  ".parse(), Ok(BackboneAtomKind::Nitrogen));
        assert_eq!(" CA ".parse(), Ok(BackboneAtomKind::AlphaCarbon));
        assert_eq!(" C  ".parse(), Ok(BackboneAtomKind::CarbonylCarbon));
    }

    #[test]
    fn from_str_rejects_side_chain_and_carbonyl_oxygen() {
        assert_eq!(
            "CB".parse::<BackboneAtomKind>(),
            Err(ParseBackboneAtomError("CB".to_string()))
        );
        assert!("O".parse::<BackboneAtomKind>().is_err());
        assert!("ca".parse::<BackboneAtomKind>().is_err());
        assert!("".parse::<BackboneAtomKind>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in BackboneAtomKind::CHAIN_ORDER {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn new_record_trims_residue_name() {
        let atom = AtomRecord::new(
            BackboneAtomKind::AlphaCarbon,
            " GLY",
            Point3::new(1.0, 2.0, 3.0),
        );
        assert_eq!(atom.residue_name, "GLY");
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }
}
