use nalgebra::Point3;
use std::fmt;

/// Ramachandran grouping of a residue.
///
/// Glycine (no side chain) and proline (ring-constrained phi) populate very different
/// regions of the plot than the remaining residues, so they are reported separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResidueClass {
    General,
    Glycine,
    Proline,
}

impl ResidueClass {
    pub const ALL: [ResidueClass; 3] = [
        ResidueClass::General,
        ResidueClass::Glycine,
        ResidueClass::Proline,
    ];

    pub fn from_residue_name(residue_name: &str) -> Self {
        match residue_name.trim() {
            "GLY" => ResidueClass::Glycine,
            "PRO" => ResidueClass::Proline,
            _ => ResidueClass::General,
        }
    }

    /// Human-readable label used for report headings.
    pub fn label(&self) -> &'static str {
        match self {
            ResidueClass::General => "All Residues but Glycines and Prolines",
            ResidueClass::Glycine => "Glycines",
            ResidueClass::Proline => "Prolines",
        }
    }

    /// Short name used for file stems (e.g. `glycine.csv`).
    pub fn file_stem(&self) -> &'static str {
        match self {
            ResidueClass::General => "general",
            ResidueClass::Glycine => "glycine",
            ResidueClass::Proline => "proline",
        }
    }
}

impl fmt::Display for ResidueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The N, CA and C positions of one residue, in chain order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueBackbone {
    pub residue_name: String,
    pub n: Point3<f64>,
    pub ca: Point3<f64>,
    pub c: Point3<f64>,
}

impl ResidueBackbone {
    pub fn new(residue_name: &str, n: Point3<f64>, ca: Point3<f64>, c: Point3<f64>) -> Self {
        Self {
            residue_name: residue_name.to_string(),
            n,
            ca,
            c,
        }
    }

    pub fn class(&self) -> ResidueClass {
        ResidueClass::from_residue_name(&self.residue_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_from_residue_name_recognizes_glycine_and_proline() {
        assert_eq!(ResidueClass::from_residue_name("GLY"), ResidueClass::Glycine);
        assert_eq!(ResidueClass::from_residue_name("PRO"), ResidueClass::Proline);
        assert_eq!(ResidueClass::from_residue_name(" PRO "), ResidueClass::Proline);
    }

    #[test]
    fn everything_else_is_general() {
        for name in ["ALA", "TRP", "HSE", "MSE", "gly", ""] {
            assert_eq!(ResidueClass::from_residue_name(name), ResidueClass::General);
        }
    }

    #[test]
    fn labels_and_file_stems_are_distinct() {
        let stems: std::collections::HashSet<_> =
            ResidueClass::ALL.iter().map(|c| c.file_stem()).collect();
        assert_eq!(stems.len(), 3);
        assert_eq!(ResidueClass::Glycine.to_string(), "Glycines");
    }

    #[test]
    fn residue_backbone_reports_its_class() {
        let origin = Point3::origin();
        let residue = ResidueBackbone::new("PRO", origin, origin, origin);
        assert_eq!(residue.class(), ResidueClass::Proline);
    }
}
