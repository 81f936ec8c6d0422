use super::residue::ResidueClass;
use serde::{Deserialize, Serialize};

/// The phi/psi pair of one interior residue, in degrees within (-180, 180].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleRecord {
    pub residue_name: String,
    pub phi: f64,
    pub psi: f64,
}

impl AngleRecord {
    pub fn new(residue_name: &str, phi: f64, psi: f64) -> Self {
        Self {
            residue_name: residue_name.to_string(),
            phi,
            psi,
        }
    }

    pub fn class(&self) -> ResidueClass {
        ResidueClass::from_residue_name(&self.residue_name)
    }
}
