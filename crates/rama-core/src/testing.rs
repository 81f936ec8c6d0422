//! Synthetic backbone builders shared by unit tests.

use crate::core::models::atom::{AtomRecord, BackboneAtomKind};
use nalgebra::{Point3, Vector3};

pub const N_CA: f64 = 1.458;
pub const CA_C: f64 = 1.525;
pub const C_N: f64 = 1.329;
pub const ANGLE_N_CA_C: f64 = 111.2;
pub const ANGLE_CA_C_N: f64 = 116.2;
pub const ANGLE_C_N_CA: f64 = 121.7;
pub const OMEGA_TRANS: f64 = 180.0;

/// Places a fourth atom from three predecessors using the natural extension reference
/// frame: bond `c-d` of `length`, angle `b-c-d` of `angle` degrees, torsion `a-b-c-d` of
/// `torsion` degrees.
pub fn place_atom(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    length: f64,
    angle: f64,
    torsion: f64,
) -> Point3<f64> {
    let bc = (c - b).normalize();
    let n = (b - a).cross(&bc).normalize();
    let m = n.cross(&bc);
    let (theta, phi) = (angle.to_radians(), torsion.to_radians());
    let d2 = Vector3::new(
        -length * theta.cos(),
        length * theta.sin() * phi.cos(),
        length * theta.sin() * phi.sin(),
    );
    c + bc * d2.x + m * d2.y + n * d2.z
}

/// Builds an ideal trans backbone whose residue `i` has torsions `phi_psi[i]`.
///
/// The first residue's phi and the last residue's psi do not affect any coordinate,
/// matching the fact that neither is defined.
pub fn build_backbone(residue_names: &[&str], phi_psi: &[(f64, f64)]) -> Vec<AtomRecord> {
    assert_eq!(residue_names.len(), phi_psi.len());
    assert!(!residue_names.is_empty());

    let mut n = Point3::new(0.0, 0.0, 0.0);
    let mut ca = Point3::new(N_CA, 0.0, 0.0);
    let angle = ANGLE_N_CA_C.to_radians();
    let mut c = ca + Vector3::new(-angle.cos(), angle.sin(), 0.0) * CA_C;

    let mut atoms = Vec::with_capacity(residue_names.len() * 3);
    for (i, name) in residue_names.iter().enumerate() {
        if i > 0 {
            let psi_prev = phi_psi[i - 1].1;
            let next_n = place_atom(&n, &ca, &c, C_N, ANGLE_CA_C_N, psi_prev);
            let next_ca = place_atom(&ca, &c, &next_n, N_CA, ANGLE_C_N_CA, OMEGA_TRANS);
            let next_c = place_atom(&c, &next_n, &next_ca, CA_C, ANGLE_N_CA_C, phi_psi[i].0);
            n = next_n;
            ca = next_ca;
            c = next_c;
        }
        atoms.push(AtomRecord::new(BackboneAtomKind::Nitrogen, name, n));
        atoms.push(AtomRecord::new(BackboneAtomKind::AlphaCarbon, name, ca));
        atoms.push(AtomRecord::new(BackboneAtomKind::CarbonylCarbon, name, c));
    }
    atoms
}

/// Ideal backbone with the same torsions at every residue.
pub fn uniform_backbone(residue_names: &[&str], phi: f64, psi: f64) -> Vec<AtomRecord> {
    build_backbone(residue_names, &vec![(phi, psi); residue_names.len()])
}

/// A fully extended backbone lying on the x axis, where every plane is undefined.
pub fn collinear_backbone(residues: usize) -> Vec<AtomRecord> {
    (0..residues * 3)
        .map(|i| {
            AtomRecord::new(
                BackboneAtomKind::CHAIN_ORDER[i % 3],
                "ALA",
                Point3::new(i as f64 * 1.45, 0.0, 0.0),
            )
        })
        .collect()
}
