use super::traits::TabularFile;
use crate::core::models::angle::AngleRecord;
use crate::core::models::atom::{AtomRecord, BackboneAtomKind};
use crate::core::models::chain::ChainAtoms;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid value in data row {row}: {reason}")]
    Row { row: usize, reason: String },
}

/// Row layout of an atom table. Unknown columns (such as an unnamed index column) are
/// ignored, and `chain` may be absent entirely.
#[derive(Debug, Serialize, Deserialize)]
struct AtomRow {
    #[serde(default)]
    chain: Option<String>,
    atom_name: String,
    residue_name: String,
    x: f64,
    y: f64,
    z: f64,
}

/// CSV table of backbone atoms with columns `chain,atom_name,residue_name,x,y,z`.
///
/// Consecutive rows sharing a `chain` value form one [`ChainAtoms`] entry.
pub struct AtomTable;

impl TabularFile for AtomTable {
    type Record = ChainAtoms;
    type Error = TableError;

    fn read_from(reader: impl Read) -> Result<Vec<ChainAtoms>, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut chains: Vec<ChainAtoms> = Vec::new();

        for (i, result) in csv_reader.deserialize::<AtomRow>().enumerate() {
            let row = result?;
            let row_num = i + 1;

            let atom_name: BackboneAtomKind =
                row.atom_name.parse().map_err(|e| TableError::Row {
                    row: row_num,
                    reason: format!("{}", e),
                })?;
            for (axis, value) in [("x", row.x), ("y", row.y), ("z", row.z)] {
                if !value.is_finite() {
                    return Err(TableError::Row {
                        row: row_num,
                        reason: format!("coordinate {} is not finite ({})", axis, value),
                    });
                }
            }

            let label = row.chain.map(|c| c.trim().to_string()).filter(|c| !c.is_empty());
            let atom = AtomRecord::new(
                atom_name,
                &row.residue_name,
                Point3::new(row.x, row.y, row.z),
            );

            match chains.last_mut() {
                Some(current) if current.label == label => current.atoms.push(atom),
                _ => chains.push(ChainAtoms::new(label, vec![atom])),
            }
        }

        Ok(chains)
    }

    fn write_to(chains: &[ChainAtoms], writer: impl Write) -> Result<(), TableError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for chain in chains {
            for atom in &chain.atoms {
                csv_writer.serialize(AtomRow {
                    chain: chain.label.clone(),
                    atom_name: atom.atom_name.to_string(),
                    residue_name: atom.residue_name.clone(),
                    x: atom.position.x,
                    y: atom.position.y,
                    z: atom.position.z,
                })?;
            }
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// CSV table of computed angles with columns `residue_name,phi,psi`.
pub struct AngleTable;

impl TabularFile for AngleTable {
    type Record = AngleRecord;
    type Error = TableError;

    fn read_from(reader: impl Read) -> Result<Vec<AngleRecord>, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut angles = Vec::new();
        for (i, result) in csv_reader.deserialize::<AngleRecord>().enumerate() {
            let record = result?;
            if !record.phi.is_finite() || !record.psi.is_finite() {
                return Err(TableError::Row {
                    row: i + 1,
                    reason: "phi and psi must be finite".to_string(),
                });
            }
            angles.push(record);
        }
        Ok(angles)
    }

    fn write_to(angles: &[AngleRecord], writer: impl Write) -> Result<(), TableError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for angle in angles {
            csv_writer.serialize(angle)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
