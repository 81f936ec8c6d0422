use crate::core::models::atom::{AtomRecord, BackboneAtomKind};
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("No backbone atoms found for chain '{0}'")]
    ChainNotFound(char),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: &'static str, value: String },
    #[error("Line is too short for an ATOM record with coordinates (must be at least 54 chars)")]
    LineTooShort,
}

const MIN_COORDINATE_LINE_LEN: usize = 54;

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn chain_id_of(line: &str) -> Option<char> {
    line.as_bytes().get(21).map(|&b| b as char)
}

fn parse_coordinate(
    line: &str,
    line_num: usize,
    start: usize,
    end: usize,
    columns: &'static str,
) -> Result<f64, PdbError> {
    let raw = slice_and_trim(line, start, end);
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::InvalidFloat {
                columns,
                value: raw.to_string(),
            },
        })
}

/// Extracts the backbone atoms of a single chain from a fixed-column PDB file.
///
/// Only `ATOM` records whose atom name (columns 13-16) is exactly `N`, `CA` or `C` and
/// whose chain identifier (column 22) matches are kept, in file order. Alternate
/// locations other than blank or `A` are dropped so each residue contributes one
/// triplet. Reading stops at the end of the first model or at the first record of a
/// different chain once atoms have been collected.
pub struct PdbBackboneReader;

impl PdbBackboneReader {
    /// # Errors
    ///
    /// Returns [`PdbError::Parse`] for a matching record with malformed coordinates and
    /// [`PdbError::ChainNotFound`] when no backbone atom of `chain_id` is present.
    pub fn read_chain(
        reader: &mut impl BufRead,
        chain_id: char,
    ) -> Result<Vec<AtomRecord>, PdbError> {
        let mut atoms = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let record_type = slice_and_trim(&line, 0, 6);

            if record_type == "ATOM" {
                if chain_id_of(&line) != Some(chain_id) {
                    if !atoms.is_empty() {
                        break;
                    }
                    continue;
                }
                let Some(raw_name) = line.get(12..16) else {
                    continue;
                };
                if !matches!(raw_name, " N  " | " CA " | " C  ") {
                    continue;
                }
                let alt_loc = line.as_bytes().get(16).copied().unwrap_or(b' ');
                if alt_loc != b' ' && alt_loc != b'A' {
                    continue;
                }
                if line.len() < MIN_COORDINATE_LINE_LEN {
                    return Err(PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::LineTooShort,
                    });
                }

                let atom_name: BackboneAtomKind = match raw_name.parse() {
                    Ok(kind) => kind,
                    Err(_) => continue,
                };
                let residue_name = slice_and_trim(&line, 17, 20);
                let x = parse_coordinate(&line, line_num, 30, 38, "31-38")?;
                let y = parse_coordinate(&line, line_num, 38, 46, "39-46")?;
                let z = parse_coordinate(&line, line_num, 46, 54, "47-54")?;

                atoms.push(AtomRecord::new(atom_name, residue_name, Point3::new(x, y, z)));
            } else if !atoms.is_empty() {
                match record_type {
                    "ENDMDL" | "END" => break,
                    "TER" | "HETATM" if chain_id_of(&line) != Some(chain_id) => break,
                    _ => {}
                }
            }
        }

        if atoms.is_empty() {
            return Err(PdbError::ChainNotFound(chain_id));
        }
        debug!(
            "Extracted {} backbone atoms for chain '{}'.",
            atoms.len(),
            chain_id
        );
        Ok(atoms)
    }

    pub fn read_chain_from_path<P: AsRef<Path>>(
        path: P,
        chain_id: char,
    ) -> Result<Vec<AtomRecord>, PdbError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_chain(&mut reader, chain_id)
    }
}
