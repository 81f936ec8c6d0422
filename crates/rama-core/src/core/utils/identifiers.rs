use phf::{Map, phf_map};

static ONE_LETTER_CODES: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G', "HIS" => 'H', "ILE" => 'I',
    "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F', "PRO" => 'P',
    "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
    // Common protonation-state and modified variants map onto their parent residue.
    "HSD" => 'H', "HSE" => 'H', "HSP" => 'H', "HID" => 'H', "HIE" => 'H', "HIP" => 'H',
    "CYX" => 'C', "MSE" => 'M', "SEC" => 'U', "PYL" => 'O',
};

pub fn one_letter_code(residue_name: &str) -> Option<char> {
    ONE_LETTER_CODES.get(residue_name.trim()).copied()
}

pub fn is_standard_residue(residue_name: &str) -> bool {
    one_letter_code(residue_name).is_some()
}

/// One-letter sequence for a run of residue names, with `X` for unknown codes.
pub fn sequence_string<'a>(residue_names: impl IntoIterator<Item = &'a str>) -> String {
    residue_names
        .into_iter()
        .map(|name| one_letter_code(name).unwrap_or('X'))
        .collect()
}
