use regex::Regex;
use std::io::{self, BufRead};
use std::sync::LazyLock;
use thiserror::Error;

static CHAIN_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|Chains? (.*?)\|").expect("valid chain list pattern"));
static AUTH_CHAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[auth (.+)\]").expect("valid auth chain pattern"));

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("No FASTA header found for entity '{0}'")]
    EntityNotFound(String),
    #[error("FASTA header for entity '{0}' has no chain list")]
    MissingChainList(String),
}

/// Picks one chain identifier for a polymer entity from an RCSB entry FASTA file.
///
/// The header whose first field after `>` equals `entity_id` (e.g. `4HHB_1`) is located,
/// the last chain in its `Chain`/`Chains` list is taken, and the author chain id from an
/// `[auth X]` annotation is preferred over the label id because PDB-format files are
/// keyed by author ids.
///
/// # Errors
///
/// Returns [`SelectionError::EntityNotFound`] if no header matches and
/// [`SelectionError::MissingChainList`] if the matching header has no chain list.
pub fn select_chain(reader: &mut impl BufRead, entity_id: &str) -> Result<String, SelectionError> {
    for line_res in reader.lines() {
        let line = line_res?;
        let Some(header) = line.strip_prefix('>') else {
            continue;
        };
        if !header
            .strip_prefix(entity_id)
            .is_some_and(|rest| rest.starts_with('|'))
        {
            continue;
        }

        let chain_list = CHAIN_LIST
            .captures(&line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| SelectionError::MissingChainList(entity_id.to_string()))?;

        let chain = chain_list
            .rsplit(", ")
            .next()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| SelectionError::MissingChainList(entity_id.to_string()))?;

        let selected = AUTH_CHAIN
            .captures(chain)
            .and_then(|caps| caps.get(1))
            .map_or(chain, |m| m.as_str());
        return Ok(selected.to_string());
    }

    Err(SelectionError::EntityNotFound(entity_id.to_string()))
}

/// Converts a chain identifier to the single column-22 character used by PDB files.
///
/// Multi-character identifiers only exist in mmCIF-format entries and yield `None`.
pub fn pdb_chain_char(chain_id: &str) -> Option<char> {
    let mut chars = chain_id.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
