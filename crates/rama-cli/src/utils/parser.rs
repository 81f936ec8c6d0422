use thiserror::Error;

pub const PDB_ID_PLACEHOLDER: &str = "{pdb_id}";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Component '{component}' cannot be empty in '{input}'.")]
    EmptyComponent {
        component: &'static str,
        input: String,
    },

    #[error("Invalid entity id '{0}'. Expected a four-character PDB id, '_', and an entity number (e.g., '4HHB_1').")]
    InvalidEntityId(String),

    #[error("URL template '{0}' does not contain the '{{pdb_id}}' placeholder.")]
    MissingPlaceholder(String),
}

/// Splits a `-S key=value` override at the first `=`.
pub fn parse_key_value(input: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidKeyValue(input.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            input: input.to_string(),
        });
    }
    Ok((key, value.trim()))
}

/// Extracts the PDB id from a polymer entity id (`4HHB_1` -> `4HHB`).
pub fn pdb_id_of_entity(entity_id: &str) -> Result<&str, ParseError> {
    match entity_id.split_once('_') {
        Some((pdb_id, entity)) if pdb_id.len() == 4 && !entity.is_empty() => Ok(pdb_id),
        _ => Err(ParseError::InvalidEntityId(entity_id.to_string())),
    }
}

pub fn validate_url_template(template: &str) -> Result<(), ParseError> {
    if template.contains(PDB_ID_PLACEHOLDER) {
        Ok(())
    } else {
        Err(ParseError::MissingPlaceholder(template.to_string()))
    }
}

pub fn render_url_template(template: &str, pdb_id: &str) -> String {
    template.replace(PDB_ID_PLACEHOLDER, pdb_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_value_splits_at_first_equals() {
        assert_eq!(
            parse_key_value("sampling.entity-pattern=^.{4}_[0-9]=$"),
            Ok(("sampling.entity-pattern", "^.{4}_[0-9]=$"))
        );
        assert_eq!(
            parse_key_value(" engine.cosine-tolerance = 1e-5 "),
            Ok(("engine.cosine-tolerance", "1e-5"))
        );
    }

    #[test]
    fn parse_key_value_rejects_missing_equals_or_key() {
        assert_eq!(
            parse_key_value("sampling.seed"),
            Err(ParseError::InvalidKeyValue("sampling.seed".to_string()))
        );
        assert!(matches!(
            parse_key_value("=5"),
            Err(ParseError::EmptyComponent {
                component: "key",
                ..
            })
        ));
    }

    #[test]
    fn pdb_id_of_entity_takes_the_four_character_prefix() {
        assert_eq!(pdb_id_of_entity("4HHB_1"), Ok("4HHB"));
        assert_eq!(pdb_id_of_entity("1ABC_12"), Ok("1ABC"));
        assert!(pdb_id_of_entity("AF_AFP69905F1_1").is_err());
        assert!(pdb_id_of_entity("4HHB_").is_err());
        assert!(pdb_id_of_entity("4HHB").is_err());
    }

    #[test]
    fn url_templates_substitute_the_pdb_id() {
        let template = "https://files.rcsb.org/download/{pdb_id}.pdb";
        assert_eq!(validate_url_template(template), Ok(()));
        assert_eq!(
            render_url_template(template, "4HHB"),
            "https://files.rcsb.org/download/4HHB.pdb"
        );
        assert!(validate_url_template("https://files.rcsb.org/download/").is_err());
    }
}
