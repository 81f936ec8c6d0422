use crate::error::{CliError, Result};
use crate::utils::parser;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileEngineConfig {
    pub degenerate_policy: Option<String>,
    pub cosine_tolerance: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileSamplingConfig {
    pub cluster_limit: Option<usize>,
    pub entity_pattern: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileSourcesConfig {
    pub cluster_url: Option<String>,
    pub pdb_url: Option<String>,
    pub fasta_url: Option<String>,
}

/// The TOML configuration file, every value optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub engine: Option<FileEngineConfig>,
    pub sampling: Option<FileSamplingConfig>,
    pub sources: Option<FileSourcesConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Applies `-S key=value` overrides on top of the values read from the file.
    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value) =
                parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
            debug!("Applying override {} = {}", key, value);

            match key {
                "engine.degenerate-policy" => {
                    self.engine_mut().degenerate_policy = Some(value.to_string());
                }
                "engine.cosine-tolerance" => {
                    self.engine_mut().cosine_tolerance = Some(parse_value(key, value)?);
                }
                "sampling.cluster-limit" => {
                    self.sampling_mut().cluster_limit = Some(parse_value(key, value)?);
                }
                "sampling.entity-pattern" => {
                    self.sampling_mut().entity_pattern = Some(value.to_string());
                }
                "sampling.seed" => {
                    self.sampling_mut().seed = Some(parse_value(key, value)?);
                }
                "sources.cluster-url" => {
                    self.sources_mut().cluster_url = Some(value.to_string());
                }
                "sources.pdb-url" => {
                    self.sources_mut().pdb_url = Some(value.to_string());
                }
                "sources.fasta-url" => {
                    self.sources_mut().fasta_url = Some(value.to_string());
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn engine_mut(&mut self) -> &mut FileEngineConfig {
        self.engine.get_or_insert_with(Default::default)
    }

    fn sampling_mut(&mut self) -> &mut FileSamplingConfig {
        self.sampling.get_or_insert_with(Default::default)
    }

    fn sources_mut(&mut self) -> &mut FileSourcesConfig {
        self.sources.get_or_insert_with(Default::default)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid {} value for {}: {}",
            std::any::type_name::<T>(),
            key,
            value
        ))
    })
}
