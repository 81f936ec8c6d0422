use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileEngineConfig, FileSamplingConfig, FileSourcesConfig};
use super::models::{AppConfig, SourcesConfig};
use crate::cli::{ConfigArgs, EngineArgs, SamplingArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use ramapp::engine::config::{AnalysisConfigBuilder, DegeneratePolicy};

/// Resolves the effective configuration.
///
/// Precedence, highest first: command-line flags, `-S key=value` overrides, the
/// configuration file, built-in defaults.
pub fn build_config(
    config_args: &ConfigArgs,
    sampling_args: Option<&SamplingArgs>,
    engine_args: Option<&EngineArgs>,
) -> Result<AppConfig> {
    let file_config = match &config_args.config_file {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    merge(file_config, config_args, sampling_args, engine_args)
}

fn merge(
    mut file_config: FileConfig,
    config_args: &ConfigArgs,
    sampling_args: Option<&SamplingArgs>,
    engine_args: Option<&EngineArgs>,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    file_config.apply_set_values(&config_args.set_values)?;

    let engine_file = file_config.engine.take().unwrap_or_default();
    let sampling_file = file_config.sampling.take().unwrap_or_default();
    let sources_file = file_config.sources.take().unwrap_or_default();

    let degenerate_policy =
        merge_degenerate_policy(engine_args, &engine_file, defaults.degenerate_policy)?;
    let cosine_tolerance = engine_args
        .and_then(|a| a.cosine_tolerance)
        .or(engine_file.cosine_tolerance)
        .unwrap_or(defaults.cosine_tolerance);

    let (cluster_limit, seed) = merge_sampling(sampling_args, &sampling_file, &defaults);
    let entity_pattern = sampling_file
        .entity_pattern
        .unwrap_or_else(|| defaults.entity_pattern.clone());

    let analysis = AnalysisConfigBuilder::new()
        .degenerate_policy(degenerate_policy)
        .cosine_tolerance(cosine_tolerance)
        .cluster_limit(cluster_limit)
        .entity_pattern(entity_pattern)
        .seed(seed)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let sources = merge_sources(sources_file, defaults)?;
    let use_cache = !sampling_args.is_some_and(|a| a.no_cache);

    Ok(AppConfig {
        analysis,
        sources,
        use_cache,
    })
}

fn merge_degenerate_policy(
    engine_args: Option<&EngineArgs>,
    file_val: &FileEngineConfig,
    default: DegeneratePolicy,
) -> Result<DegeneratePolicy> {
    if let Some(policy) = engine_args.and_then(|a| a.degenerate_policy) {
        return Ok(policy);
    }
    match &file_val.degenerate_policy {
        Some(name) => name.parse().map_err(|e| CliError::Config(format!("{}", e))),
        None => Ok(default),
    }
}

fn merge_sampling(
    sampling_args: Option<&SamplingArgs>,
    file_val: &FileSamplingConfig,
    defaults: &DefaultsConfig,
) -> (usize, Option<u64>) {
    let cluster_limit = sampling_args
        .and_then(|a| a.limit)
        .or(file_val.cluster_limit)
        .unwrap_or(defaults.cluster_limit);
    let seed = sampling_args.and_then(|a| a.seed).or(file_val.seed);
    (cluster_limit, seed)
}

fn merge_sources(file_val: FileSourcesConfig, defaults: DefaultsConfig) -> Result<SourcesConfig> {
    let sources = SourcesConfig {
        cluster_url: file_val.cluster_url.unwrap_or(defaults.cluster_url),
        pdb_url: file_val.pdb_url.unwrap_or(defaults.pdb_url),
        fasta_url: file_val.fasta_url.unwrap_or(defaults.fasta_url),
    };
    for template in [&sources.pdb_url, &sources.fasta_url] {
        parser::validate_url_template(template).map_err(|e| CliError::Config(e.to_string()))?;
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::config::defaults::{CLUSTER_URL, FASTA_URL, PDB_URL};
    use clap::Parser;
    use ramapp::engine::config::{DEFAULT_CLUSTER_LIMIT, DEFAULT_ENTITY_PATTERN};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const FILE_CONTENT: &str = r#"
        [engine]
        degenerate-policy = "abort"
        cosine-tolerance = 1e-4

        [sampling]
        cluster-limit = 30 # Overridden on the command line in some tests
        seed = 5

        [sources]
        fasta-url = "https://mirror.example.org/fasta/{pdb_id}"
    "#;

    fn write_config_file(dir: &TempDir, content: &str) -> PathBuf {
        let file_path = dir.path().join("rama.toml");
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn run_args(config_path: Option<&Path>, extra: &[&str]) -> Cli {
        let mut args = vec!["rama", "run", "-o", "angles.csv"];
        if let Some(path) = config_path {
            args.push("-c");
            args.push(path.to_str().unwrap());
        }
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    fn build_for(cli: &Cli) -> Result<AppConfig> {
        match &cli.command {
            Commands::Run(args) => build_config(&cli.config, Some(&args.sampling), Some(&args.engine)),
            _ => panic!("Expected 'run' subcommand"),
        }
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = build_for(&run_args(None, &[])).unwrap();
        assert_eq!(config.analysis.engine.degenerate_policy, DegeneratePolicy::Skip);
        assert_eq!(config.analysis.sampling.cluster_limit, DEFAULT_CLUSTER_LIMIT);
        assert_eq!(config.analysis.sampling.entity_pattern, DEFAULT_ENTITY_PATTERN);
        assert_eq!(config.analysis.sampling.seed, None);
        assert_eq!(config.sources.cluster_url, CLUSTER_URL);
        assert_eq!(config.sources.pdb_url, PDB_URL);
        assert_eq!(config.sources.fasta_url, FASTA_URL);
        assert!(config.use_cache);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, FILE_CONTENT);
        let config = build_for(&run_args(Some(&path), &[])).unwrap();

        assert_eq!(config.analysis.engine.degenerate_policy, DegeneratePolicy::Abort);
        assert_eq!(config.analysis.engine.cosine_tolerance, 1e-4);
        assert_eq!(config.analysis.sampling.cluster_limit, 30);
        assert_eq!(config.analysis.sampling.seed, Some(5));
        assert_eq!(
            config.sources.fasta_url,
            "https://mirror.example.org/fasta/{pdb_id}"
        );
        assert_eq!(config.sources.pdb_url, PDB_URL);
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, FILE_CONTENT);
        let cli = run_args(
            Some(&path),
            &[
                "-S",
                "sampling.cluster-limit=12",
                "-S",
                "engine.degenerate-policy=skip",
            ],
        );
        let config = build_for(&cli).unwrap();
        assert_eq!(config.analysis.sampling.cluster_limit, 12);
        assert_eq!(config.analysis.engine.degenerate_policy, DegeneratePolicy::Skip);
        assert_eq!(config.analysis.sampling.seed, Some(5));
    }

    #[test]
    fn cli_flags_override_set_values_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config_file(&dir, FILE_CONTENT);
        let cli = run_args(
            Some(&path),
            &[
                "-S",
                "sampling.cluster-limit=12",
                "--limit",
                "3",
                "--seed",
                "99",
                "--degenerate-policy",
                "skip",
                "--no-cache",
            ],
        );
        let config = build_for(&cli).unwrap();
        assert_eq!(config.analysis.sampling.cluster_limit, 3);
        assert_eq!(config.analysis.sampling.seed, Some(99));
        assert_eq!(config.analysis.engine.degenerate_policy, DegeneratePolicy::Skip);
        assert!(!config.use_cache);
    }

    #[test]
    fn invalid_values_are_reported_as_config_errors() {
        let cli = run_args(None, &["-S", "engine.degenerate-policy=ignore"]);
        assert!(matches!(build_for(&cli), Err(CliError::Config(_))));

        let cli = run_args(None, &["--limit", "0"]);
        assert!(matches!(build_for(&cli), Err(CliError::Config(_))));

        let cli = run_args(None, &["-S", "sampling.entity-pattern=(["]);
        assert!(matches!(build_for(&cli), Err(CliError::Config(_))));

        let cli = run_args(None, &["-S", "sources.pdb-url=https://files.rcsb.org/download/"]);
        assert!(matches!(build_for(&cli), Err(CliError::Config(_))));
    }

    #[test]
    fn commands_without_engine_or_sampling_flags_use_lower_layers() {
        let cli = Cli::parse_from(["rama", "-S", "engine.cosine-tolerance=0.001", "classify", "-i", "a.csv"]);
        let config = build_config(&cli.config, None, None).unwrap();
        assert_eq!(config.analysis.engine.cosine_tolerance, 0.001);
        assert!(config.use_cache);
    }
}
