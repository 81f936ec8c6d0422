use clap::{Args, Parser, Subcommand};
use ramapp::engine::config::DegeneratePolicy;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "RAMA++ CLI - Sample protein structures from the RCSB PDB, extract backbone phi/psi dihedral angles, and group them for Ramachandran analysis.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Options controlling where configuration values come from.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short = 'c', long = "config", global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S sampling.cluster-limit=50
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sample PDB entries and download their backbone coordinates into an atom table.
    Fetch(FetchArgs),
    /// Compute phi/psi angles for every chain of an atom table.
    Angles(AnglesArgs),
    /// Fetch structures and compute their angles in one step.
    Run(RunArgs),
    /// Split an angle table into general, glycine, and proline groups.
    Classify(ClassifyArgs),
    /// Manage the local cache of downloaded structure files.
    Cache(CacheArgs),
}

/// Overrides for cluster sampling and downloading.
#[derive(Args, Debug, Clone, Default)]
pub struct SamplingArgs {
    /// Number of clusters to sample one entry from.
    #[arg(short = 'n', long, value_name = "INT")]
    pub limit: Option<usize>,

    /// Seed for the random choice of cluster representatives.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Download every file again instead of reusing the local cache.
    #[arg(long)]
    pub no_cache: bool,
}

/// Overrides for the dihedral engine.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// What to do with residues whose geometry cannot define an angle ('skip' or 'abort').
    #[arg(long, value_name = "POLICY")]
    pub degenerate_policy: Option<DegeneratePolicy>,

    /// How far a cosine may stray outside [-1, 1] before it is treated as an error.
    #[arg(long, value_name = "FLOAT")]
    pub cosine_tolerance: Option<f64>,
}

/// Arguments for the `fetch` subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Path for the output atom table (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub sampling: SamplingArgs,
}

/// Arguments for the `angles` subcommand.
#[derive(Args, Debug)]
pub struct AnglesArgs {
    /// Path to the input atom table (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output angle table (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path for the output angle table (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Also write the downloaded backbone atoms to this atom table.
    #[arg(long, value_name = "PATH")]
    pub atoms_out: Option<PathBuf>,

    #[command(flatten)]
    pub sampling: SamplingArgs,

    #[command(flatten)]
    pub engine: EngineArgs,
}

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path to the input angle table (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write one angle table per group (general.csv, glycine.csv, proline.csv) here.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Write one Ramachandran scatter plot per group (general.svg, glycine.svg, proline.svg) here.
    #[arg(long, value_name = "DIR")]
    pub plot_dir: Option<PathBuf>,
}

/// Arguments for the `cache` subcommand.
#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommands,
}

/// Available commands for cache management.
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show the absolute path to the local cache directory.
    Path,
    /// Delete every cached file.
    Clear,
}
