use crate::cli::{AnglesArgs, ConfigArgs};
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use ramapp::core::io::table::{AngleTable, AtomTable};
use ramapp::core::io::traits::TabularFile;
use ramapp::core::models::chain::ChainAtoms;
use ramapp::engine::config::EngineConfig;
use ramapp::engine::progress::ProgressReporter;
use ramapp::workflows::ramachandran::{self, RamachandranResult};
use std::path::Path;
use tracing::{info, warn};

pub async fn run(args: AnglesArgs, config_args: &ConfigArgs) -> Result<()> {
    let config = build_config(config_args, None, Some(&args.engine))?;

    info!("Loading atom table from {:?}", &args.input);
    let chains = AtomTable::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;

    compute_and_write(&chains, &config.analysis.engine, &args.output)?;
    Ok(())
}

/// Runs the dihedral workflow over `chains`, writes the angle table and prints a summary.
pub fn compute_and_write(
    chains: &[ChainAtoms],
    engine: &EngineConfig,
    output: &Path,
) -> Result<RamachandranResult> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the Ramachandran workflow for {} chain(s)...", chains.len());
    let result =
        tokio::task::block_in_place(|| ramachandran::run(chains, engine, &reporter))?;

    if result.total_angles() == 0 {
        warn!("Workflow completed but produced no angles.");
        println!("Warning: no interior residues were found; the angle table is empty.");
    }

    info!("Writing angle table to {:?}", output);
    let angles: Vec<_> = result.angles().cloned().collect();
    AngleTable::write_to_path(&angles, output)?;

    println!(
        "✓ Wrote {} angle record(s) from {} chain(s) to {}",
        angles.len(),
        result.chains.len(),
        output.display()
    );
    if result.total_skipped() > 0 {
        println!(
            "  {} residue(s) skipped for undefined geometry",
            result.total_skipped()
        );
    }
    if !result.rejected.is_empty() {
        println!("  {} chain(s) rejected:", result.rejected.len());
        for rejected in &result.rejected {
            println!("    {}: {}", rejected.label, rejected.reason);
        }
    }
    Ok(result)
}
