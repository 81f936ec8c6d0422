use crate::cli::{ConfigArgs, RunArgs};
use crate::commands::{angles, fetch};
use crate::config::build_config;
use crate::error::Result;
use ramapp::core::io::table::AtomTable;
use ramapp::core::io::traits::TabularFile;
use tracing::info;

pub async fn run(args: RunArgs, config_args: &ConfigArgs) -> Result<()> {
    let config = build_config(config_args, Some(&args.sampling), Some(&args.engine))?;

    let chains = fetch::fetch_chains(&config).await?;

    if let Some(atoms_out) = &args.atoms_out {
        info!("Writing atom table to {:?}", atoms_out);
        AtomTable::write_to_path(&chains, atoms_out)?;
        println!("✓ Wrote backbone atoms to {}", atoms_out.display());
    }

    let result = angles::compute_and_write(&chains, &config.analysis.engine, &args.output)?;

    let counts = result.classify().counts();
    println!(
        "  general: {}, glycine: {}, proline: {}",
        counts.general, counts.glycine, counts.proline
    );
    Ok(())
}
