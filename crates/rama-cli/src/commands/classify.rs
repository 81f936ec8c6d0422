use crate::cli::ClassifyArgs;
use crate::error::{CliError, Result};
use crate::plot;
use ramapp::core::io::table::AngleTable;
use ramapp::core::io::traits::TabularFile;
use ramapp::engine::classify::classify;
use std::fs;
use tracing::info;

pub async fn run(args: ClassifyArgs) -> Result<()> {
    info!("Loading angle table from {:?}", &args.input);
    let angles = AngleTable::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;

    let classified = classify(angles);
    let counts = classified.counts();
    println!("{} angle record(s):", counts.total());
    for (class, group) in classified.iter_groups() {
        println!("  {:<40} {}", class.label(), group.len());
    }

    if let Some(out_dir) = &args.out_dir {
        fs::create_dir_all(out_dir)?;
        for (class, group) in classified.iter_groups() {
            let path = out_dir.join(format!("{}.csv", class.file_stem()));
            info!("Writing {} record(s) to {:?}", group.len(), &path);
            AngleTable::write_to_path(group, &path)?;
        }
        println!("✓ Wrote grouped angle tables to {}", out_dir.display());
    }

    if let Some(plot_dir) = &args.plot_dir {
        let written = plot::write_ramachandran_plots(&classified, plot_dir)?;
        println!("✓ Wrote {} Ramachandran plot(s) to {}", written.len(), plot_dir.display());
    }
    Ok(())
}
