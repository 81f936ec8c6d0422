use crate::cache::CacheManager;
use crate::cli::{ConfigArgs, FetchArgs};
use crate::config::{AppConfig, build_config};
use crate::error::{CliError, Result};
use crate::fetch::RcsbClient;
use crate::utils::progress::CliProgressHandler;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ramapp::core::io::table::AtomTable;
use ramapp::core::io::traits::TabularFile;
use ramapp::core::models::chain::ChainAtoms;
use ramapp::engine::progress::{Progress, ProgressReporter};
use ramapp::engine::sampling::ClusterSampler;
use tracing::info;

pub async fn run(args: FetchArgs, config_args: &ConfigArgs) -> Result<()> {
    let config = build_config(config_args, Some(&args.sampling), None)?;
    let chains = fetch_chains(&config).await?;

    info!("Writing atom table to {:?}", &args.output);
    AtomTable::write_to_path(&chains, &args.output)?;
    println!(
        "✓ Wrote backbone atoms of {} chain(s) to {}",
        chains.len(),
        args.output.display()
    );
    Ok(())
}

/// Samples cluster representatives and downloads the backbone of each one.
pub async fn fetch_chains(config: &AppConfig) -> Result<Vec<ChainAtoms>> {
    let sampling = &config.analysis.sampling;
    let cache = if config.use_cache {
        Some(CacheManager::new()?)
    } else {
        info!("Cache disabled; every file will be downloaded.");
        None
    };
    let client = RcsbClient::new(config.sources.clone(), cache);

    let mut rng = match sampling.seed {
        Some(seed) => {
            info!("Sampling clusters with seed {}.", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    reporter.report(Progress::PhaseStart {
        name: "Sampling Clusters",
    });
    let mut sampler = ClusterSampler::from_config(sampling)
        .map_err(|e| CliError::Config(e.to_string()))?;
    let sampled = client.sample_entities(&mut sampler, &mut rng).await;
    reporter.report(Progress::PhaseFinish);
    sampled?;

    let entity_ids = sampler.finish();
    info!(
        "Sampled {} entities (limit {}).",
        entity_ids.len(),
        sampling.cluster_limit
    );

    Ok(client.fetch_chains(&entity_ids, &reporter).await)
}
