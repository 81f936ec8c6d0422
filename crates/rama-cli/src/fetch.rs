use crate::cache::{CacheKind, CacheManager};
use crate::config::SourcesConfig;
use crate::error::{CliError, Result};
use crate::utils::parser;
use futures_util::StreamExt;
use rand::Rng;
use ramapp::core::io::fasta;
use ramapp::core::io::pdb::PdbBackboneReader;
use ramapp::core::models::chain::ChainAtoms;
use ramapp::engine::progress::{Progress, ProgressReporter};
use ramapp::engine::sampling::ClusterSampler;
use std::io::Cursor;
use tracing::{debug, info, warn};

/// Reassembles lines from a byte stream delivered in arbitrary chunks.
#[derive(Debug, Default)]
struct LineSplitter {
    pending: Vec<u8>,
}

impl LineSplitter {
    /// Appends a chunk and returns every line it completed, without terminators.
    fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);
        let mut lines = Vec::new();
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.pending.drain(..=pos).collect();
            let text = String::from_utf8_lossy(&raw[..pos]);
            lines.push(text.trim_end_matches('\r').to_string());
        }
        lines
    }

    /// The trailing line of a stream that does not end in a newline.
    fn finish(self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&self.pending).into_owned())
        }
    }
}

/// Sequential HTTP client for the RCSB cluster list, FASTA and PDB downloads.
pub struct RcsbClient {
    client: reqwest::Client,
    sources: SourcesConfig,
    cache: Option<CacheManager>,
}

impl RcsbClient {
    pub fn new(sources: SourcesConfig, cache: Option<CacheManager>) -> Self {
        Self {
            client: reqwest::Client::new(),
            sources,
            cache,
        }
    }

    /// Streams the cluster list and feeds it to `sampler` line by line, stopping the
    /// download as soon as the sampler is full.
    pub async fn sample_entities<R: Rng + ?Sized>(
        &self,
        sampler: &mut ClusterSampler,
        rng: &mut R,
    ) -> Result<()> {
        info!("Streaming cluster list from {}", self.sources.cluster_url);
        let response = self
            .client
            .get(&self.sources.cluster_url)
            .send()
            .await?
            .error_for_status()?;

        let mut splitter = LineSplitter::default();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            for line in splitter.push(&chunk?) {
                if !sampler.offer_line(&line, rng) {
                    debug!("Cluster limit reached; closing the cluster list stream.");
                    return Ok(());
                }
            }
        }
        if let Some(line) = splitter.finish() {
            sampler.offer_line(&line, rng);
        }
        Ok(())
    }

    /// Downloads the backbone of every entity in turn.
    ///
    /// Entities that fail (unknown chain, mmCIF-only entry, missing backbone atoms,
    /// HTTP errors) are logged and skipped.
    pub async fn fetch_chains(
        &self,
        entity_ids: &[String],
        reporter: &ProgressReporter<'_>,
    ) -> Vec<ChainAtoms> {
        reporter.report(Progress::PhaseStart {
            name: "Downloading Structures",
        });
        reporter.report(Progress::TaskStart {
            total_steps: entity_ids.len() as u64,
        });

        let mut chains = Vec::with_capacity(entity_ids.len());
        for entity_id in entity_ids {
            match self.fetch_entity_chain(entity_id).await {
                Ok(chain) => {
                    debug!(
                        "Fetched {} backbone atoms for {}.",
                        chain.atoms.len(),
                        chain.display_label()
                    );
                    chains.push(chain);
                }
                Err(e) => {
                    warn!("Skipping entity {}: {}", entity_id, e);
                    reporter.report(Progress::Warning(format!("{}: {}", entity_id, e)));
                }
            }
            reporter.report(Progress::TaskIncrement);
        }

        reporter.report(Progress::TaskFinish);
        reporter.report(Progress::PhaseFinish);
        info!(
            "Fetched {} of {} sampled entities.",
            chains.len(),
            entity_ids.len()
        );
        chains
    }

    /// Selects the entity's chain from its FASTA headers and extracts that chain's
    /// backbone from the PDB-format entry. The chain is labelled `ENTITY:CHAIN`.
    pub async fn fetch_entity_chain(&self, entity_id: &str) -> Result<ChainAtoms> {
        let pdb_id =
            parser::pdb_id_of_entity(entity_id).map_err(|e| CliError::Argument(e.to_string()))?;

        let fasta_text = self
            .download(CacheKind::Fasta, pdb_id, &self.sources.fasta_url)
            .await?;
        let chain_id = fasta::select_chain(&mut Cursor::new(fasta_text.as_bytes()), entity_id)?;
        let chain_char = fasta::pdb_chain_char(&chain_id).ok_or_else(|| {
            CliError::Argument(format!(
                "chain '{}' has no PDB-format identifier (mmCIF-only entry)",
                chain_id
            ))
        })?;

        let pdb_text = self
            .download(CacheKind::Pdb, pdb_id, &self.sources.pdb_url)
            .await?;
        let atoms = PdbBackboneReader::read_chain(&mut Cursor::new(pdb_text.as_bytes()), chain_char)?;

        Ok(ChainAtoms::new(
            Some(format!("{}:{}", entity_id, chain_char)),
            atoms,
        ))
    }

    async fn download(&self, kind: CacheKind, pdb_id: &str, template: &str) -> Result<String> {
        if let Some(content) = self.cache.as_ref().and_then(|c| c.load(kind, pdb_id)) {
            return Ok(content);
        }

        let url = parser::render_url_template(template, pdb_id);
        debug!("GET {}", url);
        let content = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.store(kind, pdb_id, &content) {
                warn!("Failed to cache {} ({:?}): {}", pdb_id, kind, e);
            }
        }
        Ok(content)
    }
}
