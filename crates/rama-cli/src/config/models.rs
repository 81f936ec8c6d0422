use ramapp::engine::config::AnalysisConfig;

/// Where structure data is downloaded from. The PDB and FASTA URLs are templates
/// containing a `{pdb_id}` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcesConfig {
    pub cluster_url: String,
    pub pdb_url: String,
    pub fasta_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub sources: SourcesConfig,
    pub use_cache: bool,
}
