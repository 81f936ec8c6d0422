use ramapp::core::utils::geometry::DEFAULT_COSINE_TOLERANCE;
use ramapp::engine::config::{DEFAULT_CLUSTER_LIMIT, DEFAULT_ENTITY_PATTERN, DegeneratePolicy};

pub const CLUSTER_URL: &str =
    "https://cdn.rcsb.org/resources/sequence/clusters/clusters-by-entity-30.txt";
pub const PDB_URL: &str = "https://files.rcsb.org/download/{pdb_id}.pdb";
pub const FASTA_URL: &str = "https://www.rcsb.org/fasta/entry/{pdb_id}";

pub struct DefaultsConfig {
    pub degenerate_policy: DegeneratePolicy,
    pub cosine_tolerance: f64,
    pub cluster_limit: usize,
    pub entity_pattern: String,
    pub cluster_url: String,
    pub pdb_url: String,
    pub fasta_url: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            degenerate_policy: DegeneratePolicy::Skip,
            cosine_tolerance: DEFAULT_COSINE_TOLERANCE,
            cluster_limit: DEFAULT_CLUSTER_LIMIT,
            entity_pattern: DEFAULT_ENTITY_PATTERN.to_string(),
            cluster_url: CLUSTER_URL.to_string(),
            pdb_url: PDB_URL.to_string(),
            fasta_url: FASTA_URL.to_string(),
        }
    }
}
