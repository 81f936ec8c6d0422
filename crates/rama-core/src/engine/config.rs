use crate::core::utils::geometry::DEFAULT_COSINE_TOLERANCE;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_ENTITY_PATTERN: &str = r"^.{4}_[0-9]$";
pub const DEFAULT_CLUSTER_LIMIT: usize = 125;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

/// What the engine does with a residue whose geometry cannot define an angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Drop the residue, record it as skipped, and keep processing the chain.
    #[default]
    Skip,
    /// Fail the whole chain.
    Abort,
}

impl FromStr for DegeneratePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(DegeneratePolicy::Skip),
            "abort" => Ok(DegeneratePolicy::Abort),
            other => Err(ConfigError::InvalidValue {
                parameter: "degenerate_policy",
                reason: format!("unknown policy '{}' (expected 'skip' or 'abort')", other),
            }),
        }
    }
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegeneratePolicy::Skip => f.write_str("skip"),
            DegeneratePolicy::Abort => f.write_str("abort"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub degenerate_policy: DegeneratePolicy,
    pub cosine_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            degenerate_policy: DegeneratePolicy::default(),
            cosine_tolerance: DEFAULT_COSINE_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SamplingConfig {
    pub cluster_limit: usize,
    pub entity_pattern: String,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub engine: EngineConfig,
    pub sampling: SamplingConfig,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    degenerate_policy: Option<DegeneratePolicy>,
    cosine_tolerance: Option<f64>,
    cluster_limit: Option<usize>,
    entity_pattern: Option<String>,
    seed: Option<u64>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = Some(policy);
        self
    }
    pub fn cosine_tolerance(mut self, tolerance: f64) -> Self {
        self.cosine_tolerance = Some(tolerance);
        self
    }
    pub fn cluster_limit(mut self, limit: usize) -> Self {
        self.cluster_limit = Some(limit);
        self
    }
    pub fn entity_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.entity_pattern = Some(pattern.into());
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let cosine_tolerance = self
            .cosine_tolerance
            .ok_or(ConfigError::MissingParameter("cosine_tolerance"))?;
        if !cosine_tolerance.is_finite() || !(0.0..1.0).contains(&cosine_tolerance) {
            return Err(ConfigError::InvalidValue {
                parameter: "cosine_tolerance",
                reason: format!("must be in [0, 1), got {}", cosine_tolerance),
            });
        }

        let cluster_limit = self
            .cluster_limit
            .ok_or(ConfigError::MissingParameter("cluster_limit"))?;
        if cluster_limit == 0 {
            return Err(ConfigError::InvalidValue {
                parameter: "cluster_limit",
                reason: "must be at least 1".to_string(),
            });
        }

        let entity_pattern = self
            .entity_pattern
            .ok_or(ConfigError::MissingParameter("entity_pattern"))?;
        Regex::new(&entity_pattern).map_err(|e| ConfigError::InvalidValue {
            parameter: "entity_pattern",
            reason: e.to_string(),
        })?;

        Ok(AnalysisConfig {
            engine: EngineConfig {
                degenerate_policy: self
                    .degenerate_policy
                    .ok_or(ConfigError::MissingParameter("degenerate_policy"))?,
                cosine_tolerance,
            },
            sampling: SamplingConfig {
                cluster_limit,
                entity_pattern,
                seed: self.seed,
            },
        })
    }
}
