use super::config::{ConfigError, SamplingConfig};
use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;
use tracing::debug;

/// Splits one line of a cluster membership file into its entity ids.
pub fn parse_cluster_line(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Picks a random member of a cluster whose id matches `pattern`.
///
/// Members are shuffled first and the first match wins, so every matching member is
/// equally likely. Returns `None` when nothing in the cluster matches.
pub fn sample_representative<R: Rng + ?Sized>(
    members: &[String],
    pattern: &Regex,
    rng: &mut R,
) -> Option<String> {
    let mut shuffled: Vec<&String> = members.iter().collect();
    shuffled.shuffle(rng);
    shuffled
        .into_iter()
        .find(|member| pattern.is_match(member))
        .cloned()
}

/// Incremental cluster selection, fed one line at a time.
///
/// This lets a caller stop reading a large cluster file (or a download stream) as soon
/// as enough representatives are collected.
#[derive(Debug, Clone)]
pub struct ClusterSampler {
    pattern: Regex,
    limit: usize,
    selected: Vec<String>,
}

impl ClusterSampler {
    pub fn new(pattern: Regex, limit: usize) -> Self {
        Self {
            pattern,
            limit,
            selected: Vec::with_capacity(limit.min(1024)),
        }
    }

    pub fn from_config(config: &SamplingConfig) -> Result<Self, ConfigError> {
        let pattern =
            Regex::new(&config.entity_pattern).map_err(|e| ConfigError::InvalidValue {
                parameter: "entity_pattern",
                reason: e.to_string(),
            })?;
        Ok(Self::new(pattern, config.cluster_limit))
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= self.limit
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Offers one cluster line. Returns `false` once the limit is reached and no further
    /// lines are wanted.
    pub fn offer_line<R: Rng + ?Sized>(&mut self, line: &str, rng: &mut R) -> bool {
        if self.is_full() {
            return false;
        }

        let members = parse_cluster_line(line);
        if members.is_empty() {
            return true;
        }

        match sample_representative(&members, &self.pattern, rng) {
            Some(entity) => {
                debug!(
                    "Selected {} from a cluster of {} member(s).",
                    entity,
                    members.len()
                );
                self.selected.push(entity);
            }
            None => debug!(
                "Skipping cluster of {} member(s) without a matching entity.",
                members.len()
            ),
        }

        !self.is_full()
    }

    pub fn finish(self) -> Vec<String> {
        self.selected
    }
}

/// Walks cluster lines in order and returns at most `limit` sampled entity ids.
///
/// Blank lines and clusters with no member matching `pattern` contribute nothing.
pub fn sample_clusters<I, S, R>(lines: I, limit: usize, pattern: &Regex, rng: &mut R) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut sampler = ClusterSampler::new(pattern.clone(), limit);
    for line in lines {
        if !sampler.offer_line(line.as_ref(), rng) {
            break;
        }
    }
    sampler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{DEFAULT_CLUSTER_LIMIT, DEFAULT_ENTITY_PATTERN};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const CLUSTERS: &str = "\
4HHB_1 4HHB_3 1A3N_1 AF_AFP69905F1_1
2LZM_1

AF_AFQ9XYZ1F1_1 MA_MAABC1234_1
1UBQ_1 1UBI_1 1UBQ_12
6VXX_1
";

    fn pattern() -> Regex {
        Regex::new(DEFAULT_ENTITY_PATTERN).unwrap()
    }

    #[test]
    fn parse_cluster_line_splits_on_whitespace() {
        assert_eq!(
            parse_cluster_line("  4HHB_1\t1A3N_1  2DHB_2 "),
            vec!["4HHB_1", "1A3N_1", "2DHB_2"]
        );
        assert!(parse_cluster_line("   ").is_empty());
    }

    #[test]
    fn default_pattern_accepts_only_pdb_entities_with_single_digit_ids() {
        let pattern = pattern();
        assert!(pattern.is_match("4HHB_1"));
        assert!(!pattern.is_match("1UBQ_12"));
        assert!(!pattern.is_match("AF_AFP69905F1_1"));
        assert!(!pattern.is_match("MA_MAABC1234_1"));
    }

    #[test]
    fn sample_representative_returns_a_matching_member() {
        let members = parse_cluster_line("AF_AFP69905F1_1 4HHB_1 MA_MAABC1234_1 1A3N_2");
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let choice = sample_representative(&members, &pattern(), &mut rng).unwrap();
            assert!(choice == "4HHB_1" || choice == "1A3N_2");
        }
    }

    #[test]
    fn sample_representative_eventually_picks_every_match() {
        let members = parse_cluster_line("1ABC_1 2ABC_1 3ABC_1");
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(sample_representative(&members, &pattern(), &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn sample_representative_without_match_is_none() {
        let members = parse_cluster_line("AF_AFQ9XYZ1F1_1 MA_MAABC1234_1");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_representative(&members, &pattern(), &mut rng), None);
    }

    #[test]
    fn sample_clusters_skips_blank_and_unmatched_clusters() {
        let mut rng = StdRng::seed_from_u64(3);
        let selected = sample_clusters(CLUSTERS.lines(), DEFAULT_CLUSTER_LIMIT, &pattern(), &mut rng);
        assert_eq!(selected.len(), 4);
        assert!(["4HHB_1", "4HHB_3", "1A3N_1"].contains(&selected[0].as_str()));
        assert_eq!(selected[1], "2LZM_1");
        assert!(["1UBQ_1", "1UBI_1"].contains(&selected[2].as_str()));
        assert_eq!(selected[3], "6VXX_1");
    }

    #[test]
    fn sample_clusters_stops_at_limit() {
        let mut rng = StdRng::seed_from_u64(3);
        let selected = sample_clusters(CLUSTERS.lines(), 2, &pattern(), &mut rng);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[1], "2LZM_1");
    }

    #[test]
    fn sampling_is_reproducible_with_the_same_seed() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            sample_clusters(CLUSTERS.lines(), 10, &pattern(), &mut rng)
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn offer_line_reports_when_sampler_is_full() {
        let mut sampler = ClusterSampler::new(pattern(), 1);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(sampler.offer_line("", &mut rng));
        assert!(sampler.offer_line("AF_AFQ9XYZ1F1_1", &mut rng));
        assert!(!sampler.offer_line("2LZM_1", &mut rng));
        assert!(sampler.is_full());
        assert!(!sampler.offer_line("6VXX_1", &mut rng));
        assert_eq!(sampler.finish(), vec!["2LZM_1"]);
    }

    #[test]
    fn from_config_rejects_invalid_pattern() {
        let config = SamplingConfig {
            cluster_limit: 5,
            entity_pattern: "(".to_string(),
            seed: None,
        };
        assert!(matches!(
            ClusterSampler::from_config(&config),
            Err(ConfigError::InvalidValue { parameter: "entity_pattern", .. })
        ));
    }
}
