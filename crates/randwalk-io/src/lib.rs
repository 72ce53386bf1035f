use randwalk_core::{RunConfig, FRAME_SKIP, PAUSE_RATIO};
use randwalk_sampler::StatisticsSeries;
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub mod cli;
pub use cli::*;

/// Default directory artifact names are resolved against.
pub const DEFAULT_ARTIFACT_DIR: &str = "figures/randomwalk";

/// Run manifest for complete reproducibility
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: String,
    pub run_key: String,
    pub timestamp: String,
    pub seed: u64,
    pub strategy: String,     // "shared_stream" | "per_walk"
    pub num_steps: usize,
    pub max_step: f64,
    pub num_walks: usize,
    pub frame_skip: usize,
    pub pause_ratio: f64,
    pub trajectory_len: usize,
    pub final_mean: Option<[f64; 2]>,
    pub final_variance: Option<f64>,
    pub artifacts: ArtifactNames,
}

/// File names an external renderer should use for one run's output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactNames {
    pub walk_still: PathBuf,
    pub walk_animation: PathBuf,
    pub stats_animation: PathBuf,
}

impl ArtifactNames {
    pub fn for_seed(dir: impl AsRef<Path>, seed: u64) -> Self {
        let dir = dir.as_ref();
        Self {
            walk_still: dir.join(format!("walk-{seed}.png")),
            walk_animation: dir.join(format!("walk-{seed}.gif")),
            stats_animation: dir.join(format!("stats-{seed}.gif")),
        }
    }
}

impl RunManifest {
    pub fn new(config: &RunConfig, artifact_dir: impl AsRef<Path>) -> Self {
        let params = &config.params;
        Self {
            run_id: Uuid::new_v4().to_string(),
            run_key: config.run_key(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            seed: config.seed,
            strategy: config.strategy.as_str().to_string(),
            num_steps: params.num_steps,
            max_step: params.max_step,
            num_walks: params.num_walks,
            frame_skip: FRAME_SKIP,
            pause_ratio: PAUSE_RATIO,
            trajectory_len: params.trajectory_len(),
            final_mean: None,   // Filled in once statistics exist
            final_variance: None,
            artifacts: ArtifactNames::for_seed(artifact_dir, config.seed),
        }
    }

    pub fn with_statistics(mut self, stats: &StatisticsSeries) -> Self {
        self.final_mean = stats.final_mean().map(|p| [p.x(), p.y()]);
        self.final_variance = stats.final_variance();
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use randwalk_core::{SeedStrategy, WalkParams, WalkRng};
    use randwalk_sampler::{build_ensemble, compute_statistics};

    #[test]
    fn test_artifact_names_follow_seed() {
        let names = ArtifactNames::for_seed(DEFAULT_ARTIFACT_DIR, 4242);
        assert_eq!(names.walk_still, PathBuf::from("figures/randomwalk/walk-4242.png"));
        assert_eq!(names.walk_animation, PathBuf::from("figures/randomwalk/walk-4242.gif"));
        assert_eq!(names.stats_animation, PathBuf::from("figures/randomwalk/stats-4242.gif"));
    }

    #[test]
    fn test_manifest_carries_run_identity() {
        let params = WalkParams::new(10, 0.05, 3).unwrap();
        let config = RunConfig::new(params, 17).with_strategy(SeedStrategy::PerWalk);
        let manifest = RunManifest::new(&config, "out");

        assert_eq!(manifest.seed, 17);
        assert_eq!(manifest.strategy, "per_walk");
        assert_eq!(manifest.trajectory_len, 41);
        assert_eq!(manifest.run_key, config.run_key());
        assert!(manifest.final_mean.is_none());
        assert!(Uuid::parse_str(&manifest.run_id).is_ok());
    }

    #[test]
    fn test_manifest_json_roundtrip_with_statistics() {
        let params = WalkParams::new(5, 0.1, 4).unwrap();
        let config = RunConfig::new(params, 5);
        let ensemble = build_ensemble(&mut WalkRng::new(config.seed), &params).unwrap();
        let stats = compute_statistics(&ensemble).unwrap();
        let manifest = RunManifest::new(&config, DEFAULT_ARTIFACT_DIR).with_statistics(&stats);

        let back = RunManifest::from_json(&manifest.to_json_pretty().unwrap()).unwrap();
        assert_eq!(back.run_id, manifest.run_id);
        assert_eq!(back.artifacts, manifest.artifacts);
        assert_relative_eq!(back.final_variance.unwrap(), stats.final_variance().unwrap(), max_relative = 1e-12);
        let mean = stats.final_mean().unwrap();
        let [x, y] = back.final_mean.unwrap();
        assert_relative_eq!(x, mean.x(), max_relative = 1e-12);
        assert_relative_eq!(y, mean.y(), max_relative = 1e-12);
    }
}
