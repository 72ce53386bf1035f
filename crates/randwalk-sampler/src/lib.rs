use randwalk_core::{check_walk, Ensemble, Result, RunConfig, SeedStrategy, Trajectory, WalkParams, WalkRng};
use rayon::prelude::*;
use tracing::{debug, trace};

pub mod stats;
pub use stats::{compute_statistics, StatisticsSeries, StatisticsPrefix};

/// Generates one trajectory of `num_steps * FRAME_SKIP` substeps.
///
/// Each substep draws a magnitude from [0, max_step) and a single unit
/// direction that drives both coordinates, so every displacement is an
/// isotropic step no longer than `max_step`. Positions are not clamped.
pub fn generate_walk(rng: &mut WalkRng, num_steps: usize, max_step: f64) -> Result<Trajectory> {
    let substeps = check_walk(num_steps, max_step)?;
    run_single_walk(rng, substeps, max_step)
}

/// Runs `num_walks` walks back to back on one shared stream.
pub fn build_ensemble(rng: &mut WalkRng, params: &WalkParams) -> Result<Ensemble> {
    params.validate()?;
    let substeps = params.substeps();
    let trajectories = (0..params.num_walks)
        .map(|walk_id| {
            trace!(walk_id, "generating walk");
            run_single_walk(rng, substeps, params.max_step)
        })
        .collect::<Result<Vec<Trajectory>>>()?;

    debug!(
        num_walks = params.num_walks,
        trajectory_len = params.trajectory_len(),
        "built ensemble on shared stream"
    );
    Ensemble::new(trajectories)
}

/// Runs walks in parallel, each on a stream derived from `(global_seed, walk_id)`.
///
/// The result does not depend on the thread count, but it differs from the
/// shared-stream ensemble for the same seed.
pub fn build_ensemble_par(global_seed: u64, params: &WalkParams) -> Result<Ensemble> {
    params.validate()?;
    let substeps = params.substeps();
    let trajectories = (0..params.num_walks)
        .into_par_iter()
        .map(|walk_id| {
            let mut rng = WalkRng::from_walk_id(global_seed, walk_id as u64);
            run_single_walk(&mut rng, substeps, params.max_step)
        })
        .collect::<Result<Vec<Trajectory>>>()?;

    debug!(
        num_walks = params.num_walks,
        threads = rayon::current_num_threads(),
        "built ensemble with per-walk streams"
    );
    Ensemble::new(trajectories)
}

/// Builds the ensemble described by a full run configuration.
pub fn run(config: &RunConfig) -> Result<Ensemble> {
    match config.strategy {
        SeedStrategy::SharedStream => {
            let mut rng = WalkRng::new(config.seed);
            build_ensemble(&mut rng, &config.params)
        }
        SeedStrategy::PerWalk => build_ensemble_par(config.seed, &config.params),
    }
}

fn run_single_walk(rng: &mut WalkRng, substeps: usize, max_step: f64) -> Result<Trajectory> {
    let mut position = rng.sample_start();
    let mut positions = Vec::with_capacity(substeps + 1);
    positions.push(position);

    for _ in 0..substeps {
        let magnitude = rng.step_magnitude(max_step);
        let direction = rng.sample_unit_vector();
        position = position.displaced(&direction, magnitude);
        positions.push(position);
    }

    Trajectory::from_positions(positions)
}
