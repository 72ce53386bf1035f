use crate::error::{Result, WalkError};
use crate::Position;
use rand::Rng;
use serde::{Serialize, Deserialize};

/// Simulated substeps per displayed animation tick.
pub const FRAME_SKIP: usize = 4;

/// Fraction of the logical animation after which playback holds the last pose.
pub const PAUSE_RATIO: f64 = 0.6;

/// Upper bound (exclusive) for seeds drawn from entropy.
pub const SEED_RANGE: u64 = 1_000_000;

/// Parameters of one ensemble run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkParams {
    /// Logical animation steps; each expands to `FRAME_SKIP` substeps.
    pub num_steps: usize,
    /// Largest displacement of a single substep.
    pub max_step: f64,
    pub num_walks: usize,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            num_steps: 400,
            max_step: 0.15,
            num_walks: 50,
        }
    }
}

impl WalkParams {
    pub fn new(num_steps: usize, max_step: f64, num_walks: usize) -> Result<Self> {
        let params = Self { num_steps, max_step, num_walks };
        params.validate()?;
        Ok(params)
    }

    /// Randomized parameters in the ranges used for unattended batches.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            num_steps: rng.gen_range(200..500),
            max_step: rng.gen_range(0.01..0.3),
            num_walks: rng.gen_range(20..100),
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_walk(self.num_steps, self.max_step)?;
        if self.num_walks == 0 {
            return Err(WalkError::invalid("num_walks", "must be positive"));
        }
        Ok(())
    }

    pub fn substeps(&self) -> usize {
        self.num_steps * FRAME_SKIP
    }

    /// Positions per trajectory, start point included.
    pub fn trajectory_len(&self) -> usize {
        self.substeps() + 1
    }
}

/// Validates single-walk inputs and returns the number of substeps to run.
pub fn check_walk(num_steps: usize, max_step: f64) -> Result<usize> {
    if num_steps == 0 {
        return Err(WalkError::invalid("num_steps", "must be positive"));
    }
    if !max_step.is_finite() || max_step < 0.0 {
        return Err(WalkError::invalid(
            "max_step",
            format!("must be a finite non-negative number, got {max_step}"),
        ));
    }
    let max_positions = isize::MAX as usize / std::mem::size_of::<Position>();
    num_steps
        .checked_mul(FRAME_SKIP)
        .filter(|substeps| *substeps < max_positions)
        .ok_or_else(|| WalkError::invalid("num_steps", format!("{num_steps} steps do not fit in one trajectory")))
}

/// How walks of one ensemble obtain their randomness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedStrategy {
    /// One stream seeded once, consumed walk after walk.
    #[default]
    SharedStream,
    /// Each walk gets its own stream derived from `(seed, walk_id)`.
    PerWalk,
}

impl SeedStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedStrategy::SharedStream => "shared_stream",
            SeedStrategy::PerWalk => "per_walk",
        }
    }
}

/// Everything needed to replay a run bit for bit.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub params: WalkParams,
    pub seed: u64,
    #[serde(default)]
    pub strategy: SeedStrategy,
}

impl RunConfig {
    pub fn new(params: WalkParams, seed: u64) -> Self {
        Self {
            params,
            seed,
            strategy: SeedStrategy::default(),
        }
    }

    /// Draws the seed from system entropy.
    pub fn from_entropy(params: WalkParams) -> Self {
        Self::new(params, rand::thread_rng().gen_range(0..SEED_RANGE))
    }

    pub fn with_strategy(mut self, strategy: SeedStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Stable identifier of the run, built from the seed and the three parameters.
    pub fn run_key(&self) -> String {
        format!(
            "seed{}-steps{}-max{}-walks{}",
            self.seed, self.params.num_steps, self.params.max_step, self.params.num_walks
        )
    }
}
