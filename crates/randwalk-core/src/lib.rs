pub mod position;
pub mod noise;
pub mod path;
pub mod params;
pub mod error;

// Core types
pub use position::Position;
pub use noise::WalkRng;
pub use error::{Result, WalkError};

// Run configuration
pub use params::{check_walk, RunConfig, SeedStrategy, WalkParams, FRAME_SKIP, PAUSE_RATIO, SEED_RANGE};

// Path and ensemble types
pub use path::{Trajectory, Ensemble};
