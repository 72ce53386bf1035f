/// Errors raised while building or summarizing walk ensembles.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WalkError {
    /// A run parameter is outside its valid range; nothing was generated.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("cannot compute statistics over an empty ensemble")]
    EmptyEnsemble,

    #[error("trajectory must contain at least one position")]
    EmptyTrajectory,

    /// A trajectory's length disagrees with the rest of its ensemble.
    #[error("walk {walk} has {found} positions, expected {expected}")]
    LengthMismatch {
        walk: usize,
        expected: usize,
        found: usize,
    },

    #[error("statistics series has {series_len} steps but trajectories have {trajectory_len}")]
    SeriesMismatch {
        trajectory_len: usize,
        series_len: usize,
    },

    /// A playback schedule was built for a different trajectory length.
    #[error("playback schedule covers {scheduled_len} positions but trajectories have {trajectory_len}")]
    ScheduleMismatch {
        scheduled_len: usize,
        trajectory_len: usize,
    },
}

impl WalkError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        WalkError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WalkError>;
