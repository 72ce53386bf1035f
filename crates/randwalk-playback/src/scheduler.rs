use randwalk_core::{WalkParams, FRAME_SKIP, PAUSE_RATIO};
use serde::Serialize;

/// Maps the animation clock onto trajectory indices.
///
/// One logical frame advances `frame_skip` simulation substeps. Once the
/// logical frame reaches `pause_threshold`, playback holds that pose for
/// the rest of the animation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlaybackScheduler {
    num_steps: usize,
    frame_skip: usize,
    pause_ratio: f64,
    trajectory_len: usize,
}

impl PlaybackScheduler {
    /// Scheduler with the fixed `FRAME_SKIP` and `PAUSE_RATIO`.
    pub fn new(num_steps: usize) -> Self {
        Self::with_timing(num_steps, FRAME_SKIP, PAUSE_RATIO)
    }

    pub fn for_params(params: &WalkParams) -> Self {
        Self::new(params.num_steps)
    }

    pub fn with_timing(num_steps: usize, frame_skip: usize, pause_ratio: f64) -> Self {
        let frame_skip = frame_skip.max(1);
        Self {
            num_steps,
            frame_skip,
            pause_ratio: pause_ratio.clamp(0.0, 1.0),
            trajectory_len: num_steps.saturating_mul(frame_skip).saturating_add(1),
        }
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn frame_skip(&self) -> usize {
        self.frame_skip
    }

    pub fn pause_ratio(&self) -> f64 {
        self.pause_ratio
    }

    pub fn trajectory_len(&self) -> usize {
        self.trajectory_len
    }

    /// Logical frames emitted for one animation.
    pub fn frame_count(&self) -> usize {
        self.num_steps
    }

    pub fn pause_threshold(&self) -> usize {
        (self.num_steps as f64 * self.pause_ratio).floor() as usize
    }

    /// Raw trajectory index displayed on `logical_frame`.
    pub fn resolve_frame(&self, logical_frame: usize) -> usize {
        let effective = logical_frame.min(self.pause_threshold());
        effective
            .saturating_mul(self.frame_skip)
            .min(self.trajectory_len - 1)
    }

    /// Whether `logical_frame` falls in the end-of-animation hold.
    pub fn is_held(&self, logical_frame: usize) -> bool {
        logical_frame > self.pause_threshold()
    }

    /// Expectation axis bounds need at least two samples.
    pub fn shows_bounds(&self, logical_frame: usize) -> bool {
        logical_frame > 1
    }
}

/// `resolve_frame` with the fixed timing constants.
pub fn resolve_frame(logical_frame: usize, num_steps: usize) -> usize {
    PlaybackScheduler::new(num_steps).resolve_frame(logical_frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_floor() {
        assert_eq!(PlaybackScheduler::new(10).pause_threshold(), 6);
        assert_eq!(PlaybackScheduler::new(7).pause_threshold(), 4);
        assert_eq!(PlaybackScheduler::new(1).pause_threshold(), 0);
    }

    #[test]
    fn test_custom_timing() {
        let scheduler = PlaybackScheduler::with_timing(10, 2, 1.0);
        assert_eq!(scheduler.trajectory_len(), 21);
        assert_eq!(scheduler.resolve_frame(10), 20);
        assert_eq!(scheduler.resolve_frame(50), 20);
    }

    #[test]
    fn test_zero_frame_skip_is_clamped() {
        let scheduler = PlaybackScheduler::with_timing(5, 0, 0.6);
        assert_eq!(scheduler.frame_skip(), 1);
        assert_eq!(scheduler.resolve_frame(2), 2);
    }

    #[test]
    fn test_hold_and_bounds_flags() {
        let scheduler = PlaybackScheduler::new(10);
        assert!(!scheduler.is_held(6));
        assert!(scheduler.is_held(7));
        assert!(!scheduler.shows_bounds(0));
        assert!(!scheduler.shows_bounds(1));
        assert!(scheduler.shows_bounds(2));
    }
}
