use crate::PlaybackScheduler;
use randwalk_core::{Ensemble, Position, Result, WalkError};
use randwalk_sampler::StatisticsSeries;
use serde::Serialize;

/// Padding added around the expectation curve's extent.
pub const BOUNDS_PADDING: f64 = 0.1;

/// Axis limits for the expectation sub-plot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ExpectationBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ExpectationBounds {
    /// Padded extent of `means`, or `None` with fewer than two samples.
    pub fn over(means: &[Position]) -> Option<Self> {
        if means.len() < 2 {
            return None;
        }
        let mut bounds = Self {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for p in means {
            bounds.x_min = bounds.x_min.min(p.x());
            bounds.x_max = bounds.x_max.max(p.x());
            bounds.y_min = bounds.y_min.min(p.y());
            bounds.y_max = bounds.y_max.max(p.y());
        }
        bounds.x_min -= BOUNDS_PADDING;
        bounds.x_max += BOUNDS_PADDING;
        bounds.y_min -= BOUNDS_PADDING;
        bounds.y_max += BOUNDS_PADDING;
        Some(bounds)
    }
}

/// Everything a renderer needs to draw one animation frame.
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    pub logical_frame: usize,
    pub raw_index: usize,
    /// True once playback is holding the final pose.
    pub held: bool,
    /// Each walk's positions `0..=raw_index`.
    pub walks: Vec<&'a [Position]>,
    pub means: &'a [Position],
    pub variances: &'a [f64],
    /// `None` until at least two logical frames have elapsed.
    pub bounds: Option<ExpectationBounds>,
}

/// Read-only view of one run, sliced frame by frame for a renderer.
#[derive(Clone, Copy, Debug)]
pub struct Playback<'a> {
    scheduler: PlaybackScheduler,
    ensemble: &'a Ensemble,
    stats: &'a StatisticsSeries,
}

impl<'a> Playback<'a> {
    /// Checks that the scheduler, ensemble and statistics describe the same run.
    pub fn new(
        scheduler: PlaybackScheduler,
        ensemble: &'a Ensemble,
        stats: &'a StatisticsSeries,
    ) -> Result<Self> {
        if ensemble.is_empty() {
            return Err(WalkError::EmptyEnsemble);
        }
        if stats.len() != ensemble.trajectory_len() {
            return Err(WalkError::SeriesMismatch {
                trajectory_len: ensemble.trajectory_len(),
                series_len: stats.len(),
            });
        }
        if scheduler.trajectory_len() != ensemble.trajectory_len() {
            return Err(WalkError::ScheduleMismatch {
                scheduled_len: scheduler.trajectory_len(),
                trajectory_len: ensemble.trajectory_len(),
            });
        }
        Ok(Self { scheduler, ensemble, stats })
    }

    pub fn scheduler(&self) -> &PlaybackScheduler {
        &self.scheduler
    }

    pub fn ensemble(&self) -> &'a Ensemble {
        self.ensemble
    }

    pub fn stats(&self) -> &'a StatisticsSeries {
        self.stats
    }

    pub fn frame(&self, logical_frame: usize) -> Frame<'a> {
        let raw_index = self.scheduler.resolve_frame(logical_frame);
        let prefix = self.stats.prefix(raw_index);
        let bounds = if self.scheduler.shows_bounds(logical_frame) {
            ExpectationBounds::over(prefix.means)
        } else {
            None
        };

        Frame {
            logical_frame,
            raw_index,
            held: self.scheduler.is_held(logical_frame),
            walks: self.ensemble.iter().map(|t| t.prefix(raw_index)).collect(),
            means: prefix.means,
            variances: prefix.variances,
            bounds,
        }
    }

    /// All logical frames of the animation, in order.
    pub fn frames(&self) -> impl Iterator<Item = Frame<'a>> + '_ {
        (0..self.scheduler.frame_count()).map(move |logical| self.frame(logical))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounds_need_two_samples() {
        assert_eq!(ExpectationBounds::over(&[]), None);
        assert_eq!(ExpectationBounds::over(&[Position::new(0.0, 0.0)]), None);
    }

    #[test]
    fn test_bounds_are_padded_extent() {
        let means = [
            Position::new(0.0, 1.0),
            Position::new(-0.5, 0.25),
            Position::new(0.3, 0.5),
        ];
        let bounds = ExpectationBounds::over(&means).unwrap();
        assert_relative_eq!(bounds.x_min, -0.6);
        assert_relative_eq!(bounds.x_max, 0.4);
        assert_relative_eq!(bounds.y_min, 0.15);
        assert_relative_eq!(bounds.y_max, 1.1);
    }
}
