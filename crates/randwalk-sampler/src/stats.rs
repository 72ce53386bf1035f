use nalgebra::Vector2;
use randwalk_core::{Ensemble, Position, Result, WalkError};
use serde::Serialize;

/// Cross-walk mean position and spread for every step of an ensemble.
///
/// `variances[i]` is the mean squared Euclidean distance of the walks from
/// `means[i]`, i.e. the trace of the positional covariance, normalized by
/// the number of walks.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatisticsSeries {
    means: Vec<Position>,
    variances: Vec<f64>,
    n_walks: usize,
}

/// Leading part of a series, as shown on one animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatisticsPrefix<'a> {
    pub means: &'a [Position],
    pub variances: &'a [f64],
}

/// Summarizes an ensemble step by step.
///
/// Steps are independent of each other; the same ensemble always yields the
/// same series.
pub fn compute_statistics(ensemble: &Ensemble) -> Result<StatisticsSeries> {
    if ensemble.is_empty() {
        return Err(WalkError::EmptyEnsemble);
    }

    let n = ensemble.len() as f64;
    let len = ensemble.trajectory_len();
    let mut means = Vec::with_capacity(len);
    let mut variances = Vec::with_capacity(len);

    for step in 0..len {
        let sum = ensemble
            .positions_at(step)
            .fold(Vector2::<f64>::zeros(), |acc, p| acc + p.0);
        let mean = Position(sum / n);

        let spread = ensemble
            .positions_at(step)
            .map(|p| p.distance_squared(&mean))
            .sum::<f64>()
            / n;

        means.push(mean);
        variances.push(spread);
    }

    Ok(StatisticsSeries {
        means,
        variances,
        n_walks: ensemble.len(),
    })
}

impl StatisticsSeries {
    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    pub fn n_walks(&self) -> usize {
        self.n_walks
    }

    pub fn means(&self) -> &[Position] {
        &self.means
    }

    pub fn variances(&self) -> &[f64] {
        &self.variances
    }

    pub fn mean_x(&self) -> impl Iterator<Item = f64> + '_ {
        self.means.iter().map(Position::x)
    }

    pub fn mean_y(&self) -> impl Iterator<Item = f64> + '_ {
        self.means.iter().map(Position::y)
    }

    /// Root-mean-square distance from the mean, per step.
    pub fn std_dev(&self) -> impl Iterator<Item = f64> + '_ {
        self.variances.iter().map(|v| v.sqrt())
    }

    pub fn final_mean(&self) -> Option<Position> {
        self.means.last().copied()
    }

    pub fn final_variance(&self) -> Option<f64> {
        self.variances.last().copied()
    }

    /// Steps `0..=raw_index`, clamped to the series.
    pub fn prefix(&self, raw_index: usize) -> StatisticsPrefix<'_> {
        let end = if self.means.is_empty() {
            0
        } else {
            raw_index.min(self.means.len() - 1) + 1
        };
        StatisticsPrefix {
            means: &self.means[..end],
            variances: &self.variances[..end],
        }
    }
}
