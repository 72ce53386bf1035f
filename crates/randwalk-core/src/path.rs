use crate::error::{Result, WalkError};
use crate::Position;
use serde::Serialize;

/// One simulated 2D path. Index 0 is the start point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trajectory {
    positions: Vec<Position>,
}

impl Trajectory {
    pub fn from_positions(positions: Vec<Position>) -> Result<Self> {
        if positions.is_empty() {
            return Err(WalkError::EmptyTrajectory);
        }
        Ok(Self { positions })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn start(&self) -> Position {
        self.positions[0]
    }

    pub fn end(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    /// Positions `0..=raw_index`, clamped to the trajectory.
    pub fn prefix(&self, raw_index: usize) -> &[Position] {
        let end = raw_index.min(self.positions.len() - 1) + 1;
        &self.positions[..end]
    }

    /// Euclidean length of every substep.
    pub fn step_lengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.positions.windows(2).map(|w| w[0].distance(&w[1]))
    }
}

impl std::ops::Index<usize> for Trajectory {
    type Output = Position;

    fn index(&self, index: usize) -> &Self::Output {
        &self.positions[index]
    }
}

/// The full set of trajectories of one run, all of equal length.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ensemble {
    trajectories: Vec<Trajectory>,
    trajectory_len: usize,
}

impl Ensemble {
    /// Rejects trajectories whose lengths disagree with the first one.
    pub fn new(trajectories: Vec<Trajectory>) -> Result<Self> {
        let trajectory_len = trajectories.first().map_or(0, Trajectory::len);
        for (walk, trajectory) in trajectories.iter().enumerate() {
            if trajectory.len() != trajectory_len {
                return Err(WalkError::LengthMismatch {
                    walk,
                    expected: trajectory_len,
                    found: trajectory.len(),
                });
            }
        }
        Ok(Self { trajectories, trajectory_len })
    }

    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// Shared length of every trajectory; 0 for an empty ensemble.
    pub fn trajectory_len(&self) -> usize {
        self.trajectory_len
    }

    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    pub fn get(&self, walk: usize) -> Option<&Trajectory> {
        self.trajectories.get(walk)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trajectory> {
        self.trajectories.iter()
    }

    /// Every walk's position at `step`.
    pub fn positions_at(&self, step: usize) -> impl Iterator<Item = &Position> + '_ {
        self.trajectories.iter().map(move |t| &t.positions[step])
    }
}

impl<'a> IntoIterator for &'a Ensemble {
    type Item = &'a Trajectory;
    type IntoIter = std::slice::Iter<'a, Trajectory>;

    fn into_iter(self) -> Self::IntoIter {
        self.trajectories.iter()
    }
}
