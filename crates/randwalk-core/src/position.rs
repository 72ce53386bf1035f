use nalgebra::Vector2;
use serde::{Serialize, Deserialize};

/// A point in the walk plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vector2<f64>);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position(Vector2::new(x, y))
    }

    pub fn origin() -> Self {
        Position(Vector2::zeros())
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(&self, other: &Position) -> f64 {
        (self.0 - other.0).norm_squared()
    }

    pub fn distance(&self, other: &Position) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Moves the point by `magnitude` along `direction`.
    pub fn displaced(&self, direction: &Vector2<f64>, magnitude: f64) -> Position {
        Position(self.0 + direction * magnitude)
    }
}

impl std::ops::Deref for Position {
    type Target = Vector2<f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Position {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vector2<f64>> for Position {
    fn from(v: Vector2<f64>) -> Self {
        Position(v)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Position::new(x, y)
    }
}
