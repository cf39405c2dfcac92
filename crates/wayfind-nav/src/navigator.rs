use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World-space waypoint sequence produced by a path query.
///
/// Empty and single-point paths mean "no path" to consumers.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavPath {
    pub points: Vec<Vec2>,
}

impl NavPath {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }
}

/// Path query seam consumed by movement code.
pub trait Navigator {
    fn find_path(&self, start: Vec2, goal: Vec2) -> Option<NavPath>;
}
