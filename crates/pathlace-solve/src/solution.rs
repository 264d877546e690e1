//! Solver outcomes.

use pathlace_core::Path;

/// The outcome of a shortest-path query.
///
/// `Unreachable` is a first-class result, not an error: disconnected
/// levels are a valid configuration and the UI simply gets no hint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Solution {
    /// The optimal route, including both endpoints.
    Route(Path),
    /// No path exists between start and goal.
    Unreachable,
}

impl Solution {
    /// The optimal path, or `None` if the goal is unreachable.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Route(p) => Some(p),
            Self::Unreachable => None,
        }
    }

    /// The optimal number of steps, or `None` if the goal is unreachable.
    pub fn steps(&self) -> Option<usize> {
        self.path().map(Path::steps)
    }

    /// Whether the goal could not be reached.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable)
    }
}
