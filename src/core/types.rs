use serde::{Deserialize, Serialize};

/// Addressing policy applied to reads outside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryMode {
    /// Cells beyond the edge are permanently dead
    Bounded,
    /// Edges connect to the opposite edge
    Toroidal,
}

impl Default for BoundaryMode {
    fn default() -> Self {
        BoundaryMode::Bounded
    }
}

impl std::fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryMode::Bounded => write!(f, "bounded"),
            BoundaryMode::Toroidal => write!(f, "toroidal"),
        }
    }
}

/// What caused a cell to flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeSource {
    /// Produced by applying the update rule
    Step,
    /// Produced by a direct write from the input layer
    Edit,
}

/// A single cell transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub x: usize,
    pub y: usize,
    pub old: bool,
    pub new: bool,
    pub source: ChangeSource,
}

impl CellChange {
    pub fn is_birth(&self) -> bool {
        !self.old && self.new
    }

    pub fn is_death(&self) -> bool {
        self.old && !self.new
    }
}

/// Controller timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunState {
    Running,
    Paused,
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Running => write!(f, "running"),
            RunState::Paused => write!(f, "paused"),
        }
    }
}
