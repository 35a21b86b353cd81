/// Errors that can occur while building or editing a simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Direct cell write outside `[0, width) x [0, height)`
    OutOfBoundsWrite {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    /// Board constructed with a zero dimension
    InvalidDimensions { width: usize, height: usize },
    /// Dedicated rayon pool could not be created
    ThreadPool(String),
    /// Starting-cell sampler rejected its probability
    InvalidProbability(String),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::OutOfBoundsWrite { x, y, width, height } => write!(
                f,
                "Out of bounds write: ({}, {}) is outside a {}x{} board",
                x, y, width, height
            ),
            SimulationError::InvalidDimensions { width, height } => {
                write!(f, "Invalid board dimensions: {}x{}", width, height)
            }
            SimulationError::ThreadPool(msg) => write!(f, "Thread pool error: {}", msg),
            SimulationError::InvalidProbability(msg) => write!(f, "Invalid probability: {}", msg),
        }
    }
}

impl std::error::Error for SimulationError {}
