pub mod core;

// Re-export commonly used types
pub use crate::core::board::Board;
pub use crate::core::errors::SimulationError;
pub use crate::core::execution::{ConcurrencyMode, Controller, SimulationConfig, SimulationEngine};
pub use crate::core::observer::SimulationObserver;
pub use crate::core::stats::SimulationStats;
pub use crate::core::types::{BoundaryMode, CellChange, ChangeSource, RunState};
