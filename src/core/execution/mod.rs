pub mod config;
pub mod controller;
pub mod scheduler;
pub mod simulation_engine;

// Re-export commonly used types
pub use config::{ConcurrencyMode, SimulationConfig};
pub use controller::Controller;
pub use scheduler::TickScheduler;
pub use simulation_engine::{Generation, SimulationEngine, TickReport};
