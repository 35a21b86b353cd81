use super::stats::SimulationStats;
use super::types::{CellChange, RunState};

/// Observer trait for simulation events
///
/// View layers implement the hooks they care about; every method defaults to a no-op.
pub trait SimulationObserver {
    /// Called for every cell that flipped, whether by a step or a direct edit
    fn on_cell_changed(&mut self, _change: &CellChange) {}

    /// Called once per generation advance
    fn on_generation(&mut self, _stats: &SimulationStats) {}

    /// Called when a direct edit alters the totals without advancing a generation
    fn on_stats_changed(&mut self, _stats: &SimulationStats) {}

    /// Called when the tick delay changes
    fn on_speed_changed(&mut self, _delay_ms: f64) {}

    /// Called when a tick newly detects a fixed point or a cycle
    fn on_halted(&mut self, _ended: bool, _repeating: bool) {}

    /// Called when the controller pauses or resumes
    fn on_run_state_changed(&mut self, _state: RunState) {}
}

/// Observer that forwards notifications to the `log` facade
pub struct LoggingObserver;

impl SimulationObserver for LoggingObserver {
    fn on_generation(&mut self, stats: &SimulationStats) {
        log::info!(
            "generation {}: {} alive, {} born, {} died",
            stats.generation,
            stats.alive,
            stats.born,
            stats.died
        );
    }

    fn on_stats_changed(&mut self, stats: &SimulationStats) {
        log::debug!("edit: {} alive, {} born, {} died", stats.alive, stats.born, stats.died);
    }

    fn on_speed_changed(&mut self, delay_ms: f64) {
        log::info!("tick delay now {} ms ({} updates/s)", delay_ms, 1000.0 / delay_ms);
    }

    fn on_halted(&mut self, ended: bool, repeating: bool) {
        log::info!("simulation halted (ended: {}, repeating: {})", ended, repeating);
    }
}
