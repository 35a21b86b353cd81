use crate::core::board::Board;
use crate::core::errors::SimulationError;
use crate::core::execution::config::{clamp_delay, SimulationConfig, INITIAL_DELAY_MS};
use crate::core::execution::scheduler::TickScheduler;
use crate::core::execution::simulation_engine::{SimulationEngine, TickReport};
use crate::core::observer::SimulationObserver;
use crate::core::stats::SimulationStats;
use crate::core::types::{CellChange, RunState};
use log::{info, trace, warn};
use std::time::Duration;
use uuid::Uuid;

/// Play/pause/speed state machine around a [`SimulationEngine`]
///
/// The controller never owns a timer. Hosts either call [`Controller::tick`]
/// from their own timer at [`Controller::delay_ms`] intervals, or feed elapsed
/// time to [`Controller::advance_time`].
pub struct Controller {
    run_id: Uuid,
    engine: SimulationEngine,
    scheduler: TickScheduler,
    run_state: RunState,
    delay_ms: f64,
    observers: Vec<Box<dyn SimulationObserver>>,
}

impl Controller {
    /// Wrap `engine` in a running controller with the default 500 ms delay
    pub fn new(engine: SimulationEngine) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            engine,
            scheduler: TickScheduler::new(),
            run_state: RunState::Running,
            delay_ms: INITIAL_DELAY_MS,
            observers: Vec::new(),
        }
    }

    /// Build the engine and controller described by `config`
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SimulationError> {
        let engine = SimulationEngine::from_config(config)?;
        let mut controller = Self::new(engine);
        controller.delay_ms = clamp_delay(config.initial_delay_ms);
        info!(
            "[Simulation {}] Created {}x{} {} board with {} live cells",
            controller.run_id,
            config.width,
            config.height,
            config.boundary,
            controller.engine.stats().alive
        );
        Ok(controller)
    }

    /// Add an observer to the simulation
    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.observers.push(observer);
    }

    fn notify_cell_changed(&mut self, change: &CellChange) {
        for observer in &mut self.observers {
            observer.on_cell_changed(change);
        }
    }

    fn notify_generation(&mut self, stats: &SimulationStats) {
        for observer in &mut self.observers {
            observer.on_generation(stats);
        }
    }

    fn notify_stats_changed(&mut self, stats: &SimulationStats) {
        for observer in &mut self.observers {
            observer.on_stats_changed(stats);
        }
    }

    fn notify_speed_changed(&mut self) {
        let delay = self.delay_ms;
        for observer in &mut self.observers {
            observer.on_speed_changed(delay);
        }
    }

    fn notify_halted(&mut self) {
        let (ended, repeating) = (self.engine.is_ended(), self.engine.is_repeating());
        for observer in &mut self.observers {
            observer.on_halted(ended, repeating);
        }
    }

    fn set_run_state(&mut self, state: RunState) {
        if self.run_state == state {
            return;
        }
        self.run_state = state;
        if state == RunState::Paused {
            self.scheduler.reset();
        }
        info!("[Simulation {}] Now {}", self.run_id, state);
        for observer in &mut self.observers {
            observer.on_run_state_changed(state);
        }
    }

    /// Switch between running and paused. Does nothing once the simulation has ended.
    pub fn toggle_running(&mut self) -> RunState {
        if self.engine.is_ended() {
            info!("[Simulation {}] Ended; ignoring pause toggle", self.run_id);
            return self.run_state;
        }
        let next = match self.run_state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        };
        self.set_run_state(next);
        self.run_state
    }

    /// Advance one generation if running.
    ///
    /// Returns `None` while paused. A newly detected fixed point or cycle pauses
    /// the controller.
    pub fn tick(&mut self) -> Option<TickReport> {
        if self.run_state == RunState::Paused {
            return None;
        }

        let report = self.engine.advance();
        for change in &report.changes {
            self.notify_cell_changed(change);
        }
        self.notify_generation(&report.stats);

        if report.halted() {
            if report.newly_ended {
                info!(
                    "[Simulation {}] No cell changed in generation {}; simulation ended",
                    self.run_id, report.stats.generation
                );
            }
            if report.newly_repeating {
                info!(
                    "[Simulation {}] Generation {} repeats a recent board",
                    self.run_id, report.stats.generation
                );
            }
            self.notify_halted();
            self.set_run_state(RunState::Paused);
        }

        Some(report)
    }

    /// Feed elapsed wall time and run every tick that fell due.
    /// Returns the number of ticks run.
    pub fn advance_time(&mut self, elapsed: Duration) -> u64 {
        if self.run_state == RunState::Paused {
            self.scheduler.reset();
            return 0;
        }

        let due = self.scheduler.advance_time(elapsed, self.delay_ms);
        let mut ran = 0;
        for _ in 0..due {
            if self.tick().is_none() {
                break;
            }
            ran += 1;
            if self.run_state == RunState::Paused {
                break;
            }
        }
        ran
    }

    /// Time the host should wait before the next tick is due
    pub fn next_tick_in(&self) -> Duration {
        self.scheduler.time_until_next_tick(self.delay_ms)
    }

    /// Tick until the controller pauses itself or `max_ticks` is reached
    pub fn run_until_halted(&mut self, max_ticks: u64) -> u64 {
        let mut ran = 0;
        while ran < max_ticks && self.tick().is_some() {
            ran += 1;
        }
        ran
    }

    /// Halve the delay, down to the minimum
    pub fn increase_speed(&mut self) -> f64 {
        self.set_delay(self.delay_ms / 2.0)
    }

    /// Double the delay, up to the maximum
    pub fn decrease_speed(&mut self) -> f64 {
        self.set_delay(self.delay_ms * 2.0)
    }

    fn set_delay(&mut self, delay_ms: f64) -> f64 {
        self.delay_ms = clamp_delay(delay_ms);
        trace!("[Simulation {}] Delay set to {} ms", self.run_id, self.delay_ms);
        self.notify_speed_changed();
        self.delay_ms
    }

    /// Write a cell in any run state.
    ///
    /// Returns whether the cell actually changed. Out-of-range writes are
    /// rejected and leave the board untouched.
    pub fn edit_cell(&mut self, x: i64, y: i64, state: bool) -> Result<bool, SimulationError> {
        match self.engine.edit_cell(x, y, state) {
            Ok(Some(change)) => {
                self.notify_cell_changed(&change);
                let stats = self.engine.stats();
                self.notify_stats_changed(&stats);
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(e) => {
                warn!("[Simulation {}] Rejected edit: {}", self.run_id, e);
                Err(e)
            }
        }
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn stats(&self) -> SimulationStats {
        self.engine.stats()
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    pub fn updates_per_second(&self) -> f64 {
        1000.0 / self.delay_ms
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_paused(&self) -> bool {
        self.run_state == RunState::Paused
    }

    pub fn is_ended(&self) -> bool {
        self.engine.is_ended()
    }

    pub fn is_repeating(&self) -> bool {
        self.engine.is_repeating()
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }
}
