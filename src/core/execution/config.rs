//! Configuration for lifesim simulation runs
//!
//! This module provides the configuration types that size and seed the board,
//! choose how generations are computed, and set the initial tick delay.

use crate::core::types::BoundaryMode;
use serde::{Deserialize, Serialize};

/// Shortest allowed delay between generations, in milliseconds
pub const MIN_DELAY_MS: f64 = 1000.0 / 32.0;
/// Longest allowed delay between generations, in milliseconds
pub const MAX_DELAY_MS: f64 = 2000.0;
/// Delay a fresh controller starts with, in milliseconds
pub const INITIAL_DELAY_MS: f64 = 500.0;

/// Enumeration of supported concurrency modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcurrencyMode {
    /// Sequential execution mode - every row is computed in order on the calling thread
    Sequential,
    /// Parallel execution mode using Rayon - rows of the next generation are computed concurrently
    Rayon,
}

impl Default for ConcurrencyMode {
    fn default() -> Self {
        ConcurrencyMode::Sequential
    }
}

/// Configuration for a simulation run
///
/// This struct holds the board geometry, the random seeding of the first
/// generation, and execution settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// Whether the board wraps at its edges
    pub boundary: BoundaryMode,
    /// Percent chance, 0-100, that a cell starts alive
    pub start_probability: u8,
    /// Seed for the starting board; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// The concurrency mode to use for computing generations
    pub concurrency_mode: ConcurrencyMode,
    /// The size of the thread pool for parallel execution
    /// Only relevant when concurrency_mode is Rayon
    pub thread_pool_size: Option<usize>,
    /// Delay before the first tick, in milliseconds
    pub initial_delay_ms: f64,
}

impl SimulationConfig {
    /// Create a new simulation configuration with default values
    ///
    /// Default configuration is a 100x100 bounded board, half the cells alive,
    /// sequential execution and a 500 ms tick.
    pub fn new() -> Self {
        Self {
            width: 100,
            height: 100,
            boundary: BoundaryMode::default(),
            start_probability: 50,
            seed: None,
            concurrency_mode: ConcurrencyMode::default(),
            thread_pool_size: None,
            initial_delay_ms: INITIAL_DELAY_MS,
        }
    }

    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the starting-cell probability in percent, clamped to 100
    pub fn with_start_probability(mut self, probability: u8) -> Self {
        self.start_probability = probability.min(100);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the concurrency mode for the simulation
    ///
    /// # Arguments
    /// * `mode` - The concurrency mode to use
    ///
    /// # Returns
    /// A new configuration with the specified concurrency mode
    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    /// Set the thread pool size for parallel execution
    ///
    /// # Note
    /// This setting only affects execution when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    /// Set the starting tick delay, clamped to `[MIN_DELAY_MS, MAX_DELAY_MS]`
    pub fn with_initial_delay_ms(mut self, delay_ms: f64) -> Self {
        self.initial_delay_ms = clamp_delay(delay_ms);
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a delay into the supported range. NaN falls back to `INITIAL_DELAY_MS`.
pub fn clamp_delay(delay_ms: f64) -> f64 {
    if delay_ms.is_nan() {
        return INITIAL_DELAY_MS;
    }
    delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.width, 100);
        assert_eq!(config.height, 100);
        assert_eq!(config.boundary, BoundaryMode::Bounded);
        assert_eq!(config.start_probability, 50);
        assert_eq!(config.seed, None);
        assert_eq!(config.concurrency_mode, ConcurrencyMode::Sequential);
        assert_eq!(config.thread_pool_size, None);
        assert_eq!(config.initial_delay_ms, 500.0);
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new()
            .with_dimensions(40, 30)
            .with_boundary(BoundaryMode::Toroidal)
            .with_seed(9)
            .with_concurrency(ConcurrencyMode::Rayon)
            .with_thread_pool_size(4);

        assert_eq!((config.width, config.height), (40, 30));
        assert_eq!(config.boundary, BoundaryMode::Toroidal);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.concurrency_mode, ConcurrencyMode::Rayon);
        assert_eq!(config.thread_pool_size, Some(4));
    }

    #[test]
    fn test_probability_clamped() {
        let config = SimulationConfig::new().with_start_probability(180);
        assert_eq!(config.start_probability, 100);
    }

    #[test]
    fn test_initial_delay_clamped() {
        assert_eq!(SimulationConfig::new().with_initial_delay_ms(1.0).initial_delay_ms, MIN_DELAY_MS);
        assert_eq!(SimulationConfig::new().with_initial_delay_ms(1e6).initial_delay_ms, MAX_DELAY_MS);
        assert_eq!(SimulationConfig::new().with_initial_delay_ms(250.0).initial_delay_ms, 250.0);
    }

    #[test]
    fn test_non_finite_delay_stays_in_range() {
        assert_eq!(clamp_delay(f64::NAN), INITIAL_DELAY_MS);
        assert_eq!(clamp_delay(f64::INFINITY), MAX_DELAY_MS);
        assert_eq!(clamp_delay(f64::NEG_INFINITY), MIN_DELAY_MS);
        assert_eq!(SimulationConfig::new().with_initial_delay_ms(f64::NAN).initial_delay_ms, INITIAL_DELAY_MS);
    }

    #[test]
    fn test_delay_bounds() {
        assert_eq!(MIN_DELAY_MS, 31.25);
        assert_eq!(MAX_DELAY_MS, 2000.0);
    }
}
