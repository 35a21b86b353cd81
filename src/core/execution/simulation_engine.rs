use crate::core::board::Board;
use crate::core::errors::SimulationError;
use crate::core::execution::config::{ConcurrencyMode, SimulationConfig};
use crate::core::history::{self, HistoryBuffer};
use crate::core::stats::SimulationStats;
use crate::core::types::{CellChange, ChangeSource};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// B3/S23: survive on 2 or 3 neighbours, born on exactly 3
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// The result of applying the update rule once
#[derive(Debug, Clone)]
pub struct Generation {
    pub board: Board,
    /// Every flipped cell, in row-major order
    pub changes: Vec<CellChange>,
    pub born: usize,
    pub died: usize,
}

impl Generation {
    pub fn changed_cell_count(&self) -> usize {
        self.born + self.died
    }

    pub fn changed(&self) -> bool {
        self.changed_cell_count() > 0
    }
}

fn compute_row(board: &Board, y: usize, row: &mut [bool]) {
    let y = y as i64;
    for (x, cell) in row.iter_mut().enumerate() {
        let x = x as i64;
        *cell = next_state(board.get(x, y), board.count_live_neighbors(x, y));
    }
}

/// Compute the next generation of `board` without touching it
pub fn step(board: &Board, mode: ConcurrencyMode) -> Generation {
    let width = board.width();
    let mut cells = vec![false; board.cells().len()];

    match mode {
        ConcurrencyMode::Sequential => cells
            .chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| compute_row(board, y, row)),
        ConcurrencyMode::Rayon => cells
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| compute_row(board, y, row)),
    }

    let mut changes = Vec::new();
    let mut born = 0;
    let mut died = 0;
    for (i, (&old, &new)) in board.cells().iter().zip(cells.iter()).enumerate() {
        if old == new {
            continue;
        }
        if new {
            born += 1;
        } else {
            died += 1;
        }
        changes.push(CellChange {
            x: i % width,
            y: i / width,
            old,
            new,
            source: ChangeSource::Step,
        });
    }

    Generation {
        board: Board::from_cells(board, cells),
        changes,
        born,
        died,
    }
}

/// What a single tick did to the simulation
#[derive(Debug, Clone)]
pub struct TickReport {
    /// Statistics after the tick
    pub stats: SimulationStats,
    pub changes: Vec<CellChange>,
    /// The tick produced no changes and the engine was not already ended
    pub newly_ended: bool,
    /// The tick reproduced a board from history and the engine was not already repeating
    pub newly_repeating: bool,
}

impl TickReport {
    pub fn halted(&self) -> bool {
        self.newly_ended || self.newly_repeating
    }
}

/// Owns the current board, its history and the running statistics
pub struct SimulationEngine {
    board: Board,
    history: HistoryBuffer,
    stats: SimulationStats,
    ended: bool,
    repeating: bool,
    concurrency_mode: ConcurrencyMode,
    pool: Option<rayon::ThreadPool>,
}

impl SimulationEngine {
    /// Create an engine starting from `board`
    pub fn new(board: Board, concurrency_mode: ConcurrencyMode) -> Self {
        let stats = SimulationStats::new(board.count_alive_cells());
        Self {
            board,
            history: HistoryBuffer::new(),
            stats,
            ended: false,
            repeating: false,
            concurrency_mode,
            pool: None,
        }
    }

    /// Create an engine with a randomly seeded board as described by `config`
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SimulationError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Board::random(
            config.width,
            config.height,
            config.boundary,
            config.start_probability,
            &mut rng,
        )?;

        let mut engine = Self::new(board, config.concurrency_mode);
        if let (ConcurrencyMode::Rayon, Some(size)) = (config.concurrency_mode, config.thread_pool_size) {
            engine = engine.with_thread_pool(size)?;
        }
        Ok(engine)
    }

    /// Run parallel steps on a dedicated pool instead of rayon's global one
    pub fn with_thread_pool(mut self, size: usize) -> Result<Self, SimulationError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(size)
            .build()
            .map_err(|e| SimulationError::ThreadPool(e.to_string()))?;
        self.pool = Some(pool);
        Ok(self)
    }

    /// Compute the next generation of the current board
    pub fn step(&self) -> Generation {
        let board = &self.board;
        let mode = self.concurrency_mode;
        match &self.pool {
            Some(pool) if mode == ConcurrencyMode::Rayon => pool.install(|| step(board, mode)),
            _ => step(board, mode),
        }
    }

    /// Push `board` into the repetition history
    pub fn record_history(&mut self, board: Board) {
        self.history.record(board);
    }

    /// Whether `board` matches anything in the current history
    pub fn detect_repetition(&self, board: &Board) -> bool {
        history::detect_repetition(board, &self.history)
    }

    /// Advance one generation and evaluate the halting conditions.
    ///
    /// A tick without changes sets `ended` and skips the repetition check.
    /// Repetition is only checked while not already repeating.
    pub fn advance(&mut self) -> TickReport {
        let Generation {
            board: next,
            changes,
            born,
            died,
        } = self.step();

        let previous = std::mem::replace(&mut self.board, next);
        self.record_history(previous);
        self.stats.record_generation(born, died);

        debug!(
            "=== Generation {} === alive: {}, born: {}, died: {}",
            self.stats.generation, self.stats.alive, born, died
        );

        let mut newly_ended = false;
        let mut newly_repeating = false;
        if changes.is_empty() {
            newly_ended = !self.ended;
            self.ended = true;
        } else if !self.repeating && self.detect_repetition(&self.board) {
            self.repeating = true;
            newly_repeating = true;
        }

        TickReport {
            stats: self.stats,
            changes,
            newly_ended,
            newly_repeating,
        }
    }

    /// Write a cell directly.
    ///
    /// Returns the resulting change, or `None` if the cell already held `state`.
    /// An actual change clears both halting flags.
    pub fn edit_cell(&mut self, x: i64, y: i64, state: bool) -> Result<Option<CellChange>, SimulationError> {
        let old = self.board.set(x, y, state)?;
        if old == state {
            trace!("edit at ({}, {}) left cell unchanged", x, y);
            return Ok(None);
        }

        let change = CellChange {
            x: x as usize,
            y: y as usize,
            old,
            new: state,
            source: ChangeSource::Edit,
        };
        self.stats.record_edit(&change);
        self.ended = false;
        self.repeating = false;

        Ok(Some(change))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn is_repeating(&self) -> bool {
        self.repeating
    }

    pub fn concurrency_mode(&self) -> ConcurrencyMode {
        self.concurrency_mode
    }
}
