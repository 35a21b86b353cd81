use super::errors::SimulationError;
use super::types::BoundaryMode;
use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

/// Moore neighbourhood offsets, excluding the cell itself
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Fixed-size grid of live/dead cells
///
/// Reads are total: toroidal boards wrap every coordinate back into range and
/// bounded boards treat everything outside the grid as dead. Writes are always
/// bounds-checked, whatever the boundary mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    boundary: BoundaryMode,
    cells: Vec<bool>,
}

impl Board {
    /// Create an all-dead board
    pub fn new(width: usize, height: usize, boundary: BoundaryMode) -> Result<Self, SimulationError> {
        if width == 0 || height == 0 {
            return Err(SimulationError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            boundary,
            cells: vec![false; width * height],
        })
    }

    /// Create a board where each cell starts alive with `probability` percent chance.
    /// Values above 100 are clamped.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        boundary: BoundaryMode,
        probability: u8,
        rng: &mut R,
    ) -> Result<Self, SimulationError> {
        let mut board = Self::new(width, height, boundary)?;
        let p = f64::from(probability.min(100)) / 100.0;
        let sampler =
            Bernoulli::new(p).map_err(|e| SimulationError::InvalidProbability(e.to_string()))?;
        for cell in board.cells.iter_mut() {
            *cell = sampler.sample(rng);
        }
        Ok(board)
    }

    /// Create a board with exactly the listed cells alive
    pub fn from_live_cells(
        width: usize,
        height: usize,
        boundary: BoundaryMode,
        live: &[(usize, usize)],
    ) -> Result<Self, SimulationError> {
        let mut board = Self::new(width, height, boundary)?;
        for &(x, y) in live {
            board.set(x as i64, y as i64, true)?;
        }
        Ok(board)
    }

    /// Build a board directly from a row-major cell buffer of matching size
    pub(crate) fn from_cells(template: &Board, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), template.cells.len(), "cell buffer size mismatch");
        Self {
            width: template.width,
            height: template.height,
            boundary: template.boundary,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn boundary(&self) -> BoundaryMode {
        self.boundary
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn in_range(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    /// Read a cell. Never fails.
    pub fn get(&self, x: i64, y: i64) -> bool {
        match self.boundary {
            BoundaryMode::Toroidal => {
                let wx = x.rem_euclid(self.width as i64) as usize;
                let wy = y.rem_euclid(self.height as i64) as usize;
                self.cells[self.index(wx, wy)]
            }
            BoundaryMode::Bounded => {
                if !self.in_range(x, y) {
                    return false;
                }
                self.cells[self.index(x as usize, y as usize)]
            }
        }
    }

    /// Write a cell and return its previous state.
    /// Out-of-range coordinates are rejected in both boundary modes.
    pub fn set(&mut self, x: i64, y: i64, state: bool) -> Result<bool, SimulationError> {
        if !self.in_range(x, y) {
            return Err(SimulationError::OutOfBoundsWrite {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x as usize, y as usize);
        Ok(std::mem::replace(&mut self.cells[idx], state))
    }

    pub fn count_alive_cells(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Number of live cells in the Moore neighbourhood, in `0..=8`
    pub fn count_live_neighbors(&self, x: i64, y: i64) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dx, dy)| self.get(x.wrapping_add(*dx), y.wrapping_add(*dy)))
            .count() as u8
    }

    /// Cell-for-cell comparison between two boards of one simulation.
    ///
    /// Panics if the dimensions differ.
    pub fn same_cells(&self, other: &Board) -> bool {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "compared boards of different dimensions"
        );
        self.cells == other.cells
    }
}
