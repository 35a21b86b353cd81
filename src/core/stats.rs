use super::types::CellChange;
use serde::{Deserialize, Serialize};

/// Aggregate statistics for a running simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Completed generations since start
    pub generation: u64,
    /// Cells currently alive
    pub alive: usize,
    /// Cells born since start, including births from direct edits
    pub born: u64,
    /// Cells died since start, including deaths from direct edits
    pub died: u64,
}

impl SimulationStats {
    pub fn new(initial_alive: usize) -> Self {
        Self {
            alive: initial_alive,
            ..Self::default()
        }
    }

    /// Fold one generation's births and deaths into the totals
    pub fn record_generation(&mut self, born: usize, died: usize) {
        self.generation += 1;
        self.apply_delta(born, died);
    }

    /// Account for a single edited cell
    pub fn record_edit(&mut self, change: &CellChange) {
        if change.is_birth() {
            self.apply_delta(1, 0);
        } else if change.is_death() {
            self.apply_delta(0, 1);
        }
    }

    fn apply_delta(&mut self, born: usize, died: usize) {
        self.born += born as u64;
        self.died += died as u64;
        self.alive = self.alive + born - died;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ChangeSource;

    fn edit(old: bool, new: bool) -> CellChange {
        CellChange { x: 0, y: 0, old, new, source: ChangeSource::Edit }
    }

    #[test]
    fn test_generation_accumulates() {
        let mut stats = SimulationStats::new(10);
        stats.record_generation(3, 5);
        stats.record_generation(2, 0);

        assert_eq!(stats.generation, 2);
        assert_eq!(stats.born, 5);
        assert_eq!(stats.died, 5);
        assert_eq!(stats.alive, 10);
    }

    #[test]
    fn test_edit_counts_without_advancing_generation() {
        let mut stats = SimulationStats::new(0);
        stats.record_edit(&edit(false, true));
        stats.record_edit(&edit(true, true));
        stats.record_edit(&edit(true, false));

        assert_eq!(stats.generation, 0);
        assert_eq!(stats.born, 1);
        assert_eq!(stats.died, 1);
        assert_eq!(stats.alive, 0);
    }
}
