use super::board::Board;
use std::collections::VecDeque;

/// Number of past generations kept for cycle detection
pub const HISTORY_DEPTH: usize = 5;

/// Fixed-capacity record of past boards, most recent first
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    boards: VecDeque<Board>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer holding `HISTORY_DEPTH` boards
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_DEPTH)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            boards: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push `board` as the newest entry, evicting the oldest once full
    pub fn record(&mut self, board: Board) {
        if self.boards.len() == self.capacity {
            self.boards.pop_back();
        }
        self.boards.push_front(board);
    }

    /// Iterate from newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    pub fn newest(&self) -> Option<&Board> {
        self.boards.front()
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// True iff `board` matches any entry of `history` cell for cell
pub fn detect_repetition(board: &Board, history: &HistoryBuffer) -> bool {
    history.iter().any(|past| board.same_cells(past))
}
