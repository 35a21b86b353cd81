use lifesim::core::execution::config::{MAX_DELAY_MS, MIN_DELAY_MS};
use lifesim::core::execution::simulation_engine::step;
use lifesim::core::history::{detect_repetition, HistoryBuffer};
use lifesim::{
    Board, BoundaryMode, ConcurrencyMode, Controller, RunState, SimulationConfig, SimulationEngine,
    SimulationError, SimulationObserver, SimulationStats,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Test observer: keeps the latest stats snapshot, like a side panel would
#[derive(Default)]
struct StatsPanel {
    latest: Option<SimulationStats>,
    delay_ms: Option<f64>,
    halted: Option<(bool, bool)>,
}

struct PanelHandle(Rc<RefCell<StatsPanel>>);

impl SimulationObserver for PanelHandle {
    fn on_generation(&mut self, stats: &SimulationStats) {
        self.0.borrow_mut().latest = Some(*stats);
    }

    fn on_speed_changed(&mut self, delay_ms: f64) {
        self.0.borrow_mut().delay_ms = Some(delay_ms);
    }

    fn on_halted(&mut self, ended: bool, repeating: bool) {
        self.0.borrow_mut().halted = Some((ended, repeating));
    }
}

#[test]
fn test_vertical_blinker_scenario() {
    init_logging();

    let mut board = Board::new(10, 10, BoundaryMode::Bounded).unwrap();
    for (x, y) in [(5, 5), (5, 6), (5, 7)] {
        board.set(x, y, true).unwrap();
    }
    let mut controller = Controller::new(SimulationEngine::new(board, ConcurrencyMode::Sequential));
    let panel = Rc::new(RefCell::new(StatsPanel::default()));
    controller.add_observer(Box::new(PanelHandle(Rc::clone(&panel))));

    controller.tick().unwrap();
    let b = controller.board();
    assert!(b.get(4, 6) && b.get(5, 6) && b.get(6, 6));
    assert!(!b.get(5, 5) && !b.get(5, 7));
    assert_eq!(b.count_alive_cells(), 3);

    controller.tick().unwrap();
    let b = controller.board();
    assert!(b.get(5, 5) && b.get(5, 6) && b.get(5, 7));
    assert!(!b.get(4, 6) && !b.get(6, 6));
    assert!(controller.is_repeating());
    assert_eq!(controller.run_state(), RunState::Paused);

    let panel = panel.borrow();
    assert_eq!(panel.halted, Some((false, true)));
    assert_eq!(
        panel.latest,
        Some(SimulationStats { generation: 2, alive: 3, born: 4, died: 4 })
    );
}

#[test]
fn test_history_holds_five_generations() {
    let board = Board::from_live_cells(8, 8, BoundaryMode::Toroidal, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]).unwrap();
    let mut history = HistoryBuffer::new();
    let mut current = board;
    let mut boards = Vec::new();
    for _ in 0..8 {
        let next = step(&current, ConcurrencyMode::Sequential).board;
        boards.push(current.clone());
        history.record(current);
        current = next;
    }

    assert_eq!(history.len(), 5);
    assert!(!detect_repetition(&boards[2], &history));
    assert!(detect_repetition(&boards[3], &history));
    assert!(detect_repetition(&boards[7], &history));
}

#[test]
fn test_toroidal_reads_are_total() {
    let board = Board::from_live_cells(3, 5, BoundaryMode::Toroidal, &[(0, 0)]).unwrap();
    for k in [-1_000_000_i64, -3, 0, 3, 999_999] {
        assert!(board.get(k * 3, k * 5));
        assert!(board.count_live_neighbors(k, k) <= 8);
    }
    let _ = board.get(i64::MAX, i64::MIN);
}

#[test]
fn test_speed_bounds_through_observer() {
    let config = SimulationConfig::new().with_dimensions(8, 8).with_seed(11);
    let mut controller = Controller::from_config(&config).unwrap();
    let panel = Rc::new(RefCell::new(StatsPanel::default()));
    controller.add_observer(Box::new(PanelHandle(Rc::clone(&panel))));

    for _ in 0..10 {
        controller.increase_speed();
    }
    assert_eq!(panel.borrow().delay_ms, Some(MIN_DELAY_MS));
    for _ in 0..10 {
        controller.decrease_speed();
    }
    assert_eq!(panel.borrow().delay_ms, Some(MAX_DELAY_MS));
}

#[test]
fn test_timed_run_halts() {
    init_logging();

    // A glider driven into the corner of a bounded board collapses into a block
    let glider = Board::from_live_cells(5, 5, BoundaryMode::Bounded, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]).unwrap();
    let mut controller = Controller::new(SimulationEngine::new(glider, ConcurrencyMode::Rayon));
    for _ in 0..4 {
        controller.increase_speed();
    }

    let mut ticks = 0;
    let mut polls = 0;
    while !controller.is_paused() && polls < 1_000 {
        ticks += controller.advance_time(Duration::from_millis(100));
        polls += 1;
    }
    assert!(controller.is_paused());
    assert!(controller.is_ended());
    assert_eq!(ticks, 12);
    assert_eq!(controller.stats().alive, 4);
    assert_eq!(controller.stats().alive, controller.board().count_alive_cells());
}

#[test]
fn test_edit_errors_are_recoverable() {
    let mut controller = Controller::new(SimulationEngine::new(
        Board::new(4, 4, BoundaryMode::Bounded).unwrap(),
        ConcurrencyMode::Sequential,
    ));

    let err = controller.edit_cell(4, 0, true).unwrap_err();
    assert_eq!(
        err,
        SimulationError::OutOfBoundsWrite { x: 4, y: 0, width: 4, height: 4 }
    );
    assert_eq!(controller.edit_cell(3, 0, true), Ok(true));
    assert_eq!(controller.stats().alive, 1);
}
