use lifesim::core::observer::LoggingObserver;
use lifesim::{BoundaryMode, ConcurrencyMode, Controller, SimulationConfig};
use std::thread;

fn main() -> Result<(), String> {
    env_logger::init();

    // Optional first argument: RNG seed for a reproducible soup
    let seed = std::env::args().nth(1).and_then(|arg| arg.parse::<u64>().ok());

    let mut config = SimulationConfig::new()
        .with_dimensions(64, 48)
        .with_boundary(BoundaryMode::Toroidal)
        .with_start_probability(35)
        .with_concurrency(ConcurrencyMode::Rayon)
        .with_initial_delay_ms(62.5);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut controller = Controller::from_config(&config).map_err(|e| e.to_string())?;
    controller.add_observer(Box::new(LoggingObserver));

    println!(
        "Running {}x{} simulation {} at {} updates/s",
        config.width,
        config.height,
        controller.run_id(),
        controller.updates_per_second()
    );

    const MAX_GENERATIONS: u64 = 5_000;
    while !controller.is_paused() && controller.stats().generation < MAX_GENERATIONS {
        let wait = controller.next_tick_in();
        thread::sleep(wait);
        controller.advance_time(wait);
    }

    let stats = controller.stats();
    println!("Stopped after {} generations", stats.generation);
    println!("  alive: {}", stats.alive);
    println!("  born:  {}", stats.born);
    println!("  died:  {}", stats.died);
    if controller.is_ended() {
        println!("  reason: no cell changed");
    } else if controller.is_repeating() {
        println!("  reason: board repeated a recent generation");
    } else {
        println!("  reason: generation limit reached");
    }

    Ok(())
}
