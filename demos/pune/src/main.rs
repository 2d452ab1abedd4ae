//! pune: scripted walk through the binfleet dispatch engine.
//!
//! Seeds ten bins over ten Pune neighbourhoods, lets them fill for a few
//! rounds, and sends a truck after each round until nothing is left to
//! collect.  Set `RUST_LOG=debug` to watch queue rebuilds and collections.

use anyhow::Result;
use log::info;

use bf_core::{Bin, DispatchConfig};
use bf_dispatch::{DispatchObserver, DispatchOutcome, EngineBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:         u64   = 2024;
const FILL_ROUNDS:  usize = 4;
const MAX_DISPATCH: usize = 20;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints an alert for every bin that turns urgent.
#[derive(Default)]
struct Alerts {
    raised: usize,
}

impl DispatchObserver for Alerts {
    fn on_urgent_entered(&mut self, bin: &Bin) {
        self.raised += 1;
        println!("  ! ALERT: {bin} needs immediate collection");
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_bins<'a>(bins: impl Iterator<Item = &'a Bin>) {
    println!(
        "{:<6} {:<16} {:>9} {:>6} {:>9} {:<7}",
        "Bin", "Area", "Dist(km)", "Fill", "Priority", "Status"
    );
    println!("{}", "-".repeat(58));
    for bin in bins {
        println!(
            "{:<6} {:<16} {:>9.2} {:>5}% {:>9} {:<7}",
            bin.id().0,
            bin.area(),
            bin.distance_km(),
            bin.fill_level(),
            bin.priority(),
            bin.band().as_str(),
        );
    }
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== pune: binfleet dispatch demo ===");
    println!("Seed: {SEED}  |  Fill rounds: {FILL_ROUNDS}");
    println!();

    // 1. Engine with default truck speed and loading time.
    let config = DispatchConfig { seed: SEED, ..Default::default() };
    let mut engine = EngineBuilder::new(config)
        .observer(Alerts::default())
        .build()?;

    // 2. Reference fleet.
    let ids = engine.reinitialize()?;
    info!("fleet ready: {} bins", ids.len());
    print_bins(engine.bins());
    println!("{}", engine.status_counts());
    println!();

    // 3. Fill, then dispatch one truck per round.
    for round in 1..=FILL_ROUNDS {
        println!("── Round {round} ──");
        let report = engine.advance_fill_levels()?;
        println!("  {} bins filled further", report.updated);

        match engine.simulate_dispatch() {
            DispatchOutcome::Dispatched(summary) => println!("  {summary}"),
            DispatchOutcome::NothingToDispatch => println!("  no bins to collect"),
            DispatchOutcome::TargetUnavailable(id) => {
                println!("  target bin {id} needed no collection")
            }
        }
        println!("  {}", engine.status_counts());
    }
    println!();

    // 4. Drain: keep dispatching until a truck finds nothing to do.
    let mut trips = 0;
    let mut minutes = 0.0;
    while trips < MAX_DISPATCH {
        let DispatchOutcome::Dispatched(summary) = engine.simulate_dispatch() else {
            break;
        };
        trips += 1;
        minutes += summary.total_minutes;
        println!("{summary}");
    }

    println!();
    println!("Drain complete: {trips} trips, {minutes:.1} truck-minutes");
    println!("Urgent alerts raised: {}", engine.observer().raised);
    println!();
    print_bins(engine.bins());

    Ok(())
}
