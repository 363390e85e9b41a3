//! Headless runner: advance a universe for a fixed number of ticks and print
//! where every body ended up.

use anyhow::Result;
use clap::Parser;
use orrery::cli::RunArgs;
use orrery_physics::Universe;
use orrery_storage::UniverseSnapshot;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Run the N-body simulation without a window")]
struct Args {
    #[command(flatten)]
    run: RunArgs,

    /// Ticks to simulate
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Print a progress line every N ticks (0 = never)
    #[arg(long, default_value_t = 0)]
    report_every: u64,

    /// Write the final state as a snapshot
    #[arg(long)]
    save: Option<PathBuf>,
}

fn print_table(universe: &Universe, tick: u64) {
    println!();
    println!("State after tick {tick}:");
    println!(
        "  {:<12} {:>7} {:>10} {:>10} {:>9} {:>9}",
        "name", "mass", "x", "y", "vx", "vy"
    );
    for body in universe.bodies() {
        println!(
            "  {:<12} {:>7.1} {:>10.3} {:>10.3} {:>9.4} {:>9.4}",
            body.name,
            body.mass(),
            body.position[0],
            body.position[1],
            body.velocity[0],
            body.velocity[1],
        );
    }
    let p = universe.total_momentum();
    println!(
        "  momentum: ({:.4}, {:.4})  kinetic energy: {:.4}",
        p[0],
        p[1],
        universe.kinetic_energy()
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.run.sim_config();
    let (mut universe, start) = args.run.build_universe(&config)?;

    eprintln!(
        "Simulating {} bodies for {} ticks (from tick {})...",
        universe.len(),
        args.ticks,
        start
    );

    for t in 1..=args.ticks {
        if let Err(e) = universe.tick() {
            // The faulted tick changed nothing, so this is the last good state
            print_table(&universe, start + t - 1);
            anyhow::bail!("tick {} failed: {e}", start + t);
        }
        if args.report_every > 0 && t % args.report_every == 0 {
            let p = universe.total_momentum();
            eprintln!(
                "  tick {}: momentum ({:.4}, {:.4}), KE {:.4}",
                start + t,
                p[0],
                p[1],
                universe.kinetic_energy()
            );
        }
    }

    let end = start + args.ticks;
    print_table(&universe, end);

    if let Some(path) = args.save {
        let snapshot = UniverseSnapshot {
            ticks: end,
            universe,
        };
        orrery_storage::save_snapshot(&snapshot, &path).map_err(anyhow::Error::msg)?;
        eprintln!("Saved snapshot to {}", path.display());
    }

    Ok(())
}
