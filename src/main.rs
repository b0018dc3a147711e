use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

use anyhow::{Result, bail};
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use rand::{SeedableRng, rngs::StdRng};
use torus_life::{Simulation, presets};

#[derive(Debug, Parser)]
#[command(
    name = "torus-life",
    about = "Conway's Game of Life on a toroidal grid, animated as text frames"
)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 40)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 15)]
    height: usize,

    /// Number of generations to run (0 = run until interrupted)
    #[arg(long, default_value_t = 300)]
    generations: u64,

    /// Frames per second
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// RNG seed for a reproducible starting soup
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a named pattern (e.g. "glider") instead of a random soup
    #[arg(long)]
    pattern: Option<String>,

    /// Evolve rows on the rayon thread pool
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !(args.fps.is_finite() && args.fps > 0.0) {
        bail!("--fps must be a positive finite number");
    }

    let mut sim = Simulation::new(args.width, args.height)?;

    match &args.pattern {
        Some(name) => {
            let Some(pattern) = presets::by_name(name) else {
                let known: Vec<&str> =
                    presets::all_patterns().iter().map(|p| p.name).collect();
                bail!("unknown pattern {name:?}, expected one of: {}", known.join(", "));
            };
            if pattern.width > args.width || pattern.height > args.height {
                bail!(
                    "pattern {} needs at least a {}x{} grid",
                    pattern.name,
                    pattern.width,
                    pattern.height
                );
            }
            let x = (args.width - pattern.width) / 2;
            let y = (args.height - pattern.height) / 2;
            pattern.place_on(sim.grid_mut(), x, y);
            log::info!(
                "{}x{} grid, {} placed at ({x}, {y})",
                args.width,
                args.height,
                pattern.name
            );
        }
        None => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            sim.grid_mut().randomize(&mut rng);
            log::info!(
                "{}x{} grid, random soup (seed: {:?})",
                args.width,
                args.height,
                args.seed
            );
        }
    }

    let frame_interval = Duration::from_secs_f64(1.0 / args.fps);
    let mut stdout = io::stdout();
    let mut generation = 0u64;

    loop {
        if args.parallel {
            sim.advance_parallel();
        } else {
            sim.advance();
        }
        generation += 1;

        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        stdout.write_all(sim.render().as_bytes())?;
        stdout.flush()?;

        if args.generations != 0 && generation >= args.generations {
            break;
        }
        thread::sleep(frame_interval);
    }

    log::debug!("stopped after {generation} generations");
    Ok(())
}
