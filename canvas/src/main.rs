//! Game of Life viewer.
//!
//! The simulation advances on a tokio task at a fixed interval while egui
//! repaints the latest published generation every frame.

use std::time::Duration;

use clap::Parser;
use conway::config::{self, Config};
use conway::{Grid, Simulation, patterns, runner};
use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod app;
mod painter;

use app::CanvasApp;

// Room for the control rows above the board
const CONTROLS_HEIGHT: f32 = 150.0;

#[derive(Parser)]
#[command(name = "canvas")]
#[command(version)]
#[command(about = "Conway's Game of Life on an egui canvas")]
struct Cli {
    /// Cells per side
    #[arg(long, default_value_t = config::GRID_SIZE)]
    size: usize,

    /// Chance each cell starts alive on a random grid (0.0 - 1.0)
    #[arg(long, default_value_t = config::POPULATION)]
    population: f64,

    /// Pixels per cell
    #[arg(long, default_value_t = config::SCALE)]
    scale: f32,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// Start from a named pattern instead of a random grid
    #[arg(long)]
    pattern: Option<String>,

    /// Pause once a generation repeats a recent one
    #[arg(long)]
    pause_on_cycle: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            grid_size: self.size,
            population: self.population,
            scale: self.scale,
            tick_interval: Duration::from_millis(self.tick_ms),
            pause_on_cycle: self.pause_on_cycle,
            ..Config::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate()?;

    log::info!("Grid size: {0}x{0}", config.grid_size);
    log::info!("Tick interval: {:?}", config.tick_interval);

    let mut rng = StdRng::from_os_rng();
    let sim = match &cli.pattern {
        Some(name) => {
            let mut sim = Simulation::with_grid(config.clone(), Grid::new(config.grid_size)?);
            sim.load_pattern(patterns::find(name)?)?;
            sim
        }
        None => Simulation::new(config.clone(), &mut rng)?,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("tick-loop")
        .enable_time()
        .build()?;
    let (handle, tick_loop) = runner::channel(sim, rng);
    runtime.spawn(tick_loop.run());

    let side = config.canvas_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + 40.0, side + CONTROLS_HEIGHT]),
        ..Default::default()
    };

    let app = CanvasApp::new(handle, config, runtime);
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_config() {
        let cli = Cli::parse_from(["canvas"]);
        assert_eq!(cli.config(), Config::default());
        assert!(cli.pattern.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "canvas", "--size", "64", "--scale", "8", "--tick-ms", "250",
            "--pattern", "glider", "--pause-on-cycle",
        ]);
        let config = cli.config();
        assert_eq!(config.grid_size, 64);
        assert_eq!(config.scale, 8.0);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert!(config.pause_on_cycle);
        assert_eq!(cli.pattern.as_deref(), Some("glider"));
        assert_eq!(config.canvas_size(), 512.0);
    }
}
