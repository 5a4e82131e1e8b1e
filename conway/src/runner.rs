// runner.rs - Fixed-interval tick loop that owns the simulation
//
// The loop is the only place a `Simulation` is mutated once running. Readers
// hold a `SimulationHandle`: they push commands in and read the latest
// published `Snapshot` out. Every change is published as a whole new
// snapshot, so a reader sees either the old grid or the new one.

use std::time::Duration;

use rand::Rng;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::error::GridError;
use crate::patterns;
use crate::simulation::{Simulation, Snapshot};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advance one generation now, running or not.
    Step,
    /// Fresh random grid.
    Restart,
    /// Named pattern at the configured offset.
    LoadPattern(String),
    Clear,
    Paint { x: usize, y: usize, alive: bool },
    SetRunning(bool),
    SetInterval(Duration),
    Shutdown,
}

/// UI-side end of the loop.
#[derive(Clone)]
pub struct SimulationHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
}

impl SimulationHandle {
    /// Queues a command. Returns false once the loop has stopped.
    pub fn send(&self, command: Command) -> bool {
        self.commands.send(command).is_ok()
    }

    /// Most recently published generation.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that wakes on every publish after this call.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }
}

pub struct TickLoop<R> {
    sim: Simulation,
    rng: R,
    commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<Snapshot>,
}

enum Event {
    Tick,
    Command(Option<Command>),
}

/// Wires a simulation to a fresh command queue and snapshot channel.
///
/// Nothing runs until [`TickLoop::run`] is spawned on a runtime.
pub fn channel<R>(sim: Simulation, rng: R) -> (SimulationHandle, TickLoop<R>)
where
    R: Rng + Send + 'static,
{
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(sim.snapshot());

    let handle = SimulationHandle { commands: command_tx, snapshots: snapshot_rx };
    let tick_loop = TickLoop { sim, rng, commands: command_rx, snapshots: snapshot_tx };
    (handle, tick_loop)
}

fn ticker(period: Duration) -> Interval {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

impl<R: Rng + Send + 'static> TickLoop<R> {
    /// Runs until [`Command::Shutdown`] or until every handle is dropped,
    /// then hands the simulation back.
    pub async fn run(mut self) -> Simulation {
        let mut interval = ticker(self.sim.config().tick_interval);
        log::info!(
            "tick loop started: {}x{} grid, {:?} per generation",
            self.sim.grid().size(),
            self.sim.grid().size(),
            self.sim.config().tick_interval
        );

        loop {
            let event = tokio::select! {
                _ = interval.tick() => Event::Tick,
                command = self.commands.recv() => Event::Command(command),
            };

            match event {
                Event::Tick => {
                    if !self.sim.is_running() {
                        continue;
                    }
                    self.sim.step();
                }
                Event::Command(None) | Event::Command(Some(Command::Shutdown)) => break,
                Event::Command(Some(Command::SetInterval(period))) => {
                    if period.is_zero() {
                        log::warn!("ignoring zero tick interval");
                        continue;
                    }
                    log::debug!("tick interval now {period:?}");
                    interval = ticker(period);
                }
                Event::Command(Some(command)) => {
                    log::debug!("command {command:?}");
                    if let Err(e) = self.apply(command) {
                        log::warn!("command rejected: {e}");
                        continue;
                    }
                }
            }

            self.snapshots.send_replace(self.sim.snapshot());
        }

        log::info!("tick loop stopped at generation {}", self.sim.generation());
        self.sim
    }

    fn apply(&mut self, command: Command) -> Result<(), GridError> {
        match command {
            Command::Step => {
                self.sim.step();
            }
            Command::Restart => self.sim.restart(&mut self.rng)?,
            Command::LoadPattern(name) => self.sim.load_pattern(patterns::find(&name)?)?,
            Command::Clear => self.sim.clear()?,
            Command::Paint { x, y, alive } => self.sim.paint_cell(x, y, alive)?,
            Command::SetRunning(running) => self.sim.set_running(running),
            Command::SetInterval(_) | Command::Shutdown => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::grid::Grid;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TICK: Duration = Duration::from_millis(100);

    fn blinker(running: bool) -> Simulation {
        let config = Config { grid_size: 40, tick_interval: TICK, ..Config::default() };
        let mut sim = Simulation::with_grid(config, Grid::new(40).unwrap());
        sim.load_pattern(patterns::find("Blinker").unwrap()).unwrap();
        sim.set_running(running);
        sim
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_once_per_tick_while_running() {
        let (handle, tick_loop) = channel(blinker(true), StdRng::seed_from_u64(1));
        let mut rx = handle.subscribe();
        let task = tokio::spawn(tick_loop.run());
        let start = Instant::now();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().generation, 1);
        assert!(start.elapsed() >= TICK);

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().generation, 2);
        assert!(start.elapsed() >= TICK * 2);

        assert!(handle.send(Command::Shutdown));
        let sim = task.await.unwrap();
        assert_eq!(sim.generation(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn paused_loop_only_moves_on_request() {
        let (handle, tick_loop) = channel(blinker(false), StdRng::seed_from_u64(1));
        let mut rx = handle.subscribe();
        let task = tokio::spawn(tick_loop.run());

        time::sleep(TICK * 5).await;
        assert!(!rx.has_changed().unwrap());
        assert_eq!(handle.snapshot().generation, 0);

        handle.send(Command::Step);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().generation, 1);

        handle.send(Command::SetRunning(true));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().generation, 1);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().generation, 2);

        drop(rx);
        drop(handle);
        let sim = task.await.unwrap();
        assert!(sim.generation() >= 2);
    }

    #[tokio::test(start_paused = true)]
    async fn edits_are_published_as_new_snapshots() {
        let (handle, tick_loop) = channel(blinker(false), StdRng::seed_from_u64(1));
        let mut rx = handle.subscribe();
        let task = tokio::spawn(tick_loop.run());
        let before = handle.snapshot();

        handle.send(Command::Paint { x: 0, y: 0, alive: true });
        rx.changed().await.unwrap();
        let painted = rx.borrow_and_update().clone();
        assert!(painted.grid.is_alive(0, 0));
        assert!(!before.grid.is_alive(0, 0));

        handle.send(Command::LoadPattern("glider".into()));
        rx.changed().await.unwrap();
        let loaded = rx.borrow_and_update().clone();
        assert_eq!(loaded.population, 5);
        assert_eq!(loaded.generation, 0);

        handle.send(Command::Clear);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().population, 0);

        handle.send(Command::Shutdown);
        task.await.unwrap();
        assert!(!handle.send(Command::Step));
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_commands_publish_nothing() {
        let (handle, tick_loop) = channel(blinker(false), StdRng::seed_from_u64(1));
        let mut rx = handle.subscribe();
        let task = tokio::spawn(tick_loop.run());

        handle.send(Command::Paint { x: 40, y: 3, alive: true });
        handle.send(Command::LoadPattern("no such thing".into()));
        handle.send(Command::SetInterval(Duration::ZERO));
        handle.send(Command::Step);

        rx.changed().await.unwrap();
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.generation, 1);
        assert_eq!(snapshot.population, 3);

        handle.send(Command::Shutdown);
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn interval_can_be_changed() {
        let (handle, tick_loop) = channel(blinker(true), StdRng::seed_from_u64(1));
        let mut rx = handle.subscribe();
        let task = tokio::spawn(tick_loop.run());

        let slow = Duration::from_millis(500);
        handle.send(Command::SetInterval(slow));
        let start = Instant::now();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().generation, 0);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().generation, 1);
        assert!(start.elapsed() >= slow);

        handle.send(Command::Shutdown);
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn restart_uses_the_loop_rng() {
        let config = Config { grid_size: 10, population: 1.0, ..Config::default() };
        let sim = Simulation::with_grid(config, Grid::new(10).unwrap());
        let (handle, tick_loop) = channel(sim, StdRng::seed_from_u64(1));
        let mut rx = handle.subscribe();
        let task = tokio::spawn(tick_loop.run());

        handle.send(Command::SetRunning(false));
        handle.send(Command::Restart);
        rx.changed().await.unwrap();
        // Both commands may land before the first wakeup
        while rx.borrow_and_update().population != 100 {
            rx.changed().await.unwrap();
        }

        handle.send(Command::Shutdown);
        let sim = task.await.unwrap();
        assert_eq!(sim.generation(), 0);
    }
}
