//! `odin` command-line host.
//!
//! `odin catalog` dumps the trajectory and hazard catalog. `odin run` flies a mission to
//! completion, fast-forwarded on a virtual clock by default or in real time on the game
//! loop thread with `--realtime`.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use odin_app::config::AppConfig;
use odin_app::control::MissionControl;
use odin_app::game_loop::spawn_game_loop;
use odin_app::state::LatestSnapshot;
use odin_core::catalog;
use odin_core::commands::ControlCommand;
use odin_core::enums::MissionPhase;
use odin_core::hazard::Hazard;
use odin_core::state::MissionSnapshot;
use odin_core::trajectory::Trajectory;
use odin_sim::clock::ManualClock;

#[derive(Parser)]
#[command(author, version, about = "Earth-Moon transfer mission simulator")]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the trajectory and hazard catalog as JSON
    Catalog,
    /// Fly a mission to completion
    Run(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog trajectory id
    #[arg(long)]
    trajectory: Option<String>,

    /// Simulated hours per real second (clamped to 0.1..=10)
    #[arg(long)]
    time_scale: Option<f64>,

    /// Catalog hazard id to inject before launch (repeatable)
    #[arg(long = "hazard")]
    hazards: Vec<String>,

    /// Host frames per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Mission log seed
    #[arg(long)]
    seed: Option<u64>,

    /// Run on the wall clock instead of fast-forwarding
    #[arg(long, default_value_t = false)]
    realtime: bool,

    /// Print the final snapshot as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl RunArgs {
    fn resolve_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(trajectory) = &self.trajectory {
            config.trajectory = trajectory.clone();
        }
        if let Some(scale) = self.time_scale {
            config.time_scale = scale;
        }
        if let Some(rate) = self.tick_rate {
            config.tick_rate = rate;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.hazards.extend(self.hazards.iter().cloned());
        Ok(config)
    }
}

#[derive(Serialize)]
struct CatalogDump {
    trajectories: Vec<Trajectory>,
    hazards: Vec<Hazard>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Catalog => {
            let dump = CatalogDump {
                trajectories: catalog::trajectories(),
                hazards: catalog::hazards(),
            };
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
        Command::Run(args) => {
            let config = args.resolve_config()?;
            info!(
                trajectory = %config.trajectory,
                time_scale = config.time_scale,
                hazards = config.hazards.len(),
                realtime = args.realtime,
                "mission configured"
            );
            let snapshot = if args.realtime {
                run_realtime(config)?
            } else {
                run_fast_forward(&config)?
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print_summary(&snapshot);
            }
        }
    }

    Ok(())
}

/// Fly the mission on a virtual clock, one frame per `tick_rate` step.
fn run_fast_forward(config: &AppConfig) -> anyhow::Result<MissionSnapshot> {
    let clock = ManualClock::new();
    let mut control = MissionControl::with_clock(config, clock.clone())?;

    let transitions = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&transitions);
    control.subscribe(move |state, _| {
        let mut seen = seen.borrow_mut();
        if seen.last().map(|(phase, _)| *phase) != Some(state.current_phase) {
            seen.push((state.current_phase, state.current_time));
        }
    });

    control.start();
    let frame = config.frame_duration();
    // Longest catalog mission at the slowest time scale, with headroom.
    let frame_limit = 100 * 96 * 10 * u64::from(config.tick_rate.max(1));
    let mut frames = 0u64;
    while control.engine().is_armed() {
        clock.advance(frame);
        control.tick();
        frames += 1;
        if frames > frame_limit {
            bail!("mission did not complete within {frames} frames");
        }
    }

    for (phase, hours) in transitions.borrow().iter() {
        print_transition(*phase, *hours);
    }
    Ok(control.snapshot())
}

/// Fly the mission on the game loop thread against the wall clock.
fn run_realtime(config: AppConfig) -> anyhow::Result<MissionSnapshot> {
    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let latest = LatestSnapshot::default();
    let handle = spawn_game_loop(config, snapshot_tx, latest)?;
    handle.send(ControlCommand::Start)?;

    let mut phase = None;
    let finished = loop {
        let snapshot = match snapshot_rx.recv_timeout(Duration::from_secs(5)) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                // The loop may have ended with a config error; report that first.
                handle.shutdown()?;
                return Err(err).context("game loop stopped publishing");
            }
        };
        if phase != Some(snapshot.state.current_phase) {
            phase = Some(snapshot.state.current_phase);
            print_transition(snapshot.state.current_phase, snapshot.state.current_time);
        }
        if snapshot.state.current_phase.is_terminal() {
            break snapshot;
        }
    };

    handle.shutdown()?;
    Ok(finished)
}

fn print_transition(phase: MissionPhase, hours: f64) {
    eprintln!("[{}] {}", odin_core::events::format_mission_time(hours), phase);
}

fn print_summary(snapshot: &MissionSnapshot) {
    let state = &snapshot.state;
    let metrics = &snapshot.metrics;
    println!("Trajectory:       {}", state.trajectory.name);
    println!("Phase:            {}", state.current_phase);
    println!("Mission time:     {:.1} h", state.current_time);
    println!("Fuel remaining:   {:.1} %", state.fuel_remaining.percent());
    println!("Delta-V:          {:.0} m/s", metrics.delta_v);
    println!("Radiation:        {:.1} %", metrics.radiation_exposure);
    println!(
        "Status:           {:?} / {:?}",
        metrics.systems_status, metrics.hazard_level
    );
    let critical = snapshot.crew.critical();
    if !critical.is_empty() {
        println!("Critical crew resources: {}", critical.join(", "));
    }
    for rec in &snapshot.recommendations {
        println!("Advisory [{:?}] {}: {}", rec.priority, rec.title, rec.description);
    }
    println!();
    for entry in &snapshot.log {
        println!(
            "{} {:<18} {}",
            entry.timestamp,
            entry.source.label(),
            entry.message
        );
    }
}
