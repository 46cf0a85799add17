//! Game loop thread: ticks mission control at a fixed frame rate and publishes snapshots.
//!
//! Mission control is created inside this thread because the engine's observers are
//! not `Send`. Commands arrive via `mpsc` channel. Snapshots go out on a second channel
//! and are stored in shared state for synchronous polling.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc;
use std::time::Instant;

use tracing::{debug, warn};

use odin_core::state::MissionSnapshot;

use crate::config::AppConfig;
use crate::control::MissionControl;
use crate::error::AppError;
use crate::state::{LatestSnapshot, LoopCommand, LoopHandle};

/// Spawns the game loop in a new thread.
///
/// The config is validated on the thread; an invalid one ends the loop immediately and
/// the error comes back from [`LoopHandle::shutdown`].
pub fn spawn_game_loop(
    config: AppConfig,
    snapshot_tx: mpsc::Sender<MissionSnapshot>,
    latest: LatestSnapshot,
) -> Result<LoopHandle, AppError> {
    let (command_tx, command_rx) = mpsc::channel::<LoopCommand>();

    let thread = std::thread::Builder::new()
        .name("odin-game-loop".into())
        .spawn(move || run_game_loop(&config, &command_rx, &snapshot_tx, &latest))
        .map_err(AppError::Spawn)?;

    Ok(LoopHandle { command_tx, thread })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: &AppConfig,
    command_rx: &mpsc::Receiver<LoopCommand>,
    snapshot_tx: &mpsc::Sender<MissionSnapshot>,
    latest: &LatestSnapshot,
) -> Result<(), AppError> {
    let mut control = MissionControl::new(config)?;

    // Set by every engine notification; one snapshot is published per dirty frame.
    let dirty = Rc::new(Cell::new(true));
    let flag = Rc::clone(&dirty);
    control.subscribe(move |_, _| flag.set(true));

    let frame = config.frame_duration();
    let mut next_frame = Instant::now();
    debug!(tick_rate = config.tick_rate, "game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(LoopCommand::Control(command)) => {
                    if let Err(err) = control.apply(command) {
                        warn!(%err, "command rejected");
                    }
                }
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("game loop stopping");
                    return Ok(());
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Step the mission (a no-op unless running)
        control.tick();

        // 3. Publish
        if dirty.replace(false) {
            let snapshot = control.snapshot();
            if let Ok(mut lock) = latest.lock() {
                *lock = Some(snapshot.clone());
            }
            // Nobody listening is not an error; polling still works.
            let _ = snapshot_tx.send(snapshot);
        }

        // 4. Sleep until next frame
        next_frame += frame;
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
        } else if now - next_frame > frame * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_frame = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use odin_core::commands::ControlCommand;
    use odin_core::enums::MissionPhase;

    use super::*;

    fn fast_config() -> AppConfig {
        AppConfig {
            time_scale: 10.0,
            tick_rate: 200,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_publishes_initial_snapshot_and_shuts_down() {
        let (tx, rx) = mpsc::channel();
        let latest = LatestSnapshot::default();
        let handle = spawn_game_loop(fast_config(), tx, Arc::clone(&latest)).unwrap();

        let first = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first.state.current_phase, MissionPhase::PreLaunch);
        assert!(latest.lock().unwrap().is_some());

        handle.shutdown().unwrap();
    }

    #[test]
    fn test_runs_mission_to_completion() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_game_loop(fast_config(), tx, LatestSnapshot::default()).unwrap();
        handle.send(ControlCommand::Start).unwrap();

        // 72 h at 10 h/s is about 7.2 s of wall time.
        let deadline = Instant::now() + Duration::from_secs(30);
        let mut finished = None;
        while Instant::now() < deadline {
            let snapshot = rx.recv_timeout(Duration::from_secs(5)).unwrap();
            if snapshot.state.current_phase.is_terminal() {
                finished = Some(snapshot);
                break;
            }
        }
        handle.shutdown().unwrap();

        let snapshot = finished.expect("mission should complete");
        assert!(snapshot.state.is_paused);
        assert_eq!(snapshot.state.current_time, 72.0);
        assert_eq!(snapshot.log[0].message, "Mission simulation started. All systems nominal.");
    }

    #[test]
    fn test_invalid_config_surfaces_on_shutdown() {
        let (tx, _rx) = mpsc::channel();
        let config = AppConfig {
            trajectory: "nowhere".into(),
            ..AppConfig::default()
        };
        let handle = spawn_game_loop(config, tx, LatestSnapshot::default()).unwrap();
        assert!(matches!(
            handle.shutdown(),
            Err(AppError::UnknownTrajectory(_))
        ));
    }

    #[test]
    fn test_loop_exits_when_host_drops_handle_channel() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_game_loop(fast_config(), tx, LatestSnapshot::default()).unwrap();
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let LoopHandle { command_tx, thread } = handle;
        drop(command_tx);
        assert!(thread.join().unwrap().is_ok());
    }
}
