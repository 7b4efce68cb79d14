//! Gyro Maze entry point
//!
//! Headless demo run: a scripted tilt source stands in for the device
//! accelerometer and publishes into the sample slot from its own thread,
//! the same last-sample-wins handoff a real sensor driver would use.

use std::thread;
use std::time::Duration;

use gyro_maze::Level;
use gyro_maze::consts::SIM_DT;
use gyro_maze::sensor::{AccelerometerSource, SampleSlot, ScriptedTilt};
use gyro_maze::sim::{GameEvent, GameSession, TickInput, tick};

/// Demo run length in seconds
const RUN_SECS: u32 = 30;
/// Sensor delivery cadence, independent of the 120 Hz frame loop
const SENSOR_HZ: u32 = 60;

fn main() {
    env_logger::init();

    let mut level_path: Option<String> = None;
    let mut seed: u64 = 7;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(seed);
            }
            _ => level_path = Some(arg),
        }
    }

    let level = match &level_path {
        Some(path) => {
            let json = match std::fs::read_to_string(path) {
                Ok(json) => json,
                Err(err) => {
                    log::error!("cannot read level file {path}: {err}");
                    std::process::exit(1);
                }
            };
            match Level::from_json(&json) {
                Ok(level) => level,
                Err(err) => {
                    log::error!("cannot load level {path}: {err}");
                    std::process::exit(1);
                }
            }
        }
        None => Level::demo(),
    };

    log::info!("Gyro Maze starting: level '{}', seed {seed}", level.name);

    // Sensor thread: publishes tilt on its own cadence
    let slot = SampleSlot::new();
    let publisher = slot.clone();
    let sensor = thread::spawn(move || {
        let mut script = ScriptedTilt::new(seed);
        let period = Duration::from_micros(1_000_000 / SENSOR_HZ as u64);
        for _ in 0..RUN_SECS * SENSOR_HZ {
            publisher.publish(script.next_sample());
            thread::sleep(period);
        }
    });

    let mut session = GameSession::new(&level);
    let tick_period = Duration::from_secs_f32(SIM_DT);
    for _ in 0..RUN_SECS * 120 {
        let input = TickInput {
            sample: slot.latest_sample(),
        };
        tick(&mut session, &input, SIM_DT);

        for event in session.drain_events() {
            match event {
                GameEvent::WallTouch { point } => log::debug!("wall touch at {point}"),
                GameEvent::FellInHole { point } => log::info!("fell into the hole at {point}"),
                GameEvent::ReachedFinish { point } => log::info!("reached the finish at {point}"),
                GameEvent::PlayerRespawned { position } => log::info!("fresh ball at {position}"),
            }
        }

        thread::sleep(tick_period);
    }

    if sensor.join().is_err() {
        log::warn!("sensor thread panicked");
    }
    log::info!(
        "run over: {} finishes, {} falls, {} wall touches over {} ticks",
        session.stats.finishes,
        session.stats.falls,
        session.stats.wall_touches,
        session.time_ticks
    );
}
