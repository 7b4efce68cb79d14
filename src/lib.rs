//! Gyro Maze - a tilt-controlled maze-ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, physics world, contact resolution, reset sequencing)
//! - `sensor`: Accelerometer samples and the cross-thread sample slot
//! - `level`: Static maze geometry and JSON level loading

pub mod level;
pub mod sensor;
pub mod sim;

pub use level::Level;
pub use sensor::{AccelerometerSample, AccelerometerSource, SampleSlot};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Tilt-to-gravity scale (scene units/s² per g of tilt)
    pub const GRAVITY_SCALE: f32 = 98.0;

    /// Ball defaults
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(555.0, -372.0);
    pub const PLAYER_RADIUS: f32 = 40.0;
    /// Real steel ball density
    pub const PLAYER_DENSITY: f32 = 7.0;
    pub const PLAYER_LINEAR_DAMPING: f32 = 0.4;
    pub const PLAYER_RESTITUTION: f32 = 0.3;

    /// Reset sequence: slide to the contact point, then shrink out
    pub const RESET_MOVE_SECS: f32 = 0.2;
    pub const RESET_SHRINK_SECS: f32 = 0.24;
    /// Scale the ball shrinks to before despawn
    pub const RESET_END_SCALE: f32 = 1.0e-4;
}
