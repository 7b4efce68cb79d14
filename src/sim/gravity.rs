//! Tilt-to-gravity mapping
//!
//! Device-frame tilt rotates into scene-frame gravity with a deliberate axis
//! swap and sign flip. The mapping is device-orientation-specific and must
//! stay exact; the z axis never contributes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::world::World;
use crate::consts::GRAVITY_SCALE;
use crate::sensor::AccelerometerSample;

/// Maps accelerometer samples to world gravity, once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityDriver {
    /// Gravity strength in scene units/s² per g of tilt
    pub scale: f32,
}

impl Default for GravityDriver {
    fn default() -> Self {
        Self {
            scale: GRAVITY_SCALE,
        }
    }
}

impl GravityDriver {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// Map a device-frame sample to scene-frame gravity.
    #[inline]
    pub fn gravity_for(&self, sample: AccelerometerSample) -> Vec2 {
        Vec2::new(sample.y * -self.scale, sample.x * self.scale)
    }

    /// Write this frame's gravity into the world. A missing sample leaves
    /// gravity untouched: absence of data is not an error, it is a no-op.
    /// Returns the gravity in effect after the update.
    pub fn apply(&self, sample: Option<AccelerometerSample>, world: &mut World) -> Vec2 {
        if let Some(sample) = sample {
            world.set_gravity(self.gravity_for(sample));
        }
        world.gravity()
    }
}
