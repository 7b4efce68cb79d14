//! Fixed timestep simulation tick
//!
//! Per tick: tilt drives gravity, the world steps, contacts resolve, and a
//! reset in flight advances. The tick is pure given its input sequence.

use super::contact;
use super::state::{GamePhase, GameSession};
use crate::sensor::AccelerometerSample;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest accelerometer sample, if the sensor has delivered one
    pub sample: Option<AccelerometerSample>,
}

/// Advance the session by one fixed timestep.
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) {
    session.time_ticks += 1;

    // Tilt to gravity; a missing sample leaves gravity unchanged
    session.gravity.apply(input.sample, &mut session.world);

    session.world.step(dt);

    // First terminal outcome wins; the rest of the batch no-ops against the
    // reset already in flight
    for event in session.world.drain_events() {
        contact::resolve(session, &event);
    }

    let reset_finished = match &mut session.phase {
        GamePhase::Resetting(seq) => seq.advance(dt),
        GamePhase::Playing => false,
    };
    if reset_finished {
        session.finish_reset();
    }
}
