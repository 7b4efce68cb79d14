//! Reset sequencing
//!
//! Trap and finish contacts run the same scripted exit: the ball slides to
//! the contact point, shrinks out, and a fresh ball spawns. Modeled as an
//! explicit tick-driven state machine so progress and the one-in-flight
//! invariant are observable without real animation timing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::contact::ContactOutcome;
use crate::consts::{RESET_END_SCALE, RESET_MOVE_SECS, RESET_SHRINK_SECS};

/// Step of the sequence currently running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum ResetStep {
    /// Slide from the contact-time ball position to the contact point
    MoveToContact,
    /// Scale down to near-zero before despawn
    ShrinkOut,
    Done,
}

/// A reset animation in flight. The ball body is already out of the world;
/// `pos` and `scale` describe the shrinking visual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResetSequence {
    /// Outcome that triggered the reset. Trap and Win animate identically;
    /// this is where divergent win/lose behavior attaches.
    pub outcome: ContactOutcome,
    from: Vec2,
    target: Vec2,
    step: ResetStep,
    /// Seconds elapsed within the current step
    elapsed: f32,
    /// Visual position of the shrinking ball
    pub pos: Vec2,
    /// Visual scale of the shrinking ball
    pub scale: f32,
}

impl ResetSequence {
    pub fn begin(outcome: ContactOutcome, from: Vec2, target: Vec2) -> Self {
        Self {
            outcome,
            from,
            target,
            step: ResetStep::MoveToContact,
            elapsed: 0.0,
            pos: from,
            scale: 1.0,
        }
    }

    /// Advance by one timestep. Returns true once the sequence has finished
    /// and the ball should respawn.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        match self.step {
            ResetStep::MoveToContact => {
                let t = (self.elapsed / RESET_MOVE_SECS).min(1.0);
                self.pos = self.from.lerp(self.target, t);
                if self.elapsed >= RESET_MOVE_SECS {
                    self.step = ResetStep::ShrinkOut;
                    self.elapsed = 0.0;
                }
                false
            }
            ResetStep::ShrinkOut => {
                let t = (self.elapsed / RESET_SHRINK_SECS).min(1.0);
                self.scale = 1.0 + (RESET_END_SCALE - 1.0) * t;
                if self.elapsed >= RESET_SHRINK_SECS {
                    self.step = ResetStep::Done;
                }
                self.step == ResetStep::Done
            }
            ResetStep::Done => true,
        }
    }

    pub fn is_done(&self) -> bool {
        self.step == ResetStep::Done
    }
}
