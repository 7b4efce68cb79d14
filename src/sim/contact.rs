//! Contact classification and dispatch
//!
//! Only the ball raises contact events, but nothing here assumes that: a
//! malformed or stale event degrades to a no-op rather than an error.

use log::debug;
use serde::{Deserialize, Serialize};

use super::body::BodyKind;
use super::state::{GamePhase, GameSession};
use super::world::ContactEvent;

/// Outcome of classifying the non-player side of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactOutcome {
    /// Hole trap: the run resets
    Trap,
    /// Finish zone: the run completes, then resets
    Win,
    /// Wall graze: feedback hook only, no state change
    WallTouch,
}

/// Classify a contacted body by its kind.
#[inline]
pub fn classify(kind: BodyKind) -> ContactOutcome {
    match kind {
        BodyKind::Hole => ContactOutcome::Trap,
        BodyKind::Finish => ContactOutcome::Win,
        BodyKind::Player | BodyKind::Wall => ContactOutcome::WallTouch,
    }
}

/// Resolve one contact event against the session.
pub fn resolve(session: &mut GameSession, event: &ContactEvent) {
    // Identify the ball side; an event that does not involve the current
    // ball (stale id, or two statics) is dropped.
    let Some(player_id) = session.player_id() else {
        return;
    };
    let other = if event.a == player_id {
        event.b
    } else if event.b == player_id {
        event.a
    } else {
        debug!(
            "contact ({:?}, {:?}) without the current ball, ignored",
            event.a, event.b
        );
        return;
    };

    // An unknown id classifies as a wall graze, not an error
    let outcome = match session.world.kind_of(other) {
        Some(kind) => classify(kind),
        None => {
            debug!("contact with unknown body {other:?} treated as wall");
            ContactOutcome::WallTouch
        }
    };

    match outcome {
        ContactOutcome::WallTouch => session.on_wall_touch(event.point),
        ContactOutcome::Trap | ContactOutcome::Win => {
            if matches!(session.phase, GamePhase::Resetting(_)) {
                // A reset is already in flight; later terminal contacts
                // from the same batch are dropped.
                return;
            }
            session.begin_reset(outcome, event.point);
        }
    }
}
