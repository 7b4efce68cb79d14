//! Body categories and spawn definitions
//!
//! Every body carries exactly one `BodyKind`; the kind's category bit drives
//! both contact filtering and outcome classification. No name strings.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Unique body identifier. Never reused within a session: a respawned ball
/// gets a fresh id, so a stale contact event is detectable by id mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Body classification, one stable category bit per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    /// The controlled steel ball
    Player,
    /// Maze wall, physically blocks the ball
    Wall,
    /// Hole trap, sensed but never collided
    Hole,
    /// Finish zone, sensed but never collided
    Finish,
}

impl BodyKind {
    /// Category bit for mask filtering
    #[inline]
    pub fn category(self) -> u32 {
        1 << self as u32
    }
}

/// Collision shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { center: Vec2, radius: f32 },
    /// Axis-aligned rectangle
    Rect { center: Vec2, half_extents: Vec2 },
}

/// Spawn-time ball parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerDef {
    pub position: Vec2,
    pub radius: f32,
    pub density: f32,
    pub linear_damping: f32,
    pub restitution: f32,
    pub allows_rotation: bool,
    pub category: u32,
    /// Which categories raise contact events
    pub contact_test_mask: u32,
    /// Which categories physically block the ball
    pub collision_mask: u32,
}

impl PlayerDef {
    /// The steel ball with its standard physics parameters
    pub fn steel_ball(position: Vec2) -> Self {
        Self {
            position,
            radius: PLAYER_RADIUS,
            density: PLAYER_DENSITY,
            linear_damping: PLAYER_LINEAR_DAMPING,
            restitution: PLAYER_RESTITUTION,
            allows_rotation: false,
            category: BodyKind::Player.category(),
            contact_test_mask: BodyKind::Wall.category()
                | BodyKind::Hole.category()
                | BodyKind::Finish.category(),
            // Holes and the finish zone are sensed, not resisted: the ball
            // rolls over them and only bounces off walls.
            collision_mask: BodyKind::Wall.category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_bits_are_distinct() {
        let kinds = [
            BodyKind::Player,
            BodyKind::Wall,
            BodyKind::Hole,
            BodyKind::Finish,
        ];
        let mut seen = 0u32;
        for kind in kinds {
            let bit = kind.category();
            assert_eq!(bit.count_ones(), 1);
            assert_eq!(seen & bit, 0, "category bit reused by {kind:?}");
            seen |= bit;
        }
    }

    #[test]
    fn test_steel_ball_masks() {
        let def = PlayerDef::steel_ball(PLAYER_SPAWN);

        // Sensed: walls, holes, finish
        assert_ne!(def.contact_test_mask & BodyKind::Wall.category(), 0);
        assert_ne!(def.contact_test_mask & BodyKind::Hole.category(), 0);
        assert_ne!(def.contact_test_mask & BodyKind::Finish.category(), 0);

        // Blocked: walls only; the ball must pass through holes and finish
        assert_ne!(def.collision_mask & BodyKind::Wall.category(), 0);
        assert_eq!(def.collision_mask & BodyKind::Hole.category(), 0);
        assert_eq!(def.collision_mask & BodyKind::Finish.category(), 0);
    }

    #[test]
    fn test_steel_ball_parameters() {
        let def = PlayerDef::steel_ball(PLAYER_SPAWN);
        assert_eq!(def.position, PLAYER_SPAWN);
        assert_eq!(def.radius, 40.0);
        assert_eq!(def.density, 7.0);
        assert_eq!(def.linear_damping, 0.4);
        assert_eq!(def.restitution, 0.3);
        assert!(!def.allows_rotation);
    }
}
