//! Minimal deterministic 2D physics world
//!
//! The default physics collaborator: global gravity, a single dynamic circle
//! (the ball), static maze geometry, and bitmask-filtered collision and
//! contact detection. Contact events fire once per new overlap, matching the
//! begin-contact semantics of the engines this stands in for.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{BodyId, BodyKind, PlayerDef, Shape};

/// Separation slack for contact bookkeeping. A ball resting against a wall
/// stays "touching" across the positional correction instead of re-firing a
/// begin event every frame.
const CONTACT_SKIN: f32 = 0.5;

/// A contact raised on begin-of-overlap, consumed once and discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    pub a: BodyId,
    pub b: BodyId,
    /// Surface point for wall hits, zone center for hole/finish overlaps
    pub point: Vec2,
}

/// The single dynamic body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    pub id: BodyId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub density: f32,
    pub linear_damping: f32,
    pub restitution: f32,
    pub allows_rotation: bool,
    pub category: u32,
    pub contact_test_mask: u32,
    pub collision_mask: u32,
}

/// An immovable body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticBody {
    pub id: BodyId,
    pub kind: BodyKind,
    pub shape: Shape,
}

/// Circle-vs-shape overlap info
#[derive(Debug, Clone, Copy)]
struct Overlap {
    /// Surface point closest to the ball center
    point: Vec2,
    /// Normal pointing from the surface toward the ball center
    normal: Vec2,
    penetration: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    gravity: Vec2,
    statics: Vec<StaticBody>,
    player: Option<PlayerBody>,
    /// Static ids currently overlapping the ball (begin-contact dedup)
    touching: Vec<BodyId>,
    #[serde(skip)]
    events: Vec<ContactEvent>,
    next_id: u32,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            gravity: Vec2::ZERO,
            statics: Vec::new(),
            player: None,
            touching: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    fn alloc_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    /// The live ball, if one is spawned
    pub fn player(&self) -> Option<&PlayerBody> {
        self.player.as_ref()
    }

    /// Spawn the ball. At most one may be live at a time.
    pub fn spawn_player(&mut self, def: PlayerDef) -> BodyId {
        debug_assert!(self.player.is_none(), "exactly one ball may be live");
        let id = self.alloc_id();
        self.touching.clear();
        self.player = Some(PlayerBody {
            id,
            pos: def.position,
            vel: Vec2::ZERO,
            radius: def.radius,
            density: def.density,
            linear_damping: def.linear_damping,
            restitution: def.restitution,
            allows_rotation: def.allows_rotation,
            category: def.category,
            contact_test_mask: def.contact_test_mask,
            collision_mask: def.collision_mask,
        });
        id
    }

    /// Remove the ball from simulation. A world without a dynamic body steps
    /// but produces no contacts.
    pub fn remove_player(&mut self) -> Option<PlayerBody> {
        self.touching.clear();
        self.player.take()
    }

    pub fn add_static(&mut self, kind: BodyKind, shape: Shape) -> BodyId {
        let id = self.alloc_id();
        self.statics.push(StaticBody { id, kind, shape });
        id
    }

    pub fn statics(&self) -> &[StaticBody] {
        &self.statics
    }

    /// Classification lookup; None for ids no longer in the world
    pub fn kind_of(&self, id: BodyId) -> Option<BodyKind> {
        if self.player.as_ref().is_some_and(|p| p.id == id) {
            return Some(BodyKind::Player);
        }
        self.statics.iter().find(|s| s.id == id).map(|s| s.kind)
    }

    /// Advance the world by one fixed timestep: integrate the ball, resolve
    /// wall collisions, and emit begin-of-overlap contacts. Statics are
    /// visited in insertion order for determinism.
    pub fn step(&mut self, dt: f32) {
        let Some(player) = self.player.as_mut() else {
            return;
        };

        // Semi-implicit Euler with linear damping
        player.vel += self.gravity * dt;
        player.vel *= (1.0 - player.linear_damping * dt).max(0.0);
        player.pos += player.vel * dt;

        let mut now_touching: Vec<BodyId> = Vec::new();
        for body in &self.statics {
            let category = body.kind.category();
            let collides = player.collision_mask & category != 0;
            let contact_tested = player.contact_test_mask & category != 0;
            if !collides && !contact_tested {
                continue;
            }

            let Some(overlap) =
                circle_overlap(player.pos, player.radius + CONTACT_SKIN, &body.shape)
            else {
                continue;
            };
            // Penetration beyond the skin means real geometric overlap
            let geometric = overlap.penetration - CONTACT_SKIN;

            if collides && geometric > 0.0 {
                player.pos += overlap.normal * geometric;
                let vn = player.vel.dot(overlap.normal);
                if vn < 0.0 {
                    player.vel -= (1.0 + player.restitution) * vn * overlap.normal;
                }
            }

            if contact_tested {
                now_touching.push(body.id);
                if !self.touching.contains(&body.id) {
                    let point = match body.shape {
                        Shape::Circle { center, .. } => center,
                        Shape::Rect { .. } => overlap.point,
                    };
                    self.events.push(ContactEvent {
                        a: player.id,
                        b: body.id,
                        point,
                    });
                }
            }
        }
        self.touching = now_touching;
    }

    /// Take the contacts raised since the last drain
    pub fn drain_events(&mut self) -> Vec<ContactEvent> {
        std::mem::take(&mut self.events)
    }
}

fn circle_overlap(pos: Vec2, radius: f32, shape: &Shape) -> Option<Overlap> {
    match *shape {
        Shape::Circle { center, radius: r } => {
            let delta = pos - center;
            let dist = delta.length();
            if dist >= radius + r {
                return None;
            }
            let normal = if dist > 1.0e-6 { delta / dist } else { Vec2::Y };
            Some(Overlap {
                point: center + normal * r,
                normal,
                penetration: radius + r - dist,
            })
        }
        Shape::Rect {
            center,
            half_extents,
        } => {
            let delta = pos - center;
            let closest = center + delta.clamp(-half_extents, half_extents);
            let to_ball = pos - closest;
            let dist = to_ball.length();
            if dist > 1.0e-6 {
                if dist >= radius {
                    return None;
                }
                Some(Overlap {
                    point: closest,
                    normal: to_ball / dist,
                    penetration: radius - dist,
                })
            } else {
                // Ball center inside the rect: push out along the shallow axis
                let overlap_x = half_extents.x - delta.x.abs();
                let overlap_y = half_extents.y - delta.y.abs();
                let (normal, extra) = if overlap_x < overlap_y {
                    let n = if delta.x >= 0.0 { Vec2::X } else { -Vec2::X };
                    (n, overlap_x)
                } else {
                    let n = if delta.y >= 0.0 { Vec2::Y } else { -Vec2::Y };
                    (n, overlap_y)
                };
                Some(Overlap {
                    point: closest,
                    normal,
                    penetration: radius + extra,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PLAYER_SPAWN, SIM_DT};

    fn ball_at(world: &mut World, pos: Vec2) -> BodyId {
        world.spawn_player(PlayerDef::steel_ball(pos))
    }

    #[test]
    fn test_ball_falls_under_gravity() {
        let mut world = World::new();
        ball_at(&mut world, Vec2::ZERO);
        world.set_gravity(Vec2::new(0.0, -98.0));

        for _ in 0..120 {
            world.step(SIM_DT);
        }

        let player = world.player().expect("ball should be live");
        assert!(player.pos.y < -10.0, "ball did not fall: {}", player.pos);
        assert!(player.vel.y < 0.0);
    }

    #[test]
    fn test_step_without_ball_is_noop() {
        let mut world = World::new();
        world.add_static(
            BodyKind::Wall,
            Shape::Rect {
                center: Vec2::ZERO,
                half_extents: Vec2::new(100.0, 10.0),
            },
        );
        world.set_gravity(Vec2::new(0.0, -98.0));
        world.step(SIM_DT);
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn test_wall_blocks_and_reflects() {
        let mut world = World::new();
        // Floor below the ball
        world.add_static(
            BodyKind::Wall,
            Shape::Rect {
                center: Vec2::new(0.0, -100.0),
                half_extents: Vec2::new(500.0, 10.0),
            },
        );
        ball_at(&mut world, Vec2::new(0.0, 0.0));
        world.set_gravity(Vec2::new(0.0, -200.0));

        let mut bounced = false;
        for _ in 0..600 {
            world.step(SIM_DT);
            let player = world.player().expect("ball should be live");
            // Never allowed past the floor surface
            assert!(
                player.pos.y >= -90.0 + player.radius - CONTACT_SKIN,
                "ball tunneled to {}",
                player.pos
            );
            if player.vel.y > 0.0 {
                bounced = true;
            }
        }
        assert!(bounced, "restitution should reflect some upward velocity");
    }

    #[test]
    fn test_wall_contact_fires_once_while_touching() {
        let mut world = World::new();
        let wall = world.add_static(
            BodyKind::Wall,
            Shape::Rect {
                center: Vec2::new(0.0, -100.0),
                half_extents: Vec2::new(500.0, 10.0),
            },
        );
        // Slightly overlapping the floor, no gravity: a pure resting contact
        ball_at(&mut world, Vec2::new(0.0, -50.2));

        let mut wall_events = 0;
        for _ in 0..600 {
            world.step(SIM_DT);
            for event in world.drain_events() {
                if event.b == wall {
                    wall_events += 1;
                }
            }
        }
        // Resting contact must not re-fire every frame
        assert_eq!(wall_events, 1);
    }

    #[test]
    fn test_ball_passes_through_hole_sensor() {
        let mut world = World::new();
        let hole = world.add_static(
            BodyKind::Hole,
            Shape::Circle {
                center: Vec2::new(0.0, -150.0),
                radius: 45.0,
            },
        );
        ball_at(&mut world, Vec2::ZERO);
        world.set_gravity(Vec2::new(0.0, -400.0));

        let mut hole_events = Vec::new();
        for _ in 0..600 {
            world.step(SIM_DT);
            hole_events.extend(world.drain_events().into_iter().filter(|e| e.b == hole));
        }

        let player = world.player().expect("ball should be live");
        // Sensed once, never blocked
        assert_eq!(hole_events.len(), 1);
        assert_eq!(hole_events[0].point, Vec2::new(0.0, -150.0));
        assert!(
            player.pos.y < -250.0,
            "sensor should not stop the ball: {}",
            player.pos
        );
    }

    #[test]
    fn test_respawned_ball_gets_fresh_id() {
        let mut world = World::new();
        let first = ball_at(&mut world, PLAYER_SPAWN);
        world.remove_player();
        let second = ball_at(&mut world, PLAYER_SPAWN);
        assert_ne!(first, second);
    }

    #[test]
    fn test_kind_lookup() {
        let mut world = World::new();
        let wall = world.add_static(
            BodyKind::Wall,
            Shape::Rect {
                center: Vec2::ZERO,
                half_extents: Vec2::ONE,
            },
        );
        let ball = ball_at(&mut world, PLAYER_SPAWN);

        assert_eq!(world.kind_of(wall), Some(BodyKind::Wall));
        assert_eq!(world.kind_of(ball), Some(BodyKind::Player));
        assert_eq!(world.kind_of(BodyId(999)), None);
    }
}
