//! Session state
//!
//! `GameSession` owns the physics world, the current ball identity, and the
//! phase machine. All mutation happens on the game-loop thread; the sensor
//! slot is the only cross-thread boundary and lives outside the session.

use glam::Vec2;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::body::{BodyId, BodyKind, PlayerDef, Shape};
use super::contact::ContactOutcome;
use super::gravity::GravityDriver;
use super::reset::ResetSequence;
use super::world::World;
use crate::level::Level;

/// Current phase of gameplay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball live in the maze
    Playing,
    /// Reset animation in flight; the ball body is out of the world
    Resetting(ResetSequence),
}

/// Outbound events for the embedding layer (sound, haptics, score).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball grazed a wall (haptic feedback hook)
    WallTouch { point: Vec2 },
    /// Ball fell into a hole trap
    FellInHole { point: Vec2 },
    /// Ball rolled into the finish zone
    ReachedFinish { point: Vec2 },
    /// Fresh ball spawned after a reset
    PlayerRespawned { position: Vec2 },
}

/// Run counters; the score/level-advance attachment point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub falls: u32,
    pub finishes: u32,
    pub wall_touches: u32,
}

/// One play session of one maze. Loops indefinitely: there is no terminal
/// phase, only `Playing -> Resetting -> Playing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: GamePhase,
    pub world: World,
    pub gravity: GravityDriver,
    /// Where a fresh ball spawns
    pub spawn: Vec2,
    player_id: Option<BodyId>,
    pub stats: SessionStats,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending events, drained by the embedding layer each frame
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Build a session from a level: statics in, ball spawned, phase Playing.
    pub fn new(level: &Level) -> Self {
        let mut world = World::new();
        for wall in &level.walls {
            world.add_static(
                BodyKind::Wall,
                Shape::Rect {
                    center: wall.center,
                    half_extents: wall.half_extents,
                },
            );
        }
        for hole in &level.holes {
            world.add_static(
                BodyKind::Hole,
                Shape::Circle {
                    center: hole.center,
                    radius: hole.radius,
                },
            );
        }
        world.add_static(
            BodyKind::Finish,
            Shape::Circle {
                center: level.finish.center,
                radius: level.finish.radius,
            },
        );

        let mut session = Self {
            phase: GamePhase::Playing,
            world,
            gravity: GravityDriver::default(),
            spawn: level.spawn,
            player_id: None,
            stats: SessionStats::default(),
            time_ticks: 0,
            events: Vec::new(),
        };
        session.spawn_player();
        session
    }

    /// Current ball id, if one is live
    pub fn player_id(&self) -> Option<BodyId> {
        self.player_id
    }

    pub(crate) fn spawn_player(&mut self) -> BodyId {
        let id = self.world.spawn_player(PlayerDef::steel_ball(self.spawn));
        self.player_id = Some(id);
        id
    }

    /// Remove the ball and start the shrink-out sequence at `point`.
    /// Removing the body first makes the one-reset-in-flight and
    /// no-stale-contact invariants structural: a world without a dynamic
    /// body raises no contacts.
    pub(crate) fn begin_reset(&mut self, outcome: ContactOutcome, point: Vec2) {
        if outcome == ContactOutcome::WallTouch || matches!(self.phase, GamePhase::Resetting(_)) {
            return;
        }
        let from = self.world.player().map(|p| p.pos).unwrap_or(point);
        self.world.remove_player();
        self.player_id = None;

        match outcome {
            ContactOutcome::Trap => {
                info!("ball fell into a hole at {point}");
                self.stats.falls += 1;
                self.events.push(GameEvent::FellInHole { point });
            }
            ContactOutcome::Win => {
                info!("ball reached the finish at {point}");
                self.stats.finishes += 1;
                self.events.push(GameEvent::ReachedFinish { point });
            }
            ContactOutcome::WallTouch => unreachable!(),
        }
        self.phase = GamePhase::Resetting(ResetSequence::begin(outcome, from, point));
    }

    /// Respawn after a completed reset sequence
    pub(crate) fn finish_reset(&mut self) {
        self.spawn_player();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::PlayerRespawned {
            position: self.spawn,
        });
    }

    pub(crate) fn on_wall_touch(&mut self, point: Vec2) {
        debug!("wall touch at {point}");
        self.stats.wall_touches += 1;
        self.events.push(GameEvent::WallTouch { point });
    }

    /// Drain pending events (the sound/haptics/score hook)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
