//! Maze levels
//!
//! A level is pure static geometry: rectangular walls, circular hole traps,
//! one circular finish zone, and the ball spawn point. Levels load from JSON
//! or come from the built-in demo maze.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{PLAYER_RADIUS, PLAYER_SPAWN};

/// An axis-aligned wall segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallRect {
    pub center: Vec2,
    pub half_extents: Vec2,
}

/// A circular trigger zone (hole trap or finish)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleZone {
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} zone has non-positive radius")]
    DegenerateZone(&'static str),
    #[error("spawn point overlaps a wall")]
    SpawnInsideWall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub spawn: Vec2,
    pub walls: Vec<WallRect>,
    pub holes: Vec<CircleZone>,
    pub finish: CircleZone,
}

impl Level {
    /// Parse and validate a level from JSON.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: Level = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        if self.finish.radius <= 0.0 {
            return Err(LevelError::DegenerateZone("finish"));
        }
        if self.holes.iter().any(|hole| hole.radius <= 0.0) {
            return Err(LevelError::DegenerateZone("hole"));
        }
        for wall in &self.walls {
            let delta = (self.spawn - wall.center).abs();
            let reach = wall.half_extents + Vec2::splat(PLAYER_RADIUS);
            if delta.x < reach.x && delta.y < reach.y {
                return Err(LevelError::SpawnInsideWall);
            }
        }
        Ok(())
    }

    /// The built-in maze: a bordered arena, two baffle walls forming an
    /// S-shaped route from the bottom-right spawn to the top-left finish,
    /// and hole traps along the way.
    pub fn demo() -> Self {
        Self {
            name: "demo".into(),
            spawn: PLAYER_SPAWN,
            walls: vec![
                // Arena border
                WallRect {
                    center: Vec2::new(0.0, -430.0),
                    half_extents: Vec2::new(720.0, 10.0),
                },
                WallRect {
                    center: Vec2::new(0.0, 430.0),
                    half_extents: Vec2::new(720.0, 10.0),
                },
                WallRect {
                    center: Vec2::new(-710.0, 0.0),
                    half_extents: Vec2::new(10.0, 440.0),
                },
                WallRect {
                    center: Vec2::new(710.0, 0.0),
                    half_extents: Vec2::new(10.0, 440.0),
                },
                // Baffles: gap on the right, then gap on the left
                WallRect {
                    center: Vec2::new(-150.0, -180.0),
                    half_extents: Vec2::new(550.0, 10.0),
                },
                WallRect {
                    center: Vec2::new(150.0, 60.0),
                    half_extents: Vec2::new(550.0, 10.0),
                },
            ],
            holes: vec![
                CircleZone {
                    center: Vec2::new(0.0, -280.0),
                    radius: 45.0,
                },
                CircleZone {
                    center: Vec2::new(550.0, -100.0),
                    radius: 45.0,
                },
                CircleZone {
                    center: Vec2::new(200.0, 160.0),
                    radius: 45.0,
                },
                CircleZone {
                    center: Vec2::new(-550.0, 150.0),
                    radius: 45.0,
                },
            ],
            finish: CircleZone {
                center: Vec2::new(-600.0, 350.0),
                radius: 60.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_level_is_valid() {
        let level = Level::demo();
        level.validate().expect("demo level must validate");
        assert!(!level.walls.is_empty());
        assert!(!level.holes.is_empty());
    }

    #[test]
    fn test_from_json_happy_path() {
        let json = serde_json::to_string(&Level::demo()).expect("demo serializes");
        let level = Level::from_json(&json).expect("round-tripped level parses");
        assert_eq!(level.name, "demo");
        assert_eq!(level.spawn, PLAYER_SPAWN);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Level::from_json("not json"),
            Err(LevelError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_degenerate_finish() {
        let mut level = Level::demo();
        level.finish.radius = 0.0;
        assert!(matches!(
            level.validate(),
            Err(LevelError::DegenerateZone("finish"))
        ));
    }

    #[test]
    fn test_validate_rejects_spawn_inside_wall() {
        let mut level = Level::demo();
        level.walls.push(WallRect {
            center: level.spawn,
            half_extents: Vec2::splat(5.0),
        });
        assert!(matches!(
            level.validate(),
            Err(LevelError::SpawnInsideWall)
        ));
    }
}
