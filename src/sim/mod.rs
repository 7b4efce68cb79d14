//! Deterministic game simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No wall clocks, no unseeded RNG
//! - Stable iteration order (statics in insertion order)
//! - No rendering or platform dependencies

pub mod body;
pub mod contact;
pub mod gravity;
pub mod reset;
pub mod state;
pub mod tick;
pub mod world;

pub use body::{BodyId, BodyKind, PlayerDef, Shape};
pub use contact::{ContactOutcome, classify, resolve};
pub use gravity::GravityDriver;
pub use reset::ResetSequence;
pub use state::{GameEvent, GamePhase, GameSession, SessionStats};
pub use tick::{TickInput, tick};
pub use world::{ContactEvent, PlayerBody, StaticBody, World};
