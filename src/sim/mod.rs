//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use actor::{Actor, Motion};
pub use collision::{Collision, collides, detect, hits_obstacle};
pub use obstacle::{Obstacle, ObstacleField};
pub use state::{ActorPose, Command, EpisodePhase, GameEvent, ObstacleView, Snapshot};
pub use tick::Session;
