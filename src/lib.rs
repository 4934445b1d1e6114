//! Flap Gates - a single-screen flap-through-the-gates arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor physics, obstacles, collisions, episode state)
//! - `tuning`: Data-driven game balance and field sizing
//! - `render`: Draw command generation for a rendering shell
//! - `cues`: Audio/UI side effects derived from game events
//! - `autopilot`: Demo-mode controller

pub mod autopilot;
pub mod cues;
pub mod render;
pub mod sim;
pub mod tuning;

pub use sim::{EpisodePhase, GameEvent, Session, Snapshot};
pub use tuning::{FieldSize, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz, the rate the physics constants assume)
    pub const SIM_STEP_MS: f32 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta accepted from the host before clamping
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Largest play field; smaller viewports shrink it
    pub const FIELD_MAX_WIDTH: f32 = 420.0;
    pub const FIELD_MAX_HEIGHT: f32 = 760.0;
    /// Space kept free around the field when fitting it to a viewport
    pub const VIEWPORT_PADDING: f32 = 20.0;

    /// Actor defaults
    pub const ACTOR_X: f32 = 60.0;
    pub const ACTOR_SIZE: f32 = 100.0;
    /// Reset height as a fraction of field height
    pub const ACTOR_RESET_FRACTION: f32 = 0.45;
    /// Downward acceleration per step
    pub const GRAVITY: f32 = 0.28;
    /// Velocity set on every activation (negative = upward)
    pub const FLAP_IMPULSE: f32 = -5.0;

    /// Obstacle defaults
    pub const GAP_HEIGHT: f32 = 260.0;
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    /// Horizontal distance travelled per step
    pub const SCROLL_SPEED: f32 = 2.6;
    pub const SPAWN_INTERVAL_MS: f32 = 2000.0;
    /// Obstacles spawn this far beyond the right edge
    pub const SPAWN_OFFSET: f32 = 20.0;
    pub const GAP_MARGIN_TOP: f32 = 60.0;
    pub const GAP_MARGIN_BOTTOM: f32 = 90.0;
    /// Obstacles are pruned once their right edge is left of this
    pub const PRUNE_BOUND: f32 = -20.0;

    /// Delay after a crash before the restart prompt shows up
    pub const RESTART_DELAY_MS: f32 = 3000.0;
}
