//! Episode state, events and snapshots shared with the shell

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::Obstacle;

/// Current phase of an episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EpisodePhase {
    /// Start screen: actor parked at its reset height, no obstacles
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Crashed; simulation frozen until a restart is allowed and requested
    GameOver,
}

/// Player input, queued by the shell and applied at the start of the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Flap / tap / click
    Activate,
    /// Start button
    Start,
}

/// Something the shell should react to (sound, overlays, score display)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Back on the start screen with a fresh episode
    Reset,
    /// Left the start screen, gameplay running
    Started,
    /// The actor flapped
    Flapped,
    /// Score changed to the given value
    ScoreChanged(u32),
    /// The actor crashed with the given final score
    EnteredGameOver { score: u32 },
    /// The restart delay elapsed
    RestartAllowed,
}

/// Actor bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorPose {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl From<&Actor> for ActorPose {
    fn from(actor: &Actor) -> Self {
        Self {
            x: actor.pos.x,
            y: actor.pos.y,
            w: actor.size.x,
            h: actor.size.y,
        }
    }
}

/// Render-facing view of an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub top: f32,
    pub bottom: f32,
    pub width: f32,
}

impl From<&Obstacle> for ObstacleView {
    fn from(obstacle: &Obstacle) -> Self {
        Self {
            x: obstacle.x,
            top: obstacle.top,
            bottom: obstacle.bottom,
            width: obstacle.width,
        }
    }
}

/// Everything a shell needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub actor: ActorPose,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub phase: EpisodePhase,
    pub restart_allowed: bool,
}
