//! Draw command generation
//!
//! The core never touches a drawing surface. Each frame it hands the shell a
//! flat list of primitives in back-to-front order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{EpisodePhase, Session};

/// RGBA, 0-1 per channel
pub type Color = [f32; 4];

/// Convert a 0xRRGGBB literal to a color
pub const fn hex_color(rgb: u32) -> Color {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// Sky gradient, top to bottom
pub const SKY_STOPS: [(f32, Color); 3] = [
    (0.0, hex_color(0xffb37b)),
    (0.5, hex_color(0xff7e5f)),
    (1.0, hex_color(0x7b2cbf)),
];
pub const OBSTACLE_COLOR: Color = hex_color(0x0b6623);
pub const SCORE_COLOR: Color = hex_color(0xffffff);

/// Images the shell is expected to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Actor,
}

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Vertical linear gradient filling `rect`
    Gradient { rect: Rect, stops: Vec<(f32, Color)> },
    FillRect { rect: Rect, color: Color },
    Sprite { sprite: Sprite, rect: Rect },
    Text { text: String, pos: Vec2, color: Color },
}

/// Score label as shown in the HUD
pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

/// Build the draw list for the current frame
pub fn frame(session: &Session) -> Vec<DrawCommand> {
    let field = session.tuning().field;
    let obstacles = session.obstacles();
    let mut commands = Vec::with_capacity(3 + obstacles.len() * 2);

    commands.push(DrawCommand::Gradient {
        rect: Rect::new(0.0, 0.0, field.width, field.height),
        stops: SKY_STOPS.to_vec(),
    });

    for o in &obstacles {
        commands.push(DrawCommand::FillRect {
            rect: Rect::new(o.x, 0.0, o.width, o.top),
            color: OBSTACLE_COLOR,
        });
        commands.push(DrawCommand::FillRect {
            rect: Rect::new(o.x, o.bottom, o.width, field.height - o.bottom),
            color: OBSTACLE_COLOR,
        });
    }

    let pose = session.actor_pose();
    commands.push(DrawCommand::Sprite {
        sprite: Sprite::Actor,
        rect: Rect::new(pose.x, pose.y, pose.w, pose.h),
    });

    // The start screen covers the field, so the HUD only shows once started
    if session.phase() != EpisodePhase::Idle {
        commands.push(DrawCommand::Text {
            text: score_text(session.score()),
            pos: Vec2::new(10.0, 10.0),
            color: SCORE_COLOR,
        });
    }

    commands
}
