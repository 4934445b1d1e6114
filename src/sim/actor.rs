//! The player-controlled actor and its flap physics

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Vertical motion state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// Gravity inactive; the actor hovers until its first flap
    Unarmed,
    /// Gravity active with the given vertical velocity (positive = down)
    Armed { vy: f32 },
}

/// The falling, flapping actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner; x stays fixed for the whole episode
    pub pos: Vec2,
    pub size: Vec2,
    pub motion: Motion,
    pub gravity: f32,
    pub flap_impulse: f32,
}

impl Actor {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.actor_x, tuning.actor_reset_y()),
            size: Vec2::new(tuning.actor_width, tuning.actor_height),
            motion: Motion::Unarmed,
            gravity: tuning.gravity,
            flap_impulse: tuning.flap_impulse,
        }
    }

    /// Arm gravity if needed and kick upward
    pub fn activate(&mut self) {
        self.motion = Motion::Armed {
            vy: self.flap_impulse,
        };
    }

    /// Advance one fixed step
    pub fn integrate(&mut self) {
        if let Motion::Armed { ref mut vy } = self.motion {
            *vy += self.gravity;
            self.pos.y += *vy;
        }
    }

    /// Return to the hover height with gravity off
    pub fn reset(&mut self, initial_y: f32) {
        self.pos.y = initial_y;
        self.motion = Motion::Unarmed;
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.motion, Motion::Armed { .. })
    }

    /// Current vertical velocity, if armed
    pub fn velocity(&self) -> Option<f32> {
        match self.motion {
            Motion::Unarmed => None,
            Motion::Armed { vy } => Some(vy),
        }
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}
