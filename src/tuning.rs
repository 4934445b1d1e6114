//! Game balance and field sizing
//!
//! Defaults reproduce the classic feel; shells may override any subset of
//! values from JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Play field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSize {
    pub width: f32,
    pub height: f32,
}

impl Default for FieldSize {
    fn default() -> Self {
        Self {
            width: FIELD_MAX_WIDTH,
            height: FIELD_MAX_HEIGHT,
        }
    }
}

impl FieldSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Fit the field inside a viewport, keeping a small border and never
    /// growing past the maximum field size
    pub fn fit_viewport(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            width: (viewport_width - VIEWPORT_PADDING).min(FIELD_MAX_WIDTH).max(1.0),
            height: (viewport_height - VIEWPORT_PADDING).min(FIELD_MAX_HEIGHT).max(1.0),
        }
    }
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field: FieldSize,

    // === Actor ===
    pub actor_x: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    /// Reset height as a fraction of field height
    pub actor_reset_fraction: f32,
    pub gravity: f32,
    pub flap_impulse: f32,

    // === Obstacles ===
    pub gap_height: f32,
    pub obstacle_width: f32,
    pub scroll_speed: f32,
    pub spawn_interval_ms: f32,
    pub spawn_offset: f32,
    pub gap_margin_top: f32,
    pub gap_margin_bottom: f32,
    pub prune_bound: f32,

    // === Episode ===
    pub restart_delay_ms: f32,
    /// Seed for gap placement
    pub seed: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field: FieldSize::default(),

            actor_x: ACTOR_X,
            actor_width: ACTOR_SIZE,
            actor_height: ACTOR_SIZE,
            actor_reset_fraction: ACTOR_RESET_FRACTION,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,

            gap_height: GAP_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            scroll_speed: SCROLL_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_offset: SPAWN_OFFSET,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,
            prune_bound: PRUNE_BOUND,

            restart_delay_ms: RESTART_DELAY_MS,
            seed: 0,
        }
    }
}

/// Reasons a tuning document is rejected
#[derive(Debug)]
pub enum TuningError {
    /// Not valid JSON, or a field has the wrong type
    Parse(serde_json::Error),
    /// A size, speed or interval that must be strictly positive
    NonPositive { field: &'static str },
    /// NaN or infinity somewhere in the document
    NonFinite { field: &'static str },
    /// The flap impulse has to point up (negative y)
    ImpulseNotUpward,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(err) => write!(f, "invalid tuning document: {err}"),
            TuningError::NonPositive { field } => write!(f, "`{field}` must be greater than zero"),
            TuningError::NonFinite { field } => write!(f, "`{field}` must be a finite number"),
            TuningError::ImpulseNotUpward => write!(f, "`flap_impulse` must be negative"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        TuningError::Parse(err)
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning (seed {})", tuning.seed);
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys, serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Tuning with a different play field
    pub fn with_field(mut self, field: FieldSize) -> Self {
        self.field = field;
        self
    }

    /// Tuning with a different gap placement seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check values the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let finite = [
            ("field.width", self.field.width),
            ("field.height", self.field.height),
            ("actor_x", self.actor_x),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("actor_reset_fraction", self.actor_reset_fraction),
            ("gravity", self.gravity),
            ("flap_impulse", self.flap_impulse),
            ("gap_height", self.gap_height),
            ("obstacle_width", self.obstacle_width),
            ("scroll_speed", self.scroll_speed),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("spawn_offset", self.spawn_offset),
            ("gap_margin_top", self.gap_margin_top),
            ("gap_margin_bottom", self.gap_margin_bottom),
            ("prune_bound", self.prune_bound),
            ("restart_delay_ms", self.restart_delay_ms),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::NonFinite { field: *field });
        }

        let positive = [
            ("field.width", self.field.width),
            ("field.height", self.field.height),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("gravity", self.gravity),
            ("gap_height", self.gap_height),
            ("obstacle_width", self.obstacle_width),
            ("scroll_speed", self.scroll_speed),
            ("spawn_interval_ms", self.spawn_interval_ms),
        ];
        if let Some((field, _)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(TuningError::NonPositive { field: *field });
        }

        if self.flap_impulse >= 0.0 {
            return Err(TuningError::ImpulseNotUpward);
        }
        Ok(())
    }

    /// Height the actor returns to on reset
    pub fn actor_reset_y(&self) -> f32 {
        self.field.height * self.actor_reset_fraction
    }
}
