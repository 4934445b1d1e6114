//! Audio and UI cues derived from game events
//!
//! The shell owns the actual audio elements and overlays; this module only
//! decides what should happen when.

use serde::{Deserialize, Serialize};

use crate::render::score_text;
use crate::sim::GameEvent;

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Actor flapped
    Flap,
    /// Actor crashed
    Crash,
}

/// Screen elements the shell shows and hides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    StartScreen,
    /// The play field itself (hidden behind the start screen)
    PlayField,
    GameOver,
    RestartPrompt,
}

/// A side effect for the shell to carry out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// Rewind and start the looping background track
    StartMusic,
    PauseMusic,
    /// Rewind and play a sound effect
    Play(SoundEffect),
    Show(Overlay),
    Hide(Overlay),
    SetScoreText(String),
}

/// Cues to carry out for one event, in order
pub fn cues_for(event: &GameEvent) -> Vec<Cue> {
    match *event {
        GameEvent::Started => vec![
            Cue::Hide(Overlay::StartScreen),
            Cue::Show(Overlay::PlayField),
            Cue::StartMusic,
        ],
        GameEvent::Flapped => vec![Cue::Play(SoundEffect::Flap)],
        GameEvent::ScoreChanged(score) => vec![Cue::SetScoreText(score_text(score))],
        GameEvent::EnteredGameOver { .. } => vec![
            Cue::PauseMusic,
            Cue::Play(SoundEffect::Crash),
            Cue::Show(Overlay::GameOver),
            Cue::Hide(Overlay::RestartPrompt),
        ],
        GameEvent::RestartAllowed => vec![Cue::Show(Overlay::RestartPrompt)],
        GameEvent::Reset => vec![
            Cue::Hide(Overlay::GameOver),
            Cue::SetScoreText(score_text(0)),
            Cue::Show(Overlay::StartScreen),
            Cue::Hide(Overlay::PlayField),
        ],
    }
}

/// Cues for a batch of events, flattened in event order
pub fn cues_for_all(events: &[GameEvent]) -> Vec<Cue> {
    events.iter().flat_map(cues_for).collect()
}

/// Volume preferences for the shell's audio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioMix {
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioMix {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl AudioMix {
    /// Set music volume (clamped to 0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Set sfx volume (clamped to 0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Volume the shell should use for a cue, if it makes a sound at all
    pub fn volume_for(&self, cue: &Cue) -> Option<f32> {
        let volume = match cue {
            Cue::StartMusic => self.music_volume,
            Cue::Play(_) => self.sfx_volume,
            _ => return None,
        };
        Some(if self.muted { 0.0 } else { volume })
    }
}
