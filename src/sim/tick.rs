//! Game session and fixed timestep simulation tick
//!
//! The shell feeds variable frame deltas and queued input; the session turns
//! them into fixed steps so the per-step physics constants behave the same on
//! any display rate.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::actor::Actor;
use super::collision::{self, Collision};
use super::obstacle::ObstacleField;
use super::state::{ActorPose, Command, EpisodePhase, GameEvent, ObstacleView, Snapshot};
use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS, SIM_STEP_MS};
use crate::tuning::{FieldSize, Tuning};

/// One running game: actor, obstacles, score and episode phase
#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    rng: Pcg32,
    phase: EpisodePhase,
    actor: Actor,
    field: ObstacleField,
    score: u32,
    /// Simulated time since the last spawn (or since the episode started)
    since_spawn_ms: f32,
    /// Time left before a restart is accepted; only counts down in GameOver
    restart_delay_ms: f32,
    restart_allowed: bool,
    /// Unsimulated frame time carried to the next tick
    accumulator_ms: f32,
    /// Fixed steps run since the session was created
    steps: u64,
    pending: VecDeque<Command>,
    events: Vec<GameEvent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl Session {
    /// Create a session on the start screen
    pub fn new(tuning: Tuning) -> Self {
        if let Err(err) = tuning.validate() {
            log::warn!("Session created with questionable tuning: {err}");
        }
        Self {
            rng: Pcg32::seed_from_u64(tuning.seed),
            phase: EpisodePhase::Idle,
            actor: Actor::new(&tuning),
            field: ObstacleField::new(tuning.obstacle_width),
            score: 0,
            since_spawn_ms: 0.0,
            restart_delay_ms: 0.0,
            restart_allowed: false,
            accumulator_ms: 0.0,
            steps: 0,
            pending: VecDeque::new(),
            events: Vec::new(),
            tuning,
        }
    }

    /// Reseed gap placement
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.tuning.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self
    }

    // === Input ===

    /// Queue a flap; applied at the start of the next tick
    pub fn on_activate(&mut self) {
        self.pending.push_back(Command::Activate);
    }

    /// Queue a start request; applied at the start of the next tick
    pub fn on_start(&mut self) {
        self.pending.push_back(Command::Start);
    }

    /// Advance by a frame delta in milliseconds
    pub fn on_tick(&mut self, elapsed_ms: f32) {
        while let Some(command) = self.pending.pop_front() {
            self.apply(command);
        }

        let elapsed_ms = if elapsed_ms.is_finite() {
            elapsed_ms.max(0.0)
        } else {
            0.0
        };
        let simulated_ms = elapsed_ms.min(MAX_FRAME_MS);
        if elapsed_ms > simulated_ms {
            log::warn!("Frame delta {elapsed_ms:.1}ms clamped to {MAX_FRAME_MS}ms for physics");
            self.credit_timers(elapsed_ms - simulated_ms);
        }
        self.accumulator_ms += simulated_ms;

        let mut substeps = 0;
        while self.accumulator_ms >= SIM_STEP_MS && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator_ms -= SIM_STEP_MS;
            substeps += 1;
        }
    }

    /// Advance the wall-clock timers by frame time the physics skipped
    fn credit_timers(&mut self, skipped_ms: f32) {
        match self.phase {
            EpisodePhase::Playing => self.since_spawn_ms += skipped_ms,
            EpisodePhase::GameOver if !self.restart_allowed => self.restart_delay_ms -= skipped_ms,
            _ => {}
        }
    }

    fn apply(&mut self, command: Command) {
        match (self.phase, command) {
            (EpisodePhase::Idle, Command::Start) => self.start(),
            (EpisodePhase::Playing, Command::Activate) => {
                self.actor.activate();
                self.events.push(GameEvent::Flapped);
            }
            (EpisodePhase::GameOver, Command::Activate) => {
                if self.restart_allowed {
                    self.reset();
                } else {
                    log::debug!("Restart ignored, {:.0}ms left", self.restart_delay_ms);
                }
            }
            // Flapping on the start screen and starting mid-episode do nothing
            _ => {}
        }
    }

    // === Transitions ===

    /// Idle -> Playing
    fn start(&mut self) {
        self.actor.reset(self.tuning.actor_reset_y());
        self.field.clear();
        self.score = 0;
        self.since_spawn_ms = 0.0;
        self.phase = EpisodePhase::Playing;
        self.events.push(GameEvent::Started);
        log::info!("Episode started");
    }

    /// Playing -> GameOver
    fn game_over(&mut self, collision: Collision) {
        self.phase = EpisodePhase::GameOver;
        self.restart_allowed = false;
        self.restart_delay_ms = self.tuning.restart_delay_ms;
        self.events.push(GameEvent::EnteredGameOver { score: self.score });
        log::info!("Game over ({collision:?}), score {}", self.score);
    }

    /// Any phase -> Idle with a fresh episode
    pub fn reset(&mut self) {
        self.phase = EpisodePhase::Idle;
        self.restart_allowed = false;
        self.restart_delay_ms = 0.0;
        self.actor.reset(self.tuning.actor_reset_y());
        self.field.clear();
        self.score = 0;
        self.since_spawn_ms = 0.0;
        self.events.push(GameEvent::Reset);
        log::info!("Session reset");
    }

    // === Simulation ===

    /// Run one fixed step
    pub fn step(&mut self) {
        self.steps += 1;

        match self.phase {
            EpisodePhase::Idle => {}

            EpisodePhase::Playing => {
                self.since_spawn_ms += SIM_STEP_MS;
                if self.since_spawn_ms > self.tuning.spawn_interval_ms {
                    let t = &self.tuning;
                    self.field.spawn(
                        &mut self.rng,
                        t.field.width + t.spawn_offset,
                        t.field.height,
                        t.gap_height,
                        t.gap_margin_top,
                        t.gap_margin_bottom,
                    );
                    self.since_spawn_ms = 0.0;
                }

                self.field.advance(self.tuning.scroll_speed);
                self.field.prune(self.tuning.prune_bound);

                let passed = self.field.mark_passed(self.actor.pos.x);
                if passed > 0 {
                    self.score += passed;
                    self.events.push(GameEvent::ScoreChanged(self.score));
                    log::debug!("Score: {}", self.score);
                }

                self.actor.integrate();

                if let Some(hit) =
                    collision::detect(&self.actor, self.field.obstacles(), self.tuning.field.height)
                {
                    self.game_over(hit);
                }
            }

            EpisodePhase::GameOver => {
                if !self.restart_allowed {
                    self.restart_delay_ms -= SIM_STEP_MS;
                    if self.restart_delay_ms <= 0.0 {
                        self.restart_delay_ms = 0.0;
                        self.restart_allowed = true;
                        self.events.push(GameEvent::RestartAllowed);
                        log::info!("Restart allowed");
                    }
                }
            }
        }
    }

    /// Place an obstacle by hand (scripted layouts, replays)
    pub fn insert_obstacle(&mut self, x: f32, top: f32, gap_height: f32) {
        self.field.insert(x, top, gap_height);
    }

    /// Change the play field; the actor picks up the new reset height on its next reset
    ///
    /// Sizes that are not finite and positive are ignored.
    pub fn resize(&mut self, field: FieldSize) {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(field.width) || !usable(field.height) {
            log::warn!("Ignoring resize to {}x{}", field.width, field.height);
            return;
        }
        log::debug!("Field resized to {}x{}", field.width, field.height);
        self.tuning.field = field;
    }

    // === Output ===

    /// Take every event raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn actor_pose(&self) -> ActorPose {
        ActorPose::from(&self.actor)
    }

    pub fn obstacles(&self) -> Vec<ObstacleView> {
        self.field.obstacles().iter().map(ObstacleView::from).collect()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    pub fn is_restart_allowed(&self) -> bool {
        self.restart_allowed
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            actor: self.actor_pose(),
            obstacles: self.obstacles(),
            score: self.score,
            phase: self.phase,
            restart_allowed: self.restart_allowed,
        }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Simulated time in milliseconds
    pub fn time_ms(&self) -> f64 {
        self.steps as f64 * SIM_STEP_MS as f64
    }
}
