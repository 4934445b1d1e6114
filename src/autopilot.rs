//! Demo-mode controller
//!
//! Keeps the actor's bottom edge just above the bottom of the next gap.

use crate::sim::{EpisodePhase, Session};

/// How far above the gap bottom the actor tries to stay
const GAP_CLEARANCE: f32 = 10.0;
/// Never flap when the next step would bring the actor this close to the ceiling
const CEILING_CLEARANCE: f32 = 10.0;

/// Y coordinate the actor's bottom edge should stay above
pub fn target_line(session: &Session) -> f32 {
    let actor = session.actor();
    session
        .field()
        .obstacles()
        .iter()
        .find(|o| o.right() > actor.pos.x)
        .map(|o| o.bottom - GAP_CLEARANCE)
        .unwrap_or(session.tuning().field.height * 0.6)
}

/// Whether to flap before the next step
pub fn should_flap(session: &Session) -> bool {
    if session.phase() != EpisodePhase::Playing {
        return false;
    }

    let actor = session.actor();
    let next_vy = actor.velocity().map(|vy| vy + actor.gravity).unwrap_or(0.0);
    let next_y = actor.pos.y + next_vy;

    let sinking = next_y + actor.size.y > target_line(session);
    let near_ceiling = actor.pos.y + actor.flap_impulse + actor.gravity < CEILING_CLEARANCE;
    sinking && !near_ceiling
}
