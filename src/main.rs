//! Flap Gates entry point
//!
//! Native builds have no window; they run a headless attract-mode session
//! driven by the autopilot and print the final snapshot as JSON.
//!
//! Usage: `flap-gates [seconds] [tuning.json]`

use flap_gates::consts::SIM_STEP_MS;
use flap_gates::cues::{AudioMix, cues_for_all};
use flap_gates::{GameEvent, Session, Tuning, autopilot, render};

/// Default demo length in simulated seconds
const DEFAULT_DEMO_SECS: u32 = 60;

fn load_tuning(path: Option<&str>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    match std::fs::read_to_string(path) {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("{path}: {err}; using default tuning");
                Tuning::default()
            }
        },
        Err(err) => {
            log::warn!("Cannot read {path}: {err}; using default tuning");
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Flap Gates (headless demo) starting...");

    let args: Vec<String> = std::env::args().collect();
    let secs = args
        .get(1)
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_DEMO_SECS);
    let tuning = load_tuning(args.get(2).map(String::as_str));
    let mix = AudioMix::default();

    let mut session = Session::new(tuning);
    session.on_start();

    let frames = (secs as f32 * 1000.0 / SIM_STEP_MS) as u32;
    let mut episodes = 1;
    let mut best = 0;

    for _ in 0..frames {
        if autopilot::should_flap(&session) {
            session.on_activate();
        }
        session.on_tick(SIM_STEP_MS);

        let events = session.drain_events();
        for cue in cues_for_all(&events) {
            match mix.volume_for(&cue) {
                Some(volume) => log::trace!("cue {cue:?} at volume {volume}"),
                None => log::trace!("cue {cue:?}"),
            }
        }

        for event in events {
            match event {
                GameEvent::EnteredGameOver { score } => {
                    best = best.max(score);
                    log::info!("Episode {episodes} over with score {score}");
                }
                // Restart as soon as allowed, then start from the title screen
                GameEvent::RestartAllowed => session.on_activate(),
                GameEvent::Reset => {
                    episodes += 1;
                    session.on_start();
                }
                _ => {}
            }
        }
    }

    best = best.max(session.score());
    log::info!(
        "Demo finished: {episodes} episode(s), best score {best}, {} draw commands in last frame",
        render::frame(&session).len()
    );

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize snapshot: {err}"),
    }
}
