//! Headless platformer demo
//!
//! Runs the built-in levels with a scripted input sequence and logs what the
//! collision engine reports. Usage: `platformer [config.toml|config.ron]`; a missing file means defaults.

use log::{debug, info};

use platformer::{level, GameConfig, GameError, InputScript, PlayerInput};
use platformer_engine::config::Config;
use platformer_engine::foundation::logging;
use platformer_engine::foundation::time::{FixedTimestep, Stopwatch};

/// Simulated render rate; logic runs at the configured fixed step
const FRAME_TIME: f32 = 1.0 / 30.0;

/// Portal hops allowed before the demo stops following them
const MAX_SCENE_SWITCHES: u32 = 4;

fn demo_script() -> InputScript {
    InputScript::new()
        .then(0.5, PlayerInput::IDLE)
        .then(1.2, PlayerInput::RIGHT)
        .then(0.25, PlayerInput::RIGHT.with_jump())
        .then(1.0, PlayerInput::RIGHT)
        .then(0.3, PlayerInput::RIGHT.with_jump())
        .then(2.0, PlayerInput::RIGHT)
        .then(0.3, PlayerInput::RIGHT.with_jump())
        .then(3.0, PlayerInput::RIGHT)
        .then(1.0, PlayerInput::LEFT)
}

fn main() -> Result<(), GameError> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_or_default(&path)?,
        None => GameConfig::default(),
    };
    config.validate()?;
    logging::init_with_default(&config.engine.log_filter);

    info!("Starting platformer demo in scene {}", config.start_scene);

    let mut scene = level::build(config.start_scene, &config)?;
    let mut clock = FixedTimestep::new(config.engine.fixed_timestep, config.engine.max_frame_steps);
    let mut script = demo_script();
    let run_time = script.duration() + 1.0;
    let stopwatch = Stopwatch::start_new();

    let mut simulated = 0.0;
    let mut banked_score = 0;
    let mut switches = 0;

    while simulated < run_time {
        for _ in 0..clock.advance(FRAME_TIME) {
            let input = script.next(clock.step());
            let report = scene.step(clock.step(), &input);
            for message in &report.messages {
                debug!("scene {}: {message:?}", scene.id());
            }
        }
        simulated += FRAME_TIME;

        if let Some(next) = scene.take_pending_switch() {
            if switches >= MAX_SCENE_SWITCHES {
                info!("ignoring portal to scene {next}");
            } else {
                switches += 1;
                banked_score += scene.score();
                scene = level::build(next, &config)?;
            }
        }

        if scene.is_player_dead() {
            info!("Game over");
            break;
        }
    }

    info!(
        "Finished in scene {} after {:.2}s simulated ({} steps, {:.1}ms wall): score {}, {} coins in this scene",
        scene.id(),
        simulated,
        clock.total_steps(),
        stopwatch.elapsed_millis(),
        banked_score + scene.score(),
        scene.coins()
    );
    Ok(())
}
