//! Slime Brawl headless runner
//!
//! Runs the simulation at its real tick rate with the autopilot at the
//! controls and the HUD reported through the log. Window, input devices and
//! drawing belong to whichever frontend embeds the library.
//!
//! Usage: `slime-brawl [settings.json]` (set `RUST_LOG=info` to see output)

use slime_brawl::platform::{Autopilot, LogRenderer};
use slime_brawl::{GameLoop, Settings};

/// Default length of a headless demo (one minute at 60 Hz)
const DEMO_TICKS: u64 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Slime Brawl (headless) starting...");

    let mut settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    if settings.max_ticks.is_none() {
        settings.max_ticks = Some(DEMO_TICKS);
    }

    let mut renderer = LogRenderer::new(settings.tick_rate as u64);
    let mut input = Autopilot::default();
    let mut game = GameLoop::new(settings);

    let summary = game.run(&mut input, &mut renderer);
    println!(
        "{} ticks, {:?} ({:?}) - health {}, {} enemies left",
        summary.ticks,
        summary.phase,
        summary.reason,
        game.state.player.health,
        game.state.enemies.len()
    );
}
