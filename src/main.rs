//! Double Arkanoid entry point
//!
//! Runs a headless match: `double-arkanoid [config.json] [seed]`.
//! Progress goes to the log (`RUST_LOG=info`), the final frame is printed as
//! JSON on stdout for an external renderer.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(not(target_arch = "wasm32"))]
use double_arkanoid::{Game, GameConfig};

/// Frames before a headless match gives up (~10 minutes at 60 FPS)
#[cfg(not(target_arch = "wasm32"))]
const MAX_FRAMES: u64 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Double Arkanoid (headless) starting...");

    let mut args = std::env::args().skip(1);

    let config = match args.next().map(GameConfig::load_or_default) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
        None => GameConfig::default(),
    };

    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
    log::info!("Seed {seed}");

    let mut game = match Game::new(config, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Failed to create game: {e}");
            std::process::exit(1);
        }
    };

    game.input.start = true;
    match game.run_until_ended(MAX_FRAMES) {
        Some(_) => log::info!(
            "{} after {} frames ({} ticks)",
            game.state.status_text(),
            game.frames(),
            game.state.time_ticks
        ),
        None => log::info!(
            "No winner after {} frames: {:?}",
            game.frames(),
            game.state.grid.count_by_faction()
        ),
    }

    let snapshot = double_arkanoid::sim::Snapshot::capture(&game.state);
    match snapshot.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final frame: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web builds are driven by the embedding page through `double_arkanoid::Game`
}
