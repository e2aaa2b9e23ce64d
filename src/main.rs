//! Brick Breaker headless runner
//!
//! Drives the game at its fixed frame rate without a window. Draw commands
//! go to a tracing sink (`RUST_LOG=trace` to see them) and the paddle is
//! steered by the autopilot. The settings file path comes from the first
//! argument or `BRICK_BREAKER_SETTINGS`.

use std::time::Instant;

use crossbeam_channel::unbounded;

use brick_breaker::platform::{DriverControl, FrameDriver, InputSource};
use brick_breaker::renderer::LogSink;
use brick_breaker::settings::Settings;
use brick_breaker::sim::autopilot_command;

fn settings_path() -> Option<String> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("BRICK_BREAKER_SETTINGS").ok())
}

fn run(settings: &Settings) {
    let (tx, rx) = unbounded();
    let input = InputSource::new(tx);
    let mut driver = FrameDriver::new(settings, rx);
    let mut sink = LogSink::default();
    let interval = settings.tick_interval();
    let mut last = Instant::now();

    while driver.frames() < settings.max_frames {
        if settings.autopilot {
            if let Some(command) = autopilot_command(driver.state()) {
                input.send(command);
            }
        }

        let elapsed = if settings.realtime {
            std::thread::sleep(interval.saturating_sub(last.elapsed()));
            let now = Instant::now();
            let elapsed = now - last;
            last = now;
            elapsed
        } else {
            interval
        };

        if driver.advance(elapsed) == DriverControl::Exit {
            log::info!("Input closed, exiting");
            break;
        }
        driver.render_into(&mut sink);

        if driver.outcome().is_terminal() {
            break;
        }
    }

    let state = driver.state();
    log::info!(
        "Finished after {} frames: {:?}, score {}, {} bricks left, {} draw commands",
        driver.frames(),
        driver.outcome(),
        state.score,
        state.bricks_remaining,
        sink.commands
    );
    println!("{:?} - score {}", driver.outcome(), state.score);
}

fn main() {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let settings = match settings_path() {
        Some(path) => Settings::load(path),
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };
    log::info!(
        "Play area {}x{} \"{}\"",
        settings.window.width,
        settings.window.height,
        settings.window.title
    );

    run(&settings);
}
