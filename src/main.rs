//! Hopdash entry point
//!
//! Runs the simulation headless with a logging sink. A graphical frontend
//! would supply its own `RenderSink` and forward taps as jump intents; this
//! binary exercises the full loop with a scripted session instead.

use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use hopdash::render::{Frame, RenderError, RenderSink};
use hopdash::runner::{GameLoop, Viewport};
use hopdash::sim::World;

const SCREEN_WIDTH: u32 = 1280;
const SCREEN_HEIGHT: u32 = 720;

/// Sink that logs a one-line session summary once per second
#[derive(Default)]
struct ConsoleSink {
    frames: u64,
}

impl RenderSink for ConsoleSink {
    fn acquire(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        if self.frames % hopdash::consts::TICKS_PER_SECOND == 0 {
            log::info!(
                "score {:>5}  coins {:>2}  enemies {:>2}  player y {:.0}",
                frame.score,
                frame.coins.len(),
                frame.enemies.len(),
                frame.player.y,
            );
        }
    }

    fn release(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("hopdash starting with seed {seed}");

    let viewport = Viewport::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    let surface = Arc::new(Mutex::new(ConsoleSink::default()));
    let mut game = GameLoop::new(viewport, surface);
    let jump = game.jump_intent();

    game.start(World::new(seed, SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32));

    // Scripted session: hop every 1.5 seconds for 15 seconds
    for _ in 0..10 {
        std::thread::sleep(Duration::from_millis(1500));
        jump.request();
    }

    if let Some(world) = game.stop() {
        log::info!(
            "session over: score {} after {} ticks",
            world.score,
            world.time_ticks
        );
    }
}
