//! Fixed-rate game loop thread
//!
//! A single dedicated thread owns the [`World`] and drives update + render at
//! 60 ticks per second. Input and shutdown cross into the loop only through
//! atomic flags; stopping joins the thread, so the render surface is never
//! touched after teardown begins. Ownership of the world moves into the
//! thread at start and comes back at stop, which makes two loops over the
//! same world unrepresentable.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::consts::TICK_BUDGET_MS;
use crate::render::{Frame, RenderSink};
use crate::sim::{tick, TickInput, World};

/// Cross-thread jump request.
///
/// Any thread may set it; the loop swaps it out at the start of its next
/// tick. A request arriving mid-tick is honored on the following tick, and
/// requests made while the player is airborne are dropped by the player
/// itself.
#[derive(Debug, Clone, Default)]
pub struct JumpIntent(Arc<AtomicBool>);

impl JumpIntent {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub(crate) fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

/// Shared screen dimensions, mutable from resize events
#[derive(Debug)]
pub struct Viewport {
    width: AtomicU32,
    height: AtomicU32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Arc<Self> {
        Arc::new(Self {
            width: AtomicU32::new(width),
            height: AtomicU32::new(height),
        })
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.width.store(width, Ordering::Release);
        self.height.store(height, Ordering::Release);
    }

    pub fn size(&self) -> (u32, u32) {
        (
            self.width.load(Ordering::Acquire),
            self.height.load(Ordering::Acquire),
        )
    }
}

/// Controller for the loop thread.
///
/// `start` is idempotent; `stop` blocks until the in-flight tick has fully
/// exited and returns the final world state. Dropping the controller stops
/// the loop.
pub struct GameLoop<S: RenderSink + 'static> {
    running: Arc<AtomicBool>,
    jump: JumpIntent,
    viewport: Arc<Viewport>,
    surface: Arc<Mutex<S>>,
    handle: Option<JoinHandle<World>>,
}

impl<S: RenderSink + 'static> GameLoop<S> {
    pub fn new(viewport: Arc<Viewport>, surface: Arc<Mutex<S>>) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            jump: JumpIntent::new(),
            viewport,
            surface,
            handle: None,
        }
    }

    /// Handle for delivering jump requests from other threads
    pub fn jump_intent(&self) -> JumpIntent {
        self.jump.clone()
    }

    /// Start the loop thread with the given world. No-op if already running.
    pub fn start(&mut self, world: World) {
        if self.running.swap(true, Ordering::AcqRel) {
            log::warn!("game loop already running, start ignored");
            return;
        }
        let running = self.running.clone();
        let jump = self.jump.clone();
        let viewport = self.viewport.clone();
        let surface = self.surface.clone();
        self.handle = Some(thread::spawn(move || {
            run_loop(world, running, jump, viewport, surface)
        }));
        log::info!("game loop started");
    }

    /// Signal the loop to stop after its current tick and wait for it to
    /// exit, returning the final world. `None` if the loop was not running.
    pub fn stop(&mut self) -> Option<World> {
        self.running.store(false, Ordering::Release);
        let world = self.handle.take().and_then(|handle| handle.join().ok());
        if let Some(ref world) = world {
            log::info!(
                "game loop stopped: score {} after {} ticks",
                world.score,
                world.time_ticks
            );
        }
        world
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some() && self.running.load(Ordering::Acquire)
    }
}

impl<S: RenderSink + 'static> Drop for GameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop<S: RenderSink>(
    mut world: World,
    running: Arc<AtomicBool>,
    jump: JumpIntent,
    viewport: Arc<Viewport>,
    surface: Arc<Mutex<S>>,
) -> World {
    let epoch = Instant::now();
    let budget = Duration::from_millis(TICK_BUDGET_MS);

    while running.load(Ordering::Acquire) {
        let tick_start = Instant::now();
        let now_ms = epoch.elapsed().as_millis() as u64;

        let (width, height) = viewport.size();
        world.resize(width as f32, height as f32);

        let input = TickInput { jump: jump.take() };

        {
            // Hold the surface lock across update + render so teardown can
            // never race a draw against surface destruction.
            let mut sink = surface.lock().unwrap_or_else(|e| e.into_inner());

            let acquired = match sink.acquire() {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("skipping render this tick: {err}");
                    false
                }
            };

            // The world always advances, whatever the render target did
            tick(&mut world, &input, now_ms);

            if acquired {
                let frame = Frame::capture(&world);
                sink.draw(&frame);
                if let Err(err) = sink.release() {
                    log::warn!("render target release failed: {err}");
                }
            }
        }

        // Sleep off the rest of the budget. An over-budget tick starts the
        // next one immediately; missed time is never compensated with extra
        // update steps.
        if let Some(wait) = budget.checked_sub(tick_start.elapsed()) {
            thread::sleep(wait);
        }
    }

    world
}
