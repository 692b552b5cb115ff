//! Hopdash - a side-scrolling jump-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `render`: Frame snapshots and the abstract render sink
//! - `runner`: Fixed-rate game loop thread and cross-thread input intents
//!
//! The crate is a simulation core: it never paints anything itself. A
//! frontend supplies a [`render::RenderSink`] and forwards taps/clicks as
//! [`runner::JumpIntent`] requests.

pub mod render;
pub mod runner;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Target simulation rate
    pub const TICKS_PER_SECOND: u64 = 60;
    /// Per-tick time budget for the loop scheduler
    pub const TICK_BUDGET_MS: u64 = 1000 / TICKS_PER_SECOND;

    /// Player body size
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Horizontal position the player stands at for the whole session
    pub const PLAYER_START_X: f32 = 100.0;

    /// Downward acceleration per tick while airborne
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity applied by a jump (negative = up in screen coords)
    pub const JUMP_STRENGTH: f32 = -18.0;
    /// Height of the ground band at the bottom of the screen
    pub const GROUND_BAND_HEIGHT: f32 = 100.0;

    /// Coin defaults
    pub const COIN_RADIUS: f32 = 30.0;
    pub const COIN_SPEED: f32 = 5.0;
    /// Spin phase advance per tick in degrees (cosmetic)
    pub const COIN_SPIN_STEP: f32 = 5.0;
    /// Points awarded per collected coin
    pub const COIN_VALUE: u32 = 10;

    /// Enemy construction parameter ranges
    pub const ENEMY_RADIUS_MIN: f32 = 40.0;
    pub const ENEMY_RADIUS_MAX: f32 = 80.0;
    pub const ENEMY_SPEED_MIN: f32 = 1.0;
    pub const ENEMY_SPEED_MAX: f32 = 4.0;
    /// Points lost per tick of enemy contact
    pub const ENEMY_PENALTY: u32 = 5;

    /// Wander retarget cadence: base cooldown plus uniform jitter (ms)
    pub const WANDER_COOLDOWN_MS: u64 = 1000;
    pub const WANDER_JITTER_MS: u64 = 2000;
    /// Vertical wander range around the current position (± units)
    pub const WANDER_RANGE: f32 = 100.0;
    /// Per-tick easing factor toward the wander target
    pub const WANDER_EASING: f32 = 0.02;
    /// Pulsation phase advance per tick
    pub const PULSE_STEP: f32 = 0.1;
    /// Speed oscillation amplitude around the base speed
    pub const SPEED_WOBBLE: f32 = 0.5;

    /// Spawn gate cooldowns (ms)
    pub const COIN_SPAWN_COOLDOWN_MS: u64 = 2000;
    pub const ENEMY_SPAWN_COOLDOWN_MS: u64 = 3000;
    /// Vertical band kept clear of the screen edges when spawning
    pub const SPAWN_MARGIN: f32 = 100.0;
}
