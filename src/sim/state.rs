//! Game state and core simulation types
//!
//! Entities carry only the state the simulation needs; cosmetic values
//! (coin spin, enemy pulsation, color tag) are stored as phases or tags the
//! render layer interprets. Collision geometry never depends on them.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// The two player physics states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Standing on the ground band, able to jump
    Grounded,
    /// In flight under gravity; jump requests are ignored
    Airborne,
}

/// The player avatar: a rectangle under gravity/jump physics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_y: f32,
    pub state: PlayerState,
}

impl Player {
    /// Create the player standing on the ground for the given screen height
    pub fn new(screen_height: f32) -> Self {
        let mut player = Self {
            pos: Vec2::new(PLAYER_START_X, 0.0),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            state: PlayerState::Grounded,
        };
        player.pos.y = player.ground_level(screen_height);
        player
    }

    /// Y coordinate of the player's top edge when standing on the ground.
    /// Recomputed from the live screen height so resizes take effect on the
    /// next tick.
    pub fn ground_level(&self, screen_height: f32) -> f32 {
        screen_height - GROUND_BAND_HEIGHT - self.size.y
    }

    /// Start a jump. No-op while airborne: there are no double jumps.
    pub fn jump(&mut self) {
        if self.state == PlayerState::Grounded {
            self.vel_y = JUMP_STRENGTH;
            self.state = PlayerState::Airborne;
        }
    }

    /// Advance one tick of gravity integration and ground clamping
    pub fn update(&mut self, screen_height: f32) {
        let ground = self.ground_level(screen_height);

        if self.state == PlayerState::Airborne {
            self.vel_y += GRAVITY;
        }
        self.pos.y += self.vel_y;

        if self.pos.y >= ground {
            self.pos.y = ground;
            self.vel_y = 0.0;
            self.state = PlayerState::Grounded;
        } else {
            self.state = PlayerState::Airborne;
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.pos, self.size)
    }
}

/// A collectible coin drifting left at constant speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    /// Center position
    pub pos: Vec2,
    pub radius: f32,
    /// Spin phase in degrees, wraps at 360. Render hint only.
    pub rotation: f32,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: COIN_RADIUS,
            rotation: 0.0,
        }
    }

    /// Drift left and advance the cosmetic spin phase
    pub fn update(&mut self) {
        self.pos.x -= COIN_SPEED;
        self.rotation = (self.rotation + COIN_SPIN_STEP) % 360.0;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_circle(self.pos, self.radius)
    }

    /// True once the coin has fully crossed the left screen edge
    pub fn off_screen(&self) -> bool {
        self.pos.x < -self.radius
    }
}

/// Render-hint color tag, assigned once at spawn and never read by logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Fixed 8-color enemy palette
pub const ENEMY_PALETTE: [Rgb; 8] = [
    Rgb(255, 100, 100), // red
    Rgb(100, 255, 100), // green
    Rgb(100, 100, 255), // blue
    Rgb(255, 255, 100), // yellow
    Rgb(255, 100, 255), // magenta
    Rgb(100, 255, 255), // cyan
    Rgb(255, 150, 100), // orange
    Rgb(150, 100, 255), // purple
];

/// Uniform pick from the static palette
pub fn palette_color<R: Rng>(rng: &mut R) -> Rgb {
    ENEMY_PALETTE[rng.random_range(0..ENEMY_PALETTE.len())]
}

/// A drifting hazard that wanders vertically and oscillates in speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Center position
    pub pos: Vec2,
    /// Base radius; collision geometry always uses this one
    pub radius: f32,
    pub base_speed: f32,
    /// Current leftward speed, oscillating around `base_speed`
    pub speed: f32,
    pub color: Rgb,
    /// Vertical position the enemy eases toward
    target_y: f32,
    vel_y: f32,
    /// Timestamp of the last wander retarget (ms)
    last_retarget_ms: u64,
    /// Pulsation phase driving speed oscillation and the render-time
    /// breathing radius
    pub pulsation: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, radius: f32, speed: f32, color: Rgb, now_ms: u64) -> Self {
        Self {
            pos,
            radius,
            base_speed: speed,
            speed,
            color,
            target_y: pos.y,
            vel_y: 0.0,
            last_retarget_ms: now_ms,
            pulsation: 0.0,
        }
    }

    /// Advance drift, vertical wander, and speed oscillation one tick
    pub fn update<R: Rng>(&mut self, now_ms: u64, rng: &mut R) {
        self.pos.x -= self.speed;
        self.pulsation += PULSE_STEP;

        // Re-pick the wander target every 1000-3000 ms
        let jitter = rng.random_range(0..WANDER_JITTER_MS);
        if now_ms.saturating_sub(self.last_retarget_ms) > WANDER_COOLDOWN_MS + jitter {
            self.target_y = self.pos.y + (rng.random::<f32>() - 0.5) * (WANDER_RANGE * 2.0);
            self.last_retarget_ms = now_ms;
        }

        // Ease toward the target rather than snapping to it
        self.vel_y = (self.target_y - self.pos.y) * WANDER_EASING;
        self.pos.y += self.vel_y;

        // Speed oscillation bounded to base_speed ± SPEED_WOBBLE
        self.speed = self.base_speed + (self.pulsation * 0.5).sin() * SPEED_WOBBLE;
    }

    /// Collision box from the base radius, not the pulsating render radius
    pub fn bounds(&self) -> Aabb {
        Aabb::from_circle(self.pos, self.radius)
    }

    /// True once the enemy has fully crossed the left screen edge
    pub fn off_screen(&self) -> bool {
        self.pos.x < -self.radius
    }
}

/// Complete session state, exclusively owned by the game loop thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Session seed for reproducibility
    pub seed: u64,
    pub screen_width: f32,
    pub screen_height: f32,
    pub player: Player,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) last_coin_spawn_ms: u64,
    pub(crate) last_enemy_spawn_ms: u64,
    pub(crate) rng: Pcg32,
}

impl World {
    /// Create a fresh session with the player standing on the ground
    pub fn new(seed: u64, screen_width: f32, screen_height: f32) -> Self {
        Self {
            seed,
            screen_width,
            screen_height,
            player: Player::new(screen_height),
            coins: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            time_ticks: 0,
            last_coin_spawn_ms: 0,
            last_enemy_spawn_ms: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Apply new screen dimensions. Ground level and spawn bands pick up
    /// the change on the next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
    }
}
