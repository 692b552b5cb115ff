//! Frame snapshots and the abstract render sink
//!
//! The simulation never draws. Each tick the loop captures a [`Frame`] from
//! the world and hands it to a [`RenderSink`]. Cosmetic values (coin spin,
//! the enemy's breathing radius) are derived here from simulation phases, so
//! collision geometry stays decoupled from animation.

use serde::Serialize;
use thiserror::Error;

use crate::sim::{PlayerState, Rgb, World};

/// Breathing amplitude added to the enemy base radius (render only)
const PULSE_AMPLITUDE: f32 = 3.0;

/// Render target failures. All are transient: the loop logs them and keeps
/// ticking, and the world is never left half-updated by one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("render target could not be acquired")]
    TargetUnavailable,
    #[error("render target could not be released")]
    ReleaseFailed,
}

/// Player snapshot for drawing
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerSprite {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub grounded: bool,
}

/// Coin snapshot; `rotation` is the spin phase in degrees
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoinSprite {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub rotation: f32,
}

/// Enemy snapshot; `radius` is the animated render radius, not the
/// collision radius
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnemySprite {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
    pub pulsation: f32,
}

/// Everything a sink needs to paint one tick
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub player: PlayerSprite,
    pub coins: Vec<CoinSprite>,
    pub enemies: Vec<EnemySprite>,
    pub score: u32,
}

impl Frame {
    /// Capture a drawable snapshot of the current world state
    pub fn capture(world: &World) -> Self {
        Self {
            width: world.screen_width,
            height: world.screen_height,
            player: PlayerSprite {
                x: world.player.pos.x,
                y: world.player.pos.y,
                width: world.player.size.x,
                height: world.player.size.y,
                grounded: world.player.state == PlayerState::Grounded,
            },
            coins: world
                .coins
                .iter()
                .map(|c| CoinSprite {
                    x: c.pos.x,
                    y: c.pos.y,
                    radius: c.radius,
                    rotation: c.rotation,
                })
                .collect(),
            enemies: world
                .enemies
                .iter()
                .map(|e| EnemySprite {
                    x: e.pos.x,
                    y: e.pos.y,
                    radius: e.radius + e.pulsation.sin() * PULSE_AMPLITUDE,
                    color: e.color,
                    pulsation: e.pulsation,
                })
                .collect(),
            score: world.score,
        }
    }
}

/// Abstract drawing surface driven by the game loop.
///
/// `acquire`/`release` bracket each frame like a lock/unlock pair on the
/// underlying surface. Either may fail transiently; the loop tolerates both
/// and still advances the simulation.
pub trait RenderSink: Send {
    fn acquire(&mut self) -> Result<(), RenderError>;
    fn draw(&mut self, frame: &Frame);
    fn release(&mut self) -> Result<(), RenderError>;
}

/// Sink that discards every frame. Useful for tests and headless runs.
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn acquire(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn draw(&mut self, _frame: &Frame) {}

    fn release(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}
