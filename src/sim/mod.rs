//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Clock supplied by the caller in milliseconds
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use state::{Coin, Enemy, Player, PlayerState, Rgb, World, ENEMY_PALETTE};
pub use tick::{tick, TickInput};
