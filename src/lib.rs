//! Energy Rush - a grow-to-absorb arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship, enemies, collisions, session state)
//! - `config`: Arena geometry and pacing parameters
//!
//! The player's ship sits at the arena center, inflating while a press is
//! held and deflating after release. Enemies spawn on a ring and drift
//! straight at the center. Touching an inflating ship feeds it points;
//! touching a resting one ends the run.

pub mod config;
pub mod sim;

pub use config::SimConfig;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation timestep (30 ms clock)
    pub const TICK_DT: f32 = 0.03;
    /// Cap on catch-up substeps per frame so a slow frame cannot snowball
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ship defaults
    pub const SHIP_START_WIDTH: f32 = 100.0;
    pub const MIN_SHIP_WIDTH: f32 = 20.0;
    /// Diameter gained per second while the press is held
    pub const GROWTH_RATE: f32 = 8.0;
    /// Diameter lost per second after release
    pub const SHRINK_RATE: f32 = 16.0;
    /// Energy drained per second while inflating
    pub const ENERGY_DRAIN: f32 = 0.05;
    /// Energy regained per second after release
    pub const ENERGY_RECHARGE: f32 = 0.03;
    /// Faster recharge while parked at the width floor
    pub const ENERGY_RECHARGE_RESTING: f32 = 0.05;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 100.0;
    pub const ENEMY_SPEED: f32 = 50.0;
    /// Width of each distance band worth one extra point
    pub const PROXIMITY_BAND: f32 = 50.0;
    /// Proximity score cap
    pub const PROXIMITY_MAX: u32 = 5;

    /// Default upper bound of the spawn-delay draw, seconds.
    /// Delays are uniform in [0, rate), so the mean gap is half this.
    pub const DEFAULT_SPAWN_RATE: f32 = 3.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
