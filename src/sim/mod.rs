//! Deterministic simulation module
//!
//! All gameplay rules live here, and they must stay pure and deterministic:
//! every random draw comes from the seeded session RNG, enemies iterate in
//! id order, and nothing in this module touches rendering, audio, or the
//! platform clock. Two sessions fed the same seed and input trace are
//! bit-identical.

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{ContactOutcome, classify_contact, contact_threshold, ship_enemy_contact};
pub use spawn::SpawnScheduler;
pub use state::{Enemy, GameEvent, GamePhase, GameState, Ship, proximity_value};
pub use tick::{TickInput, tick};
