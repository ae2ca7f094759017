//! Game state and core simulation types
//!
//! All state that must be persisted for determinism lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::SpawnScheduler;
use crate::config::SimConfig;
use crate::consts::*;
use crate::polar_to_cartesian;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship alive, enemies inbound
    Running,
    /// Run ended by a lethal contact
    GameOver,
}

/// Milestones the hosting shell may react to (sound, score label, shutdown).
/// Fire-and-forget: the sim queues them and never waits on a consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A ship entered the arena
    ShipSpawned,
    /// An inflating ship consumed an enemy
    EnemyAbsorbed { score_delta: u32 },
    /// A contact while not inflating ended the run
    ShipDestroyed { final_score: u64 },
}

/// The player's ship: a circle parked at the arena center that inflates
/// while the press is held and deflates after release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Visual/collision diameter
    pub width: f32,
    /// Diameter floor; the ship never deflates past this
    pub min_width: f32,
    /// Diameter change per second (positive while the press is held)
    pub growth: f32,
    /// Stored energy in [0, 1]; inflation drains it, rest restores it
    pub energy: f32,
    /// Energy change per second
    pub energy_rate: f32,
    /// World position (the ship does not move)
    pub pos: Vec2,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            width: SHIP_START_WIDTH,
            min_width: MIN_SHIP_WIDTH,
            growth: 0.0,
            energy: 1.0,
            energy_rate: 0.0,
            pos,
        }
    }

    /// Press held: inflate, draining energy
    pub fn press_start(&mut self) {
        self.growth = GROWTH_RATE;
        self.energy_rate = -ENERGY_DRAIN;
    }

    /// Press released: deflate, recharging
    pub fn press_end(&mut self) {
        self.growth = -SHRINK_RATE;
        self.energy_rate = ENERGY_RECHARGE;
    }

    /// Whether a contact this tick absorbs rather than kills
    #[inline]
    pub fn is_expanding(&self) -> bool {
        self.growth > 0.0
    }

    /// Advance one tick.
    ///
    /// The clamp rules must run in this order: starvation first (an
    /// exhausted ship freezes mid-size, it does not start deflating), then
    /// the width floor (which forces a recharge), then the energy cap.
    pub fn update(&mut self, dt: f32) {
        self.width += self.growth * dt;
        self.energy += self.energy_rate * dt;

        if self.energy <= 0.0 && self.growth > 0.0 {
            self.energy = 0.0;
            self.growth = 0.0;
            self.energy_rate = 0.0;
        }

        if self.width <= self.min_width {
            self.width = self.min_width;
            self.growth = 0.0;
            self.energy_rate = ENERGY_RECHARGE_RESTING;
        }

        if self.energy >= 1.0 {
            self.energy = 1.0;
            self.energy_rate = 0.0;
        }
    }
}

/// An inbound drifter. Velocity is fixed at spawn; no steering, no
/// acceleration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    /// Constant velocity, aimed at the arena center at spawn time
    pub vel: Vec2,
    /// Points awarded if absorbed, rescored from the current center distance
    pub proximity_score: u32,
}

impl Enemy {
    /// Place a new enemy on the spawn ring, aimed at the center.
    pub fn spawn(id: u32, center: Vec2, spawn_radius: f32, angle: f32) -> Self {
        let pos = center + polar_to_cartesian(spawn_radius, angle);
        let vel = (center - pos).normalize_or_zero() * ENEMY_SPEED;
        Self {
            id,
            pos,
            vel,
            proximity_score: proximity_value(spawn_radius),
        }
    }

    /// Advance one tick: straight-line drift, then rescore. The score can
    /// fall on the way in and rise again past the center.
    pub fn advance(&mut self, dt: f32, center: Vec2) {
        self.pos += self.vel * dt;
        self.proximity_score = proximity_value(self.pos.distance(center));
    }
}

/// Distance-derived point value: one point per distance band out from the
/// center, capped.
#[inline]
pub fn proximity_value(distance_from_center: f32) -> u32 {
    ((distance_from_center / PROXIMITY_BAND) as u32 + 1).min(PROXIMITY_MAX)
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; spawn angles and delays draw from here only
    pub rng: Pcg32,
    /// Arena geometry and pacing
    pub config: SimConfig,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Cumulative score; only absorbs raise it
    pub score: u64,
    /// The ship, until a lethal contact takes it
    pub ship: Option<Ship>,
    /// Active enemies (sorted by id for determinism)
    pub enemies: Vec<Enemy>,
    /// Spawn pacing state
    pub spawner: SpawnScheduler,
    /// Current phase
    pub phase: GamePhase,
    /// Milestones queued for the shell, drained via `take_events`
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let config = config.sanitize();
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawner = SpawnScheduler::new(config.spawn_rate, &mut rng);
        let ship = Ship::new(config.center);

        log::info!("session start, seed {seed:#x}");

        Self {
            seed,
            rng,
            config,
            time_ticks: 0,
            score: 0,
            ship: Some(ship),
            enemies: Vec::new(),
            spawner,
            phase: GamePhase::Running,
            events: vec![GameEvent::ShipSpawned],
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one enemy at a uniformly random angle on the spawn ring
    pub fn spawn_enemy(&mut self) {
        let id = self.next_entity_id();
        let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
        let enemy = Enemy::spawn(id, self.config.center, self.config.spawn_radius, angle);
        log::debug!("enemy {id} spawned at angle {angle:.2}");
        self.enemies.push(enemy);
    }

    /// Drain queued milestones for the shell
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
