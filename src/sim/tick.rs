//! Fixed timestep simulation tick
//!
//! Core loop that advances a session deterministically: ship first, then
//! enemy drift, then contact resolution, then spawn pacing.

use super::collision::{ContactOutcome, classify_contact, ship_enemy_contact};
use super::state::{GameEvent, GamePhase, GameState};

/// Input signals for a single tick (deterministic)
///
/// Press transitions arrive as edge signals from the host's input layer:
/// at most one of each per physical press, start before its matching end.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Press began this tick
    pub press_start: bool,
    /// Press ended this tick
    pub press_end: bool,
}

/// Advance the session by one timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // A finished run stays frozen: no updates, no scoring, no spawns
    if state.phase == GamePhase::GameOver {
        return;
    }

    // dt is wall-clock elapsed from the host; negative elapsed is rejected
    let dt = dt.max(0.0);

    state.time_ticks += 1;

    // Ship: deliver press edges, then integrate
    if let Some(ship) = state.ship.as_mut() {
        if input.press_start {
            ship.press_start();
        }
        if input.press_end {
            ship.press_end();
        }
        ship.update(dt);
    }

    // Enemies: straight-line drift + rescore
    let center = state.config.center;
    for enemy in &mut state.enemies {
        enemy.advance(dt, center);
    }

    // Strays that cleared the despawn ring are gone for good
    let despawn_radius = state.config.despawn_radius;
    state.enemies.retain(|e| {
        let keep = e.pos.distance(center) <= despawn_radius;
        if !keep {
            log::debug!("enemy {} drifted out, despawning", e.id);
        }
        keep
    });

    resolve_contacts(state);

    // Spawn pacing; a lethal contact above also stops the spawn chain
    if state.phase == GamePhase::Running && state.spawner.advance(dt, &mut state.rng) {
        state.spawn_enemy();
    }

    debug_assert_eq!(state.phase == GamePhase::Running, state.ship.is_some());
}

/// Resolve ship/enemy contacts in id order.
///
/// An absorb removes one enemy and banks its proximity score. A lethal
/// contact takes the ship; the rest of the set is skipped (there is nothing
/// left to hit) and stays in place.
fn resolve_contacts(state: &mut GameState) {
    let mut absorbed: Vec<u32> = Vec::new();

    for i in 0..state.enemies.len() {
        let Some(ship) = state.ship.as_ref() else {
            break;
        };
        let enemy = &state.enemies[i];
        if !ship_enemy_contact(enemy.pos, ship.pos, ship.width) {
            continue;
        }

        match classify_contact(ship) {
            ContactOutcome::Absorb => {
                let id = enemy.id;
                let delta = enemy.proximity_score;
                state.score += u64::from(delta);
                state
                    .events
                    .push(GameEvent::EnemyAbsorbed { score_delta: delta });
                log::info!("enemy {id} absorbed (+{delta}), score {}", state.score);
                absorbed.push(id);
            }
            ContactOutcome::Lethal => {
                state.ship = None;
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::ShipDestroyed {
                    final_score: state.score,
                });
                log::info!("ship destroyed, final score {}", state.score);
            }
        }
    }

    state.enemies.retain(|e| !absorbed.contains(&e.id));
}
