//! Energy Rush entry point
//!
//! Headless demo: drives the simulation in real time at a fixed timestep
//! with a simple auto-player and logs milestones. A rendering or audio host
//! would hook the same `tick` + `take_events` surface.

use std::time::{Duration, Instant};

use energy_rush::SimConfig;
use energy_rush::consts::{MAX_SUBSTEPS, TICK_DT};
use energy_rush::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xE17E);

    let mut state = GameState::new(SimConfig::default(), seed);
    let mut holding = false;

    // Two minutes of play, tops
    let max_ticks = (120.0 / TICK_DT) as u64;

    let mut last = Instant::now();
    let mut accumulator = 0.0f32;

    while state.phase == GamePhase::Running && state.time_ticks < max_ticks {
        let now = Instant::now();
        let frame = now.duration_since(last).as_secs_f32().min(0.1);
        last = now;
        accumulator += frame;

        let mut substeps = 0;
        while accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            let input = auto_player(&state, &mut holding);
            tick(&mut state, &input, TICK_DT);
            accumulator -= TICK_DT;
            substeps += 1;
        }

        for event in state.take_events() {
            match event {
                GameEvent::ShipSpawned => log::info!("ship ready"),
                GameEvent::EnemyAbsorbed { score_delta } => {
                    log::info!("absorbed +{score_delta}, score {}", state.score);
                }
                GameEvent::ShipDestroyed { final_score } => {
                    log::info!("game over, final score {final_score}");
                }
            }
        }

        std::thread::sleep(Duration::from_millis(2));
    }

    println!("final score: {}", state.score);
}

/// Hold the press while an inbound enemy is close and energy remains,
/// release otherwise. Crude, but it survives long enough to show scoring.
fn auto_player(state: &GameState, holding: &mut bool) -> TickInput {
    let mut input = TickInput::default();

    let Some(ship) = state.ship.as_ref() else {
        return input;
    };

    let nearest = state
        .enemies
        .iter()
        .map(|e| e.pos.distance(ship.pos))
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let want_hold = matches!(nearest, Some(d) if d < 180.0) && ship.energy > 0.1;

    if want_hold && !*holding {
        input.press_start = true;
        *holding = true;
    } else if !want_hold && *holding {
        input.press_end = true;
        *holding = false;
    }

    input
}
