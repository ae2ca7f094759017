//! Contact testing and outcome classification
//!
//! Ship and enemies are all circles, so contact reduces to a center-distance
//! check against half the sum of the two diameters. What a contact *means*
//! depends solely on the ship: inflating absorbs, anything else is lethal.

use glam::Vec2;

use super::state::Ship;
use crate::consts::ENEMY_WIDTH;

/// How a ship/enemy contact resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Inflating ship swallows the enemy and banks its proximity score
    Absorb,
    /// Resting or deflating ship is destroyed; the run ends
    Lethal,
}

/// Contact distance for a ship of the given diameter
#[inline]
pub fn contact_threshold(ship_width: f32) -> f32 {
    (ENEMY_WIDTH + ship_width) / 2.0
}

/// True when the enemy overlaps the ship
#[inline]
pub fn ship_enemy_contact(enemy_pos: Vec2, ship_pos: Vec2, ship_width: f32) -> bool {
    enemy_pos.distance(ship_pos) < contact_threshold(ship_width)
}

/// Absorb while the ship is inflating, lethal the rest of the time
#[inline]
pub fn classify_contact(ship: &Ship) -> ContactOutcome {
    if ship.is_expanding() {
        ContactOutcome::Absorb
    } else {
        ContactOutcome::Lethal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_boundary() {
        // Ship diameter 100 + enemy diameter 100 -> threshold 100
        let ship_pos = Vec2::ZERO;
        assert!(ship_enemy_contact(Vec2::new(99.0, 0.0), ship_pos, 100.0));
        assert!(!ship_enemy_contact(Vec2::new(100.0, 0.0), ship_pos, 100.0));
        assert!(!ship_enemy_contact(Vec2::new(101.0, 0.0), ship_pos, 100.0));
    }

    #[test]
    fn test_threshold_grows_with_ship() {
        let far = Vec2::new(140.0, 0.0);
        assert!(!ship_enemy_contact(far, Vec2::ZERO, 100.0));
        assert!(ship_enemy_contact(far, Vec2::ZERO, 200.0));
    }

    #[test]
    fn test_classify_follows_growth_sign() {
        let mut ship = Ship::new(Vec2::ZERO);
        assert_eq!(classify_contact(&ship), ContactOutcome::Lethal);

        ship.press_start();
        assert_eq!(classify_contact(&ship), ContactOutcome::Absorb);

        ship.press_end();
        assert_eq!(classify_contact(&ship), ContactOutcome::Lethal);
    }
}
