//! A simple bot that plays the game by jumping over bombs.

use crate::core::game_state::{FlyWarriorGame, ObjectKind};

/// Jump when the nearest bomb is between `min_lead` and `max_lead` frames
/// away from the warrior's leading edge.
///
/// With the default physics the warrior is high enough to clear a bomb
/// from its third airborne frame on, so a two-to-three frame lead clears a
/// single bomb at any speed in range.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    pub min_lead: f64,
    pub max_lead: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            min_lead: 2.0,
            max_lead: 3.0,
        }
    }
}

impl Autopilot {
    /// Frames until the nearest bomb ahead reaches the warrior, if any.
    pub fn frames_to_next_bomb(&self, game: &FlyWarriorGame) -> Option<f64> {
        if game.game_speed <= 0.0 {
            return None;
        }
        let warrior_right = game.warrior.x + game.warrior.width;
        game.objects
            .iter()
            .filter(|o| o.kind == ObjectKind::Bomb && o.x >= warrior_right)
            .map(|o| (o.x - warrior_right) / game.game_speed)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Whether the bot wants to jump before the next frame.
    pub fn should_jump(&self, game: &FlyWarriorGame) -> bool {
        if !game.is_playing() || game.warrior.is_jumping {
            return false;
        }
        match self.frames_to_next_bomb(game) {
            Some(lead) => lead >= self.min_lead && lead < self.max_lead,
            None => false,
        }
    }
}
