//! Fly Warrior data structures.
//!
//! A single warrior jumps under constant gravity while coins and bombs
//! scroll in from the right edge of the world.

use super::collision::Rect;
use super::config::GameConfig;

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Playing => "playing",
            Self::GameOver => "game over",
        }
    }
}

/// The player-controlled character.
#[derive(Debug, Clone, PartialEq)]
pub struct Warrior {
    pub x: f64,
    /// Top edge of the hitbox.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// True from the jump impulse until the warrior lands again.
    pub is_jumping: bool,
    /// Vertical velocity in units/frame (negative = upward).
    pub velocity: f64,
}

impl Warrior {
    /// A warrior standing on the ground.
    pub fn on_ground(config: &GameConfig) -> Self {
        Self {
            x: config.warrior_x,
            y: config.warrior_rest_y(),
            width: config.warrior_width,
            height: config.warrior_height,
            is_jumping: false,
            velocity: 0.0,
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Kinds of scrolling objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Collect for points.
    Coin,
    /// Touching one ends the run.
    Bomb,
}

impl ObjectKind {
    /// Side length of the square hitbox.
    pub fn size(&self, config: &GameConfig) -> f64 {
        match self {
            Self::Coin => config.coin_size,
            Self::Bomb => config.bomb_size,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Coin => "coin",
            Self::Bomb => "bomb",
        }
    }
}

/// A coin or bomb in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldObject {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: ObjectKind,
}

impl WorldObject {
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// True once the object has scrolled fully past the left edge.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width <= 0.0
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlyWarriorGame {
    pub phase: Phase,
    pub config: GameConfig,

    // -- Actors --
    pub warrior: Warrior,
    /// Active coins and bombs, oldest first.
    pub objects: Vec<WorldObject>,

    // -- Scoring --
    pub score: u64,
    pub coins: u64,
    /// Current scroll speed in units/frame (increases over time).
    pub game_speed: f64,

    // -- Timing --
    /// Game clock in milliseconds; advances one frame length per frame.
    pub clock_ms: u64,
    /// Clock value of the most recent spawn. `None` until the first spawn
    /// of a run, which makes the first frame spawn immediately.
    pub last_spawn_ms: Option<u64>,
    /// Sub-frame time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Frames stepped in the current run.
    pub frame_count: u64,
}

impl FlyWarriorGame {
    /// Create a game sitting on the menu screen.
    pub fn new(config: GameConfig) -> Self {
        let warrior = Warrior::on_ground(&config);
        let game_speed = config.initial_speed;
        Self {
            phase: Phase::Menu,
            config,

            warrior,
            objects: Vec::new(),

            score: 0,
            coins: 0,
            game_speed,

            clock_ms: 0,
            last_spawn_ms: None,
            accumulated_time_ms: 0,
            frame_count: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Reset every per-run field, keeping the phase untouched.
    pub(crate) fn reset_run(&mut self) {
        self.warrior = Warrior::on_ground(&self.config);
        self.objects.clear();
        self.score = 0;
        self.coins = 0;
        self.game_speed = self.config.initial_speed;
        self.clock_ms = 0;
        self.last_spawn_ms = None;
        self.accumulated_time_ms = 0;
        self.frame_count = 0;
    }

    /// Fraction of the speed range covered so far (0.0 at start, 1.0 at cap).
    pub fn speed_fraction(&self) -> f64 {
        let range = self.config.max_speed - self.config.initial_speed;
        if range <= 0.0 {
            return 1.0;
        }
        ((self.game_speed - self.config.initial_speed) / range).clamp(0.0, 1.0)
    }
}

impl Default for FlyWarriorGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = FlyWarriorGame::default();
        assert_eq!(game.phase, Phase::Menu);
        assert_eq!(game.score, 0);
        assert_eq!(game.coins, 0);
        assert!(game.objects.is_empty());
        assert!(game.last_spawn_ms.is_none());
        assert!((game.game_speed - 3.0).abs() < f64::EPSILON);
        assert!(!game.is_playing());
    }

    #[test]
    fn test_warrior_starts_on_ground() {
        let game = FlyWarriorGame::default();
        let w = &game.warrior;
        assert!((w.x - 100.0).abs() < f64::EPSILON);
        assert!((w.y - 240.0).abs() < f64::EPSILON);
        assert!((w.width - 60.0).abs() < f64::EPSILON);
        assert!((w.height - 80.0).abs() < f64::EPSILON);
        assert!(!w.is_jumping);
        assert!(w.velocity.abs() < f64::EPSILON);
    }

    #[test]
    fn test_object_sizes() {
        let config = GameConfig::default();
        assert!((ObjectKind::Coin.size(&config) - 25.0).abs() < f64::EPSILON);
        assert!((ObjectKind::Bomb.size(&config) - 30.0).abs() < f64::EPSILON);
        assert_eq!(ObjectKind::Coin.name(), "coin");
        assert_eq!(ObjectKind::Bomb.name(), "bomb");
    }

    #[test]
    fn test_off_screen() {
        let mut obj = WorldObject {
            x: 0.0,
            y: 290.0,
            width: 30.0,
            height: 30.0,
            kind: ObjectKind::Bomb,
        };
        assert!(!obj.is_off_screen());
        obj.x = -29.0;
        assert!(!obj.is_off_screen());
        obj.x = -30.0;
        assert!(obj.is_off_screen());
    }

    #[test]
    fn test_reset_run_clears_progress() {
        let mut game = FlyWarriorGame::default();
        game.score = 500;
        game.coins = 4;
        game.game_speed = 5.0;
        game.clock_ms = 9000;
        game.last_spawn_ms = Some(8000);
        game.warrior.y = 100.0;
        game.warrior.is_jumping = true;
        game.objects.push(WorldObject {
            x: 400.0,
            y: 290.0,
            width: 30.0,
            height: 30.0,
            kind: ObjectKind::Bomb,
        });

        game.reset_run();

        assert_eq!(game.score, 0);
        assert_eq!(game.coins, 0);
        assert!(game.objects.is_empty());
        assert!(game.last_spawn_ms.is_none());
        assert_eq!(game.clock_ms, 0);
        assert_eq!(game.warrior, Warrior::on_ground(&game.config));
        assert!((game.game_speed - game.config.initial_speed).abs() < f64::EPSILON);
    }

    #[test]
    fn test_speed_fraction() {
        let mut game = FlyWarriorGame::default();
        assert!(game.speed_fraction().abs() < f64::EPSILON);
        game.game_speed = 4.5;
        assert!((game.speed_fraction() - 0.5).abs() < 1e-9);
        game.game_speed = 6.0;
        assert!((game.speed_fraction() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::Menu.name(), "menu");
        assert_eq!(Phase::Playing.name(), "playing");
        assert_eq!(Phase::GameOver.name(), "game over");
    }
}
