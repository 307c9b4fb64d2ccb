//! Fly Warrior game logic: phase transitions, physics, spawning, collisions.

use super::game_state::{FlyWarriorGame, ObjectKind, Phase, WorldObject};
use super::tick::TickEvent;
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Fly,   // Space, Up arrow, or mouse press
    Start, // Enter ("Start" / "Play again")
    Menu,  // M (from the game over screen)
    Quit,  // Q, Esc, Ctrl-C (handled by the front end)
    Other, // Any other key
}

/// Process player input. Returns true if the game state changed.
pub fn process_input(game: &mut FlyWarriorGame, input: GameInput) -> bool {
    match input {
        GameInput::Fly => jump(game),
        GameInput::Start => match game.phase {
            Phase::Menu | Phase::GameOver => {
                start_game(game);
                true
            }
            Phase::Playing => false,
        },
        GameInput::Menu => {
            if game.phase == Phase::GameOver {
                show_menu(game);
                true
            } else {
                false
            }
        }
        GameInput::Quit | GameInput::Other => false,
    }
}

/// Begin a fresh run.
pub fn start_game(game: &mut FlyWarriorGame) {
    let from = game.phase;
    game.reset_run();
    game.phase = Phase::Playing;
    log::info!(
        "run started from {} (speed {:.1})",
        from.name(),
        game.game_speed
    );
}

/// Return to the title screen.
pub fn show_menu(game: &mut FlyWarriorGame) {
    log::debug!("{} -> {}", game.phase.name(), Phase::Menu.name());
    game.phase = Phase::Menu;
}

/// End the run. Score and coins keep their values for the game over screen.
pub fn show_game_over(game: &mut FlyWarriorGame) {
    game.phase = Phase::GameOver;
    log::info!(
        "game over after {} frames: score {}, coins {}",
        game.frame_count,
        game.score,
        game.coins
    );
}

/// Launch the warrior upward. Only works while playing and on the ground.
pub fn jump(game: &mut FlyWarriorGame) -> bool {
    if game.phase != Phase::Playing || game.warrior.is_jumping {
        return false;
    }
    game.warrior.velocity = game.config.jump_velocity;
    game.warrior.is_jumping = true;
    true
}

/// Integrate gravity and clamp the warrior to the ground.
pub fn update_warrior(game: &mut FlyWarriorGame, events: &mut Vec<TickEvent>) {
    if game.phase != Phase::Playing {
        return;
    }

    let warrior = &mut game.warrior;
    warrior.y += warrior.velocity;
    warrior.velocity += game.config.gravity;

    let rest_y = game.config.warrior_rest_y();
    if warrior.y >= rest_y {
        warrior.y = rest_y;
        warrior.velocity = 0.0;
        if warrior.is_jumping {
            warrior.is_jumping = false;
            events.push(TickEvent::Landed);
        }
    }
}

/// Scroll objects left, drop the ones that left the screen, then resolve
/// collisions with the warrior.
pub fn update_objects(game: &mut FlyWarriorGame, events: &mut Vec<TickEvent>) {
    if game.phase != Phase::Playing {
        return;
    }

    let speed = game.game_speed;
    for obj in &mut game.objects {
        obj.x -= speed;
    }
    game.objects.retain(|obj| !obj.is_off_screen());

    // Resolve overlaps in spawn order; the first bomb ends the run there
    let warrior_box = game.warrior.hitbox();
    let mut i = 0;
    while i < game.objects.len() {
        let obj = &game.objects[i];
        let kind = obj.kind;
        if !obj.hitbox().intersects(&warrior_box) {
            i += 1;
            continue;
        }
        match kind {
            ObjectKind::Coin => {
                game.objects.remove(i);
                game.coins += 1;
                game.score += game.config.score_per_coin;
                events.push(TickEvent::CoinCollected {
                    coins: game.coins,
                    message: format!("+{} coin!", game.config.score_per_coin),
                });
            }
            ObjectKind::Bomb => {
                show_game_over(game);
                events.push(TickEvent::BombHit {
                    score: game.score,
                    coins: game.coins,
                    message: format!("Boom! Final score {}", game.score),
                });
                return;
            }
        }
    }
}

/// Spawn a coin or bomb at the right edge once the spawn timer has elapsed.
///
/// The wait is re-rolled every frame as `interval + U[0,1) * jitter`, so
/// spawns land anywhere in that window with a bias towards its start.
pub fn spawn_object<R: Rng>(game: &mut FlyWarriorGame, rng: &mut R, events: &mut Vec<TickEvent>) {
    let due = match game.last_spawn_ms {
        None => true,
        Some(last) => {
            let threshold = game.config.spawn_interval_ms as f64
                + rng.gen::<f64>() * game.config.spawn_jitter_ms as f64;
            (game.clock_ms.saturating_sub(last)) as f64 > threshold
        }
    };
    if !due {
        return;
    }

    let config = &game.config;
    let kind = if rng.gen::<f64>() < config.coin_chance {
        ObjectKind::Coin
    } else {
        ObjectKind::Bomb
    };
    let size = kind.size(config);
    let y = match kind {
        ObjectKind::Coin => {
            config.ground_top() - config.object_ground_offset - rng.gen::<f64>() * config.coin_max_lift
        }
        // Bombs sit close to the ground
        ObjectKind::Bomb => config.ground_top() - config.object_ground_offset,
    };

    game.objects.push(WorldObject {
        x: config.world_width,
        y,
        width: size,
        height: size,
        kind,
    });
    game.last_spawn_ms = Some(game.clock_ms);

    log::debug!("spawned {} at y={:.1} (t={}ms)", kind.name(), y, game.clock_ms);
    events.push(TickEvent::ObjectSpawned { kind });
}

/// Advance one frame: physics, collisions, spawning, then score and speed.
pub fn update_game<R: Rng>(game: &mut FlyWarriorGame, rng: &mut R, events: &mut Vec<TickEvent>) {
    if game.phase != Phase::Playing {
        return;
    }
    game.frame_count += 1;

    update_warrior(game, events);
    update_objects(game, events);

    // A bomb ends the run before the frame's point is awarded
    if game.phase != Phase::Playing {
        return;
    }

    spawn_object(game, rng, events);

    game.score += game.config.score_per_frame;
    game.game_speed = (game.game_speed + game.config.speed_increment).min(game.config.max_speed);
    game.clock_ms += game.config.frame_ms;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn playing_game() -> FlyWarriorGame {
        let mut game = FlyWarriorGame::default();
        start_game(&mut game);
        game
    }

    fn bomb_at(game: &FlyWarriorGame, x: f64) -> WorldObject {
        let size = game.config.bomb_size;
        WorldObject {
            x,
            y: game.config.ground_top() - game.config.object_ground_offset,
            width: size,
            height: size,
            kind: ObjectKind::Bomb,
        }
    }

    fn coin_at(game: &FlyWarriorGame, x: f64, y: f64) -> WorldObject {
        let size = game.config.coin_size;
        WorldObject {
            x,
            y,
            width: size,
            height: size,
            kind: ObjectKind::Coin,
        }
    }

    // ── Input and phase tests ──

    #[test]
    fn test_start_from_menu() {
        let mut game = FlyWarriorGame::default();
        assert!(process_input(&mut game, GameInput::Start));
        assert_eq!(game.phase, Phase::Playing);
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut game = playing_game();
        game.score = 42;
        assert!(!process_input(&mut game, GameInput::Start));
        assert_eq!(game.score, 42);
    }

    #[test]
    fn test_play_again_resets_run() {
        let mut game = playing_game();
        game.score = 900;
        game.coins = 7;
        game.game_speed = 5.5;
        game.objects.push(bomb_at(&game, 300.0));
        show_game_over(&mut game);

        assert!(process_input(&mut game, GameInput::Start));
        assert_eq!(game.phase, Phase::Playing);
        assert_eq!(game.score, 0);
        assert_eq!(game.coins, 0);
        assert!(game.objects.is_empty());
        assert!((game.game_speed - 3.0).abs() < f64::EPSILON);
        assert!(game.last_spawn_ms.is_none());
    }

    #[test]
    fn test_menu_only_from_game_over() {
        let mut game = playing_game();
        assert!(!process_input(&mut game, GameInput::Menu));
        assert_eq!(game.phase, Phase::Playing);

        show_game_over(&mut game);
        assert!(process_input(&mut game, GameInput::Menu));
        assert_eq!(game.phase, Phase::Menu);
    }

    #[test]
    fn test_game_over_keeps_final_tallies() {
        let mut game = playing_game();
        game.score = 321;
        game.coins = 3;
        show_game_over(&mut game);
        assert_eq!(game.phase, Phase::GameOver);
        assert_eq!(game.score, 321);
        assert_eq!(game.coins, 3);
    }

    #[test]
    fn test_quit_and_other_do_nothing() {
        let mut game = playing_game();
        assert!(!process_input(&mut game, GameInput::Quit));
        assert!(!process_input(&mut game, GameInput::Other));
        assert_eq!(game.phase, Phase::Playing);
    }

    // ── Jump tests ──

    #[test]
    fn test_jump_sets_velocity() {
        let mut game = playing_game();
        assert!(process_input(&mut game, GameInput::Fly));
        assert!(game.warrior.is_jumping);
        assert!((game.warrior.velocity - (-15.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_double_jump() {
        let mut game = playing_game();
        assert!(jump(&mut game));
        game.warrior.velocity = -3.0;
        assert!(!jump(&mut game));
        assert!((game.warrior.velocity - (-3.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jump_ignored_outside_play() {
        let mut game = FlyWarriorGame::default();
        assert!(!jump(&mut game));
        assert!(!game.warrior.is_jumping);

        start_game(&mut game);
        show_game_over(&mut game);
        assert!(!jump(&mut game));
        assert!(!game.warrior.is_jumping);
    }

    // ── Physics tests ──

    #[test]
    fn test_warrior_position_then_velocity() {
        let mut game = playing_game();
        let mut events = Vec::new();
        jump(&mut game);

        update_warrior(&mut game, &mut events);
        // Position uses the velocity from before gravity is applied
        assert!((game.warrior.y - 225.0).abs() < 1e-9);
        assert!((game.warrior.velocity - (-14.2)).abs() < 1e-9);
    }

    #[test]
    fn test_warrior_lands_and_can_jump_again() {
        let mut game = playing_game();
        let mut events = Vec::new();
        jump(&mut game);

        let mut frames = 0;
        while game.warrior.is_jumping && frames < 200 {
            update_warrior(&mut game, &mut events);
            frames += 1;
            assert!(game.warrior.y <= game.config.warrior_rest_y());
        }

        assert!(!game.warrior.is_jumping);
        assert!((game.warrior.y - 240.0).abs() < f64::EPSILON);
        assert!(game.warrior.velocity.abs() < f64::EPSILON);
        assert!(events.contains(&TickEvent::Landed));
        // Roughly 2 * 15 / 0.8 frames of airtime
        assert!((35..=40).contains(&frames), "airtime was {frames} frames");
        assert!(jump(&mut game));
    }

    #[test]
    fn test_standing_warrior_stays_put() {
        let mut game = playing_game();
        let mut events = Vec::new();
        for _ in 0..10 {
            update_warrior(&mut game, &mut events);
        }
        assert!((game.warrior.y - 240.0).abs() < f64::EPSILON);
        assert!(events.is_empty());
    }

    // ── Object tests ──

    #[test]
    fn test_objects_scroll_by_game_speed() {
        let mut game = playing_game();
        let mut events = Vec::new();
        game.game_speed = 4.0;
        game.objects.push(bomb_at(&game, 600.0));

        update_objects(&mut game, &mut events);

        assert!((game.objects[0].x - 596.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_objects_removed_past_left_edge() {
        let mut game = playing_game();
        let mut events = Vec::new();
        // Coin high in the sky so it cannot hit the standing warrior
        game.objects.push(coin_at(&game, -20.0, 10.0));
        game.objects.push(coin_at(&game, -25.0 + 3.5, 10.0));

        update_objects(&mut game, &mut events);

        // First: -23 + 25 = 2 > 0 stays. Second: -24.5 + 25 = 0.5 stays.
        assert_eq!(game.objects.len(), 2);
        update_objects(&mut game, &mut events);
        // First: -26 + 25 <= 0 removed. Second: -27.5 + 25 <= 0 removed.
        assert!(game.objects.is_empty());
    }

    #[test]
    fn test_coin_collection() {
        let mut game = playing_game();
        let mut events = Vec::new();
        game.objects.push(coin_at(&game, 130.0, 270.0));

        update_objects(&mut game, &mut events);

        assert_eq!(game.coins, 1);
        assert_eq!(game.score, 10);
        assert!(game.objects.is_empty());
        assert!(matches!(
            events.as_slice(),
            [TickEvent::CoinCollected { coins: 1, .. }]
        ));
    }

    #[test]
    fn test_two_coins_same_frame_both_collected() {
        let mut game = playing_game();
        let mut events = Vec::new();
        game.objects.push(coin_at(&game, 110.0, 250.0));
        game.objects.push(coin_at(&game, 130.0, 280.0));

        update_objects(&mut game, &mut events);

        assert_eq!(game.coins, 2);
        assert_eq!(game.score, 20);
        assert!(game.objects.is_empty());
    }

    #[test]
    fn test_bomb_ends_run() {
        let mut game = playing_game();
        let mut events = Vec::new();
        game.score = 77;
        game.objects.push(bomb_at(&game, 150.0));

        update_objects(&mut game, &mut events);

        assert_eq!(game.phase, Phase::GameOver);
        assert_eq!(game.score, 77);
        assert!(matches!(
            events.last(),
            Some(TickEvent::BombHit { score: 77, .. })
        ));
    }

    #[test]
    fn test_bomb_before_coin_freezes_tallies() {
        let mut game = playing_game();
        let mut events = Vec::new();
        game.score = 100;
        game.objects.push(bomb_at(&game, 140.0));
        game.objects.push(coin_at(&game, 120.0, 270.0));

        update_objects(&mut game, &mut events);

        assert_eq!(game.phase, Phase::GameOver);
        assert_eq!(game.score, 100);
        assert_eq!(game.coins, 0);
        // The coin behind the bomb is never reached
        assert_eq!(game.objects.len(), 2);
        assert!(matches!(
            events.as_slice(),
            [TickEvent::BombHit {
                score: 100,
                coins: 0,
                ..
            }]
        ));
    }

    #[test]
    fn test_coin_before_bomb_counts() {
        let mut game = playing_game();
        let mut events = Vec::new();
        game.score = 100;
        game.objects.push(coin_at(&game, 120.0, 270.0));
        game.objects.push(bomb_at(&game, 140.0));

        update_objects(&mut game, &mut events);

        assert_eq!(game.phase, Phase::GameOver);
        assert_eq!(game.score, 110);
        assert_eq!(game.coins, 1);
        assert!(matches!(
            events.as_slice(),
            [
                TickEvent::CoinCollected { coins: 1, .. },
                TickEvent::BombHit {
                    score: 110,
                    coins: 1,
                    ..
                }
            ]
        ));
    }

    #[test]
    fn test_jumping_clears_bomb() {
        let mut game = playing_game();
        let mut events = Vec::new();
        game.objects.push(bomb_at(&game, 150.0));
        game.warrior.y = 150.0; // bottom at 230, bomb top at 290
        game.warrior.is_jumping = true;

        update_objects(&mut game, &mut events);

        assert_eq!(game.phase, Phase::Playing);
        assert_eq!(game.objects.len(), 1);
    }

    #[test]
    fn test_bomb_touching_edge_is_not_a_hit() {
        let mut game = playing_game();
        let mut events = Vec::new();
        game.game_speed = 0.0;
        // Bomb's left edge exactly at the warrior's right edge
        game.objects.push(bomb_at(&game, 160.0));

        update_objects(&mut game, &mut events);

        assert_eq!(game.phase, Phase::Playing);
    }

    // ── Spawn tests ──

    #[test]
    fn test_first_frame_spawns_immediately() {
        let mut game = playing_game();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut events = Vec::new();

        spawn_object(&mut game, &mut rng, &mut events);

        assert_eq!(game.objects.len(), 1);
        assert_eq!(game.last_spawn_ms, Some(0));
        let obj = &game.objects[0];
        assert!((obj.x - 800.0).abs() < f64::EPSILON);
        assert!(matches!(events[0], TickEvent::ObjectSpawned { .. }));
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let mut game = playing_game();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut events = Vec::new();
        game.last_spawn_ms = Some(1000);
        game.clock_ms = 2500; // exactly the minimum interval, not past it

        spawn_object(&mut game, &mut rng, &mut events);

        assert!(game.objects.is_empty());
        assert!(events.is_empty());
    }

    #[test]
    fn test_always_spawns_after_max_interval() {
        let mut game = playing_game();
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut events = Vec::new();
        game.last_spawn_ms = Some(0);
        game.clock_ms = 2501;

        spawn_object(&mut game, &mut rng, &mut events);

        assert_eq!(game.objects.len(), 1);
        assert_eq!(game.last_spawn_ms, Some(2501));
    }

    #[test]
    fn test_spawned_object_geometry() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut seen_coin = false;
        let mut seen_bomb = false;

        for _ in 0..200 {
            let mut game = playing_game();
            let mut events = Vec::new();
            spawn_object(&mut game, &mut rng, &mut events);
            let obj = &game.objects[0];
            match obj.kind {
                ObjectKind::Coin => {
                    seen_coin = true;
                    assert!((obj.width - 25.0).abs() < f64::EPSILON);
                    assert!((obj.height - 25.0).abs() < f64::EPSILON);
                    assert!(obj.y <= 290.0 && obj.y > 190.0, "coin y {}", obj.y);
                }
                ObjectKind::Bomb => {
                    seen_bomb = true;
                    assert!((obj.width - 30.0).abs() < f64::EPSILON);
                    assert!((obj.y - 290.0).abs() < f64::EPSILON);
                }
            }
        }
        assert!(seen_coin && seen_bomb);
    }

    #[test]
    fn test_coin_chance_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let only_bombs = GameConfig {
            coin_chance: 0.0,
            ..Default::default()
        };
        let mut game = FlyWarriorGame::new(only_bombs);
        start_game(&mut game);
        let mut events = Vec::new();
        spawn_object(&mut game, &mut rng, &mut events);
        assert_eq!(game.objects[0].kind, ObjectKind::Bomb);

        let only_coins = GameConfig {
            coin_chance: 1.0,
            ..Default::default()
        };
        let mut game = FlyWarriorGame::new(only_coins);
        start_game(&mut game);
        spawn_object(&mut game, &mut rng, &mut events);
        assert_eq!(game.objects[0].kind, ObjectKind::Coin);
    }

    // ── Frame tests ──

    #[test]
    fn test_frame_awards_point_and_speed() {
        let mut game = playing_game();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut events = Vec::new();

        update_game(&mut game, &mut rng, &mut events);

        assert_eq!(game.score, 1);
        assert!((game.game_speed - 3.001).abs() < 1e-9);
        assert_eq!(game.clock_ms, 16);
        assert_eq!(game.frame_count, 1);
        assert_eq!(game.objects.len(), 1);
    }

    #[test]
    fn test_speed_caps_at_max() {
        let mut game = playing_game();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut events = Vec::new();
        game.game_speed = 5.9995;
        game.objects.clear();
        game.last_spawn_ms = Some(0);

        update_game(&mut game, &mut rng, &mut events);
        assert!((game.game_speed - 6.0).abs() < f64::EPSILON);
        update_game(&mut game, &mut rng, &mut events);
        assert!((game.game_speed - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_collision_frame_awards_no_point() {
        let mut game = playing_game();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut events = Vec::new();
        game.score = 50;
        game.last_spawn_ms = Some(0);
        game.objects.push(bomb_at(&game, 140.0));

        update_game(&mut game, &mut rng, &mut events);

        assert_eq!(game.phase, Phase::GameOver);
        assert_eq!(game.score, 50);
        assert_eq!(game.clock_ms, 0);
    }

    #[test]
    fn test_update_game_ignored_outside_play() {
        let mut game = FlyWarriorGame::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut events = Vec::new();

        update_game(&mut game, &mut rng, &mut events);

        assert_eq!(game.score, 0);
        assert_eq!(game.frame_count, 0);
        assert!(game.objects.is_empty());
    }
}
