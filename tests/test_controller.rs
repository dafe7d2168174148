use space_catcher::compute::{init_state, start_run};
use space_catcher::controller::GameController;
use space_catcher::entities::{Facing, FallingEntity, GameState, GameStatus, Laser, TechKind};
use space_catcher::input::Key;
use space_catcher::theme::Theme;

use rand::rngs::mock::StepRng;

fn controller() -> GameController<StepRng> {
    // Rolls never clear the spawn thresholds
    GameController::new(Theme::SpaceQuest, StepRng::new(u64::MAX, 0))
}

#[test]
fn starts_on_menu_and_does_not_tick() {
    let mut c = controller();
    assert_eq!(c.state().status, GameStatus::Menu);
    assert!(!c.tick());
    assert_eq!(c.state().frame, 0);
}

#[test]
fn start_enters_playing() {
    let mut c = controller();
    c.start();
    assert!(c.is_playing());
    assert_eq!(c.state().lives, 3);
    assert!(c.tick());
    assert_eq!(c.state().frame, 1);
}

#[test]
fn start_is_ignored_mid_run() {
    let mut c = controller();
    c.start();
    c.key_down(Key::Left);
    c.tick();
    c.start();
    assert_eq!(c.state().ship.x, 47.0);
    assert_eq!(c.state().frame, 1);
}

#[test]
fn held_direction_moves_every_tick() {
    let mut c = controller();
    c.start();
    c.key_down(Key::Left);
    c.tick();
    c.tick();
    assert_eq!(c.state().ship.x, 44.0);
    assert_eq!(c.state().ship.facing, Facing::Left);

    c.key_up(Key::Left);
    c.tick();
    assert_eq!(c.state().ship.x, 44.0);
    assert_eq!(c.state().ship.facing, Facing::Neutral);
}

#[test]
fn holding_fire_shoots_once_per_press() {
    let mut c = controller();
    c.start();
    c.key_down(Key::Fire);
    c.tick();
    c.tick();
    assert_eq!(c.state().lasers.len(), 1);

    c.key_down(Key::Fire);
    c.tick();
    assert_eq!(c.state().lasers.len(), 2);
}

#[test]
fn press_at_cap_waits_for_a_free_slot() {
    let mut c = controller();
    c.start();
    for _ in 0..3 {
        c.key_down(Key::Fire);
        c.tick();
    }
    assert_eq!(c.state().lasers.len(), 3);

    // Tick 4: cap reached, the press stays pending
    c.key_down(Key::Fire);
    c.tick();
    assert_eq!(c.state().lasers.len(), 3);

    // The first laser leaves the top during tick 15
    for _ in 5..=15 {
        c.tick();
    }
    assert_eq!(c.state().lasers.len(), 2);
    assert!(!c.state().lasers.iter().any(|l| l.y == 65.0));

    // Tick 16 spends the pending press
    c.tick();
    assert!(c.state().lasers.iter().any(|l| l.y == 65.0));

    c.tick();
    assert!(!c.state().lasers.iter().any(|l| l.y == 65.0));
}

fn playing_state() -> GameState {
    start_run(&init_state(Theme::SpaceQuest))
}

#[test]
fn press_is_kept_when_boost_expires_this_tick() {
    let mut state = playing_state();
    state.effects.laser_boost = 1;
    state.lasers = vec![
        Laser { x: 50.0, y: 8.0 },
        Laser { x: 50.0, y: 40.0 },
        Laser { x: 50.0, y: 50.0 },
    ];
    let mut c = GameController::with_state(state, StepRng::new(u64::MAX, 0));
    c.key_down(Key::Fire);

    // Boost runs out before the cap check: back to 3, nothing fired
    c.tick();
    assert_eq!(c.state().effects.laser_boost, 0);
    assert_eq!(c.state().lasers.len(), 3);

    // Still full at the cap check; the low laser leaves afterwards
    c.tick();
    assert_eq!(c.state().lasers.len(), 2);

    // The press survived both ticks
    c.tick();
    assert_eq!(c.state().lasers.len(), 3);
    assert!(c.state().lasers.iter().any(|l| l.y == 65.0));
}

#[test]
fn restart_after_game_over_resets_the_run() {
    let mut state = playing_state();
    state.lives = 1;
    state.score = 120;
    state.level = 2;
    state.combo = 4;
    state.entities.push(FallingEntity {
        id: 0,
        kind: TechKind::Table,
        x: 50.0,
        y: 72.0,
    });
    let mut c = GameController::with_state(state, StepRng::new(u64::MAX, 0));
    c.key_down(Key::Left);
    c.key_down(Key::Fire);

    assert!(!c.tick());
    assert_eq!(c.state().status, GameStatus::GameOver);
    assert_eq!(c.state().lives, 0);

    // Ticks are no-ops until restart
    let frame = c.state().frame;
    assert!(!c.tick());
    assert_eq!(c.state().frame, frame);

    c.start();
    assert!(c.is_playing());
    let s = c.state();
    assert_eq!(s.lives, 3);
    assert_eq!(s.score, 0);
    assert_eq!(s.level, 1);
    assert_eq!(s.combo, 0);
    assert_eq!(s.frame, 0);
    assert!(s.entities.is_empty());
    assert!(s.lasers.is_empty());
    assert_eq!(s.ship.x, 50.0);

    // Keys held across the game over are gone
    c.tick();
    assert_eq!(c.state().ship.x, 50.0);
    assert_eq!(c.state().ship.facing, Facing::Neutral);
    assert!(c.state().lasers.is_empty());
}

#[test]
fn start_clears_held_keys() {
    let mut c = controller();
    c.key_down(Key::Right);
    c.start();
    c.tick();
    assert_eq!(c.state().ship.x, 50.0);
}

#[test]
fn release_stale_drops_unrefreshed_keys() {
    let mut c = controller();
    c.start();
    c.key_down(Key::Right);
    for _ in 0..5 {
        c.tick();
        c.release_stale(4);
    }
    // Held for frames 0..=4, released once frame 5 is reached
    let x = c.state().ship.x;
    c.tick();
    assert_eq!(c.state().ship.x, x);
    assert_eq!(c.state().ship.facing, Facing::Neutral);
}
