use space_catcher::entities::*;
use space_catcher::theme::Tuning;

#[test]
fn catalog_splits_into_four_beneficial_and_five_harmful() {
    let beneficial: Vec<_> = TechKind::ALL
        .iter()
        .filter(|k| k.category() == Category::Beneficial)
        .collect();
    assert_eq!(beneficial.len(), 4);
    assert_eq!(TechKind::ALL.len() - beneficial.len(), 5);
}

#[test]
fn beneficial_kinds_score_and_never_damage() {
    assert_eq!(TechKind::Chatbot.points(), 20);
    assert_eq!(TechKind::AiRobot.points(), 25);
    assert_eq!(TechKind::ComputerVision.points(), 25);
    assert_eq!(TechKind::RecommendationAi.points(), 20);
    for kind in TechKind::ALL.iter().filter(|k| k.is_beneficial()) {
        assert_eq!(kind.damage(), 0, "{:?}", kind);
    }
}

#[test]
fn harmful_kinds_deal_one_damage() {
    for kind in TechKind::ALL.iter().filter(|k| !k.is_beneficial()) {
        assert_eq!(kind.damage(), 1, "{:?}", kind);
        assert_eq!(kind.points(), 0, "{:?}", kind);
    }
}

#[test]
fn catalog_names() {
    assert_eq!(TechKind::ComputerVision.name(), "Computer Vision");
    assert_eq!(TechKind::WaterBottle.name(), "Water Bottle");
}

#[test]
fn power_up_catalog() {
    assert_eq!(PowerUpKind::ALL.len(), 4);
    assert_eq!(PowerUpKind::Shield.effect_text(), "Shield +1");
    assert_eq!(PowerUpKind::Laser.effect_text(), "Laser Power!");
    assert_eq!(PowerUpKind::SlowMotion.effect_text(), "Slow Motion!");
    assert_eq!(PowerUpKind::Magnet.effect_text(), "AI Magnet!");
}

#[test]
fn effects_active_flags() {
    let mut fx = Effects::default();
    assert!(!fx.laser_boost_active() && !fx.magnet_active() && !fx.slow_motion_active());
    fx.magnet = 1;
    assert!(fx.magnet_active());
}

#[test]
fn new_state_defaults() {
    let s = GameState::new(Tuning::default());
    assert_eq!(s.status, GameStatus::Menu);
    assert_eq!(s.lives, 3);
    assert_eq!(s.level, 1);
    assert_eq!(s.ship, Ship { x: 50.0, facing: Facing::Neutral, shields: 0 });
    assert!(!s.boss_fight);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState::new(Tuning::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.ship.x = 99.0;
    cloned.score = 999;
    cloned.entities.push(FallingEntity {
        id: 1,
        kind: TechKind::Bed,
        x: 5.0,
        y: 5.0,
    });

    assert_eq!(original.ship.x, 50.0);
    assert_eq!(original.score, 0);
    assert!(original.entities.is_empty());
}
