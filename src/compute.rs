/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, the tick input and an RNG handle) and
/// returns a brand-new `GameState`.  Side effects are limited to the
/// injected RNG and log output.

use std::f64::consts::TAU;

use log::{debug, info};
use rand::Rng;

use crate::constants::*;
use crate::entities::{
    Category, Facing, FallingEntity, GameState, GameStatus, Laser, Message, MessageKind,
    Particle, ParticleTint, PowerUp, PowerUpKind, Ship, TechKind,
};
use crate::input::TickInput;
use crate::theme::Theme;

// ── Rule tables ──────────────────────────────────────────────────────────────

/// Per-tick chance of a new falling entity.
pub fn entity_spawn_chance(level: u32) -> f64 {
    ENTITY_SPAWN_BASE + level as f64 * ENTITY_SPAWN_PER_LEVEL
}

/// Vertical distance a falling entity covers per tick.
pub fn fall_speed(level: u32, slow_motion: bool) -> f64 {
    let speed = FALL_SPEED_BASE + level as f64 * FALL_SPEED_PER_LEVEL;
    if slow_motion {
        speed * SLOW_MOTION_FACTOR
    } else {
        speed
    }
}

/// Extra points for a catch made at the given combo streak.
pub fn combo_bonus(combo: u32) -> u32 {
    combo / COMBO_STEP * COMBO_BONUS
}

pub fn laser_cap(state: &GameState) -> usize {
    if state.effects.laser_boost_active() {
        BOOSTED_LASER_CAP
    } else {
        LASER_CAP
    }
}

pub fn can_fire(state: &GameState) -> bool {
    state.lasers.len() < laser_cap(state)
}

/// Title shown on the game-over screen for a final score.
pub fn rank_title(score: u32) -> &'static str {
    match score {
        s if s > 500 => "LEGENDARY!",
        s if s > 300 => "MASTER!",
        s if s > 150 => "EXPERT!",
        s if s > 50 => "GOOD!",
        _ => "NICE TRY!",
    }
}

fn in_catch_band(y: f64) -> bool {
    y > CATCH_BAND_TOP && y < CATCH_BAND_BOTTOM
}

// ── Constructors & lifecycle ─────────────────────────────────────────────────

/// Build the menu state for a theme.
pub fn init_state(theme: Theme) -> GameState {
    GameState::new(theme.tuning())
}

/// Enter `Playing` with every run value reset.  Used for both the first
/// start and restarts; only the tuning survives.
pub fn start_run(state: &GameState) -> GameState {
    GameState {
        status: GameStatus::Playing,
        ..GameState::new(state.tuning)
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Left wins over right when both are held.
pub fn move_ship(state: &GameState, input: &TickInput) -> GameState {
    let step = state.tuning.ship_step;
    let ship = if input.left {
        Ship {
            x: (state.ship.x - step).max(SHIP_MIN_X),
            facing: Facing::Left,
            ..state.ship.clone()
        }
    } else if input.right {
        Ship {
            x: (state.ship.x + step).min(SHIP_MAX_X),
            facing: Facing::Right,
            ..state.ship.clone()
        }
    } else {
        Ship {
            facing: Facing::Neutral,
            ..state.ship.clone()
        }
    };
    GameState {
        ship,
        ..state.clone()
    }
}

/// Fire a laser from the ship, unless the cap is reached.
pub fn fire_laser(state: &GameState) -> GameState {
    let mut next = state.clone();
    if can_fire(&next) {
        push_laser(&mut next);
    }
    next
}

fn push_laser(state: &mut GameState) {
    state.lasers.push(Laser {
        x: state.ship.x,
        y: LASER_SPAWN_Y,
    });
}

// ── Per-tick update (nearly pure — RNG is injected) ─────────────────────────

/// Advance the simulation by one 50 ms tick.  Outside `Playing` this is a
/// no-op.  All randomness comes through `rng` so callers control
/// determinism.
pub fn tick(state: &GameState, input: &TickInput, rng: &mut impl Rng) -> GameState {
    tick_with_shot(state, input, rng).0
}

/// Like [`tick`], also reporting whether a laser was fired this tick.  The
/// cap is checked after timers expire, so only this tells a caller whether a
/// fire press was actually spent.
pub fn tick_with_shot(
    state: &GameState,
    input: &TickInput,
    rng: &mut impl Rng,
) -> (GameState, bool) {
    if state.status != GameStatus::Playing {
        return (state.clone(), false);
    }

    // ── 1. Ship movement ─────────────────────────────────────────────────────
    let mut next = move_ship(state, input);

    expire_timers(&mut next);

    // ── 2. Fire control ──────────────────────────────────────────────────────
    let fired = input.fire && can_fire(&next);
    if fired {
        push_laser(&mut next);
    }

    // ── 3/4. Spawning ────────────────────────────────────────────────────────
    if rng.gen::<f64>() < entity_spawn_chance(next.level) {
        spawn_entity(&mut next, rng);
    }
    if rng.gen::<f64>() < POWER_UP_SPAWN_CHANCE {
        spawn_power_up(&mut next, rng);
    }

    // ── 5. Entity advance (+ magnet pull) ────────────────────────────────────
    let speed = fall_speed(next.level, next.effects.slow_motion_active());
    let magnet = next.effects.magnet_active();
    let ship_x = next.ship.x;
    for entity in next.entities.iter_mut() {
        let band_y = entity.y;
        entity.y += speed;
        if magnet
            && entity.kind.is_beneficial()
            && band_y > MAGNET_BAND_TOP
            && band_y < MAGNET_BAND_BOTTOM
        {
            entity.x += (ship_x - entity.x) * MAGNET_PULL;
        }
    }

    // ── 6. Entity exit / ship collision ──────────────────────────────────────
    let falling = std::mem::take(&mut next.entities);
    for entity in falling {
        if entity.y > ENTITY_EXIT_Y {
            if entity.kind.is_beneficial() {
                next.combo = 0;
            }
            continue;
        }
        if in_catch_band(entity.y) && (entity.x - ship_x).abs() < CATCH_RADIUS {
            resolve_ship_collision(&mut next, &entity);
            continue;
        }
        next.entities.push(entity);
    }

    // ── 7. Power-up advance / pickup ─────────────────────────────────────────
    let falling = std::mem::take(&mut next.power_ups);
    for mut power_up in falling {
        power_up.y += next.tuning.power_up_speed;
        if power_up.y > POWER_UP_EXIT_Y {
            continue;
        }
        if in_catch_band(power_up.y) && (power_up.x - ship_x).abs() < CATCH_RADIUS {
            activate_power_up(&mut next, power_up.kind);
            continue;
        }
        next.power_ups.push(power_up);
    }

    // ── 8. Laser advance / hit ───────────────────────────────────────────────
    // Hits are tested against this tick's entity list, after movement and
    // ship collisions.
    let lasers = std::mem::take(&mut next.lasers);
    for mut laser in lasers {
        laser.y -= LASER_SPEED;
        if laser.y < 0.0 {
            continue;
        }
        let hit = next.entities.iter().position(|e| {
            (e.x - laser.x).abs() < LASER_HIT_RADIUS && (e.y - laser.y).abs() < LASER_HIT_RADIUS
        });
        if let Some(idx) = hit {
            let entity = next.entities.remove(idx);
            resolve_laser_hit(&mut next, &entity);
            continue;
        }
        next.lasers.push(laser);
    }

    // ── 9. Particles ─────────────────────────────────────────────────────────
    next.particles = std::mem::take(&mut next.particles)
        .into_iter()
        .filter_map(|mut p| {
            p.x += p.vx;
            p.y += p.vy;
            p.life = p.life.saturating_sub(1);
            (p.life > 0).then_some(p)
        })
        .collect();

    // ── 10. Level up ─────────────────────────────────────────────────────────
    if next.score > next.level * LEVEL_SCORE_STEP {
        next.level += 1;
        info!("level up: {} (score {})", next.level, next.score);
        let text = format!("Level {}!", next.level);
        show_message(&mut next, text, MessageKind::Level);
    }

    // ── 11. Boss trigger ─────────────────────────────────────────────────────
    if next.score > BOSS_SCORE_THRESHOLD && next.level > BOSS_LEVEL_THRESHOLD && !next.boss_fight {
        info!(
            "boss fight triggered at score {} level {}; clearing {} entities",
            next.score,
            next.level,
            next.entities.len()
        );
        next.boss_fight = true;
        next.boss_health = BOSS_HEALTH;
        next.entities.clear();
        show_message(&mut next, "BOSS FIGHT!".to_string(), MessageKind::Boss);
    }

    next.frame += 1;
    (next, fired)
}

// ── Tick helpers (operate on the tick's private copy) ───────────────────────

fn expire_timers(state: &mut GameState) {
    let effects = &mut state.effects;
    effects.laser_boost = effects.laser_boost.saturating_sub(1);
    effects.magnet = effects.magnet.saturating_sub(1);
    effects.slow_motion = effects.slow_motion.saturating_sub(1);

    let expired = match state.message.as_mut() {
        Some(message) => {
            message.ticks_left = message.ticks_left.saturating_sub(1);
            message.ticks_left == 0
        }
        None => false,
    };
    if expired {
        state.message = None;
    }
}

fn next_id(state: &mut GameState) -> u64 {
    let id = state.next_id;
    state.next_id += 1;
    id
}

fn spawn_x(rng: &mut impl Rng) -> f64 {
    SPAWN_X_MIN + rng.gen::<f64>() * SPAWN_X_SPAN
}

fn spawn_entity(state: &mut GameState, rng: &mut impl Rng) {
    let kind = TechKind::ALL[rng.gen_range(0..TechKind::ALL.len())];
    let x = spawn_x(rng);
    let id = next_id(state);
    state.entities.push(FallingEntity {
        id,
        kind,
        x,
        y: SPAWN_Y,
    });
}

fn spawn_power_up(state: &mut GameState, rng: &mut impl Rng) {
    let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
    let x = spawn_x(rng);
    let id = next_id(state);
    state.power_ups.push(PowerUp {
        id,
        kind,
        x,
        y: SPAWN_Y,
    });
}

/// A new message replaces the current one and restarts the countdown.
fn show_message(state: &mut GameState, text: String, kind: MessageKind) {
    state.message = Some(Message {
        text,
        kind,
        ticks_left: MESSAGE_TICKS,
    });
}

fn emit_burst(state: &mut GameState, x: f64, y: f64, tint: ParticleTint) {
    let count = state.tuning.burst_size;
    for i in 0..count {
        let angle = i as f64 * TAU / count as f64;
        state.particles.push(Particle {
            x,
            y,
            vx: angle.cos() * PARTICLE_SPEED,
            vy: angle.sin() * PARTICLE_SPEED,
            life: PARTICLE_LIFE,
            tint,
        });
    }
}

fn resolve_ship_collision(state: &mut GameState, entity: &FallingEntity) {
    let kind = entity.kind;
    match kind.category() {
        Category::Beneficial => {
            state.combo += 1;
            let gained = kind.points() + combo_bonus(state.combo);
            state.score += gained;
            show_message(
                state,
                format!("+{}! {}", gained, kind.name()),
                MessageKind::Success,
            );
            emit_burst(state, entity.x, entity.y, ParticleTint::Catch(kind));
        }
        Category::Harmful if state.ship.shields > 0 => {
            state.ship.shields -= 1;
            debug!("shield absorbed {}; {} left", kind.name(), state.ship.shields);
            show_message(state, "Shield Absorbed!".to_string(), MessageKind::Shield);
        }
        Category::Harmful => {
            let damage = kind.damage();
            state.lives = state.lives.saturating_sub(damage);
            state.combo = 0;
            show_message(
                state,
                format!("-{} Life! {}", damage, kind.name()),
                MessageKind::Danger,
            );
            if state.lives == 0 {
                info!("run over: score {} level {}", state.score, state.level);
                state.status = GameStatus::GameOver;
            }
        }
    }
}

/// Only harmful targets pay out; beneficial ones are simply destroyed.
fn resolve_laser_hit(state: &mut GameState, entity: &FallingEntity) {
    debug!("laser hit {} at ({:.1}, {:.1})", entity.kind.name(), entity.x, entity.y);
    if entity.kind.category() == Category::Harmful {
        state.score += ZAP_BONUS;
        show_message(state, format!("Zapped! +{}", ZAP_BONUS), MessageKind::Laser);
        emit_burst(state, entity.x, entity.y, ParticleTint::Zap);
    }
}

fn activate_power_up(state: &mut GameState, kind: PowerUpKind) {
    debug!("picked up {:?}", kind);
    show_message(state, kind.effect_text().to_string(), MessageKind::PowerUp);
    match kind {
        PowerUpKind::Shield => state.ship.shields += 1,
        PowerUpKind::Laser => state.effects.laser_boost = EFFECT_TICKS,
        PowerUpKind::SlowMotion => state.effects.slow_motion = EFFECT_TICKS,
        PowerUpKind::Magnet => state.effects.magnet = EFFECT_TICKS,
    }
}
