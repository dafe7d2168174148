/// All game entity types — pure data plus catalog lookups, no update logic.

use crate::constants::{SHIP_START_X, STARTING_LIVES};
use crate::theme::Tuning;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Menu,
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Catch these for points.
    Beneficial,
    /// Avoid or shoot these; contact costs a life unless shielded.
    Harmful,
}

// ── Falling tech catalog ──────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TechKind {
    Chatbot,
    AiRobot,
    ComputerVision,
    RecommendationAi,
    WaterBottle,
    Clock,
    Bed,
    Table,
    Board,
}

impl TechKind {
    /// Beneficial entries first, then harmful; spawns pick uniformly.
    pub const ALL: [TechKind; 9] = [
        TechKind::Chatbot,
        TechKind::AiRobot,
        TechKind::ComputerVision,
        TechKind::RecommendationAi,
        TechKind::WaterBottle,
        TechKind::Clock,
        TechKind::Bed,
        TechKind::Table,
        TechKind::Board,
    ];

    pub fn category(&self) -> Category {
        match self {
            TechKind::Chatbot
            | TechKind::AiRobot
            | TechKind::ComputerVision
            | TechKind::RecommendationAi => Category::Beneficial,
            TechKind::WaterBottle
            | TechKind::Clock
            | TechKind::Bed
            | TechKind::Table
            | TechKind::Board => Category::Harmful,
        }
    }

    pub fn is_beneficial(&self) -> bool {
        self.category() == Category::Beneficial
    }

    /// Base points for catching; zero for harmful kinds.
    pub fn points(&self) -> u32 {
        match self {
            TechKind::Chatbot | TechKind::RecommendationAi => 20,
            TechKind::AiRobot | TechKind::ComputerVision => 25,
            _ => 0,
        }
    }

    /// Lives lost on an unshielded hit; zero for beneficial kinds.
    pub fn damage(&self) -> u32 {
        match self.category() {
            Category::Beneficial => 0,
            Category::Harmful => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TechKind::Chatbot => "Chatbot",
            TechKind::AiRobot => "AI Robot",
            TechKind::ComputerVision => "Computer Vision",
            TechKind::RecommendationAi => "Recommendation AI",
            TechKind::WaterBottle => "Water Bottle",
            TechKind::Clock => "Clock",
            TechKind::Bed => "Bed",
            TechKind::Table => "Table",
            TechKind::Board => "Board",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FallingEntity {
    pub id: u64,
    pub kind: TechKind,
    pub x: f64,
    pub y: f64,
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// +1 shield charge, stacks without a cap.
    Shield,
    /// Raises the laser cap for EFFECT_TICKS.
    Laser,
    /// Halves falling speed for EFFECT_TICKS.
    SlowMotion,
    /// Pulls beneficial entities toward the ship for EFFECT_TICKS.
    Magnet,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Shield,
        PowerUpKind::Laser,
        PowerUpKind::SlowMotion,
        PowerUpKind::Magnet,
    ];

    pub fn effect_text(&self) -> &'static str {
        match self {
            PowerUpKind::Shield => "Shield +1",
            PowerUpKind::Laser => "Laser Power!",
            PowerUpKind::SlowMotion => "Slow Motion!",
            PowerUpKind::Magnet => "AI Magnet!",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub id: u64,
    pub kind: PowerUpKind,
    pub x: f64,
    pub y: f64,
}

// ── Projectiles & particles ───────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Laser {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleTint {
    /// Burst from catching a beneficial item, coloured like the item.
    Catch(TechKind),
    /// Burst from a laser destroying a harmful item.
    Zap,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Remaining ticks; removed when it reaches zero.
    pub life: u32,
    pub tint: ParticleTint,
}

// ── Messages ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Danger,
    Shield,
    PowerUp,
    Level,
    Laser,
    Boss,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
    pub ticks_left: u32,
}

// ── Ship & timed effects ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f64,
    pub facing: Facing,
    pub shields: u32,
}

impl Default for Ship {
    fn default() -> Self {
        Ship {
            x: SHIP_START_X,
            facing: Facing::Neutral,
            shields: 0,
        }
    }
}

/// Remaining ticks for each timed power-up; zero means inactive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Effects {
    pub laser_boost: u32,
    pub magnet: u32,
    pub slow_motion: u32,
}

impl Effects {
    pub fn laser_boost_active(&self) -> bool {
        self.laser_boost > 0
    }

    pub fn magnet_active(&self) -> bool {
        self.magnet > 0
    }

    pub fn slow_motion_active(&self) -> bool {
        self.slow_motion > 0
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub ship: Ship,
    pub effects: Effects,
    pub entities: Vec<FallingEntity>,
    pub power_ups: Vec<PowerUp>,
    pub lasers: Vec<Laser>,
    pub particles: Vec<Particle>,
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub combo: u32,
    pub boss_fight: bool,
    pub boss_health: u32,
    pub message: Option<Message>,
    pub status: GameStatus,
    /// Playing ticks since the run started.
    pub frame: u64,
    /// Id handed to the next spawned entity or power-up.
    pub next_id: u64,
    pub tuning: Tuning,
}

impl GameState {
    /// A fresh state sitting on the menu.
    pub fn new(tuning: Tuning) -> Self {
        GameState {
            ship: Ship::default(),
            effects: Effects::default(),
            entities: Vec::new(),
            power_ups: Vec::new(),
            lasers: Vec::new(),
            particles: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            combo: 0,
            boss_fight: false,
            boss_health: 0,
            message: None,
            status: GameStatus::Menu,
            frame: 0,
            next_id: 0,
            tuning,
        }
    }
}
