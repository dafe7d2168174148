//! Cosmetic variants of the game.
//!
//! Both variants run the same rules; a theme only swaps the palette (see the
//! binary's display module) and a handful of tuning values.

use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    SpaceQuest,
    SkyPatrol,
}

/// Per-theme tuning values consumed by the update loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    /// Horizontal distance the ship moves per tick while a direction is held.
    pub ship_step: f64,
    /// Vertical distance a power-up falls per tick.
    pub power_up_speed: f64,
    /// Particles emitted per burst.
    pub burst_size: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Theme::default().tuning()
    }
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::SpaceQuest, Theme::SkyPatrol];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::SpaceQuest => "space-quest",
            Theme::SkyPatrol => "sky-patrol",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Theme::SpaceQuest => "AI SPACE QUEST",
            Theme::SkyPatrol => "AI SKY PATROL",
        }
    }

    pub fn tuning(&self) -> Tuning {
        match self {
            Theme::SpaceQuest => Tuning {
                ship_step: 3.0,
                power_up_speed: 2.0,
                burst_size: 8,
            },
            Theme::SkyPatrol => Tuning {
                ship_step: 4.0,
                power_up_speed: 2.5,
                burst_size: 12,
            },
        }
    }
}

/// Accepts the `as_str` names, their first word, or the menu digit.
impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "space-quest" | "space" | "1" => Ok(Theme::SpaceQuest),
            "sky-patrol" | "sky" | "2" => Ok(Theme::SkyPatrol),
            other => Err(format!("unknown theme {other:?}")),
        }
    }
}
