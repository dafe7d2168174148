/// Rendering layer — all terminal output for a running game lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// the 0–100 playfield into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_catcher::compute::rank_title;
use space_catcher::constants::{EFFECT_TICKS, SHIP_ROW, TICK_MS};
use space_catcher::entities::{
    Facing, FallingEntity, GameState, GameStatus, Laser, MessageKind, Particle, ParticleTint,
    PowerUp, PowerUpKind, TechKind,
};
use space_catcher::theme::Theme;

// ── Colour palettes ───────────────────────────────────────────────────────────

pub struct Palette {
    pub border: Color,
    pub title: Color,
    pub hud: Color,
    pub ship: Color,
    pub shield: Color,
    pub beneficial: Color,
    pub harmful: Color,
    pub power_up: Color,
    pub laser: Color,
    pub hint: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::SpaceQuest => Palette {
            border: Color::DarkMagenta,
            title: Color::Cyan,
            hud: Color::Yellow,
            ship: Color::White,
            shield: Color::Blue,
            beneficial: Color::Cyan,
            harmful: Color::DarkGrey,
            power_up: Color::Magenta,
            laser: Color::Yellow,
            hint: Color::DarkGrey,
        },
        Theme::SkyPatrol => Palette {
            border: Color::Blue,
            title: Color::White,
            hud: Color::White,
            ship: Color::Yellow,
            shield: Color::Cyan,
            beneficial: Color::Green,
            harmful: Color::Red,
            power_up: Color::Magenta,
            laser: Color::White,
            hint: Color::Grey,
        },
    }
}

fn tech_glyph(kind: TechKind) -> &'static str {
    match kind {
        TechKind::Chatbot => "(C)",
        TechKind::AiRobot => "(R)",
        TechKind::ComputerVision => "(V)",
        TechKind::RecommendationAi => "(@)",
        TechKind::WaterBottle => "[b]",
        TechKind::Clock => "[o]",
        TechKind::Bed => "[=]",
        TechKind::Table => "[T]",
        TechKind::Board => "[#]",
    }
}

fn power_up_glyph(kind: PowerUpKind) -> &'static str {
    match kind {
        PowerUpKind::Shield => "<S>",
        PowerUpKind::Laser => "<L>",
        PowerUpKind::SlowMotion => "<~>",
        PowerUpKind::Magnet => "<M>",
    }
}

fn message_color(kind: MessageKind) -> Color {
    match kind {
        MessageKind::Success => Color::Green,
        MessageKind::Danger => Color::Red,
        MessageKind::PowerUp => Color::Magenta,
        MessageKind::Level => Color::Blue,
        MessageKind::Laser => Color::Yellow,
        MessageKind::Shield | MessageKind::Boss => Color::Cyan,
    }
}

// ── Playfield mapping ─────────────────────────────────────────────────────────

/// Inner play area: columns 1..width-2, rows 2..height-3.
struct Field {
    width: u16,
    height: u16,
}

impl Field {
    fn col(&self, x: f64) -> u16 {
        let span = self.width.saturating_sub(3) as f64;
        let c = 1.0 + (x.clamp(0.0, 100.0) / 100.0 * span).round();
        c as u16
    }

    /// `None` while the point is above or below the visible field.
    fn row(&self, y: f64) -> Option<u16> {
        if !(0.0..=100.0).contains(&y) {
            return None;
        }
        let span = self.height.saturating_sub(5) as f64;
        Some(2 + (y / 100.0 * span).round() as u16)
    }

    /// Column to start a `len`-wide sprite centred on `x`.
    fn sprite_col(&self, x: f64, len: u16) -> u16 {
        self.col(x).saturating_sub(len / 2).max(1)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, theme: Theme) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let field = Field { width, height };
    let pal = palette(theme);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &field, &pal)?;
    draw_hud(out, state, &field, &pal)?;

    for particle in &state.particles {
        draw_particle(out, particle, &field, &pal)?;
    }
    for entity in &state.entities {
        draw_entity(out, entity, state.effects.magnet_active(), &field, &pal)?;
    }
    for power_up in &state.power_ups {
        draw_power_up(out, power_up, &field, &pal)?;
    }
    for laser in &state.lasers {
        draw_laser(out, laser, &field, &pal)?;
    }

    draw_ship(out, state, &field, &pal)?;
    draw_message(out, state, &field)?;
    draw_controls_hint(out, &field, &pal)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, &field)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, field: &Field, pal: &Palette) -> std::io::Result<()> {
    let w = field.width as usize;
    let h = field.height;

    out.queue(style::SetForegroundColor(pal.border))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(field.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn seconds_left(ticks: u32) -> u64 {
    (ticks as u64 * TICK_MS).div_ceil(1000)
}

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameState,
    field: &Field,
    pal: &Palette,
) -> std::io::Result<()> {
    // Score + level — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(pal.hud))?;
    out.queue(Print(format!("Score:{:>6}  Lv {}", state.score, state.level)))?;
    if state.combo > 0 {
        out.queue(style::SetForegroundColor(Color::DarkYellow))?;
        out.queue(Print(format!("  {}x", state.combo)))?;
    }
    if state.boss_fight {
        out.queue(style::SetForegroundColor(Color::Red))?;
        out.queue(Print(format!("  BOSS {:>3}", state.boss_health)))?;
    }

    // Effects, shields and lives — right, built then right-aligned
    let mut tags = String::new();
    let fx = &state.effects;
    if fx.magnet_active() {
        tags.push_str(&format!("[MAGNET {}s] ", seconds_left(fx.magnet)));
    }
    if fx.laser_boost_active() {
        tags.push_str(&format!("[BOOST {}s] ", seconds_left(fx.laser_boost)));
    }
    if fx.slow_motion_active() {
        tags.push_str(&format!("[SLOW {}s] ", seconds_left(fx.slow_motion)));
    }
    if state.ship.shields > 0 {
        tags.push_str(&format!("Shield x{} ", state.ship.shields));
    }
    let lives_str = format!("Lives:{}", "♥".repeat(state.lives as usize));
    let right_len = (tags.chars().count() + lives_str.chars().count()) as u16;

    out.queue(cursor::MoveTo(
        field.width.saturating_sub(right_len + 1),
        0,
    ))?;
    if !tags.is_empty() {
        out.queue(style::SetForegroundColor(pal.power_up))?;
        out.queue(Print(&tags))?;
    }
    out.queue(style::SetForegroundColor(Color::Red))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(
    out: &mut W,
    state: &GameState,
    field: &Field,
    pal: &Palette,
) -> std::io::Result<()> {
    let Some(row) = field.row(SHIP_ROW) else {
        return Ok(());
    };
    let sprite = match state.ship.facing {
        Facing::Left => "<▲/",
        Facing::Right => "\\▲>",
        Facing::Neutral => "/▲\\",
    };
    let col = field.sprite_col(state.ship.x, 3);

    if state.ship.shields > 0 {
        out.queue(style::SetForegroundColor(pal.shield))?;
        out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
        out.queue(Print("(   )"))?;
    }
    let ship_color = if state.effects.laser_boost_active() {
        pal.laser
    } else {
        pal.ship
    };
    out.queue(style::SetForegroundColor(ship_color))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(sprite))?;
    Ok(())
}

fn draw_entity<W: Write>(
    out: &mut W,
    entity: &FallingEntity,
    magnet: bool,
    field: &Field,
    pal: &Palette,
) -> std::io::Result<()> {
    let Some(row) = field.row(entity.y) else {
        return Ok(());
    };
    let color = if !entity.kind.is_beneficial() {
        pal.harmful
    } else if magnet {
        pal.power_up
    } else {
        pal.beneficial
    };
    out.queue(cursor::MoveTo(field.sprite_col(entity.x, 3), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(tech_glyph(entity.kind)))?;
    Ok(())
}

fn draw_power_up<W: Write>(
    out: &mut W,
    power_up: &PowerUp,
    field: &Field,
    pal: &Palette,
) -> std::io::Result<()> {
    let Some(row) = field.row(power_up.y) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(field.sprite_col(power_up.x, 3), row))?;
    out.queue(style::SetForegroundColor(pal.power_up))?;
    out.queue(Print(power_up_glyph(power_up.kind)))?;
    Ok(())
}

fn draw_laser<W: Write>(
    out: &mut W,
    laser: &Laser,
    field: &Field,
    pal: &Palette,
) -> std::io::Result<()> {
    let Some(row) = field.row(laser.y) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(field.col(laser.x), row))?;
    out.queue(style::SetForegroundColor(pal.laser))?;
    out.queue(Print("║"))?;
    Ok(())
}

fn draw_particle<W: Write>(
    out: &mut W,
    particle: &Particle,
    field: &Field,
    pal: &Palette,
) -> std::io::Result<()> {
    let Some(row) = field.row(particle.y) else {
        return Ok(());
    };
    let color = match particle.tint {
        ParticleTint::Catch(_) => pal.beneficial,
        ParticleTint::Zap => Color::DarkYellow,
    };
    // Fade: bright while fresh, a dot near the end
    let glyph = if particle.life > 10 { "*" } else { "·" };
    out.queue(cursor::MoveTo(field.col(particle.x), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Message banner ────────────────────────────────────────────────────────────

fn draw_message<W: Write>(out: &mut W, state: &GameState, field: &Field) -> std::io::Result<()> {
    let Some(message) = &state.message else {
        return Ok(());
    };
    let text = format!(" {} ", message.text);
    let col = (field.width / 2).saturating_sub(text.chars().count() as u16 / 2);
    let row = field.row(25.0).unwrap_or(2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(Color::Black))?;
    out.queue(style::SetBackgroundColor(message_color(message.kind)))?;
    out.queue(Print(&text))?;
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, field: &Field, pal: &Palette) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, field.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(pal.hint))?;
    out.queue(Print(format!(
        "← → / A D : Move   SPACE : Fire   Q : Quit   (power-ups last {}s)",
        seconds_left(EFFECT_TICKS)
    )))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, field: &Field) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", state.score);
    let level_line = format!("Level {} Reached", state.level);
    let rank_line = rank_title(state.score);

    let lines: [(&str, Color); 3] = [
        ("╔══════════════════════╗", Color::Magenta),
        ("║   MISSION COMPLETE   ║", Color::Magenta),
        ("╚══════════════════════╝", Color::Magenta),
    ];
    let cx = field.width / 2;
    let total_rows = lines.len() + 4;
    let start_row = (field.height / 2).saturating_sub(total_rows as u16 / 2);

    let mut row = start_row;
    let mut centred = |out: &mut W, text: &str, color: Color| -> std::io::Result<()> {
        let col = cx.saturating_sub(text.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(text))?;
        row += 1;
        Ok(())
    };

    for (msg, color) in lines {
        centred(out, msg, color)?;
    }
    centred(out, &score_line, Color::Yellow)?;
    centred(out, &level_line, Color::Cyan)?;
    centred(out, rank_line, Color::White)?;
    centred(out, "R - Play Again  Q - Quit", Color::White)?;

    Ok(())
}
