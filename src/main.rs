mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use log::{error, info, warn, LevelFilter};
use rand::{thread_rng, Rng};

use space_catcher::constants::TICK_MS;
use space_catcher::controller::GameController;
use space_catcher::input::Key;
use space_catcher::theme::Theme;

const FRAME: Duration = Duration::from_millis(TICK_MS);

const LOG_FILE: &str = "space_catcher.log";
const LOG_ENV: &str = "SPACE_CATCHER_LOG";

/// Terminals without key-release reporting only send repeated presses.
/// A key not refreshed within this many ticks (600 ms) counts as released.
/// The window has to outlast the OS initial repeat delay (250-600 ms), or a
/// held key drops out before its first repeat arrives.
const HOLD_WINDOW: u64 = 12;

fn log_level() -> LevelFilter {
    match std::env::var(LOG_ENV) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("{LOG_ENV}={raw:?} is not a log level, using info");
            LevelFilter::Info
        }),
        Err(_) => LevelFilter::Info,
    }
}

fn map_key(code: &KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        _ => None,
    }
}

fn is_quit(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

/// Returns the chosen theme, or `None` to quit.
fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<Option<Theme>> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  SPACE  CATCHER  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(16), cy.saturating_sub(4)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Collect AI tech, dodge everyday objects!"))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(16), cy.saturating_sub(2)))?;
    out.queue(Print("Choose a mission:"))?;

    for (i, theme) in Theme::ALL.iter().enumerate() {
        let row = cy + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(16), row))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{}] ", i + 1)))?;
        out.queue(style::SetForegroundColor(display::palette(*theme).title))?;
        out.queue(Print(theme.title()))?;
    }

    let legend: [(&str, Color); 3] = [
        ("(C)(R)(V)(@)  catch for points, chain for combo bonus", Color::Cyan),
        ("[b][o][=][T][#]  avoid, or zap with a laser for +15", Color::DarkGrey),
        ("<S> shield  <L> laser boost  <~> slow motion  <M> magnet", Color::Magenta),
    ];
    for (i, (text, color)) in legend.iter().enumerate() {
        out.queue(cursor::MoveTo(cx.saturating_sub(16), cy + 3 + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*text))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(16), cy + 7))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("← → / A D : Move   SPACE : Fire   Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        let Ok(event) = rx.recv() else {
            return Ok(None);
        };
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) = event
        {
            if is_quit(&code, modifiers) {
                return Ok(None);
            }
            if let KeyCode::Char(c) = code {
                if let Ok(theme) = c.to_string().parse::<Theme>() {
                    return Ok(Some(theme));
                }
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  Game over stays on screen until R restarts
/// the run in place.
fn game_loop<W: Write, R: Rng>(
    out: &mut W,
    controller: &mut GameController<R>,
    theme: Theme,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> std::io::Result<()> {
    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    if is_quit(&code, modifiers) {
                        return Ok(());
                    }
                    if matches!(code, KeyCode::Char('r') | KeyCode::Char('R'))
                        && !controller.is_playing()
                    {
                        controller.start();
                        continue;
                    }
                    if let Some(key) = map_key(&code) {
                        controller.key_down(key);
                    }
                }
                KeyEventKind::Release => {
                    if let Some(key) = map_key(&code) {
                        controller.key_up(key);
                    }
                }
            }
        }

        if !keyboard_enhanced {
            controller.release_stale(HOLD_WINDOW);
        }

        controller.tick();
        display::render(out, controller.state(), theme)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        } else {
            warn!("frame overran: {:?}", elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    simple_logging::log_to_file(LOG_FILE, log_level())?;
    info!("Starting space_catcher.");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back to HOLD_WINDOW.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    info!("keyboard enhancement: {}", keyboard_enhanced);

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                error!("terminal event read failed: {}", e);
                break;
            }
        }
    });

    let result = run(&mut out, &rx, keyboard_enhanced);
    if let Err(e) = &result {
        error!("game aborted: {}", e);
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("Exiting space_catcher.");
    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    keyboard_enhanced: bool,
) -> std::io::Result<()> {
    let Some(theme) = show_menu(out, rx)? else {
        return Ok(());
    };
    info!("theme selected: {}", theme.as_str());

    let mut controller = GameController::new(theme, thread_rng());
    controller.start();
    game_loop(out, &mut controller, theme, rx, keyboard_enhanced)?;

    let state = controller.state();
    info!(
        "session ended: score {} level {} status {:?}",
        state.score, state.level, state.status
    );
    Ok(())
}
