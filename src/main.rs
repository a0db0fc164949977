//! Terminal Snake runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer,
//! and wires the engine to the local score/settings store: the final score
//! of each completed game is recorded once, and store failures are logged
//! without touching game state.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::store::{SettingsPatch, Store};
use tui_snake::term::{
    render_leaderboard, render_settings, FrameBuffer, GameView, Hud, LeaderboardRow, SettingsView,
    TerminalRenderer, Theme, Viewport,
};
use tui_snake::types::{GameAction, Screen, TickOutcome, LEADERBOARD_LIMIT, TICK_MS};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut store = Store::open(Store::default_path()).unwrap_or_else(|err| {
        warn!("score store unavailable, playing without persistence: {err:#}");
        Store::in_memory()
    });
    let mut best = store.best_score();

    let mut game = GameState::new(clock_seed());
    let mut screen = Screen::Game;
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut rename: Option<String> = None;
    let mut submitted = false;

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let theme = Theme::from_dark_mode(store.settings().dark_mode);
        match screen {
            Screen::Game => {
                game.snapshot_into(&mut snap);
                let hud = Hud {
                    best_score: best,
                    username: &store.player().username,
                };
                view.render_into(&snap, &hud, &theme, viewport, &mut fb);
            }
            Screen::Leaderboard => {
                let top = store.top_scores(LEADERBOARD_LIMIT);
                let rows: Vec<LeaderboardRow> = top
                    .iter()
                    .map(|r| LeaderboardRow {
                        username: r.username.as_str(),
                        score: r.score,
                    })
                    .collect();
                render_leaderboard(&rows, &theme, viewport, &mut fb);
            }
            Screen::Settings => {
                let settings = store.settings();
                let settings_view = SettingsView {
                    username: &store.player().username,
                    sound_enabled: settings.sound_enabled,
                    music_enabled: settings.music_enabled,
                    dark_mode: settings.dark_mode,
                    editing: rename.as_deref(),
                };
                render_settings(&settings_view, &theme, viewport, &mut fb);
            }
        }
        term.present(&mut fb)?;

        // Input with timeout until the next tick boundary.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if rename.is_some() {
                        handle_rename_key(key, &mut rename, &mut store);
                    } else if should_quit(key) {
                        return Ok(());
                    } else if key.code == KeyCode::Tab {
                        screen = screen.next();
                    } else {
                        handle_screen_key(
                            key,
                            screen,
                            &mut game,
                            &mut store,
                            &mut rename,
                            &mut submitted,
                        );
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick (only the game screen advances the simulation).
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if screen == Screen::Game {
                let outcome = game.tick();
                if outcome == TickOutcome::GameOver && !submitted {
                    submitted = true;
                    let score = game.score();
                    if score > 0 {
                        match store.record_score(score) {
                            Ok(_) => best = best.max(score),
                            Err(err) => warn!("failed to save score: {err:#}"),
                        }
                    }
                }
            }
        }
    }
}

fn handle_screen_key(
    key: KeyEvent,
    screen: Screen,
    game: &mut GameState,
    store: &mut Store,
    rename: &mut Option<String>,
    submitted: &mut bool,
) {
    match screen {
        Screen::Game => {
            if let Some(action) = handle_key_event(key) {
                if action == GameAction::Restart {
                    *submitted = false;
                }
                game.apply_action(action);
            }
        }
        Screen::Leaderboard => {}
        Screen::Settings => {
            let (sound, music, dark) = {
                let s = store.settings();
                (s.sound_enabled, s.music_enabled, s.dark_mode)
            };
            let patch = match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => Some(SettingsPatch::sound(!sound)),
                KeyCode::Char('m') | KeyCode::Char('M') => Some(SettingsPatch::music(!music)),
                KeyCode::Char('d') | KeyCode::Char('D') => Some(SettingsPatch::dark_mode(!dark)),
                KeyCode::Char('u') | KeyCode::Char('U') => {
                    *rename = Some(store.player().username.clone());
                    None
                }
                _ => None,
            };
            if let Some(patch) = patch {
                if let Err(err) = store.update_settings(patch) {
                    warn!("failed to save settings: {err:#}");
                }
            }
        }
    }
}

fn handle_rename_key(key: KeyEvent, rename: &mut Option<String>, store: &mut Store) {
    let Some(buffer) = rename.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Enter => {
            if let Err(err) = store.set_username(buffer) {
                warn!("failed to rename player: {err:#}");
            }
            *rename = None;
        }
        KeyCode::Esc => {
            *rename = None;
        }
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Char(ch) if !ch.is_control() && buffer.chars().count() < 20 => {
            buffer.push(ch);
        }
        _ => {}
    }
}

/// Seed the food RNG from the wall clock (a fixed seed would make every
/// session identical).
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
