//! Leaderboard and settings screens.
//!
//! Like [`crate::game_view`], these render into a framebuffer and do no I/O.
//! The row types are plain borrowed views so this crate stays independent of
//! the persistence layer.

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::game_view::{draw_border, put_centered, Viewport};
use crate::theme::Theme;

/// One leaderboard line: rank is implied by slice order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardRow<'a> {
    pub username: &'a str,
    pub score: u32,
}

/// Settings screen state, borrowed from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsView<'a> {
    pub username: &'a str,
    pub sound_enabled: bool,
    pub music_enabled: bool,
    pub dark_mode: bool,
    /// In-progress username edit buffer, when renaming.
    pub editing: Option<&'a str>,
}

const PANEL_W: u16 = 40;

/// Render the top-scores screen.
pub fn render_leaderboard(
    rows: &[LeaderboardRow],
    theme: &Theme,
    viewport: Viewport,
    fb: &mut FrameBuffer,
) {
    let (x, y, h) = begin_panel(fb, theme, viewport, "LEADERBOARD");

    if rows.is_empty() {
        fb.put_str(x + 2, y + 3, "no scores yet - play a game!", theme.dim_style());
        return;
    }

    fb.put_str(x + 2, y + 2, " #  PLAYER", theme.dim_style());
    fb.put_str(x + PANEL_W - 8, y + 2, "SCORE", theme.dim_style());

    for (i, row) in rows.iter().enumerate() {
        let line_y = y + 3 + i as u16;
        if line_y + 1 >= y + h {
            break;
        }

        let style = if i == 0 {
            theme.accent_style()
        } else {
            theme.text_style()
        };
        fb.put_u32(x + 2, line_y, (i + 1) as u32, style);
        fb.put_str(x + 6, line_y, clip(row.username, 22), style);
        fb.put_u32(x + PANEL_W - 8, line_y, row.score, style);
    }
}

/// Render the settings screen.
pub fn render_settings(view: &SettingsView, theme: &Theme, viewport: Viewport, fb: &mut FrameBuffer) {
    let (x, y, _h) = begin_panel(fb, theme, viewport, "SETTINGS");

    let rows = [
        ("s", "sound effects", view.sound_enabled),
        ("m", "background music", view.music_enabled),
        ("d", "dark mode", view.dark_mode),
    ];

    let mut line_y = y + 2;
    for (key, name, enabled) in rows {
        let marker = if enabled { "[on] " } else { "[off]" };
        let marker_style = if enabled {
            theme.accent_style()
        } else {
            theme.dim_style()
        };
        fb.put_str(x + 2, line_y, marker, marker_style);
        fb.put_str(x + 8, line_y, name, theme.text_style());
        fb.put_str(x + PANEL_W - 6, line_y, "(", theme.dim_style());
        fb.put_str(x + PANEL_W - 5, line_y, key, theme.dim_style());
        fb.put_str(x + PANEL_W - 4, line_y, ")", theme.dim_style());
        line_y += 2;
    }

    match view.editing {
        Some(buffer) => {
            fb.put_str(x + 2, line_y, "new name:", theme.text_style().bold());
            fb.put_str(x + 12, line_y, clip(buffer, 20), theme.accent_style());
            fb.put_str(
                x + 12 + buffer.chars().count().min(20) as u16,
                line_y,
                "_",
                theme.accent_style(),
            );
            line_y += 2;
            fb.put_str(x + 2, line_y, "enter save   esc cancel", theme.dim_style());
        }
        None => {
            fb.put_str(x + 2, line_y, "player:", theme.text_style().bold());
            fb.put_str(x + 10, line_y, clip(view.username, 20), theme.text_style());
            line_y += 2;
            fb.put_str(x + 2, line_y, "u rename   tab screens   q quit", theme.dim_style());
        }
    }
}

/// Clear the frame, draw a bordered centered panel with a title, and return
/// the panel origin and height.
fn begin_panel(
    fb: &mut FrameBuffer,
    theme: &Theme,
    viewport: Viewport,
    title: &str,
) -> (u16, u16, u16) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(Cell::new(' ', theme.blank_style()));

    let h: u16 = 17;
    let x = viewport.width.saturating_sub(PANEL_W) / 2;
    let y = viewport.height.saturating_sub(h) / 2;

    draw_border(fb, x, y, PANEL_W, h, CellStyle::new(theme.border, theme.screen_bg));
    put_centered(fb, x, PANEL_W, y, title, theme.accent_style());

    (x, y, h)
}

/// Truncate to at most `max` characters (usernames are user-controlled).
fn clip(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_leaderboard_lists_rows_in_order() {
        let rows = [
            LeaderboardRow {
                username: "alice",
                score: 120,
            },
            LeaderboardRow {
                username: "bob",
                score: 40,
            },
        ];
        let mut fb = FrameBuffer::new(80, 24);
        render_leaderboard(&rows, &Theme::light(), Viewport::new(80, 24), &mut fb);
        let text = frame_text(&fb);

        assert!(text.contains("LEADERBOARD"));
        let alice = text.find("alice").unwrap();
        let bob = text.find("bob").unwrap();
        assert!(alice < bob, "rows must render in slice order");
        assert!(text.contains("120"));
    }

    #[test]
    fn test_leaderboard_empty_state() {
        let mut fb = FrameBuffer::new(80, 24);
        render_leaderboard(&[], &Theme::dark(), Viewport::new(80, 24), &mut fb);
        assert!(frame_text(&fb).contains("no scores yet"));
    }

    #[test]
    fn test_settings_shows_toggle_states() {
        let view = SettingsView {
            username: "Player_0042",
            sound_enabled: true,
            music_enabled: false,
            dark_mode: false,
            editing: None,
        };
        let mut fb = FrameBuffer::new(80, 24);
        render_settings(&view, &Theme::light(), Viewport::new(80, 24), &mut fb);
        let text = frame_text(&fb);

        assert!(text.contains("SETTINGS"));
        assert!(text.contains("[on]"));
        assert!(text.contains("[off]"));
        assert!(text.contains("Player_0042"));
    }

    #[test]
    fn test_settings_edit_mode_shows_buffer() {
        let view = SettingsView {
            username: "Player_0042",
            sound_enabled: true,
            music_enabled: true,
            dark_mode: true,
            editing: Some("NewName"),
        };
        let mut fb = FrameBuffer::new(80, 24);
        render_settings(&view, &Theme::dark(), Viewport::new(80, 24), &mut fb);
        let text = frame_text(&fb);

        assert!(text.contains("new name:"));
        assert!(text.contains("NewName"));
        assert!(text.contains("enter save"));
    }

    #[test]
    fn test_clip_respects_char_boundaries() {
        assert_eq!(clip("abcdef", 3), "abc");
        assert_eq!(clip("ab", 3), "ab");
        assert_eq!(clip("héllo", 2), "hé");
    }
}
