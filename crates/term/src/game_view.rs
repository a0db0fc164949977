//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, CELL_BODY, CELL_FOOD, CELL_HEAD};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::theme::Theme;
use crate::types::GRID_SIZE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Player-facing numbers shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud<'a> {
    pub best_score: u32,
    pub username: &'a str,
}

/// A lightweight terminal renderer for the Snake board.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &Hud,
        theme: &Theme,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', theme.blank_style()));

        let board_px_w = (GRID_SIZE as u16) * self.cell_w;
        let board_px_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        // Background for the play area.
        let board_bg = CellStyle::new(theme.grid_dot, theme.board_bg);
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', board_bg);

        // Border.
        let border = CellStyle::new(theme.border, theme.screen_bg);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Grid cells.
        for y in 0..GRID_SIZE as u16 {
            for x in 0..GRID_SIZE as u16 {
                let (ch, style) = match snap.grid[y as usize][x as usize] {
                    CELL_HEAD => ('█', CellStyle::new(theme.snake_head, theme.board_bg).bold()),
                    CELL_BODY => ('█', CellStyle::new(theme.snake_body, theme.board_bg)),
                    CELL_FOOD => ('●', CellStyle::new(theme.food, theme.board_bg).bold()),
                    _ => ('·', CellStyle::new(theme.grid_dot, theme.board_bg).dim()),
                };
                self.fill_cell_rect(fb, start_x, start_y, x, y, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, hud, theme, viewport, start_x, start_y, frame_w);

        // Overlays.
        if snap.paused {
            let mid_y = start_y.saturating_add(frame_h / 2);
            put_centered(fb, start_x, frame_w, mid_y, "PAUSED", theme.text_style().bold());
        } else if snap.game_over {
            let mid_y = start_y.saturating_add(frame_h / 2);
            put_centered(
                fb,
                start_x,
                frame_w,
                mid_y.saturating_sub(1),
                "GAME OVER",
                CellStyle::new(theme.food, theme.screen_bg).bold(),
            );

            // "FINAL SCORE <n>" centered as one unit.
            let label = "FINAL SCORE ";
            let total_w = label.chars().count() as u16 + digit_count(snap.score);
            let x = start_x.saturating_add(frame_w.saturating_sub(total_w) / 2);
            fb.put_str(x, mid_y, label, theme.text_style());
            fb.put_u32(
                x + label.chars().count() as u16,
                mid_y,
                snap.score,
                theme.accent_style(),
            );

            put_centered(
                fb,
                start_x,
                frame_w,
                mid_y.saturating_add(1),
                "press r to play again",
                theme.dim_style(),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        hud: &Hud,
        theme: &Theme,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, theme, viewport, &mut fb);
        fb
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &Hud,
        theme: &Theme,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = theme.text_style().bold();
        let value = theme.text_style();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, hud.best_score.max(snap.score), theme.accent_style());
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PLAYER", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, hud.username, value);
        y = y.saturating_add(2);

        for hint in ["tab  screens", "p    pause", "r    restart", "q    quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, hint, theme.dim_style());
            y = y.saturating_add(1);
        }
    }
}

/// Center a single line of text inside a frame.
pub(crate) fn put_centered(
    fb: &mut FrameBuffer,
    start_x: u16,
    frame_w: u16,
    y: u16,
    text: &str,
    style: CellStyle,
) {
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

pub(crate) fn draw_border(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    style: CellStyle,
) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn digit_count(value: u32) -> u16 {
    if value == 0 {
        1
    } else {
        (value.ilog10() + 1) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_snake_core::GameState;

    fn render(state: &GameState) -> FrameBuffer {
        let view = GameView::default();
        let hud = Hud {
            best_score: 120,
            username: "Player_0042",
        };
        view.render(
            &state.snapshot(),
            &hud,
            &Theme::light(),
            Viewport::new(80, 24),
        )
    }

    fn frame_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_contains_board_and_panel() {
        let state = GameState::new(12345);
        let fb = render(&state);
        let text = frame_text(&fb);

        assert!(text.contains('┌'));
        assert!(text.contains("SCORE"));
        assert!(text.contains("BEST"));
        assert!(text.contains("Player_0042"));
    }

    #[test]
    fn test_render_draws_one_food_cell() {
        let state = GameState::new(12345);
        let fb = render(&state);

        // 2x1 cells: the food glyph appears exactly twice (cell_w columns).
        let food_cells = fb.cells().iter().filter(|c| c.ch == '●').count();
        assert_eq!(food_cells, 2);
    }

    #[test]
    fn test_paused_overlay() {
        let mut state = GameState::new(1);
        state.toggle_pause();
        let text = frame_text(&render(&state));
        assert!(text.contains("PAUSED"));
    }

    #[test]
    fn test_game_over_overlay_shows_final_score() {
        let mut state = GameState::new(1);
        while !state.game_over() {
            state.tick();
        }
        let text = frame_text(&render(&state));
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("FINAL SCORE"));
        assert!(text.contains("press r to play again"));
    }

    #[test]
    fn test_small_viewport_drops_panel_without_panicking() {
        let state = GameState::new(1);
        let view = GameView::default();
        let hud = Hud {
            best_score: 0,
            username: "p",
        };
        let fb = view.render(
            &state.snapshot(),
            &hud,
            &Theme::dark(),
            Viewport::new(20, 10),
        );
        assert_eq!(fb.width(), 20);
    }
}
