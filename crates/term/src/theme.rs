//! Light and dark palettes, selected by the `dark_mode` setting.

use crate::fb::{CellStyle, Rgb};

/// Color roles used by the screen views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub screen_bg: Rgb,
    pub board_bg: Rgb,
    pub border: Rgb,
    pub grid_dot: Rgb,
    pub snake_body: Rgb,
    pub snake_head: Rgb,
    pub food: Rgb,
    pub text: Rgb,
    pub text_dim: Rgb,
    pub accent: Rgb,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            screen_bg: Rgb::new(248, 250, 252),
            board_bg: Rgb::new(226, 232, 240),
            border: Rgb::new(148, 163, 184),
            grid_dot: Rgb::new(203, 213, 225),
            snake_body: Rgb::new(37, 99, 235),
            snake_head: Rgb::new(29, 78, 216),
            food: Rgb::new(220, 38, 38),
            text: Rgb::new(30, 41, 59),
            text_dim: Rgb::new(100, 116, 139),
            accent: Rgb::new(37, 99, 235),
        }
    }

    pub fn dark() -> Self {
        Self {
            screen_bg: Rgb::new(15, 23, 42),
            board_bg: Rgb::new(30, 41, 59),
            border: Rgb::new(71, 85, 105),
            grid_dot: Rgb::new(51, 65, 85),
            snake_body: Rgb::new(59, 130, 246),
            snake_head: Rgb::new(96, 165, 250),
            food: Rgb::new(239, 68, 68),
            text: Rgb::new(226, 232, 240),
            text_dim: Rgb::new(148, 163, 184),
            accent: Rgb::new(147, 197, 253),
        }
    }

    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Style for regular text on the screen background.
    pub fn text_style(&self) -> CellStyle {
        CellStyle::new(self.text, self.screen_bg)
    }

    /// Style for secondary text on the screen background.
    pub fn dim_style(&self) -> CellStyle {
        CellStyle::new(self.text_dim, self.screen_bg)
    }

    /// Style for headings and highlighted values.
    pub fn accent_style(&self) -> CellStyle {
        CellStyle::new(self.accent, self.screen_bg).bold()
    }

    /// Blank cell style for clearing a frame.
    pub fn blank_style(&self) -> CellStyle {
        CellStyle::new(self.text, self.screen_bg)
    }
}
