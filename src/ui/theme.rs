//! Color themes for the UI.

use crate::app::Theme;
use crate::presentation::HazardStyle;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Border color of the focused panel.
    pub focus_border: Color,
    /// Cursor foreground color.
    pub cursor_fg: Color,
    /// Cursor background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Warning color, used for the no-results notice.
    pub warning: Color,
    /// Danger block background.
    pub danger_bg: Color,
    /// Warning block background.
    pub warning_bg: Color,
    /// Safe block background.
    pub safe_bg: Color,
    /// Text on hazard blocks.
    pub block_fg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                focus_border: Color::Rgb(131, 165, 152),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                warning: Color::Rgb(250, 189, 47),
                danger_bg: Color::Rgb(157, 0, 6),
                warning_bg: Color::Rgb(181, 118, 20),
                safe_bg: Color::Rgb(121, 116, 14),
                block_fg: Color::Rgb(251, 241, 199),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                value: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                focus_border: Color::Rgb(7, 102, 120),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                warning: Color::Rgb(181, 118, 20),
                danger_bg: Color::Rgb(248, 215, 218),
                warning_bg: Color::Rgb(255, 243, 205),
                safe_bg: Color::Rgb(212, 237, 218),
                block_fg: Color::Rgb(40, 40, 40),
            },
        }
    }

    /// Background for a hazard block.
    pub fn hazard_bg(&self, style: HazardStyle) -> Color {
        match style {
            HazardStyle::Danger => self.danger_bg,
            HazardStyle::Warning => self.warning_bg,
            HazardStyle::Safe => self.safe_bg,
        }
    }

    /// Swatch color for a color code name.
    pub fn color_code(&self, code: &str) -> Color {
        match code.trim().to_lowercase().as_str() {
            "merah" | "red" => Color::Rgb(251, 73, 52),
            "biru" | "blue" => Color::Rgb(131, 165, 152),
            "hijau" | "green" => Color::Rgb(184, 187, 38),
            _ => self.text,
        }
    }
}
