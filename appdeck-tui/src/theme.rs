//! Daylight theme and color utilities.
//!
//! Palette lifted from the original front-end's stylesheet values.

use crate::notifications::NotificationLevel;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub surface: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl Theme {
    pub fn daylight() -> Self {
        Self {
            bg: Color::Rgb(249, 250, 252),
            surface: Color::Rgb(250, 250, 250),
            primary: Color::Rgb(62, 116, 255),
            accent: Color::Rgb(232, 233, 255),
            success: Color::Rgb(46, 160, 67),
            warning: Color::Rgb(187, 128, 9),
            error: Color::Rgb(207, 34, 46),
            info: Color::Rgb(62, 116, 255),
            text: Color::Rgb(76, 76, 76),
            text_dim: Color::Rgb(113, 113, 113),
            text_muted: Color::Rgb(160, 160, 160),
            border: Color::Rgb(220, 220, 220),
            border_focus: Color::Rgb(62, 116, 255),
        }
    }
}

pub fn notification_color(level: &NotificationLevel, theme: &Theme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}
