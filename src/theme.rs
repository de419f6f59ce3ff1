//! Colours for the zine chrome in day and night mode.

use crate::config::ThemeMode;
use iced::{Color, Theme as IcedTheme};

/// Colours used by the spread cards and overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub page: Color,
    pub card: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub scrim: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Palette {
                page: Color::from_rgb8(0x12, 0x12, 0x16),
                card: Color::from_rgb8(0x1e, 0x1f, 0x26),
                text: Color::from_rgb8(0xee, 0xee, 0xf2),
                muted: Color::from_rgb8(0x9a, 0x9c, 0xa8),
                accent: Color::from_rgb8(0xff, 0x6b, 0x6b),
                scrim: Color::from_rgba(0.0, 0.0, 0.0, 0.75),
            },
            ThemeMode::Day => Palette {
                page: Color::from_rgb8(0xf4, 0xf1, 0xea),
                card: Color::from_rgb8(0xff, 0xfd, 0xf8),
                text: Color::from_rgb8(0x1c, 0x1c, 0x22),
                muted: Color::from_rgb8(0x5c, 0x5e, 0x6a),
                accent: Color::from_rgb8(0xd6, 0x3a, 0x3a),
                scrim: Color::from_rgba(0.0, 0.0, 0.0, 0.6),
            },
        }
    }
}

impl From<ThemeMode> for IcedTheme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => IcedTheme::Dark,
            ThemeMode::Day => IcedTheme::Light,
        }
    }
}
