//! Full-screen colour flash used by the interaction demo.

use crate::error::{Result, ZineError};
use crate::interpolate::interpolate;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Duration;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})?$")
        .expect("static colour pattern is valid")
});

/// Colour in 0..=1 components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn parse_hex(literal: &str) -> Result<Self> {
        let caps = HEX_COLOR
            .captures(literal.trim())
            .ok_or_else(|| ZineError::InvalidColor(literal.to_string()))?;
        let channel = |idx: usize| -> f32 {
            caps.get(idx)
                .and_then(|m| u8::from_str_radix(m.as_str(), 16).ok())
                .map(|v| v as f32 / 255.0)
                .unwrap_or(1.0)
        };
        Ok(Self {
            r: channel(1),
            g: channel(2),
            b: channel(3),
            a: channel(4),
        })
    }
}

/// Default palette for the flash demo.
pub const DEFAULT_FLASH_PALETTE: [&str; 5] = ["#ff6b6b", "#48dbfb", "#1dd1a1", "#feca57", "#ff9ff3"];

const PEAK_OPACITY: f32 = 0.7;
const HOLD: Duration = Duration::from_secs(1);
const FADE: Duration = Duration::from_secs(1);

/// A colour that holds at 0.7 opacity for a second, then fades out over
/// another second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorFlash {
    color: Rgba,
    elapsed: Duration,
}

impl ColorFlash {
    pub fn new(color: Rgba) -> Self {
        Self {
            color,
            elapsed: Duration::ZERO,
        }
    }

    /// Pick a random colour from `palette`. Returns `None` when the palette
    /// is empty.
    pub fn random_from<R: Rng + ?Sized>(palette: &[Rgba], rng: &mut R) -> Option<Self> {
        if palette.is_empty() {
            return None;
        }
        let color = palette[rng.random_range(0..palette.len())];
        Some(Self::new(color))
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        let t = self.elapsed.as_secs_f32();
        let hold = HOLD.as_secs_f32();
        interpolate(t, (hold, hold + FADE.as_secs_f32()), (PEAK_OPACITY, 0.0))
    }

    /// Advance by `dt`; returns `false` once the flash has finished and
    /// should be removed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        !self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= HOLD + FADE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parses_hex_colours() {
        let color = Rgba::parse_hex("#ff0080").unwrap();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(color.a, 1.0);
        assert_eq!(Rgba::parse_hex("00000000").unwrap().a, 0.0);
    }

    #[test]
    fn rejects_malformed_colours() {
        assert!(Rgba::parse_hex("red").is_err());
        assert!(Rgba::parse_hex("#12345").is_err());
    }

    #[test]
    fn flash_holds_then_fades() {
        let mut flash = ColorFlash::new(Rgba::parse_hex("#ffffff").unwrap());
        assert!((flash.opacity() - 0.7).abs() < 1e-6);
        assert!(flash.advance(Duration::from_millis(900)));
        assert!((flash.opacity() - 0.7).abs() < 1e-6);
        assert!(flash.advance(Duration::from_millis(600)));
        assert!((flash.opacity() - 0.35).abs() < 1e-3);
        assert!(!flash.advance(Duration::from_millis(600)));
        assert_eq!(flash.opacity(), 0.0);
    }

    #[test]
    fn random_pick_comes_from_palette() {
        let palette: Vec<Rgba> = DEFAULT_FLASH_PALETTE
            .iter()
            .map(|hex| Rgba::parse_hex(hex).unwrap())
            .collect();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let flash = ColorFlash::random_from(&palette, &mut rng).unwrap();
            assert!(palette.contains(&flash.color()));
        }
        assert!(ColorFlash::random_from(&[], &mut rng).is_none());
    }
}
