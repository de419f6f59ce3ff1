//! Per-spread fade and parallax derived from scroll progress.
//!
//! Spread `i` of `total` owns the window `[i / total, (i + 1) / total)`.
//! Regular spreads fade in shortly after their window opens; the closing
//! spreads start earlier and finish sooner because the section mapping only
//! gives them a fixed slice of the scroll.

use crate::interpolate::interpolate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityProfile {
    /// Fade window of regular spreads, relative to the window start.
    pub fade_in: (f32, f32),
    /// Fade window of closing spreads, relative to the window start. Clamped
    /// to [0, 1] after offsetting.
    pub closing_fade_in: (f32, f32),
    /// Background drift over the window for regular spreads.
    pub parallax_distance: f32,
    /// Background drift over the window for closing spreads.
    pub closing_parallax_distance: f32,
    /// How many spreads at the end use the closing timings.
    pub closing_spreads: usize,
}

impl Default for VisibilityProfile {
    fn default() -> Self {
        Self {
            fade_in: (0.05, 0.20),
            closing_fade_in: (-0.05, 0.15),
            parallax_distance: -200.0,
            closing_parallax_distance: -100.0,
            closing_spreads: 2,
        }
    }
}

/// Visual state of one spread for the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SpreadVisual {
    pub opacity: f32,
    pub parallax_offset: f32,
}

impl VisibilityProfile {
    pub fn is_closing(&self, index: usize, total: usize) -> bool {
        index >= total.saturating_sub(self.closing_spreads)
    }

    /// `[start, end)` scroll window owned by spread `index`.
    pub fn window(&self, index: usize, total: usize) -> (f32, f32) {
        if total == 0 {
            return (0.0, 1.0);
        }
        let width = 1.0 / total as f32;
        let start = index as f32 * width;
        (start, start + width)
    }

    pub fn fade_window(&self, index: usize, total: usize) -> (f32, f32) {
        let (start, _) = self.window(index, total);
        if self.is_closing(index, total) {
            (
                (start + self.closing_fade_in.0).max(0.0),
                (start + self.closing_fade_in.1).min(1.0),
            )
        } else {
            (start + self.fade_in.0, start + self.fade_in.1)
        }
    }

    /// Opacity in [0, 1]; non-decreasing in `progress`.
    pub fn opacity(&self, progress: f32, index: usize, total: usize) -> f32 {
        interpolate(progress, self.fade_window(index, total), (0.0, 1.0)).clamp(0.0, 1.0)
    }

    /// Vertical background offset in pixels.
    pub fn parallax(&self, progress: f32, index: usize, total: usize) -> f32 {
        let distance = if self.is_closing(index, total) {
            self.closing_parallax_distance
        } else {
            self.parallax_distance
        };
        interpolate(progress, self.window(index, total), (0.0, distance))
    }

    pub fn visual(&self, progress: f32, index: usize, total: usize) -> SpreadVisual {
        SpreadVisual {
            opacity: self.opacity(progress, index, total),
            parallax_offset: self.parallax(progress, index, total),
        }
    }

    pub fn visuals(&self, progress: f32, total: usize) -> Vec<SpreadVisual> {
        (0..total)
            .map(|index| self.visual(progress, index, total))
            .collect()
    }
}

/// Shrink-and-tilt applied to the intro section over the whole scroll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeroTransform {
    pub scale: f32,
    pub rotation_degrees: f32,
}

impl HeroTransform {
    pub fn at(progress: f32) -> Self {
        Self {
            scale: interpolate(progress, (0.0, 1.0), (1.0, 0.8)),
            rotation_degrees: interpolate(progress, (0.0, 1.0), (0.0, 8.0)),
        }
    }
}

/// Spread the page counter points at: progress is stretched over
/// `[1, total + 1]` and floored, minus one. Returns `None` for an empty zine.
pub fn current_spread_index(progress: f32, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    let position = interpolate(progress, (0.0, 1.0), (1.0, total as f32 + 1.0));
    let index = (position.floor() as usize).saturating_sub(1);
    Some(index.min(total - 1))
}
