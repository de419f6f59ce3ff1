//! Scroll geometry and the normalized progress derived from it.

use serde::{Deserialize, Serialize};

/// Raw scroll geometry as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub raw_offset: f32,
    pub viewport_height: f32,
    pub document_scrollable_height: f32,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            raw_offset: 0.0,
            viewport_height: 1.0,
            document_scrollable_height: 0.0,
        }
    }
}

impl ScrollState {
    /// Build a sanitized state. Non-finite or negative values collapse to the
    /// nearest valid value; the offset is clamped to the scrollable range.
    pub fn new(raw_offset: f32, viewport_height: f32, document_scrollable_height: f32) -> Self {
        let viewport_height = if viewport_height.is_finite() && viewport_height > 0.0 {
            viewport_height
        } else {
            1.0
        };
        let document_scrollable_height = finite_non_negative(document_scrollable_height);
        let raw_offset = finite_non_negative(raw_offset).min(document_scrollable_height);
        Self {
            raw_offset,
            viewport_height,
            document_scrollable_height,
        }
    }

    /// Geometry for a document `height_factor` viewports tall.
    pub fn for_document(raw_offset: f32, viewport_height: f32, height_factor: f32) -> Self {
        let factor = if height_factor.is_finite() {
            height_factor.max(1.0)
        } else {
            1.0
        };
        let viewport = if viewport_height.is_finite() && viewport_height > 0.0 {
            viewport_height
        } else {
            1.0
        };
        Self::new(raw_offset, viewport, (factor - 1.0) * viewport)
    }

    /// Normalized progress in [0, 1]. An unscrollable document reports 0.
    pub fn progress(&self) -> f32 {
        if self.document_scrollable_height <= f32::EPSILON {
            return 0.0;
        }
        (self.raw_offset / self.document_scrollable_height).clamp(0.0, 1.0)
    }

    pub fn with_offset(self, raw_offset: f32) -> Self {
        Self::new(raw_offset, self.viewport_height, self.document_scrollable_height)
    }
}

fn finite_non_negative(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Holds the latest scroll geometry and the progress derived from it.
///
/// Every update replaces the previous state outright; intermediate states are
/// never queued.
#[derive(Debug, Clone, Default)]
pub struct ScrollProgressTracker {
    state: ScrollState,
    progress: f32,
}

impl ScrollProgressTracker {
    pub fn new(state: ScrollState) -> Self {
        let mut tracker = Self::default();
        tracker.observe(state);
        tracker
    }

    pub fn observe(&mut self, state: ScrollState) -> f32 {
        self.state = state;
        self.progress = state.progress();
        self.progress
    }

    pub fn set_offset(&mut self, raw_offset: f32) -> f32 {
        self.observe(self.state.with_offset(raw_offset))
    }

    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        if !delta.is_finite() {
            return self.progress;
        }
        self.set_offset(self.state.raw_offset + delta)
    }

    /// Apply a new viewport height. The raw offset is kept and clamped to the
    /// new scrollable range.
    pub fn resize(&mut self, viewport_height: f32, height_factor: f32) -> f32 {
        self.observe(ScrollState::for_document(
            self.state.raw_offset,
            viewport_height,
            height_factor,
        ))
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn offset(&self) -> f32 {
        self.state.raw_offset
    }

    pub fn scrollable_height(&self) -> f32 {
        self.state.document_scrollable_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_ratio_of_offset() {
        let state = ScrollState::new(250.0, 800.0, 1000.0);
        assert!((state.progress() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn unscrollable_document_reports_zero() {
        assert_eq!(ScrollState::new(10.0, 800.0, 0.0).progress(), 0.0);
    }

    #[test]
    fn offset_is_clamped_to_scrollable_range() {
        let state = ScrollState::new(5000.0, 800.0, 1000.0);
        assert_eq!(state.raw_offset, 1000.0);
        assert_eq!(state.progress(), 1.0);
        assert_eq!(ScrollState::new(-40.0, 800.0, 1000.0).raw_offset, 0.0);
    }

    #[test]
    fn non_finite_geometry_is_sanitized() {
        let state = ScrollState::new(f32::NAN, f32::INFINITY, f32::NAN);
        assert_eq!(state.raw_offset, 0.0);
        assert_eq!(state.viewport_height, 1.0);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn document_factor_sets_scrollable_height() {
        let state = ScrollState::for_document(0.0, 900.0, 6.0);
        assert_eq!(state.document_scrollable_height, 4500.0);
    }

    #[test]
    fn latest_observation_wins() {
        let mut tracker = ScrollProgressTracker::new(ScrollState::for_document(0.0, 100.0, 6.0));
        tracker.set_offset(400.0);
        tracker.set_offset(100.0);
        assert!((tracker.progress() - 0.2).abs() < 1e-6);
        tracker.scroll_by(50.0);
        assert!((tracker.progress() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn resize_keeps_offset_within_range() {
        let mut tracker = ScrollProgressTracker::new(ScrollState::for_document(450.0, 100.0, 6.0));
        assert!((tracker.progress() - 0.9).abs() < 1e-6);
        tracker.resize(50.0, 6.0);
        assert_eq!(tracker.offset(), 250.0);
        assert_eq!(tracker.progress(), 1.0);
    }
}
