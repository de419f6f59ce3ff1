//! Section index to scroll offset, plus the smooth scroll that gets there.

use crate::interpolate::smoothstep;
use crate::section::SectionLayout;
use std::time::Duration;
use tracing::debug;

/// Default length of a navigation scroll.
pub const DEFAULT_SMOOTH_SCROLL: Duration = Duration::from_millis(600);

/// Eased scroll from one offset to another, advanced by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Offset at the current point of the animation.
    pub fn sample(&self) -> f32 {
        if self.is_done() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * smoothstep(t)
    }

    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.sample()
    }

    /// Restart towards `to` from wherever the animation currently is.
    pub fn retarget(&mut self, to: f32, duration: Duration) {
        *self = Self::new(self.sample(), to, duration);
    }
}

/// Inverse of the section mapping, and owner of the in-flight scroll.
#[derive(Debug, Clone)]
pub struct ScrollNavigator {
    layout: SectionLayout,
    duration: Duration,
    active: Option<SmoothScroll>,
}

impl Default for ScrollNavigator {
    fn default() -> Self {
        Self::new(SectionLayout::default(), DEFAULT_SMOOTH_SCROLL)
    }
}

impl ScrollNavigator {
    pub fn new(layout: SectionLayout, duration: Duration) -> Self {
        Self {
            layout,
            duration,
            active: None,
        }
    }

    pub fn layout(&self) -> SectionLayout {
        self.layout
    }

    /// Offset that centres section `target` in its share of the scroll.
    pub fn scroll_offset(&self, target: usize, total: usize, document_height: f32) -> f32 {
        let progress = self.layout.resolve(total).progress_for_section(target);
        let height = if document_height.is_finite() {
            document_height.max(0.0)
        } else {
            0.0
        };
        progress * height
    }

    /// Start scrolling to `target`. A scroll already in flight is retargeted
    /// from its current position. Returns the destination offset.
    pub fn navigate(
        &mut self,
        current_offset: f32,
        target: usize,
        total: usize,
        document_height: f32,
    ) -> f32 {
        let destination = self.scroll_offset(target, total, document_height);
        match self.active.as_mut() {
            Some(scroll) => {
                debug!(
                    target,
                    from = scroll.sample(),
                    to = destination,
                    "Retargeting smooth scroll"
                );
                scroll.retarget(destination, self.duration);
            }
            None => {
                debug!(
                    target,
                    from = current_offset,
                    to = destination,
                    "Starting smooth scroll"
                );
                self.active = Some(SmoothScroll::new(current_offset, destination, self.duration));
            }
        }
        destination
    }

    /// Advance the in-flight scroll. Returns the offset to apply, or `None`
    /// when nothing is animating.
    pub fn advance(&mut self, dt: Duration) -> Option<f32> {
        let scroll = self.active.as_mut()?;
        let offset = scroll.advance(dt);
        if scroll.is_done() {
            self.active = None;
        }
        Some(offset)
    }

    /// Drop the in-flight scroll, leaving the offset where it is.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn destination(&self) -> Option<f32> {
        self.active.map(|scroll| scroll.target())
    }
}

/// Offset for `target` using the default 80/20 layout.
pub fn compute_scroll_offset(target: usize, total: usize, document_height: f32) -> f32 {
    ScrollNavigator::default().scroll_offset(target, total, document_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::map_progress_to_section;

    #[test]
    fn offsets_are_right_inverse_of_mapping() {
        let height = 4321.0;
        for total in 0..16usize {
            for target in 0..=total {
                let offset = compute_scroll_offset(target, total, height);
                assert_eq!(
                    map_progress_to_section(offset / height, total),
                    target,
                    "total={total} target={target}"
                );
            }
        }
    }

    #[test]
    fn closing_sections_sit_in_the_tail() {
        let height = 1000.0;
        assert!((compute_scroll_offset(3, 4, height) - 850.0).abs() < 1e-2);
        assert!((compute_scroll_offset(4, 4, height) - 950.0).abs() < 1e-2);
    }

    #[test]
    fn regular_sections_are_centred_in_their_bin() {
        let height = 1200.0;
        let bin = 0.8 / 3.0;
        assert!((compute_scroll_offset(0, 4, height) - 0.5 * bin * height).abs() < 1e-2);
        assert!((compute_scroll_offset(2, 4, height) - 2.5 * bin * height).abs() < 1e-2);
    }

    #[test]
    fn targets_past_the_end_clamp() {
        assert_eq!(
            compute_scroll_offset(99, 4, 1000.0),
            compute_scroll_offset(4, 4, 1000.0)
        );
    }

    #[test]
    fn smooth_scroll_reaches_destination() {
        let mut navigator = ScrollNavigator::new(SectionLayout::default(), Duration::from_millis(100));
        let destination = navigator.navigate(0.0, 4, 4, 1000.0);
        let mut last = 0.0;
        let mut offset = 0.0;
        while let Some(next) = navigator.advance(Duration::from_millis(16)) {
            assert!(next >= last);
            last = next;
            offset = next;
        }
        assert_eq!(offset, destination);
        assert!(!navigator.is_animating());
    }

    #[test]
    fn new_navigation_retargets_from_current_position() {
        let mut navigator = ScrollNavigator::new(SectionLayout::default(), Duration::from_millis(200));
        navigator.navigate(0.0, 4, 4, 1000.0);
        let midway = navigator.advance(Duration::from_millis(100)).unwrap();
        let destination = navigator.navigate(123.0, 1, 4, 1000.0);
        assert_eq!(navigator.destination(), Some(destination));
        // The retargeted scroll starts from the sampled position, not the
        // offset passed in.
        let next = navigator.advance(Duration::ZERO).unwrap();
        assert!((next - midway).abs() < 1e-3);
    }

    #[test]
    fn zero_duration_jumps() {
        let mut navigator = ScrollNavigator::new(SectionLayout::default(), Duration::ZERO);
        let destination = navigator.navigate(0.0, 2, 4, 1000.0);
        assert_eq!(navigator.advance(Duration::from_millis(16)), Some(destination));
        assert_eq!(navigator.advance(Duration::from_millis(16)), None);
    }

    #[test]
    fn cancel_stops_animation() {
        let mut navigator = ScrollNavigator::default();
        navigator.navigate(0.0, 3, 4, 1000.0);
        navigator.cancel();
        assert_eq!(navigator.advance(Duration::from_millis(16)), None);
    }
}
