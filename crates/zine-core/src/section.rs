//! Scroll progress to active section mapping.
//!
//! Sections are numbered `0..=total`: 0 is the intro, `1..=total` are the
//! spreads. The scroll range is split in two regimes. The head share of the
//! range is divided evenly between the regular sections, and the remaining
//! tail share is divided evenly between the closing sections, so the closing
//! sections keep the same amount of scroll however long the zine is.

use serde::{Deserialize, Serialize};

/// Slack applied when flooring onto a bin so that values lying on a decimal
/// boundary (0.9 for the default tail) land in the upper bin despite rounding.
const BOUNDARY_EPSILON: f32 = 1e-4;

/// Shape of the two-regime mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    /// Fraction of the scroll range shared by the regular sections.
    pub head_share: f32,
    /// Number of closing sections that split the remaining range.
    pub tail_sections: usize,
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self {
            head_share: 0.8,
            tail_sections: 2,
        }
    }
}

impl SectionLayout {
    /// Resolve the layout for a zine with `total` spreads.
    ///
    /// When there are not enough sections to fill the tail, every section is
    /// treated as a tail section and the whole range is split evenly.
    pub fn resolve(&self, total: usize) -> SectionMapper {
        let sections = total + 1;
        let mut head_share = if self.head_share.is_finite() {
            self.head_share.clamp(0.0, 1.0)
        } else {
            Self::default().head_share
        };
        let mut tail = self.tail_sections.min(sections);
        let regular = sections - tail;
        if regular == 0 {
            tail = sections;
            head_share = 0.0;
        } else if tail == 0 {
            head_share = 1.0;
        } else if head_share <= 0.0 || head_share >= 1.0 {
            // Both regimes need some room; fall back to the default split.
            head_share = Self::default().head_share;
        }
        SectionMapper {
            total,
            regular: RegularBins {
                count: regular,
                share: head_share,
            },
            tail: TailSplit {
                first: regular,
                count: tail,
                start: head_share,
            },
        }
    }
}

/// One regime of the mapping.
pub trait SectionStrategy {
    /// Whether this regime owns `progress`.
    fn contains(&self, progress: f32) -> bool;
    /// Section for a progress value this regime owns.
    fn section_for(&self, progress: f32) -> usize;
    /// Progress at the centre of `section`, if the section belongs here.
    fn progress_for(&self, section: usize) -> Option<f32>;
}

/// Regular sections sharing `[0, share]` in equal bins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularBins {
    pub count: usize,
    pub share: f32,
}

impl RegularBins {
    fn bin_width(&self) -> f32 {
        self.share / self.count.max(1) as f32
    }
}

impl SectionStrategy for RegularBins {
    fn contains(&self, progress: f32) -> bool {
        self.count > 0 && progress <= self.share
    }

    fn section_for(&self, progress: f32) -> usize {
        if self.count == 0 {
            return 0;
        }
        let bin = (progress / self.bin_width() + BOUNDARY_EPSILON).floor();
        (bin.max(0.0) as usize).min(self.count - 1)
    }

    fn progress_for(&self, section: usize) -> Option<f32> {
        (section < self.count).then(|| (section as f32 + 0.5) * self.bin_width())
    }
}

/// Closing sections `first..first + count` sharing `(start, 1]` equally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailSplit {
    pub first: usize,
    pub count: usize,
    pub start: f32,
}

impl TailSplit {
    fn share(&self) -> f32 {
        1.0 - self.start
    }
}

impl SectionStrategy for TailSplit {
    fn contains(&self, progress: f32) -> bool {
        self.count > 0 && (progress > self.start || self.first == 0)
    }

    fn section_for(&self, progress: f32) -> usize {
        if self.count == 0 {
            return self.first;
        }
        let share = self.share().max(f32::EPSILON);
        let t = ((progress - self.start) / share).clamp(0.0, 1.0);
        let slot = (t * self.count as f32 + BOUNDARY_EPSILON).floor() as usize;
        self.first + slot.min(self.count - 1)
    }

    fn progress_for(&self, section: usize) -> Option<f32> {
        let local = section.checked_sub(self.first)?;
        (local < self.count)
            .then(|| self.start + ((local as f32 + 0.5) / self.count as f32) * self.share())
    }
}

/// Resolved mapping for a specific zine length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionMapper {
    total: usize,
    regular: RegularBins,
    tail: TailSplit,
}

impl SectionMapper {
    pub fn new(layout: SectionLayout, total: usize) -> Self {
        layout.resolve(total)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of sections handled by the regular regime.
    pub fn regular_count(&self) -> usize {
        self.regular.count
    }

    /// Active section for `progress`, always within `0..=total`.
    pub fn map_progress(&self, progress: f32) -> usize {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let section = if self.regular.contains(progress) {
            self.regular.section_for(progress)
        } else if self.tail.contains(progress) {
            self.tail.section_for(progress)
        } else {
            0
        };
        section.min(self.total)
    }

    /// Progress at the centre of `section`; sections past the end clamp to
    /// the last one.
    pub fn progress_for_section(&self, section: usize) -> f32 {
        let section = section.min(self.total);
        self.regular
            .progress_for(section)
            .or_else(|| self.tail.progress_for(section))
            .unwrap_or(0.0)
            .clamp(0.0, 1.0)
    }
}

/// Default two-regime mapping: 80% of the scroll for the regular sections,
/// 20% split between the final two.
pub fn map_progress_to_section(progress: f32, total: usize) -> usize {
    SectionLayout::default().resolve(total).map_progress(progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_range_is_binned_evenly() {
        // total = 4: three regular bins of width 0.8 / 3.
        assert_eq!(map_progress_to_section(0.0, 4), 0);
        assert_eq!(map_progress_to_section(0.26, 4), 0);
        assert_eq!(map_progress_to_section(0.27, 4), 1);
        assert_eq!(map_progress_to_section(0.6, 4), 2);
        assert_eq!(map_progress_to_section(0.8, 4), 2);
    }

    #[test]
    fn regular_range_is_monotonic_and_bounded() {
        for total in 2..12usize {
            let mut last = 0;
            for step in 0..=800 {
                let progress = step as f32 / 1000.0;
                let section = map_progress_to_section(progress, total);
                assert!(section >= last, "total={total} progress={progress}");
                assert!(section <= total - 2, "total={total} progress={progress}");
                last = section;
            }
        }
    }

    #[test]
    fn tail_splits_at_ninety_percent() {
        for total in 2..10usize {
            assert_eq!(map_progress_to_section(0.81, total), total - 1);
            assert_eq!(map_progress_to_section(0.8999, total), total - 1);
            assert_eq!(map_progress_to_section(0.9, total), total);
            assert_eq!(map_progress_to_section(1.0, total), total);
        }
    }

    #[test]
    fn ninety_percent_of_four_spreads_is_last_section() {
        assert_eq!(map_progress_to_section(0.9, 4), 4);
    }

    #[test]
    fn degenerate_totals_stay_in_range() {
        for step in 0..=100 {
            let progress = step as f32 / 100.0;
            assert_eq!(map_progress_to_section(progress, 0), 0);
            assert!(map_progress_to_section(progress, 1) <= 1);
        }
        assert_eq!(map_progress_to_section(0.2, 1), 0);
        assert_eq!(map_progress_to_section(0.7, 1), 1);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(map_progress_to_section(-3.0, 5), 0);
        assert_eq!(map_progress_to_section(7.0, 5), 5);
        assert_eq!(map_progress_to_section(f32::NAN, 5), 0);
    }

    #[test]
    fn tail_count_is_configurable() {
        let mapper = SectionLayout {
            head_share: 0.7,
            tail_sections: 3,
        }
        .resolve(6);
        assert_eq!(mapper.regular_count(), 4);
        assert_eq!(mapper.map_progress(0.71), 4);
        assert_eq!(mapper.map_progress(0.85), 5);
        assert_eq!(mapper.map_progress(0.95), 6);
    }

    #[test]
    fn section_centres_map_back() {
        for total in 0..10usize {
            let mapper = SectionLayout::default().resolve(total);
            for section in 0..=total {
                let progress = mapper.progress_for_section(section);
                assert_eq!(mapper.map_progress(progress), section, "total={total}");
            }
        }
    }
}
