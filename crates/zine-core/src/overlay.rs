//! Table of contents and notice overlays.

use crate::content::Zine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub spread: usize,
    /// Section the entry scrolls to (spreads start at section 1).
    pub section: usize,
    pub title: String,
}

#[derive(Debug, Clone, Default)]
pub struct TableOfContents {
    visible: bool,
    entries: Vec<TocEntry>,
}

impl TableOfContents {
    pub fn new(zine: &Zine) -> Self {
        let entries = zine
            .spreads()
            .iter()
            .enumerate()
            .map(|(spread, item)| TocEntry {
                spread,
                section: spread + 1,
                title: item.display_title(spread),
            })
            .collect();
        Self {
            visible: false,
            entries,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }

    /// Pick an entry; closes the overlay and returns the section to scroll to.
    pub fn select(&mut self, spread: usize) -> Option<usize> {
        let section = self.entries.get(spread)?.section;
        self.visible = false;
        Some(section)
    }
}

/// Modal message with a single dismiss action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Spread;

    fn zine() -> Zine {
        Zine::new(vec![
            Spread::titled("The Beginning"),
            Spread::titled(""),
            Spread::titled("The End"),
        ])
    }

    #[test]
    fn entries_point_at_spread_sections() {
        let toc = TableOfContents::new(&zine());
        let sections: Vec<usize> = toc.entries().iter().map(|e| e.section).collect();
        assert_eq!(sections, vec![1, 2, 3]);
        assert_eq!(toc.entries()[1].title, "Spread 2");
    }

    #[test]
    fn selecting_closes_overlay() {
        let mut toc = TableOfContents::new(&zine());
        toc.open();
        assert_eq!(toc.select(0), Some(1));
        assert!(!toc.is_visible());
    }

    #[test]
    fn unknown_selection_keeps_overlay_open() {
        let mut toc = TableOfContents::new(&zine());
        toc.open();
        assert_eq!(toc.select(7), None);
        assert!(toc.is_visible());
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut toc = TableOfContents::default();
        assert!(toc.toggle());
        assert!(!toc.toggle());
        assert!(!toc.close());
    }
}
