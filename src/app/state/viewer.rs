use super::constants::TEXT_WRAP_COLUMNS;
use crate::config::AppConfig;
use std::path::PathBuf;
use zine_core::{
    FlipBook, ScrollNavigator, ScrollProgressTracker, ScrollState, SectionMapper, SpreadVisual,
    TableOfContents, VisibilityProfile, Zine, plain_text,
};

/// Where the zine content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Builtin,
    File(PathBuf),
}

impl ContentSource {
    pub fn load(&self) -> zine_core::Result<Zine> {
        match self {
            ContentSource::Builtin => Zine::builtin(),
            ContentSource::File(path) => Zine::load(path),
        }
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::Builtin => write!(f, "built-in zine"),
            ContentSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Plain-text renderings of a spread's two faces.
pub struct SpreadText {
    pub(in crate::app) front: String,
    pub(in crate::app) back: String,
}

/// Content plus everything derived from the scroll position.
pub struct ViewerState {
    pub(in crate::app) zine: Zine,
    pub(in crate::app) texts: Vec<SpreadText>,
    pub(in crate::app) mapper: SectionMapper,
    pub(in crate::app) profile: VisibilityProfile,
    pub(in crate::app) tracker: ScrollProgressTracker,
    pub(in crate::app) navigator: ScrollNavigator,
    pub(in crate::app) flips: FlipBook,
    pub(in crate::app) toc: TableOfContents,
}

impl ViewerState {
    pub(in crate::app) fn new(zine: Zine, config: &AppConfig, viewport_height: f32) -> Self {
        let layout = config.section_layout();
        let texts = zine
            .spreads()
            .iter()
            .map(|spread| SpreadText {
                front: plain_text(&spread.content, TEXT_WRAP_COLUMNS),
                back: plain_text(spread.back_content(), TEXT_WRAP_COLUMNS),
            })
            .collect();
        ViewerState {
            mapper: layout.resolve(zine.len()),
            profile: config.visibility_profile(),
            tracker: ScrollProgressTracker::new(ScrollState::for_document(
                0.0,
                viewport_height,
                config.document_height_factor,
            )),
            navigator: ScrollNavigator::new(layout, config.smooth_scroll_duration()),
            flips: FlipBook::new(zine.len()),
            toc: TableOfContents::new(&zine),
            texts,
            zine,
        }
    }

    pub(in crate::app) fn total(&self) -> usize {
        self.zine.len()
    }

    pub(in crate::app) fn active_section(&self) -> usize {
        self.mapper.map_progress(self.tracker.progress())
    }

    /// Section the reader is heading to: the tween's destination while one
    /// is running, otherwise the section on screen.
    pub(in crate::app) fn heading_section(&self) -> usize {
        match self.navigator.destination() {
            Some(offset) if self.tracker.scrollable_height() > 0.0 => self
                .mapper
                .map_progress(offset / self.tracker.scrollable_height()),
            _ => self.active_section(),
        }
    }

    pub(in crate::app) fn visuals(&self) -> Vec<SpreadVisual> {
        self.profile.visuals(self.tracker.progress(), self.total())
    }
}
