use super::super::state::App;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_navigate_to(&mut self, section: usize) {
        let total = self.viewer.total();
        let target = section.min(total);
        if !self.viewer.navigator.is_animating() {
            self.last_tick = None;
        }
        let destination = self.viewer.navigator.navigate(
            self.viewer.tracker.offset(),
            target,
            total,
            self.viewer.tracker.scrollable_height(),
        );
        self.viewer.toc.close();
        info!(section = target, destination, "Navigating to section");
    }

    pub(super) fn handle_next_section(&mut self) {
        let next = (self.viewer.heading_section() + 1).min(self.viewer.total());
        self.handle_navigate_to(next);
    }

    pub(super) fn handle_previous_section(&mut self) {
        let previous = self.viewer.heading_section().saturating_sub(1);
        self.handle_navigate_to(previous);
    }

    pub(super) fn handle_toggle_toc(&mut self) {
        let visible = self.viewer.toc.toggle();
        debug!(visible, "Toggled table of contents");
    }

    pub(super) fn handle_select_toc_entry(&mut self, spread: usize) {
        match self.viewer.toc.select(spread) {
            Some(section) => self.handle_navigate_to(section),
            None => debug!(spread, "Ignoring unknown contents entry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::app::state::ContentSource;
    use crate::config::AppConfig;
    use std::time::{Duration, Instant};
    use zine_core::{Spread, Zine};

    fn build_test_app(spreads: usize) -> App {
        let mut config = AppConfig::default();
        config.window_height = 1000.0;
        config.document_height_factor = 6.0;
        let (mut app, _task) = App::bootstrap(ContentSource::Builtin, config);
        let zine = Zine::new(
            (0..spreads)
                .map(|i| Spread::titled(format!("Spread {i}")))
                .collect(),
        );
        app.reduce(Message::ContentLoaded(Ok(zine)));
        app
    }

    fn settle(app: &mut App) {
        let start = Instant::now();
        for step in 1..=100 {
            app.reduce(Message::Tick(start + Duration::from_millis(16 * step)));
        }
    }

    #[test]
    fn every_dot_lands_on_its_section() {
        for total in [1, 2, 4, 7] {
            let mut app = build_test_app(total);
            for section in 0..=total {
                app.reduce(Message::NavigateTo(section));
                settle(&mut app);
                assert_eq!(
                    app.viewer.active_section(),
                    section,
                    "total {total} section {section}"
                );
            }
        }
    }

    #[test]
    fn last_two_dots_use_tail_positions() {
        let mut app = build_test_app(4);
        app.reduce(Message::NavigateTo(4));
        let destination = app.viewer.navigator.destination().unwrap();
        assert!((destination - 0.95 * 5000.0).abs() < 0.5);
        app.reduce(Message::NavigateTo(3));
        let destination = app.viewer.navigator.destination().unwrap();
        assert!((destination - 0.85 * 5000.0).abs() < 0.5);
    }

    #[test]
    fn navigation_past_end_is_clamped() {
        let mut app = build_test_app(4);
        app.reduce(Message::NavigateTo(99));
        settle(&mut app);
        assert_eq!(app.viewer.active_section(), 4);
    }

    #[test]
    fn latest_navigation_wins() {
        let mut app = build_test_app(4);
        app.reduce(Message::NavigateTo(4));
        app.reduce(Message::Tick(Instant::now()));
        app.reduce(Message::NavigateTo(1));
        settle(&mut app);
        assert_eq!(app.viewer.active_section(), 1);
    }

    #[test]
    fn next_and_previous_follow_the_destination() {
        let mut app = build_test_app(4);
        app.reduce(Message::NextSection);
        app.reduce(Message::NextSection);
        settle(&mut app);
        assert_eq!(app.viewer.active_section(), 2);
        app.reduce(Message::PreviousSection);
        settle(&mut app);
        assert_eq!(app.viewer.active_section(), 1);
        app.reduce(Message::FirstSection);
        app.reduce(Message::PreviousSection);
        settle(&mut app);
        assert_eq!(app.viewer.active_section(), 0);
    }

    #[test]
    fn selecting_a_contents_entry_opens_that_spread() {
        let mut app = build_test_app(4);
        app.reduce(Message::ToggleToc);
        assert!(app.viewer.toc.is_visible());
        app.reduce(Message::SelectTocEntry(0));
        assert!(!app.viewer.toc.is_visible());
        settle(&mut app);
        assert_eq!(app.viewer.active_section(), 1);
    }

    #[test]
    fn navigation_closes_contents() {
        let mut app = build_test_app(4);
        app.reduce(Message::ToggleToc);
        app.reduce(Message::NavigateTo(2));
        assert!(!app.viewer.toc.is_visible());
    }

    #[test]
    fn empty_zine_stays_on_intro() {
        let mut app = build_test_app(0);
        app.reduce(Message::NextSection);
        settle(&mut app);
        assert_eq!(app.viewer.active_section(), 0);
    }
}
