use super::super::state::{App, OverlayState};
use super::Effect;
use tracing::{debug, warn};
use zine_core::{ColorFlash, InteractionHost, Notice};

/// Routes interactive actions into overlay state and effects.
struct AppHost<'a> {
    overlays: &'a mut OverlayState,
    effects: &'a mut Vec<Effect>,
}

impl InteractionHost for AppHost<'_> {
    fn alert(&mut self, message: &str) {
        self.overlays.notice = Some(Notice::new(message));
    }

    fn flash(&mut self, flash: ColorFlash) {
        self.overlays.flash = Some(flash);
    }

    fn open_link(&mut self, url: &str) {
        self.effects.push(Effect::OpenLink(url.to_string()));
    }
}

impl App {
    pub(super) fn handle_flip_spread(&mut self, spread: usize) {
        if let Some(face) = self.viewer.flips.toggle(spread) {
            debug!(spread, ?face, "Flipped spread");
        }
    }

    pub(super) fn handle_interact(&mut self, spread: usize, effects: &mut Vec<Effect>) {
        let Some(interactive) = self
            .viewer
            .zine
            .get(spread)
            .and_then(|item| item.interactive.as_ref())
        else {
            return;
        };
        let was_ticking = self.needs_ticks();
        let mut host = AppHost {
            overlays: &mut self.overlays,
            effects,
        };
        interactive.action.dispatch(&mut host, &mut rand::rng());
        if !was_ticking {
            self.last_tick = None;
        }
        debug!(spread, button = %interactive.button_text, "Ran interactive action");
    }

    pub(super) fn handle_link_opened(&mut self, url: String, error: Option<String>) {
        if let Some(err) = error {
            warn!(%url, "Failed to open external link: {err}");
            self.overlays.notice = Some(Notice::new(format!("Could not open {url}")));
        }
    }
}
