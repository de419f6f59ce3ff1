use super::super::state::{App, MAX_TICK_STEP, TICK_INTERVAL};
use iced::mouse::ScrollDelta;
use std::time::Instant;
use tracing::{debug, trace};

impl App {
    pub(super) fn handle_wheel_scrolled(&mut self, delta: ScrollDelta) {
        let (dy, pixels) = match delta {
            ScrollDelta::Lines { y, .. } => (y, -y * self.config.wheel_line_px),
            ScrollDelta::Pixels { y, .. } => (y, -y),
        };
        if let Some(session) = self.overlays.zoom.session_mut() {
            let scale = session.wheel(dy);
            trace!(scale, "Wheel zoom");
            return;
        }
        if self.viewer.toc.is_visible() || self.overlays.notice.is_some() {
            return;
        }
        self.scroll_by_user(pixels);
    }

    pub(super) fn handle_scroll_by(&mut self, delta: f32) {
        self.scroll_by_user(delta);
    }

    fn scroll_by_user(&mut self, delta: f32) {
        if self.viewer.navigator.is_animating() {
            debug!("User scroll cancels smooth scroll");
            self.viewer.navigator.cancel();
        }
        let progress = self.viewer.tracker.scroll_by(delta);
        trace!(
            delta,
            progress,
            section = self.viewer.active_section(),
            "Scrolled"
        );
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return;
        }
        self.window.width = width;
        self.window.height = height;
        // Offsets in flight were computed for the old geometry.
        self.viewer.navigator.cancel();
        let progress = self
            .viewer
            .tracker
            .resize(height, self.config.document_height_factor);
        let container = self.zoom_container();
        if let Some(session) = self.overlays.zoom.session_mut() {
            session.set_container(container);
        }
        debug!(width, height, progress, "Window resized");
    }

    pub(super) fn handle_tick(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(TICK_INTERVAL)
            .min(MAX_TICK_STEP);

        if let Some(offset) = self.viewer.navigator.advance(dt) {
            self.viewer.tracker.set_offset(offset);
        }
        if let Some(flash) = self.overlays.flash.as_mut() {
            if !flash.advance(dt) {
                self.overlays.flash = None;
            }
        }

        self.last_tick = if self.needs_ticks() { Some(now) } else { None };
    }
}
