mod assets;
mod constants;
mod ui;
mod viewer;

use crate::config::AppConfig;
use iced::Task;
use std::time::Instant;
use tracing::{debug, info};
use zine_core::{CursorEffect, Extent, Zine, ZoomViewer};

use super::messages::Message;

pub(in crate::app) use assets::{AssetSlot, AssetStore};
pub(crate) use constants::*;
pub(in crate::app) use ui::{OverlayState, WindowState};
pub use viewer::ContentSource;
pub(in crate::app) use viewer::{SpreadText, ViewerState};

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) source: ContentSource,
    pub(super) viewer: ViewerState,
    pub(super) overlays: OverlayState,
    pub(super) assets: AssetStore,
    pub(super) window: WindowState,
    /// Set when content could not be loaded; replaces the whole UI.
    pub(super) fault: Option<String>,
    pub(super) content_loading: bool,
    pub(super) last_tick: Option<Instant>,
}

impl App {
    pub(super) fn bootstrap(source: ContentSource, mut config: AppConfig) -> (App, Task<Message>) {
        clamp_config(&mut config);
        let app = App {
            viewer: ViewerState::new(Zine::default(), &config, config.window_height),
            overlays: OverlayState {
                zoom: ZoomViewer::default(),
                notice: None,
                flash: None,
                cursor: CursorEffect::new(config.cursor_shape, config.cursor_size),
            },
            assets: AssetStore::default(),
            window: WindowState {
                width: config.window_width,
                height: config.window_height,
            },
            fault: None,
            content_loading: true,
            last_tick: None,
            source,
            config,
        };

        info!(source = %app.source, "Loading zine content");
        let result = app.source.load().map_err(|err| err.to_string());
        (app, Task::done(Message::ContentLoaded(result)))
    }

    /// Replace the content; scroll, flips and overlays start over.
    pub(super) fn install_zine(&mut self, zine: Zine) -> Vec<String> {
        self.viewer = ViewerState::new(zine, &self.config, self.window.height);
        self.overlays.zoom.close();
        self.overlays.notice = None;
        self.overlays.flash = None;
        self.assets.clear();
        self.fault = None;
        self.content_loading = false;
        self.last_tick = None;
        let sources = self.viewer.zine.asset_sources();
        debug!(
            spreads = self.viewer.total(),
            assets = sources.len(),
            "Installed zine content"
        );
        sources
    }

    /// Area the zoomed image may occupy.
    pub(super) fn zoom_container(&self) -> Extent {
        Extent::new(
            self.window.width * ZOOM_AREA_FRACTION,
            (self.window.height - ZOOM_CHROME_HEIGHT_PX).max(100.0) * ZOOM_AREA_FRACTION,
        )
    }

    pub(super) fn needs_ticks(&self) -> bool {
        self.viewer.navigator.is_animating() || self.overlays.flash.is_some()
    }
}

fn clamp_config(config: &mut AppConfig) {
    fn normalize_key_binding(value: &mut String, fallback: &str) {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            *value = fallback.to_string();
        } else {
            *value = normalized;
        }
    }

    fn finite_or(value: f32, fallback: f32) -> f32 {
        if value.is_finite() { value } else { fallback }
    }

    config.window_width = finite_or(config.window_width, 1280.0).clamp(320.0, 7680.0);
    config.window_height = finite_or(config.window_height, 800.0).clamp(240.0, 4320.0);
    config.window_pos_x = config.window_pos_x.filter(|v| v.is_finite());
    config.window_pos_y = config.window_pos_y.filter(|v| v.is_finite());
    config.document_height_factor = finite_or(config.document_height_factor, 6.0)
        .clamp(MIN_DOCUMENT_HEIGHT_FACTOR, MAX_DOCUMENT_HEIGHT_FACTOR);
    config.wheel_line_px = finite_or(config.wheel_line_px, 40.0).clamp(1.0, 1000.0);
    config.key_scroll_px = finite_or(config.key_scroll_px, 80.0).clamp(1.0, 2000.0);
    config.smooth_scroll_ms = config.smooth_scroll_ms.min(MAX_SMOOTH_SCROLL_MS);
    config.head_share = finite_or(config.head_share, 0.8).clamp(0.0, 1.0);
    config.tail_sections = config.tail_sections.max(1);
    config.cursor_size = finite_or(config.cursor_size, 40.0).clamp(MIN_CURSOR_SIZE, MAX_CURSOR_SIZE);
    normalize_key_binding(&mut config.key_toggle_toc, "t");
    normalize_key_binding(&mut config.key_next_section, "j");
    normalize_key_binding(&mut config.key_prev_section, "k");
    normalize_key_binding(&mut config.key_zoom_in, "plus");
    normalize_key_binding(&mut config.key_zoom_out, "-");
    normalize_key_binding(&mut config.key_rotate, "r");
    normalize_key_binding(&mut config.key_quit, "ctrl+q");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_config_repairs_out_of_range_values() {
        let mut config = AppConfig::default();
        config.document_height_factor = f32::NAN;
        config.head_share = 3.0;
        config.tail_sections = 0;
        config.key_toggle_toc = "  ".to_string();
        config.key_quit = " Ctrl+Q ".to_string();
        clamp_config(&mut config);
        assert_eq!(config.document_height_factor, 6.0);
        assert_eq!(config.head_share, 1.0);
        assert_eq!(config.tail_sections, 1);
        assert_eq!(config.key_toggle_toc, "t");
        assert_eq!(config.key_quit, "ctrl+q");
    }

    #[test]
    fn builtin_source_loads_four_spreads() {
        assert_eq!(ContentSource::Builtin.load().unwrap().len(), 4);
    }
}
