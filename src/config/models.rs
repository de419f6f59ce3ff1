use serde::Deserialize;
use std::time::Duration;
use zine_core::{CursorShape, SectionLayout, VisibilityProfile};

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default)]
    pub window_pos_x: Option<f32>,
    #[serde(default)]
    pub window_pos_y: Option<f32>,
    /// Document height in viewport heights.
    #[serde(default = "crate::config::defaults::default_document_height_factor")]
    pub document_height_factor: f32,
    #[serde(default = "crate::config::defaults::default_wheel_line_px")]
    pub wheel_line_px: f32,
    #[serde(default = "crate::config::defaults::default_key_scroll_px")]
    pub key_scroll_px: f32,
    #[serde(default = "crate::config::defaults::default_smooth_scroll_ms")]
    pub smooth_scroll_ms: u64,
    #[serde(default = "crate::config::defaults::default_head_share")]
    pub head_share: f32,
    #[serde(default = "crate::config::defaults::default_tail_sections")]
    pub tail_sections: usize,
    #[serde(default = "crate::config::defaults::default_fade_in_start")]
    pub fade_in_start: f32,
    #[serde(default = "crate::config::defaults::default_fade_in_end")]
    pub fade_in_end: f32,
    #[serde(default = "crate::config::defaults::default_closing_fade_in_start")]
    pub closing_fade_in_start: f32,
    #[serde(default = "crate::config::defaults::default_closing_fade_in_end")]
    pub closing_fade_in_end: f32,
    #[serde(default = "crate::config::defaults::default_parallax_distance")]
    pub parallax_distance: f32,
    #[serde(default = "crate::config::defaults::default_closing_parallax_distance")]
    pub closing_parallax_distance: f32,
    #[serde(default = "crate::config::defaults::default_closing_spreads")]
    pub closing_spreads: usize,
    #[serde(default)]
    pub cursor_shape: CursorShape,
    #[serde(default = "crate::config::defaults::default_cursor_size")]
    pub cursor_size: f32,
    #[serde(default = "crate::config::defaults::default_show_cursor_effect")]
    pub show_cursor_effect: bool,
    #[serde(default)]
    pub spreads_path: Option<String>,
    #[serde(default = "crate::config::defaults::default_cache_dir")]
    pub cache_dir: String,
    #[serde(default = "crate::config::defaults::default_fetch_remote_assets")]
    pub fetch_remote_assets: bool,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_toggle_toc")]
    pub key_toggle_toc: String,
    #[serde(default = "crate::config::defaults::default_key_next_section")]
    pub key_next_section: String,
    #[serde(default = "crate::config::defaults::default_key_prev_section")]
    pub key_prev_section: String,
    #[serde(default = "crate::config::defaults::default_key_zoom_in")]
    pub key_zoom_in: String,
    #[serde(default = "crate::config::defaults::default_key_zoom_out")]
    pub key_zoom_out: String,
    #[serde(default = "crate::config::defaults::default_key_rotate")]
    pub key_rotate: String,
    #[serde(default = "crate::config::defaults::default_key_quit")]
    pub key_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            window_pos_x: None,
            window_pos_y: None,
            document_height_factor: crate::config::defaults::default_document_height_factor(),
            wheel_line_px: crate::config::defaults::default_wheel_line_px(),
            key_scroll_px: crate::config::defaults::default_key_scroll_px(),
            smooth_scroll_ms: crate::config::defaults::default_smooth_scroll_ms(),
            head_share: crate::config::defaults::default_head_share(),
            tail_sections: crate::config::defaults::default_tail_sections(),
            fade_in_start: crate::config::defaults::default_fade_in_start(),
            fade_in_end: crate::config::defaults::default_fade_in_end(),
            closing_fade_in_start: crate::config::defaults::default_closing_fade_in_start(),
            closing_fade_in_end: crate::config::defaults::default_closing_fade_in_end(),
            parallax_distance: crate::config::defaults::default_parallax_distance(),
            closing_parallax_distance: crate::config::defaults::default_closing_parallax_distance(
            ),
            closing_spreads: crate::config::defaults::default_closing_spreads(),
            cursor_shape: CursorShape::default(),
            cursor_size: crate::config::defaults::default_cursor_size(),
            show_cursor_effect: crate::config::defaults::default_show_cursor_effect(),
            spreads_path: None,
            cache_dir: crate::config::defaults::default_cache_dir(),
            fetch_remote_assets: crate::config::defaults::default_fetch_remote_assets(),
            log_level: crate::config::defaults::default_log_level(),
            key_toggle_toc: crate::config::defaults::default_key_toggle_toc(),
            key_next_section: crate::config::defaults::default_key_next_section(),
            key_prev_section: crate::config::defaults::default_key_prev_section(),
            key_zoom_in: crate::config::defaults::default_key_zoom_in(),
            key_zoom_out: crate::config::defaults::default_key_zoom_out(),
            key_rotate: crate::config::defaults::default_key_rotate(),
            key_quit: crate::config::defaults::default_key_quit(),
        }
    }
}

impl AppConfig {
    pub fn section_layout(&self) -> SectionLayout {
        SectionLayout {
            head_share: self.head_share,
            tail_sections: self.tail_sections,
        }
    }

    pub fn visibility_profile(&self) -> VisibilityProfile {
        VisibilityProfile {
            fade_in: (self.fade_in_start, self.fade_in_end),
            closing_fade_in: (self.closing_fade_in_start, self.closing_fade_in_end),
            parallax_distance: self.parallax_distance,
            closing_parallax_distance: self.closing_parallax_distance,
            closing_spreads: self.closing_spreads,
        }
    }

    pub fn smooth_scroll_duration(&self) -> Duration {
        Duration::from_millis(self.smooth_scroll_ms)
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
