use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;
use zine_core::CursorShape;

/// Table names that mark a config file as table-structured.
pub(super) const TABLE_NAMES: [&str; 9] = [
    "appearance",
    "window",
    "scroll",
    "layout",
    "visibility",
    "cursor",
    "content",
    "logging",
    "keys",
];

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    scroll: ScrollConfig,
    #[serde(default)]
    layout: LayoutConfig,
    #[serde(default)]
    visibility: VisibilityConfig,
    #[serde(default)]
    cursor: CursorConfig,
    #[serde(default)]
    content: ContentConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.window.width,
            window_height: tables.window.height,
            window_pos_x: tables.window.pos_x,
            window_pos_y: tables.window.pos_y,
            document_height_factor: tables.scroll.document_height_factor,
            wheel_line_px: tables.scroll.wheel_line_px,
            key_scroll_px: tables.scroll.key_scroll_px,
            smooth_scroll_ms: tables.scroll.smooth_scroll_ms,
            head_share: tables.layout.head_share,
            tail_sections: tables.layout.tail_sections,
            fade_in_start: tables.visibility.fade_in_start,
            fade_in_end: tables.visibility.fade_in_end,
            closing_fade_in_start: tables.visibility.closing_fade_in_start,
            closing_fade_in_end: tables.visibility.closing_fade_in_end,
            parallax_distance: tables.visibility.parallax_distance,
            closing_parallax_distance: tables.visibility.closing_parallax_distance,
            closing_spreads: tables.visibility.closing_spreads,
            cursor_shape: tables.cursor.shape,
            cursor_size: tables.cursor.size,
            show_cursor_effect: tables.cursor.enabled,
            spreads_path: tables.content.spreads_path,
            cache_dir: tables.content.cache_dir,
            fetch_remote_assets: tables.content.fetch_remote_assets,
            log_level: tables.logging.log_level,
            key_toggle_toc: tables.keys.toggle_toc,
            key_next_section: tables.keys.next_section,
            key_prev_section: tables.keys.prev_section,
            key_zoom_in: tables.keys.zoom_in,
            key_zoom_out: tables.keys.zoom_out,
            key_rotate: tables.keys.rotate,
            key_quit: tables.keys.quit,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
            },
            window: WindowConfig {
                width: config.window_width,
                height: config.window_height,
                pos_x: config.window_pos_x,
                pos_y: config.window_pos_y,
            },
            scroll: ScrollConfig {
                document_height_factor: config.document_height_factor,
                wheel_line_px: config.wheel_line_px,
                key_scroll_px: config.key_scroll_px,
                smooth_scroll_ms: config.smooth_scroll_ms,
            },
            layout: LayoutConfig {
                head_share: config.head_share,
                tail_sections: config.tail_sections,
            },
            visibility: VisibilityConfig {
                fade_in_start: config.fade_in_start,
                fade_in_end: config.fade_in_end,
                closing_fade_in_start: config.closing_fade_in_start,
                closing_fade_in_end: config.closing_fade_in_end,
                parallax_distance: config.parallax_distance,
                closing_parallax_distance: config.closing_parallax_distance,
                closing_spreads: config.closing_spreads,
            },
            cursor: CursorConfig {
                shape: config.cursor_shape,
                size: config.cursor_size,
                enabled: config.show_cursor_effect,
            },
            content: ContentConfig {
                spreads_path: config.spreads_path.clone(),
                cache_dir: config.cache_dir.clone(),
                fetch_remote_assets: config.fetch_remote_assets,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            keys: KeysConfig {
                toggle_toc: config.key_toggle_toc.clone(),
                next_section: config.key_next_section.clone(),
                prev_section: config.key_prev_section.clone(),
                zoom_in: config.key_zoom_in.clone(),
                zoom_out: config.key_zoom_out.clone(),
                rotate: config.key_rotate.clone(),
                quit: config.key_quit.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pos_x: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pos_y: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
            pos_x: None,
            pos_y: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ScrollConfig {
    #[serde(default = "defaults::default_document_height_factor")]
    document_height_factor: f32,
    #[serde(default = "defaults::default_wheel_line_px")]
    wheel_line_px: f32,
    #[serde(default = "defaults::default_key_scroll_px")]
    key_scroll_px: f32,
    #[serde(default = "defaults::default_smooth_scroll_ms")]
    smooth_scroll_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            document_height_factor: defaults::default_document_height_factor(),
            wheel_line_px: defaults::default_wheel_line_px(),
            key_scroll_px: defaults::default_key_scroll_px(),
            smooth_scroll_ms: defaults::default_smooth_scroll_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LayoutConfig {
    #[serde(default = "defaults::default_head_share")]
    head_share: f32,
    #[serde(default = "defaults::default_tail_sections")]
    tail_sections: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            head_share: defaults::default_head_share(),
            tail_sections: defaults::default_tail_sections(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct VisibilityConfig {
    #[serde(default = "defaults::default_fade_in_start")]
    fade_in_start: f32,
    #[serde(default = "defaults::default_fade_in_end")]
    fade_in_end: f32,
    #[serde(default = "defaults::default_closing_fade_in_start")]
    closing_fade_in_start: f32,
    #[serde(default = "defaults::default_closing_fade_in_end")]
    closing_fade_in_end: f32,
    #[serde(default = "defaults::default_parallax_distance")]
    parallax_distance: f32,
    #[serde(default = "defaults::default_closing_parallax_distance")]
    closing_parallax_distance: f32,
    #[serde(default = "defaults::default_closing_spreads")]
    closing_spreads: usize,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        VisibilityConfig {
            fade_in_start: defaults::default_fade_in_start(),
            fade_in_end: defaults::default_fade_in_end(),
            closing_fade_in_start: defaults::default_closing_fade_in_start(),
            closing_fade_in_end: defaults::default_closing_fade_in_end(),
            parallax_distance: defaults::default_parallax_distance(),
            closing_parallax_distance: defaults::default_closing_parallax_distance(),
            closing_spreads: defaults::default_closing_spreads(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct CursorConfig {
    #[serde(default)]
    shape: CursorShape,
    #[serde(default = "defaults::default_cursor_size")]
    size: f32,
    #[serde(default = "defaults::default_show_cursor_effect")]
    enabled: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        CursorConfig {
            shape: CursorShape::default(),
            size: defaults::default_cursor_size(),
            enabled: defaults::default_show_cursor_effect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ContentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    spreads_path: Option<String>,
    #[serde(default = "defaults::default_cache_dir")]
    cache_dir: String,
    #[serde(default = "defaults::default_fetch_remote_assets")]
    fetch_remote_assets: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        ContentConfig {
            spreads_path: None,
            cache_dir: defaults::default_cache_dir(),
            fetch_remote_assets: defaults::default_fetch_remote_assets(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_toggle_toc")]
    toggle_toc: String,
    #[serde(default = "defaults::default_key_next_section")]
    next_section: String,
    #[serde(default = "defaults::default_key_prev_section")]
    prev_section: String,
    #[serde(default = "defaults::default_key_zoom_in")]
    zoom_in: String,
    #[serde(default = "defaults::default_key_zoom_out")]
    zoom_out: String,
    #[serde(default = "defaults::default_key_rotate")]
    rotate: String,
    #[serde(default = "defaults::default_key_quit")]
    quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            toggle_toc: defaults::default_key_toggle_toc(),
            next_section: defaults::default_key_next_section(),
            prev_section: defaults::default_key_prev_section(),
            zoom_in: defaults::default_key_zoom_in(),
            zoom_out: defaults::default_key_zoom_out(),
            rotate: defaults::default_key_rotate(),
            quit: defaults::default_key_quit(),
        }
    }
}
