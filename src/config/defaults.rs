pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_document_height_factor() -> f32 {
    6.0
}

pub(crate) fn default_wheel_line_px() -> f32 {
    40.0
}

pub(crate) fn default_key_scroll_px() -> f32 {
    80.0
}

pub(crate) fn default_smooth_scroll_ms() -> u64 {
    600
}

pub(crate) fn default_head_share() -> f32 {
    0.8
}

pub(crate) fn default_tail_sections() -> usize {
    2
}

pub(crate) fn default_fade_in_start() -> f32 {
    0.05
}

pub(crate) fn default_fade_in_end() -> f32 {
    0.20
}

pub(crate) fn default_closing_fade_in_start() -> f32 {
    -0.05
}

pub(crate) fn default_closing_fade_in_end() -> f32 {
    0.15
}

pub(crate) fn default_parallax_distance() -> f32 {
    -200.0
}

pub(crate) fn default_closing_parallax_distance() -> f32 {
    -100.0
}

pub(crate) fn default_closing_spreads() -> usize {
    2
}

pub(crate) fn default_cursor_size() -> f32 {
    40.0
}

pub(crate) fn default_show_cursor_effect() -> bool {
    true
}

pub(crate) fn default_cache_dir() -> String {
    ".cache".to_string()
}

pub(crate) fn default_fetch_remote_assets() -> bool {
    true
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_toggle_toc() -> String {
    "t".to_string()
}

pub(crate) fn default_key_next_section() -> String {
    "j".to_string()
}

pub(crate) fn default_key_prev_section() -> String {
    "k".to_string()
}

pub(crate) fn default_key_zoom_in() -> String {
    "plus".to_string()
}

pub(crate) fn default_key_zoom_out() -> String {
    "-".to_string()
}

pub(crate) fn default_key_rotate() -> String {
    "r".to_string()
}

pub(crate) fn default_key_quit() -> String {
    "ctrl+q".to_string()
}
