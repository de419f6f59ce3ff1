use std::time::Duration;

/// Layout and timing limits for the viewer.
pub(crate) const TEXT_WRAP_COLUMNS: usize = 72;
pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(16);
pub(crate) const MAX_TICK_STEP: Duration = Duration::from_millis(100);
pub(crate) const MIN_DOCUMENT_HEIGHT_FACTOR: f32 = 1.5;
pub(crate) const MAX_DOCUMENT_HEIGHT_FACTOR: f32 = 40.0;
pub(crate) const MAX_SMOOTH_SCROLL_MS: u64 = 5_000;
pub(crate) const MIN_CURSOR_SIZE: f32 = 8.0;
pub(crate) const MAX_CURSOR_SIZE: f32 = 200.0;
pub(crate) const ZOOM_CHROME_HEIGHT_PX: f32 = 140.0;
pub(crate) const ZOOM_AREA_FRACTION: f32 = 0.9;
pub(crate) const SPREAD_IMAGE_HEIGHT_PX: f32 = 320.0;
pub(crate) const SPACE_PAGE_FRACTION: f32 = 0.9;
