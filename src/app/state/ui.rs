use zine_core::{ColorFlash, CursorEffect, Notice, ZoomViewer};

/// Everything drawn above the spreads.
pub struct OverlayState {
    pub(in crate::app) zoom: ZoomViewer,
    pub(in crate::app) notice: Option<Notice>,
    pub(in crate::app) flash: Option<ColorFlash>,
    pub(in crate::app) cursor: CursorEffect,
}

pub struct WindowState {
    pub(in crate::app) width: f32,
    pub(in crate::app) height: f32,
}
