//! Image inspection overlay state: zoom, rotation and drag-pan.
//!
//! A session exists only while the overlay is open. Opening always starts a
//! fresh session, so scale, rotation and pan never leak between images.

use serde::Serialize;

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 5.0;
pub const SCALE_STEP: f32 = 0.5;
pub const ROTATION_STEP: u32 = 90;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum ImageStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Translation of the image from the centre of the overlay, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Pan {
    pub x: f32,
    pub y: f32,
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    pointer: Pan,
    pan: Pan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomSession {
    image: String,
    scale: f32,
    rotation: u32,
    pan: Pan,
    drag: Option<DragAnchor>,
    status: ImageStatus,
    container: Option<Extent>,
    natural: Option<Extent>,
}

impl ZoomSession {
    fn new(image: String) -> Self {
        Self {
            image,
            scale: 1.0,
            rotation: 0,
            pan: Pan::default(),
            drag: None,
            status: ImageStatus::Loading,
            container: None,
            natural: None,
        }
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Accumulated rotation; keeps growing past 360.
    pub fn rotation(&self) -> u32 {
        self.rotation
    }

    /// Rotation normalized to `[0, 360)` for display.
    pub fn display_rotation(&self) -> u32 {
        self.rotation % 360
    }

    pub fn pan(&self) -> Pan {
        self.pan
    }

    pub fn status(&self) -> &ImageStatus {
        &self.status
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.scale = (self.scale + SCALE_STEP).min(MAX_SCALE);
        self.clamp_pan();
        self.scale
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.scale = (self.scale - SCALE_STEP).max(MIN_SCALE);
        self.clamp_pan();
        self.scale
    }

    /// Wheel input: scrolling up zooms in, down zooms out.
    pub fn wheel(&mut self, delta_y: f32) -> f32 {
        if delta_y > 0.0 {
            self.zoom_in()
        } else if delta_y < 0.0 {
            self.zoom_out()
        } else {
            self.scale
        }
    }

    pub fn rotate(&mut self) -> u32 {
        self.rotation = self.rotation.saturating_add(ROTATION_STEP);
        self.clamp_pan();
        self.rotation
    }

    pub fn mark_loaded(&mut self, natural: Extent) {
        self.status = ImageStatus::Loaded;
        self.natural = Some(natural);
        self.clamp_pan();
    }

    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        self.status = ImageStatus::Failed(reason.into());
        self.drag = None;
    }

    /// Size of the area the image may move within.
    pub fn set_container(&mut self, container: Extent) {
        self.container = Some(container);
        self.clamp_pan();
    }

    pub fn drag_start(&mut self, pointer: Pan) {
        if matches!(self.status, ImageStatus::Failed(_)) {
            return;
        }
        self.drag = Some(DragAnchor {
            pointer,
            pan: self.pan,
        });
    }

    pub fn drag_move(&mut self, pointer: Pan) -> Option<Pan> {
        let anchor = self.drag?;
        self.pan = Pan {
            x: anchor.pan.x + (pointer.x - anchor.pointer.x),
            y: anchor.pan.y + (pointer.y - anchor.pointer.y),
        };
        self.clamp_pan();
        Some(self.pan)
    }

    pub fn drag_end(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Whether a click on the backdrop should close the overlay.
    pub fn accepts_backdrop_click(&self) -> bool {
        !self.is_dragging()
    }

    /// Displayed size of the image after scale and rotation.
    pub fn displayed_extent(&self) -> Option<Extent> {
        let natural = self.fitted_extent()?;
        let (width, height) = if (self.rotation / ROTATION_STEP) % 2 == 1 {
            (natural.height, natural.width)
        } else {
            (natural.width, natural.height)
        };
        Some(Extent::new(width * self.scale, height * self.scale))
    }

    /// Natural size shrunk to fit the container, as the overlay lays it out
    /// before scaling.
    pub fn fitted_extent(&self) -> Option<Extent> {
        let natural = self.natural?;
        let Some(container) = self.container else {
            return Some(natural);
        };
        if natural.width <= 0.0 || natural.height <= 0.0 {
            return Some(natural);
        }
        let fit = (container.width / natural.width)
            .min(container.height / natural.height)
            .min(1.0);
        Some(Extent::new(natural.width * fit, natural.height * fit))
    }

    /// Per-axis pan limit that keeps the image inside the container.
    pub fn pan_limit(&self) -> Option<Pan> {
        let container = self.container?;
        let image = self.displayed_extent()?;
        Some(Pan {
            x: ((container.width - image.width) / 2.0).abs(),
            y: ((container.height - image.height) / 2.0).abs(),
        })
    }

    fn clamp_pan(&mut self) {
        if let Some(limit) = self.pan_limit() {
            self.pan.x = self.pan.x.clamp(-limit.x, limit.x);
            self.pan.y = self.pan.y.clamp(-limit.y, limit.y);
        }
    }
}

/// The overlay: either closed or holding one session.
#[derive(Debug, Clone, Default)]
pub struct ZoomViewer {
    session: Option<ZoomSession>,
}

impl ZoomViewer {
    pub fn open(&mut self, image: impl Into<String>) -> &mut ZoomSession {
        self.session.insert(ZoomSession::new(image.into()))
    }

    /// Close the overlay; returns whether it was open.
    pub fn close(&mut self) -> bool {
        self.session.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&ZoomSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut ZoomSession> {
        self.session.as_mut()
    }

    /// Session for `image`, if that image is still the one on screen.
    pub fn session_for(&mut self, image: &str) -> Option<&mut ZoomSession> {
        self.session.as_mut().filter(|session| session.image == image)
    }

    /// Handle a click on the backdrop; returns whether the overlay closed.
    pub fn backdrop_click(&mut self) -> bool {
        let accepts = self
            .session
            .as_ref()
            .is_some_and(ZoomSession::accepts_backdrop_click);
        accepts && self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_session() -> ZoomViewer {
        let mut viewer = ZoomViewer::default();
        viewer.open("https://example.org/a.png");
        viewer
    }

    #[test]
    fn zoom_in_then_out_returns_to_one() {
        let mut viewer = open_session();
        let session = viewer.session_mut().unwrap();
        session.zoom_in();
        assert_eq!(session.zoom_out(), 1.0);
    }

    #[test]
    fn zoom_saturates() {
        let mut viewer = open_session();
        let session = viewer.session_mut().unwrap();
        for _ in 0..20 {
            session.zoom_in();
        }
        assert_eq!(session.scale(), MAX_SCALE);
        for _ in 0..20 {
            session.zoom_out();
        }
        assert_eq!(session.scale(), MIN_SCALE);
    }

    #[test]
    fn four_rotations_display_as_zero() {
        let mut viewer = open_session();
        let session = viewer.session_mut().unwrap();
        for _ in 0..4 {
            session.rotate();
        }
        assert_eq!(session.rotation(), 360);
        assert_eq!(session.display_rotation(), 0);
    }

    #[test]
    fn reopening_resets_state() {
        let mut viewer = open_session();
        {
            let session = viewer.session_mut().unwrap();
            session.zoom_in();
            session.rotate();
        }
        let session = viewer.open("https://example.org/b.png");
        assert_eq!(session.scale(), 1.0);
        assert_eq!(session.rotation(), 0);
        assert_eq!(session.pan(), Pan::default());
        assert_eq!(session.status(), &ImageStatus::Loading);
    }

    #[test]
    fn drag_pan_is_bounded_by_container() {
        let mut viewer = open_session();
        let session = viewer.session_mut().unwrap();
        session.set_container(Extent::new(800.0, 600.0));
        session.mark_loaded(Extent::new(400.0, 300.0));
        session.drag_start(Pan { x: 100.0, y: 100.0 });
        let pan = session.drag_move(Pan { x: 900.0, y: -900.0 }).unwrap();
        assert_eq!(pan, Pan { x: 200.0, y: -150.0 });
        assert!(session.drag_end());
        assert!(!session.is_dragging());
    }

    #[test]
    fn rotation_swaps_pan_axes() {
        let mut viewer = open_session();
        let session = viewer.session_mut().unwrap();
        session.set_container(Extent::new(800.0, 600.0));
        session.mark_loaded(Extent::new(400.0, 200.0));
        session.rotate();
        let limit = session.pan_limit().unwrap();
        assert_eq!(limit, Pan { x: 300.0, y: 100.0 });
    }

    #[test]
    fn backdrop_click_is_ignored_while_dragging() {
        let mut viewer = open_session();
        viewer.session_mut().unwrap().drag_start(Pan::default());
        assert!(!viewer.backdrop_click());
        assert!(viewer.is_open());
        viewer.session_mut().unwrap().drag_end();
        assert!(viewer.backdrop_click());
        assert!(!viewer.is_open());
    }

    #[test]
    fn failed_image_is_reported_and_stops_drag() {
        let mut viewer = open_session();
        let session = viewer.session_mut().unwrap();
        session.drag_start(Pan::default());
        session.mark_failed("404");
        assert!(!session.is_dragging());
        assert_eq!(session.status(), &ImageStatus::Failed("404".to_string()));
    }

    #[test]
    fn stale_results_do_not_match_new_image() {
        let mut viewer = open_session();
        viewer.open("https://example.org/other.png");
        assert!(viewer.session_for("https://example.org/a.png").is_none());
        assert!(viewer.session_for("https://example.org/other.png").is_some());
    }
}
