use super::super::state::{App, AssetSlot};
use super::Effect;
use crate::assets::LoadedAsset;
use tracing::{debug, warn};
use zine_core::Pan;

impl App {
    pub(super) fn handle_open_zoom(&mut self, spread: usize, effects: &mut Vec<Effect>) {
        let Some(source) = self
            .viewer
            .zine
            .get(spread)
            .and_then(|item| item.image_source())
            .map(str::to_string)
        else {
            debug!(spread, "Spread has no image to zoom");
            return;
        };
        let container = self.zoom_container();
        let session = self.overlays.zoom.open(source.clone());
        session.set_container(container);
        match self.assets.get(&source) {
            Some(AssetSlot::Ready { extent, .. }) => session.mark_loaded(*extent),
            Some(AssetSlot::Failed(reason)) => session.mark_failed(reason.clone()),
            Some(AssetSlot::Loading) => {}
            None => {
                if self.assets.begin(&source) {
                    effects.push(Effect::LoadAsset(source.clone()));
                }
            }
        }
        debug!(spread, %source, "Opened zoom viewer");
    }

    pub(super) fn handle_zoom_in(&mut self) {
        if let Some(session) = self.overlays.zoom.session_mut() {
            let scale = session.zoom_in();
            debug!(scale, "Zoom in");
        }
    }

    pub(super) fn handle_zoom_out(&mut self) {
        if let Some(session) = self.overlays.zoom.session_mut() {
            let scale = session.zoom_out();
            debug!(scale, "Zoom out");
        }
    }

    pub(super) fn handle_rotate_zoom(&mut self) {
        if let Some(session) = self.overlays.zoom.session_mut() {
            let rotation = session.rotate();
            debug!(rotation, "Rotate image");
        }
    }

    pub(super) fn handle_close_zoom(&mut self) {
        if self.overlays.zoom.close() {
            debug!("Closed zoom viewer");
        }
    }

    pub(super) fn handle_zoom_backdrop_clicked(&mut self) {
        if self.overlays.zoom.backdrop_click() {
            debug!("Closed zoom viewer from backdrop");
        }
    }

    pub(super) fn handle_zoom_drag_started(&mut self) {
        let Some((x, y)) = self.overlays.cursor.position() else {
            return;
        };
        if let Some(session) = self.overlays.zoom.session_mut() {
            session.drag_start(Pan { x, y });
        }
    }

    pub(super) fn handle_cursor_moved(&mut self, x: f32, y: f32) {
        self.overlays.cursor.move_to(x, y);
        if let Some(session) = self.overlays.zoom.session_mut() {
            session.drag_move(Pan { x, y });
        }
    }

    pub(super) fn handle_pointer_released(&mut self) {
        if let Some(session) = self.overlays.zoom.session_mut() {
            if session.drag_end() {
                debug!(pan = ?session.pan(), "Drag finished");
            }
        }
    }

    pub(super) fn handle_asset_loaded(&mut self, source: String, result: Result<LoadedAsset, String>) {
        if let Err(reason) = &result {
            warn!(%source, "Failed to load image: {reason}");
        }
        let slot = self.assets.finish(source.clone(), result);
        let Some(session) = self.overlays.zoom.session_for(&source) else {
            return;
        };
        match slot {
            AssetSlot::Ready { extent, .. } => session.mark_loaded(*extent),
            AssetSlot::Failed(reason) => session.mark_failed(reason.clone()),
            AssetSlot::Loading => {}
        }
    }
}
