use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use tracing::{error, info, warn};
use zine_core::Zine;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::ContentLoaded(result) => self.handle_content_loaded(result, &mut effects),
            Message::RetryContent => self.handle_retry_content(&mut effects),
            Message::Quit => effects.push(Effect::Quit),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height);
            }
            // The fault screen only reacts to retry, quit and resizes.
            _ if self.fault.is_some() => {}
            Message::WheelScrolled(delta) => self.handle_wheel_scrolled(delta),
            Message::ScrollBy(delta) => self.handle_scroll_by(delta),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::Tick(now) => self.handle_tick(now),
            Message::NavigateTo(section) => self.handle_navigate_to(section),
            Message::NextSection => self.handle_next_section(),
            Message::PreviousSection => self.handle_previous_section(),
            Message::FirstSection => self.handle_navigate_to(0),
            Message::LastSection => self.handle_navigate_to(self.viewer.total()),
            Message::ToggleToc => self.handle_toggle_toc(),
            Message::CloseToc => {
                self.viewer.toc.close();
            }
            Message::SelectTocEntry(spread) => self.handle_select_toc_entry(spread),
            Message::FlipSpread(spread) => self.handle_flip_spread(spread),
            Message::Interact(spread) => self.handle_interact(spread, &mut effects),
            Message::OpenZoom(spread) => self.handle_open_zoom(spread, &mut effects),
            Message::ZoomIn => self.handle_zoom_in(),
            Message::ZoomOut => self.handle_zoom_out(),
            Message::RotateZoom => self.handle_rotate_zoom(),
            Message::CloseZoom => self.handle_close_zoom(),
            Message::ZoomBackdropClicked => self.handle_zoom_backdrop_clicked(),
            Message::ZoomDragStarted => self.handle_zoom_drag_started(),
            Message::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            Message::CursorLeft => self.overlays.cursor.leave(),
            Message::PointerReleased => self.handle_pointer_released(),
            Message::SetCursorShape(shape) => self.overlays.cursor.set_shape(shape),
            Message::DismissNotice => self.overlays.notice = None,
            Message::EscapePressed => self.handle_escape(),
            Message::AssetLoaded { source, result } => self.handle_asset_loaded(source, result),
            Message::LinkOpened { url, error } => self.handle_link_opened(url, error),
        }

        effects
    }

    fn handle_content_loaded(&mut self, result: Result<Zine, String>, effects: &mut Vec<Effect>) {
        match result {
            Ok(zine) => {
                info!(source = %self.source, spreads = zine.len(), "Zine ready");
                let sources = self.install_zine(zine);
                effects.extend(
                    sources
                        .into_iter()
                        .filter(|source| self.assets.begin(source))
                        .map(Effect::LoadAsset),
                );
            }
            Err(err) => {
                error!(source = %self.source, "Failed to load zine: {err}");
                self.content_loading = false;
                self.fault = Some(err);
            }
        }
    }

    fn handle_retry_content(&mut self, effects: &mut Vec<Effect>) {
        if self.content_loading {
            warn!("Content reload already in flight");
            return;
        }
        info!(source = %self.source, "Retrying content load");
        self.content_loading = true;
        effects.push(Effect::ReloadContent);
    }

    /// Escape closes the top-most overlay only.
    fn handle_escape(&mut self) {
        if self.overlays.notice.take().is_some() {
            return;
        }
        if self.overlays.zoom.close() {
            return;
        }
        self.viewer.toc.close();
    }
}
