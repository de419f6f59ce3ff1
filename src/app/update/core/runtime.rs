use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::assets::load_asset;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::window;
use std::path::PathBuf;
use tracing::{debug, info};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadAsset(source) => {
                let cache_dir = PathBuf::from(&self.config.cache_dir);
                let allow_remote = self.config.fetch_remote_assets;
                debug!(%source, "Dispatching asset load task");
                Task::perform(
                    async move {
                        let result = load_asset(source.clone(), cache_dir, allow_remote)
                            .await
                            .map_err(|err| format!("{err:#}"));
                        Message::AssetLoaded { source, result }
                    },
                    |message| message,
                )
            }
            Effect::OpenLink(url) => {
                info!(%url, "Opening external link");
                Task::perform(
                    async move {
                        let error = open::that_detached(&url).err().map(|err| err.to_string());
                        Message::LinkOpened { url, error }
                    },
                    |message| message,
                )
            }
            Effect::ReloadContent => {
                let source = self.source.clone();
                Task::perform(
                    async move { source.load().map_err(|err| err.to_string()) },
                    Message::ContentLoaded,
                )
            }
            Effect::Quit => iced::exit(),
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    // Pointer tracking and wheel input must get through overlays that
    // capture mouse events; the viewer has no scrollable of its own.
    match &event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            return Some(Message::CursorMoved {
                x: position.x,
                y: position.y,
            });
        }
        Event::Mouse(mouse::Event::CursorLeft) => return Some(Message::CursorLeft),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            return Some(Message::PointerReleased);
        }
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            return Some(Message::WheelScrolled(*delta));
        }
        _ => {}
    }
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    fn map(event: Event, status: event::Status) -> Option<Message> {
        runtime_event_to_message(event, status, window::Id::unique())
    }

    #[test]
    fn pointer_moves_pass_even_when_captured() {
        let message = map(
            Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(3.0, 4.0),
            }),
            event::Status::Captured,
        );
        assert!(matches!(message, Some(Message::CursorMoved { x, y }) if x == 3.0 && y == 4.0));
    }

    #[test]
    fn wheel_passes_through_overlays() {
        let wheel = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
        });
        assert!(matches!(
            map(wheel, event::Status::Captured),
            Some(Message::WheelScrolled(_))
        ));
    }

    #[test]
    fn captured_key_presses_are_ignored() {
        let press = Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character("t".into()),
            modified_key: keyboard::Key::Character("t".into()),
            physical_key: keyboard::key::Physical::Unidentified(
                keyboard::key::NativeCode::Unidentified,
            ),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::empty(),
            text: None,
        });
        assert!(map(press.clone(), event::Status::Captured).is_none());
        assert!(matches!(
            map(press, event::Status::Ignored),
            Some(Message::KeyPressed { .. })
        ));
    }

    #[test]
    fn resize_maps_to_window_message() {
        let message = map(
            Event::Window(window::Event::Resized(Size::new(800.0, 600.0))),
            event::Status::Ignored,
        );
        assert!(matches!(
            message,
            Some(Message::WindowResized { width, height }) if width == 800.0 && height == 600.0
        ));
    }
}
