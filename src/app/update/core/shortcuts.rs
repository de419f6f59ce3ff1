use super::super::super::messages::Message;
use super::super::super::state::{App, SPACE_PAGE_FRACTION};
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let mut modifiers = modifiers;
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Escape) => return Some(Message::EscapePressed),
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::PageDown) => "pagedown".to_string(),
            Key::Named(key::Named::PageUp) => "pageup".to_string(),
            Key::Named(key::Named::Home) => "home".to_string(),
            Key::Named(key::Named::End) => "end".to_string(),
            Key::Named(key::Named::ArrowDown) => "down".to_string(),
            Key::Named(key::Named::ArrowUp) => "up".to_string(),
            Key::Character(ch) => {
                let token = Self::normalize_shortcut_token(ch, "");
                // Symbols already encode shift in the character itself.
                if !token.chars().all(|c| c.is_ascii_alphanumeric()) {
                    modifiers.remove(Modifiers::SHIFT);
                }
                if token == "+" { "plus".to_string() } else { token }
            }
            _ => return None,
        };

        if self.overlays.notice.is_some() {
            return None;
        }

        if Self::shortcut_matches(&self.config.key_quit, "ctrl+q", &pressed, modifiers) {
            return Some(Message::Quit);
        }

        if self.overlays.zoom.is_open() {
            return if Self::shortcut_matches(&self.config.key_zoom_in, "plus", &pressed, modifiers)
            {
                Some(Message::ZoomIn)
            } else if Self::shortcut_matches(&self.config.key_zoom_out, "-", &pressed, modifiers) {
                Some(Message::ZoomOut)
            } else if Self::shortcut_matches(&self.config.key_rotate, "r", &pressed, modifiers) {
                Some(Message::RotateZoom)
            } else {
                None
            };
        }

        let page = self.window.height * SPACE_PAGE_FRACTION;
        if Self::shortcut_matches(&self.config.key_toggle_toc, "t", &pressed, modifiers) {
            Some(Message::ToggleToc)
        } else if Self::shortcut_matches(&self.config.key_next_section, "j", &pressed, modifiers)
            || Self::shortcut_matches("pagedown", "pagedown", &pressed, modifiers)
        {
            Some(Message::NextSection)
        } else if Self::shortcut_matches(&self.config.key_prev_section, "k", &pressed, modifiers)
            || Self::shortcut_matches("pageup", "pageup", &pressed, modifiers)
        {
            Some(Message::PreviousSection)
        } else if Self::shortcut_matches("home", "home", &pressed, modifiers) {
            Some(Message::FirstSection)
        } else if Self::shortcut_matches("end", "end", &pressed, modifiers) {
            Some(Message::LastSection)
        } else if Self::shortcut_matches("down", "down", &pressed, modifiers) {
            Some(Message::ScrollBy(self.config.key_scroll_px))
        } else if Self::shortcut_matches("up", "up", &pressed, modifiers) {
            Some(Message::ScrollBy(-self.config.key_scroll_px))
        } else if Self::shortcut_matches("space", "space", &pressed, modifiers) {
            Some(Message::ScrollBy(page))
        } else if Self::shortcut_matches("shift+space", "space", &pressed, modifiers) {
            Some(Message::ScrollBy(-page))
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
                .replace("spacebar", "space")
                .replace("page_down", "pagedown")
                .replace("page_up", "pageup")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ContentSource;
    use crate::config::AppConfig;
    use iced::keyboard::Modifiers;
    use zine_core::Notice;

    fn build_test_app() -> App {
        let (mut app, _task) = App::bootstrap(ContentSource::Builtin, AppConfig::default());
        let zine = ContentSource::Builtin.load().unwrap();
        app.reduce(Message::ContentLoaded(Ok(zine)));
        app
    }

    fn char_key(ch: &str) -> Key {
        Key::Character(ch.into())
    }

    #[test]
    fn normalizes_spacebar_alias() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
    }

    #[test]
    fn matches_ctrl_q_shortcut() {
        assert!(App::shortcut_matches("ctrl+q", "x", "q", Modifiers::CTRL));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "ctrl+q",
            "x",
            "q",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn t_toggles_contents() {
        let app = build_test_app();
        assert!(matches!(
            app.shortcut_message_for_key(char_key("t"), Modifiers::empty()),
            Some(Message::ToggleToc)
        ));
    }

    #[test]
    fn paging_keys_navigate_sections() {
        let app = build_test_app();
        assert!(matches!(
            app.shortcut_message_for_key(Key::Named(key::Named::PageDown), Modifiers::empty()),
            Some(Message::NextSection)
        ));
        assert!(matches!(
            app.shortcut_message_for_key(char_key("k"), Modifiers::empty()),
            Some(Message::PreviousSection)
        ));
        assert!(matches!(
            app.shortcut_message_for_key(Key::Named(key::Named::End), Modifiers::empty()),
            Some(Message::LastSection)
        ));
    }

    #[test]
    fn shifted_plus_zooms_in_while_overlay_open() {
        let mut app = build_test_app();
        app.overlays.zoom.open("cover.png");
        assert!(matches!(
            app.shortcut_message_for_key(char_key("+"), Modifiers::SHIFT),
            Some(Message::ZoomIn)
        ));
        assert!(matches!(
            app.shortcut_message_for_key(char_key("r"), Modifiers::empty()),
            Some(Message::RotateZoom)
        ));
        assert!(app
            .shortcut_message_for_key(char_key("j"), Modifiers::empty())
            .is_none());
    }

    #[test]
    fn notice_swallows_everything_but_escape() {
        let mut app = build_test_app();
        app.overlays.notice = Some(Notice::new("hello"));
        assert!(app
            .shortcut_message_for_key(char_key("t"), Modifiers::empty())
            .is_none());
        assert!(matches!(
            app.shortcut_message_for_key(Key::Named(key::Named::Escape), Modifiers::empty()),
            Some(Message::EscapePressed)
        ));
    }

    #[test]
    fn shift_space_scrolls_up() {
        let app = build_test_app();
        let Some(Message::ScrollBy(delta)) =
            app.shortcut_message_for_key(Key::Named(key::Named::Space), Modifiers::SHIFT)
        else {
            panic!("expected scroll");
        };
        assert!(delta < 0.0);
    }
}
