mod messages;
mod state;
mod update;
mod view;

pub use state::{App, ContentSource};

use crate::config::AppConfig;
use iced::{Point, Size, window};

/// Launch the viewer window for `source`.
pub fn run_app(source: ContentSource, config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        position: match (config.window_pos_x, config.window_pos_y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                window::Position::Specific(Point::new(x, y))
            }
            _ => window::Position::Default,
        },
        ..window::Settings::default()
    };

    iced::application("Digital Zine", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| app.config.theme.into())
        .run_with(move || App::bootstrap(source, config))
}
