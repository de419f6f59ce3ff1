mod canvas;

use super::messages::Message;
use super::state::{App, AssetSlot, SPREAD_IMAGE_HEIGHT_PX};
use crate::theme::Palette;
use canvas::{CursorLayer, HeroTitle};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::Wrapping;
use iced::widget::{
    Column, Space, Stack, button, column, container, horizontal_space, image, mouse_area, opaque,
    pick_list, row, scrollable, text,
};
use iced::{Background, Border, Color, ContentFit, Element, Length, Padding, Radians, Rotation};
use zine_core::visibility::current_spread_index;
use zine_core::{CursorShape, HeroTransform, ImageStatus, SpreadVisual, ZoomSession};

const VISIBLE_OPACITY: f32 = 0.01;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = Palette::for_mode(self.config.theme);
        if let Some(reason) = &self.fault {
            return self.fault_view(reason, palette);
        }

        let visuals = self.viewer.visuals();
        let mut layers: Vec<Element<'_, Message>> = vec![self.backdrop(palette)];

        let hero_opacity = 1.0 - visuals.first().map(|v| v.opacity).unwrap_or(0.0);
        if hero_opacity > VISIBLE_OPACITY {
            layers.push(self.hero(hero_opacity, palette));
        }
        for (index, visual) in visuals.iter().enumerate() {
            if visual.opacity > VISIBLE_OPACITY {
                layers.push(self.spread_card(index, *visual, palette));
            }
        }
        layers.push(self.chrome(palette));

        if let Some(flash) = &self.overlays.flash {
            let rgba = flash.color();
            let color = Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a * flash.opacity());
            layers.push(
                container(Space::new(Length::Fill, Length::Fill))
                    .style(move |_| container::Style {
                        background: Some(Background::Color(color)),
                        ..container::Style::default()
                    })
                    .into(),
            );
        }
        if self.viewer.toc.is_visible() {
            layers.push(self.toc_overlay(palette));
        }
        if let Some(session) = self.overlays.zoom.session() {
            layers.push(self.zoom_overlay(session, palette));
        }
        if let Some(notice) = &self.overlays.notice {
            layers.push(modal(
                Message::DismissNotice,
                column![
                    text(notice.message.as_str()).size(18),
                    button("OK").on_press(Message::DismissNotice),
                ]
                .spacing(16)
                .align_x(Horizontal::Center),
                palette,
            ));
        }
        if self.config.show_cursor_effect && self.overlays.cursor.position().is_some() {
            layers.push(
                iced::widget::canvas(CursorLayer {
                    effect: self.overlays.cursor,
                    color: palette.accent,
                })
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            );
        }

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn fault_view(&self, reason: &str, palette: Palette) -> Element<'_, Message> {
        let retry = button("Try again")
            .on_press_maybe((!self.content_loading).then_some(Message::RetryContent));
        container(
            column![
                text("Something went wrong").size(28),
                text(reason.to_string()).color(palette.muted),
                retry,
            ]
            .spacing(16)
            .align_x(Horizontal::Center),
        )
        .center(Length::Fill)
        .style(move |_| page_style(palette))
        .into()
    }

    /// The active spread's background image, dimmed behind everything else.
    fn backdrop(&self, palette: Palette) -> Element<'_, Message> {
        let active = current_spread_index(self.viewer.tracker.progress(), self.viewer.total());
        let handle = active
            .and_then(|index| self.viewer.zine.get(index))
            .and_then(|spread| spread.background_source())
            .and_then(|source| match self.assets.get(source) {
                Some(AssetSlot::Ready { handle, .. }) => Some(handle.clone()),
                _ => None,
            });
        let content: Element<'_, Message> = match handle {
            Some(handle) => image(handle)
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .opacity(0.3)
                .into(),
            None => Space::new(Length::Fill, Length::Fill).into(),
        };
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| page_style(palette))
            .into()
    }

    fn hero(&self, opacity: f32, palette: Palette) -> Element<'_, Message> {
        let transform = HeroTransform::at(self.viewer.tracker.progress());
        let title = iced::widget::canvas(HeroTitle {
            title: "Digital Zine".to_string(),
            subtitle: "Scroll to explore".to_string(),
            transform,
            color: Color {
                a: opacity,
                ..palette.text
            },
        })
        .width(Length::Fill)
        .height(Length::FillPortion(3));

        let actions = row![
            button("Start Reading").on_press(Message::NavigateTo(1)),
            button("View Contents")
                .style(button::secondary)
                .on_press(Message::ToggleToc),
        ]
        .spacing(16);

        column![
            title,
            container(actions)
                .center_x(Length::Fill)
                .height(Length::FillPortion(1)),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn spread_card(
        &self,
        index: usize,
        visual: SpreadVisual,
        palette: Palette,
    ) -> Element<'_, Message> {
        let Some(spread) = self.viewer.zine.get(index) else {
            return Space::new(Length::Shrink, Length::Shrink).into();
        };
        let Some(texts) = self.viewer.texts.get(index) else {
            return Space::new(Length::Shrink, Length::Shrink).into();
        };
        let alpha = visual.opacity;
        let text_color = fade(palette.text, alpha);
        let muted = fade(palette.muted, alpha);
        let total = self.viewer.total();

        let page_label = text(format!("{} / {}", index + 1, total))
            .size(14)
            .color(muted);

        let mut body: Column<'_, Message> = column![page_label].spacing(12);
        if self.viewer.flips.face(index).is_back() {
            body = body
                .push(text(spread.back_title()).size(28).color(text_color))
                .push(
                    text(texts.back.as_str())
                        .color(text_color)
                        .wrapping(Wrapping::WordOrGlyph),
                )
                .push(button("Flip Back").on_press(Message::FlipSpread(index)));
        } else {
            if let Some(source) = spread.image_source() {
                body = body.push(self.spread_image(index, source, alpha, palette));
            }
            body = body
                .push(text(spread.display_title(index)).size(28).color(text_color))
                .push(
                    text(texts.front.as_str())
                        .color(text_color)
                        .wrapping(Wrapping::WordOrGlyph),
                );
            if !spread.description.is_empty() {
                body = body.push(text(spread.description.as_str()).size(14).color(muted));
            }
            let mut actions = row![button("Flip Page").on_press(Message::FlipSpread(index))]
                .spacing(10)
                .align_y(Vertical::Center);
            if let Some(interactive) = &spread.interactive {
                actions = actions.push(
                    button(text(interactive.button_text.as_str()))
                        .style(button::success)
                        .on_press(Message::Interact(index)),
                );
            }
            if spread.image_source().is_some() {
                actions = actions.push(
                    button("Zoom")
                        .style(button::secondary)
                        .on_press(Message::OpenZoom(index)),
                );
            }
            body = body.push(actions);
        }

        let drift = self
            .viewer
            .profile
            .parallax_distance
            .abs()
            .max(self.viewer.profile.closing_parallax_distance.abs());
        let top = (drift + visual.parallax_offset).max(0.0);
        let card_color = fade(palette.card, alpha);

        container(
            container(body)
                .padding(24)
                .max_width(720)
                .style(move |_| container::Style {
                    background: Some(Background::Color(card_color)),
                    border: Border {
                        radius: 12.0.into(),
                        ..Border::default()
                    },
                    ..container::Style::default()
                }),
        )
        .center_x(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: top + 64.0,
            right: 48.0,
            bottom: 24.0,
            left: 48.0,
        })
        .into()
    }

    fn spread_image(
        &self,
        index: usize,
        source: &str,
        alpha: f32,
        palette: Palette,
    ) -> Element<'_, Message> {
        let content: Element<'_, Message> = match self.assets.get(source) {
            Some(AssetSlot::Ready { handle, .. }) => mouse_area(
                image(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .height(Length::Fixed(SPREAD_IMAGE_HEIGHT_PX))
                    .opacity(alpha),
            )
            .on_press(Message::OpenZoom(index))
            .into(),
            Some(AssetSlot::Failed(_)) => text("Image unavailable")
                .color(fade(palette.muted, alpha))
                .into(),
            Some(AssetSlot::Loading) | None => text("Loading image\u{2026}")
                .color(fade(palette.muted, alpha))
                .into(),
        };
        container(content).center_x(Length::Fill).into()
    }

    fn chrome(&self, palette: Palette) -> Element<'_, Message> {
        let total = self.viewer.total();
        let label = match current_spread_index(self.viewer.tracker.progress(), total) {
            Some(index) => format!("Spread {} of {}", index + 1, total),
            None => "No spreads".to_string(),
        };
        let cursor_picker = pick_list(
            &CursorShape::ALL[..],
            Some(self.overlays.cursor.shape()),
            Message::SetCursorShape,
        )
        .width(Length::Fixed(110.0));

        let top_bar = row![
            text("Digital Zine").size(18).color(palette.text),
            horizontal_space(),
            text(label).color(palette.muted),
            button("Contents")
                .style(button::secondary)
                .on_press(Message::ToggleToc),
            cursor_picker,
        ]
        .spacing(12)
        .padding(12)
        .align_y(Vertical::Center);

        let active = self.viewer.heading_section();
        let dots = (0..=total).fold(Column::new().spacing(6), |dots, section| {
            let style = if section == active {
                button::primary
            } else {
                button::secondary
            };
            dots.push(
                button(text("\u{2022}").size(12))
                    .padding([2, 8])
                    .style(style)
                    .on_press(Message::NavigateTo(section)),
            )
        });

        column![
            top_bar,
            container(dots)
                .align_right(Length::Fill)
                .center_y(Length::Fill)
                .padding(Padding {
                    top: 0.0,
                    right: 16.0,
                    bottom: 0.0,
                    left: 0.0,
                }),
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn toc_overlay(&self, palette: Palette) -> Element<'_, Message> {
        let entries = self
            .viewer
            .toc
            .entries()
            .iter()
            .fold(Column::new().spacing(8), |list, entry| {
                list.push(
                    button(text(format!("{}. {}", entry.spread + 1, entry.title)))
                        .width(Length::Fill)
                        .style(button::text)
                        .on_press(Message::SelectTocEntry(entry.spread)),
                )
            });

        modal(
            Message::CloseToc,
            column![
                row![
                    text("Contents").size(24),
                    horizontal_space(),
                    button("Close")
                        .style(button::secondary)
                        .on_press(Message::CloseToc),
                ]
                .align_y(Vertical::Center),
                scrollable(entries).height(Length::Shrink),
            ]
            .spacing(16)
            .width(Length::Fixed(420.0)),
            palette,
        )
    }

    fn zoom_overlay<'a>(
        &'a self,
        session: &'a ZoomSession,
        palette: Palette,
    ) -> Element<'a, Message> {
        let container_extent = self.zoom_container();

        let controls = row![
            button("\u{2212}").on_press(Message::ZoomOut),
            text(format!("{:.0}%", session.scale() * 100.0)).color(palette.text),
            button("+").on_press(Message::ZoomIn),
            button("Rotate").on_press(Message::RotateZoom),
            horizontal_space(),
            button("Close")
                .style(button::secondary)
                .on_press(Message::CloseZoom),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fixed(container_extent.width));

        let area: Element<'_, Message> = match session.status() {
            ImageStatus::Loading => text("Loading image\u{2026}").color(palette.muted).into(),
            ImageStatus::Failed(reason) => column![
                text("Failed to load image").size(18).color(palette.text),
                text(reason.as_str()).color(palette.muted),
                button("Close").on_press(Message::CloseZoom),
            ]
            .spacing(12)
            .align_x(Horizontal::Center)
            .into(),
            ImageStatus::Loaded => self.zoomed_image(session),
        };

        let viewport = container(area)
            .center_x(Length::Fixed(container_extent.width))
            .center_y(Length::Fixed(container_extent.height))
            .clip(true);

        let panel = column![
            controls,
            viewport,
            text("Scroll or use buttons to zoom")
                .size(13)
                .color(palette.muted),
        ]
        .spacing(12)
        .align_x(Horizontal::Center);

        let scrim = palette.scrim;
        let card = palette.card;
        Stack::with_children([
            mouse_area(
                container(Space::new(Length::Fill, Length::Fill))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(move |_| container::Style {
                        background: Some(Background::Color(scrim)),
                        ..container::Style::default()
                    }),
            )
            .on_press(Message::ZoomBackdropClicked)
            .into(),
            container(opaque(container(panel).padding(16).style(move |_| {
                container::Style {
                    background: Some(Background::Color(card)),
                    border: Border {
                        radius: 12.0.into(),
                        ..Border::default()
                    },
                    ..container::Style::default()
                }
            })))
            .center(Length::Fill)
            .into(),
        ])
        .into()
    }

    fn zoomed_image(&self, session: &ZoomSession) -> Element<'_, Message> {
        let handle = match self.assets.get(session.image()) {
            Some(AssetSlot::Ready { handle, .. }) => handle.clone(),
            _ => return text("Loading image\u{2026}").into(),
        };
        let Some(fitted) = session.fitted_extent() else {
            return text("Loading image\u{2026}").into();
        };
        let pan = session.pan();
        let radians = Radians((session.display_rotation() as f32).to_radians());

        // Centred content shifts by half the padding imbalance.
        let padding = Padding {
            top: (2.0 * pan.y).max(0.0),
            right: (-2.0 * pan.x).max(0.0),
            bottom: (-2.0 * pan.y).max(0.0),
            left: (2.0 * pan.x).max(0.0),
        };
        container(
            mouse_area(
                image(handle)
                    .width(Length::Fixed(fitted.width * session.scale()))
                    .height(Length::Fixed(fitted.height * session.scale()))
                    .rotation(Rotation::Solid(radians)),
            )
            .on_press(Message::ZoomDragStarted),
        )
        .padding(padding)
        .center(Length::Fill)
        .into()
    }
}

/// Scrim that closes on click, with `content` centred in an opaque card.
fn modal<'a>(
    on_dismiss: Message,
    content: impl Into<Element<'a, Message>>,
    palette: Palette,
) -> Element<'a, Message> {
    let scrim = palette.scrim;
    let card = palette.card;
    let text_color = palette.text;
    Stack::with_children([
        mouse_area(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |_| container::Style {
                    background: Some(Background::Color(scrim)),
                    ..container::Style::default()
                }),
        )
        .on_press(on_dismiss)
        .into(),
        container(opaque(container(content).padding(24).style(move |_| {
            container::Style {
                background: Some(Background::Color(card)),
                text_color: Some(text_color),
                border: Border {
                    radius: 12.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }
        })))
        .center(Length::Fill)
        .into(),
    ])
    .into()
}

fn page_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.page)),
        text_color: Some(palette.text),
        ..container::Style::default()
    }
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}
