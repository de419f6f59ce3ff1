//! Canvas layers: the tilting hero title and the pointer-following cursor.

use super::super::messages::Message;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Pixels, Point, Radians, Rectangle, Renderer, Size, Theme, Vector};
use zine_core::{CursorEffect, CursorShape, HeroTransform};

pub(super) struct HeroTitle {
    pub(super) title: String,
    pub(super) subtitle: String,
    pub(super) transform: HeroTransform,
    pub(super) color: Color,
}

impl canvas::Program<Message> for HeroTitle {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.translate(Vector::new(bounds.width / 2.0, bounds.height / 2.0));
        frame.rotate(Radians(self.transform.rotation_degrees.to_radians()));
        frame.scale(self.transform.scale);
        frame.fill_text(Text {
            content: self.title.clone(),
            position: Point::new(0.0, -24.0),
            color: self.color,
            size: Pixels(64.0),
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Center,
            ..Text::default()
        });
        frame.fill_text(Text {
            content: self.subtitle.clone(),
            position: Point::new(0.0, 40.0),
            color: Color {
                a: self.color.a * 0.7,
                ..self.color
            },
            size: Pixels(22.0),
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Center,
            ..Text::default()
        });
        vec![frame.into_geometry()]
    }
}

pub(super) struct CursorLayer {
    pub(super) effect: CursorEffect,
    pub(super) color: Color,
}

impl canvas::Program<Message> for CursorLayer {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let Some((x, y)) = self.effect.position() else {
            return Vec::new();
        };
        let mut frame = Frame::new(renderer, bounds.size());
        let size = self.effect.size();
        let path = match self.effect.shape() {
            CursorShape::Circle => Path::circle(Point::new(x, y), size / 2.0),
            CursorShape::Square => Path::rectangle(
                Point::new(x - size / 2.0, y - size / 2.0),
                Size::new(size, size),
            ),
            CursorShape::Star => {
                let points = self.effect.star_points().unwrap_or_default();
                Path::new(|builder| {
                    let mut vertices = points.iter();
                    if let Some(&(px, py)) = vertices.next() {
                        builder.move_to(Point::new(px, py));
                        for &(px, py) in vertices {
                            builder.line_to(Point::new(px, py));
                        }
                        builder.close();
                    }
                })
            }
        };
        frame.fill(
            &path,
            Color {
                a: 0.18,
                ..self.color
            },
        );
        frame.stroke(
            &path,
            Stroke::default().with_color(self.color).with_width(2.0),
        );
        vec![frame.into_geometry()]
    }
}
