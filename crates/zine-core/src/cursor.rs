//! Custom cursor effect that follows the pointer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorShape {
    #[default]
    Circle,
    Square,
    Star,
}

impl CursorShape {
    pub const ALL: [CursorShape; 3] = [CursorShape::Circle, CursorShape::Square, CursorShape::Star];
}

impl std::fmt::Display for CursorShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CursorShape::Circle => "circle",
            CursorShape::Square => "square",
            CursorShape::Star => "star",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorEffect {
    shape: CursorShape,
    size: f32,
    position: Option<(f32, f32)>,
}

impl CursorEffect {
    pub fn new(shape: CursorShape, size: f32) -> Self {
        Self {
            shape,
            size: if size.is_finite() { size.max(1.0) } else { 40.0 },
            position: None,
        }
    }

    pub fn shape(&self) -> CursorShape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: CursorShape) {
        self.shape = shape;
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Pointer position; `None` until the pointer has entered the window.
    pub fn position(&self) -> Option<(f32, f32)> {
        self.position
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.position = Some((x, y));
        }
    }

    pub fn leave(&mut self) {
        self.position = None;
    }

    /// Vertices of the five-pointed star centred on the pointer, outer and
    /// inner points alternating, starting at the top.
    pub fn star_points(&self) -> Option<Vec<(f32, f32)>> {
        let (cx, cy) = self.position?;
        let outer = self.size / 2.0;
        let inner = outer * 0.45;
        let points = (0..10)
            .map(|i| {
                let radius = if i % 2 == 0 { outer } else { inner };
                let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
                (cx + radius * angle.cos(), cy + radius * angle.sin())
            })
            .collect();
        Some(points)
    }
}

impl Default for CursorEffect {
    fn default() -> Self {
        Self::new(CursorShape::Circle, 40.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_pointer_moves() {
        let mut cursor = CursorEffect::default();
        assert_eq!(cursor.position(), None);
        cursor.move_to(10.0, 20.0);
        assert_eq!(cursor.position(), Some((10.0, 20.0)));
        cursor.leave();
        assert_eq!(cursor.position(), None);
    }

    #[test]
    fn shape_switches() {
        let mut cursor = CursorEffect::default();
        cursor.set_shape(CursorShape::Star);
        assert_eq!(cursor.shape(), CursorShape::Star);
    }

    #[test]
    fn star_has_ten_points_around_pointer() {
        let mut cursor = CursorEffect::new(CursorShape::Star, 40.0);
        assert!(cursor.star_points().is_none());
        cursor.move_to(100.0, 100.0);
        let points = cursor.star_points().unwrap();
        assert_eq!(points.len(), 10);
        let (x, y) = points[0];
        assert!((x - 100.0).abs() < 1e-3);
        assert!((y - 80.0).abs() < 1e-3);
    }

    #[test]
    fn shape_deserializes_from_kebab_case() {
        let shape: CursorShape = serde_json::from_str("\"square\"").unwrap();
        assert_eq!(shape, CursorShape::Square);
    }
}
