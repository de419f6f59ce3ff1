//! Front/back page flip per spread.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    pub fn toggled(self) -> Self {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    pub fn is_back(self) -> bool {
        matches!(self, Face::Back)
    }

    /// Y-axis rotation of the card for this face.
    pub fn rotation_degrees(self) -> f32 {
        match self {
            Face::Front => 0.0,
            Face::Back => 180.0,
        }
    }
}

/// One independent face per spread.
#[derive(Debug, Clone, Default)]
pub struct FlipBook {
    faces: Vec<Face>,
}

impl FlipBook {
    pub fn new(spreads: usize) -> Self {
        Self {
            faces: vec![Face::Front; spreads],
        }
    }

    pub fn face(&self, spread: usize) -> Face {
        self.faces.get(spread).copied().unwrap_or_default()
    }

    /// Flip `spread`, returning the new face. Unknown spreads are ignored.
    pub fn toggle(&mut self, spread: usize) -> Option<Face> {
        let face = self.faces.get_mut(spread)?;
        *face = face.toggled();
        Some(*face)
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
