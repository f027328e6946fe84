use serde::{Deserialize, Serialize};

use crate::core::{Vec2, Vec3};
use crate::error::{GraphError, GraphResult};

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color32 {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color32 {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }
}

impl Default for Color32 {
    fn default() -> Self {
        Self::WHITE
    }
}

/// One mesh vertex in rect space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Color32,
    pub uv: Vec2,
}

impl Vertex {
    /// Vertex with a zero texture coordinate, the only kind the tessellator emits.
    #[must_use]
    pub const fn new(position: Vec3, color: Color32) -> Self {
        Self {
            position,
            color,
            uv: Vec2::ZERO,
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.position.is_finite() {
            return Err(GraphError::InvalidData(
                "vertex position must be finite".to_owned(),
            ));
        }
        if !self.uv.is_finite() {
            return Err(GraphError::InvalidData(
                "vertex uv must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Indices of the three vertices of one triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle(pub [usize; 3]);

impl Triangle {
    #[must_use]
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self([a, b, c])
    }

    #[must_use]
    pub const fn indices(self) -> [usize; 3] {
        self.0
    }
}
