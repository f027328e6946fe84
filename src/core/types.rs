use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Two-component vector used for scope and rect space points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise product.
    #[must_use]
    pub fn scale(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// Component-wise quotient.
    #[must_use]
    pub fn divide(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Lifts the point into 3-D with the given depth.
    #[must_use]
    pub const fn extend(self, z: f64) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Three-component vector used for emitted vertex positions.
///
/// `z` is a depth value; the tessellator never interprets it beyond the
/// sign convention documented on `add_dot`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit-length copy of the vector.
    ///
    /// Vectors shorter than `NORMALIZE_EPSILON` normalize to zero instead of
    /// producing NaN components.
    #[must_use]
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length > NORMALIZE_EPSILON {
            Self::new(self.x / length, self.y / length, self.z / length)
        } else {
            Self::ZERO
        }
    }

    #[must_use]
    pub const fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

const NORMALIZE_EPSILON: f64 = 1e-5;

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<Vec2> for Vec3 {
    fn from(value: Vec2) -> Self {
        value.extend(0.0)
    }
}

/// Axis-aligned rectangle in scope (data) units, published by a `GraphHandler`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScopeRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScopeRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn position(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[must_use]
    pub const fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Rejects scopes whose size would make the scale infinite or NaN.
    pub fn validate(self) -> GraphResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(GraphError::InvalidData(
                "scope position must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width == 0.0
            || self.height == 0.0
        {
            return Err(GraphError::InvalidScope {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Size of the widget's own rectangle in rect space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalRect {
    pub width: f64,
    pub height: f64,
}

impl LocalRect {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(GraphError::InvalidData(
                "local rect size must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(GraphError::InvalidData(
                "local rect size must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRect {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

/// Normalized anchor inside a `LocalRect`; `(0, 0)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    pub x: f64,
    pub y: f64,
}

impl Pivot {
    pub const CENTER: Self = Self::new(0.5, 0.5);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn validate(self) -> GraphResult<()> {
        for (axis, value) in [("x", self.x), ("y", self.y)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GraphError::InvalidData(format!(
                    "pivot `{axis}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Pivot {
    fn default() -> Self {
        Self::CENTER
    }
}
