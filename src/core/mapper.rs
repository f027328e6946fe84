#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::types::{LocalRect, Pivot, ScopeRect, Vec2};
use crate::error::GraphResult;

/// Affine terms derived from one scope/rect/pivot triple.
///
/// Always produced as a whole by `Transform::from_parts`; callers never patch
/// individual fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec2,
    pub scale: Vec2,
    pub offset: Vec2,
}

impl Transform {
    /// Identity mapping: scope space and rect space coincide.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: Vec2::new(1.0, 1.0),
        offset: Vec2::ZERO,
    };

    /// Computes the mapping without validating the scope size.
    ///
    /// A zero-width or zero-height scope yields an infinite or NaN scale on
    /// that axis, which then flows into every projection.
    #[must_use]
    pub fn from_parts(scope: ScopeRect, local: LocalRect, pivot: Pivot) -> Self {
        Self {
            translation: -scope.position(),
            scale: Vec2::new(local.width / scope.width, local.height / scope.height),
            offset: Vec2::new(-pivot.x * local.width, -pivot.y * local.height),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Bidirectional mapping between scope space and local rect space.
///
/// `recalculate` runs once per graph change; the projection methods run once
/// per plotted point during a mesh rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinateMapper {
    transform: Transform,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(scope: ScopeRect, local: LocalRect, pivot: Pivot) -> Self {
        Self {
            transform: Transform::from_parts(scope, local, pivot),
        }
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.transform.translation
    }

    #[must_use]
    pub fn scale(&self) -> Vec2 {
        self.transform.scale
    }

    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.transform.offset
    }

    pub fn recalculate(&mut self, scope: ScopeRect, local: LocalRect, pivot: Pivot) {
        self.transform = Transform::from_parts(scope, local, pivot);
    }

    /// Like `recalculate`, but rejects a degenerate scope and keeps the
    /// previous transform when it does.
    pub fn try_recalculate(
        &mut self,
        scope: ScopeRect,
        local: LocalRect,
        pivot: Pivot,
    ) -> GraphResult<()> {
        scope.validate()?;
        self.recalculate(scope, local, pivot);
        Ok(())
    }

    #[must_use]
    pub fn scope_to_rect(&self, point: Vec2) -> Vec2 {
        let t = &self.transform;
        (point + t.translation).scale(t.scale) + t.offset
    }

    #[must_use]
    pub fn scope_to_rect_x(&self, x: f64) -> f64 {
        let t = &self.transform;
        (x + t.translation.x) * t.scale.x + t.offset.x
    }

    #[must_use]
    pub fn scope_to_rect_y(&self, y: f64) -> f64 {
        let t = &self.transform;
        (y + t.translation.y) * t.scale.y + t.offset.y
    }

    #[must_use]
    pub fn rect_to_scope(&self, point: Vec2) -> Vec2 {
        let t = &self.transform;
        (point - t.offset).divide(t.scale) - t.translation
    }

    #[must_use]
    pub fn rect_to_scope_x(&self, x: f64) -> f64 {
        let t = &self.transform;
        (x - t.offset.x) / t.scale.x - t.translation.x
    }

    #[must_use]
    pub fn rect_to_scope_y(&self, y: f64) -> f64 {
        let t = &self.transform;
        (y - t.offset.y) / t.scale.y - t.translation.y
    }

    /// Projects a batch of scope points into rect space, preserving order.
    #[must_use]
    pub fn project_points(&self, points: &[Vec2]) -> Vec<Vec2> {
        #[cfg(feature = "parallel-projection")]
        {
            points
                .par_iter()
                .map(|point| self.scope_to_rect(*point))
                .collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            points
                .iter()
                .map(|point| self.scope_to_rect(*point))
                .collect()
        }
    }
}
