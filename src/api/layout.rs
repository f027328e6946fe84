use crate::core::Vec2;

use super::GraphParts;

/// Sentinel flexible size meaning "no preference".
pub const NO_LAYOUT_PREFERENCE: f64 = -1.0;

/// Size negotiation surface a layout container queries on its children.
pub trait LayoutElement {
    fn calculate_layout_input_horizontal(&mut self);
    fn calculate_layout_input_vertical(&mut self);
    fn min_width(&self) -> f64;
    fn preferred_width(&self) -> f64;
    fn flexible_width(&self) -> f64;
    fn min_height(&self) -> f64;
    fn preferred_height(&self) -> f64;
    fn flexible_height(&self) -> f64;
    fn layout_priority(&self) -> i32;
}

/// Hit-test filter consulted before a widget receives pointer input.
pub trait RaycastFilter {
    fn is_raycast_location_valid(&self, screen_point: Vec2) -> bool;
}

// Graph widgets impose no size constraints and defer to their container.
impl<B> LayoutElement for GraphParts<B> {
    fn calculate_layout_input_horizontal(&mut self) {}

    fn calculate_layout_input_vertical(&mut self) {}

    fn min_width(&self) -> f64 {
        0.0
    }

    fn preferred_width(&self) -> f64 {
        0.0
    }

    fn flexible_width(&self) -> f64 {
        NO_LAYOUT_PREFERENCE
    }

    fn min_height(&self) -> f64 {
        0.0
    }

    fn preferred_height(&self) -> f64 {
        0.0
    }

    fn flexible_height(&self) -> f64 {
        NO_LAYOUT_PREFERENCE
    }

    fn layout_priority(&self) -> i32 {
        0
    }
}

// Never an input target; overlays stacked above a plot stay clickable.
impl<B> RaycastFilter for GraphParts<B> {
    fn is_raycast_location_valid(&self, _screen_point: Vec2) -> bool {
        false
    }
}
