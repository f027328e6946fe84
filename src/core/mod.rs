pub mod mapper;
pub mod types;

pub use mapper::{CoordinateMapper, Transform};
pub use types::{LocalRect, Pivot, ScopeRect, Vec2, Vec3};
