mod mesh;
mod null_renderer;
mod primitives;
mod tessellator;

pub use mesh::MeshBuffer;
pub use null_renderer::NullRenderer;
pub use primitives::{Color32, Triangle, Vertex};
pub use tessellator::{QuadIndices, Tessellator, add_dot, add_gradient_line, add_line};

use crate::error::GraphResult;

/// Contract implemented by whatever consumes a rebuilt widget mesh.
///
/// Backends receive a fully populated `MeshBuffer` so drawing code stays
/// isolated from scope mapping and widget lifecycle.
pub trait Renderer {
    fn render(&mut self, mesh: &MeshBuffer) -> GraphResult<()>;
}
