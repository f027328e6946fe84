use crate::error::GraphResult;
use crate::render::{MeshBuffer, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates the mesh so tests catch out-of-range indices or
/// non-finite positions before a real backend sees them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_vertex_count: usize,
    pub last_triangle_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, mesh: &MeshBuffer) -> GraphResult<()> {
        mesh.validate()?;
        self.last_vertex_count = mesh.vertex_count();
        self.last_triangle_count = mesh.triangle_count();
        self.frames_rendered += 1;
        Ok(())
    }
}
