use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::render::{Triangle, Vertex};

/// Vertex and triangle lists consumed by one draw of a graph widget.
///
/// Append-only during a rebuild; `GraphParts::populate_mesh` clears it before
/// handing it to the builder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshBuffer {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
}

impl MeshBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub fn add_triangle(&mut self, a: usize, b: usize, c: usize) {
        self.triangles.push(Triangle::new(a, b, c));
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.triangles.is_empty()
    }

    /// Checks that every triangle references an existing vertex and every
    /// vertex is finite.
    pub fn validate(&self) -> GraphResult<()> {
        for vertex in &self.vertices {
            vertex.validate()?;
        }

        let vertex_count = self.vertices.len();
        for (position, triangle) in self.triangles.iter().enumerate() {
            if let Some(index) = triangle
                .indices()
                .into_iter()
                .find(|index| *index >= vertex_count)
            {
                return Err(GraphError::InvalidData(format!(
                    "triangle {position} references vertex {index} but mesh has {vertex_count} vertices"
                )));
            }
        }

        Ok(())
    }

    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GraphError::InvalidData(format!("failed to serialize mesh json: {e}"))
        })
    }
}
