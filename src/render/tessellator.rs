use crate::core::Vec3;
use crate::render::{Color32, MeshBuffer, Vertex};

/// The four vertices one primitive appended, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadIndices {
    first: usize,
}

impl QuadIndices {
    #[must_use]
    pub const fn first(self) -> usize {
        self.first
    }

    #[must_use]
    pub const fn last(self) -> usize {
        self.first + 3
    }

    #[must_use]
    pub const fn vertices(self) -> [usize; 4] {
        [self.first, self.first + 1, self.first + 2, self.first + 3]
    }
}

/// Appends a filled diamond approximating a dot of `radius` around `center`.
///
/// Vertices are emitted bottom, left, top, right. Their depth is the negated
/// depth of `center`. Returns `None` without touching `mesh` when `radius`
/// is not positive.
pub fn add_dot(
    mesh: &mut MeshBuffer,
    center: Vec3,
    radius: f64,
    color: Color32,
) -> Option<QuadIndices> {
    if radius.is_nan() || radius <= 0.0 {
        return None;
    }

    let z = -center.z;
    let first = mesh.vertex_count();
    mesh.add_vertex(Vertex::new(Vec3::new(center.x, center.y - radius, z), color));
    mesh.add_vertex(Vertex::new(Vec3::new(center.x - radius, center.y, z), color));
    mesh.add_vertex(Vertex::new(Vec3::new(center.x, center.y + radius, z), color));
    mesh.add_vertex(Vertex::new(Vec3::new(center.x + radius, center.y, z), color));

    let last = first + 3;
    mesh.add_triangle(last - 3, last - 2, last - 1);
    mesh.add_triangle(last - 1, last, last - 3);

    Some(QuadIndices { first })
}

/// Appends a solid-color line segment of half-width `radius`.
pub fn add_line(
    mesh: &mut MeshBuffer,
    from: Vec3,
    to: Vec3,
    radius: f64,
    color: Color32,
) -> Option<QuadIndices> {
    add_gradient_line(mesh, from, color, to, color, radius)
}

/// Appends a rectangle of width `2 * radius` centered on `from -> to`.
///
/// The two vertices at `from` carry `from_color` and the two at `to` carry
/// `to_color`. Coincident endpoints collapse the rectangle onto the segment
/// because the direction normalizes to zero.
pub fn add_gradient_line(
    mesh: &mut MeshBuffer,
    from: Vec3,
    from_color: Color32,
    to: Vec3,
    to_color: Color32,
    radius: f64,
) -> Option<QuadIndices> {
    if radius.is_nan() || radius <= 0.0 {
        return None;
    }

    let dir = (to - from).normalized();
    let l_side = Vec3::new(-dir.y, dir.x, 0.0) * radius;
    let r_side = Vec3::new(dir.y, -dir.x, 0.0) * radius;

    let first = mesh.vertex_count();
    mesh.add_vertex(Vertex::new(from + l_side, from_color));
    mesh.add_vertex(Vertex::new(from + r_side, from_color));
    mesh.add_vertex(Vertex::new(to + r_side, to_color));
    mesh.add_vertex(Vertex::new(to + l_side, to_color));

    let last = first + 3;
    mesh.add_triangle(last - 1, last - 2, last - 3);
    mesh.add_triangle(last - 3, last, last - 1);

    Some(QuadIndices { first })
}

/// Primitive emitter bound to a widget's default color.
///
/// Handed to `GraphMeshBuilder::rebuild` so plot types can use the colorless
/// forms without knowing the widget's style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tessellator {
    color: Color32,
}

impl Tessellator {
    #[must_use]
    pub const fn new(color: Color32) -> Self {
        Self { color }
    }

    #[must_use]
    pub const fn color(self) -> Color32 {
        self.color
    }

    pub fn dot(self, mesh: &mut MeshBuffer, center: Vec3, radius: f64) -> Option<QuadIndices> {
        add_dot(mesh, center, radius, self.color)
    }

    pub fn dot_colored(
        self,
        mesh: &mut MeshBuffer,
        center: Vec3,
        radius: f64,
        color: Color32,
    ) -> Option<QuadIndices> {
        add_dot(mesh, center, radius, color)
    }

    pub fn line(
        self,
        mesh: &mut MeshBuffer,
        from: Vec3,
        to: Vec3,
        radius: f64,
    ) -> Option<QuadIndices> {
        add_line(mesh, from, to, radius, self.color)
    }

    pub fn line_colored(
        self,
        mesh: &mut MeshBuffer,
        from: Vec3,
        to: Vec3,
        radius: f64,
        color: Color32,
    ) -> Option<QuadIndices> {
        add_line(mesh, from, to, radius, color)
    }

    pub fn gradient_line(
        self,
        mesh: &mut MeshBuffer,
        from: Vec3,
        from_color: Color32,
        to: Vec3,
        to_color: Color32,
        radius: f64,
    ) -> Option<QuadIndices> {
        add_gradient_line(mesh, from, from_color, to, to_color, radius)
    }
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}
