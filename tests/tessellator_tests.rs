use graph_parts::core::Vec3;
use graph_parts::render::{
    Color32, MeshBuffer, Tessellator, Triangle, add_dot, add_gradient_line, add_line,
};

const RED: Color32 = Color32::rgb(255, 0, 0);
const BLUE: Color32 = Color32::rgb(0, 0, 255);

fn positions(mesh: &MeshBuffer) -> Vec<(f64, f64, f64)> {
    mesh.vertices()
        .iter()
        .map(|vertex| (vertex.position.x, vertex.position.y, vertex.position.z))
        .collect()
}

#[test]
fn dot_emits_diamond_with_negated_depth() {
    let mut mesh = MeshBuffer::new();
    let quad = add_dot(&mut mesh, Vec3::new(10.0, 20.0, 3.0), 2.0, RED).expect("dot emitted");

    assert_eq!(quad.vertices(), [0, 1, 2, 3]);
    assert_eq!(
        positions(&mesh),
        vec![
            (10.0, 18.0, -3.0),
            (8.0, 20.0, -3.0),
            (10.0, 22.0, -3.0),
            (12.0, 20.0, -3.0),
        ]
    );
    assert!(mesh.vertices().iter().all(|vertex| vertex.color == RED));
    assert!(mesh.vertices().iter().all(|vertex| vertex.uv.x == 0.0 && vertex.uv.y == 0.0));
}

#[test]
fn dot_triangles_use_source_winding() {
    let mut mesh = MeshBuffer::new();
    add_dot(&mut mesh, Vec3::ZERO, 1.0, RED).expect("dot emitted");

    assert_eq!(
        mesh.triangles(),
        &[Triangle::new(0, 1, 2), Triangle::new(2, 3, 0)]
    );
}

#[test]
fn dot_triangles_cover_the_diamond() {
    let mut mesh = MeshBuffer::new();
    add_dot(&mut mesh, Vec3::new(4.0, 4.0, 0.0), 3.0, RED).expect("dot emitted");

    // Diamond area is 2 * r^2; both triangles together must add up to it.
    let area: f64 = mesh
        .triangles()
        .iter()
        .map(|triangle| {
            let [a, b, c] = triangle.indices().map(|index| mesh.vertices()[index].position);
            ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs() / 2.0
        })
        .sum();
    assert!((area - 18.0).abs() <= 1e-12);
}

#[test]
fn non_positive_radius_leaves_mesh_untouched() {
    let mut mesh = MeshBuffer::new();
    add_dot(&mut mesh, Vec3::ZERO, 1.0, RED).expect("seed dot");
    let before = mesh.clone();

    assert!(add_dot(&mut mesh, Vec3::ZERO, 0.0, RED).is_none());
    assert!(add_dot(&mut mesh, Vec3::ZERO, -1.0, RED).is_none());
    assert!(add_line(&mut mesh, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 0.0, RED).is_none());
    assert!(
        add_gradient_line(&mut mesh, Vec3::ZERO, RED, Vec3::new(1.0, 0.0, 0.0), BLUE, -2.0)
            .is_none()
    );

    assert_eq!(mesh, before);
}

#[test]
fn horizontal_line_emits_rectangle_around_segment() {
    let mut mesh = MeshBuffer::new();
    add_line(&mut mesh, Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 1.0, RED).expect("line emitted");

    let xy: Vec<(f64, f64)> = positions(&mesh).into_iter().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(xy, vec![(0.0, 1.0), (0.0, -1.0), (10.0, -1.0), (10.0, 1.0)]);
    assert_eq!(
        mesh.triangles(),
        &[Triangle::new(2, 1, 0), Triangle::new(0, 3, 2)]
    );
}

#[test]
fn vertical_line_offsets_along_x() {
    let mut mesh = MeshBuffer::new();
    add_line(&mut mesh, Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0), 0.5, RED).expect("line emitted");

    let xy: Vec<(f64, f64)> = positions(&mesh).into_iter().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(xy, vec![(-0.5, 0.0), (0.5, 0.0), (0.5, 4.0), (-0.5, 4.0)]);
}

#[test]
fn line_keeps_endpoint_depth() {
    let mut mesh = MeshBuffer::new();
    add_line(
        &mut mesh,
        Vec3::new(0.0, 0.0, 2.0),
        Vec3::new(3.0, 0.0, 2.0),
        1.0,
        RED,
    )
    .expect("line emitted");

    assert!(mesh.vertices().iter().all(|vertex| vertex.position.z == 2.0));
}

#[test]
fn gradient_line_colors_follow_endpoints() {
    let mut mesh = MeshBuffer::new();
    add_gradient_line(&mut mesh, Vec3::ZERO, RED, Vec3::new(5.0, 5.0, 0.0), BLUE, 1.0)
        .expect("line emitted");

    let colors: Vec<Color32> = mesh.vertices().iter().map(|vertex| vertex.color).collect();
    assert_eq!(colors, vec![RED, RED, BLUE, BLUE]);
}

#[test]
fn single_color_line_equals_gradient_with_equal_colors() {
    let from = Vec3::new(-3.0, 2.0, 0.0);
    let to = Vec3::new(7.0, -1.5, 0.0);

    let mut solid = MeshBuffer::new();
    add_line(&mut solid, from, to, 0.75, RED).expect("solid line");
    let mut gradient = MeshBuffer::new();
    add_gradient_line(&mut gradient, from, RED, to, RED, 0.75).expect("gradient line");

    assert_eq!(solid, gradient);
}

#[test]
fn coincident_endpoints_collapse_without_nan() {
    let mut mesh = MeshBuffer::new();
    let point = Vec3::new(1.0, 1.0, 0.0);
    add_line(&mut mesh, point, point, 2.0, RED).expect("degenerate line still appends");

    assert_eq!(mesh.vertex_count(), 4);
    assert!(mesh.vertices().iter().all(|vertex| vertex.position == point));
    mesh.validate().expect("collapsed quad stays finite");
}

#[test]
fn appended_primitives_index_relative_to_existing_vertices() {
    let mut mesh = MeshBuffer::new();
    add_dot(&mut mesh, Vec3::ZERO, 1.0, RED).expect("dot");
    let quad = add_line(&mut mesh, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 1.0, RED).expect("line");

    assert_eq!(quad.first(), 4);
    assert_eq!(
        &mesh.triangles()[2..],
        &[Triangle::new(6, 5, 4), Triangle::new(4, 7, 6)]
    );
    mesh.validate().expect("indices in range");
}

#[test]
fn tessellator_uses_default_color_for_colorless_forms() {
    let tessellator = Tessellator::new(BLUE);
    let mut mesh = MeshBuffer::new();

    tessellator.dot(&mut mesh, Vec3::ZERO, 1.0).expect("dot");
    tessellator
        .line(&mut mesh, Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), 1.0)
        .expect("line");
    tessellator
        .dot_colored(&mut mesh, Vec3::ZERO, 1.0, RED)
        .expect("colored dot");

    let colors: Vec<Color32> = mesh.vertices().iter().map(|vertex| vertex.color).collect();
    assert!(colors[..8].iter().all(|color| *color == BLUE));
    assert!(colors[8..].iter().all(|color| *color == RED));
    assert_eq!(tessellator.color(), BLUE);
}

#[test]
fn interleaved_primitives_compose_counts() {
    let tessellator = Tessellator::default();
    let mut mesh = MeshBuffer::new();

    for i in 0..5 {
        let x = f64::from(i);
        tessellator.dot(&mut mesh, Vec3::new(x, 0.0, 0.0), 0.5);
        tessellator.line(
            &mut mesh,
            Vec3::new(x, 0.0, 0.0),
            Vec3::new(x + 1.0, 1.0, 0.0),
            0.25,
        );
    }
    tessellator.dot(&mut mesh, Vec3::ZERO, 0.0);

    assert_eq!(mesh.vertex_count(), 40);
    assert_eq!(mesh.triangle_count(), 20);
    mesh.validate().expect("valid mesh");
}
