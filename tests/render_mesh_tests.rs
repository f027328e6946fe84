use graph_parts::core::Vec3;
use graph_parts::render::{
    Color32, MeshBuffer, NullRenderer, Renderer, Vertex, add_dot, add_line,
};

#[test]
fn null_renderer_records_mesh_counts() {
    let mut mesh = MeshBuffer::with_capacity(8, 4);
    add_dot(&mut mesh, Vec3::ZERO, 1.0, Color32::WHITE).expect("dot");
    add_line(&mut mesh, Vec3::ZERO, Vec3::new(2.0, 2.0, 0.0), 0.5, Color32::WHITE).expect("line");

    let mut renderer = NullRenderer::default();
    renderer.render(&mesh).expect("render");

    assert_eq!(renderer.last_vertex_count, 8);
    assert_eq!(renderer.last_triangle_count, 4);
    assert_eq!(renderer.frames_rendered, 1);
}

#[test]
fn out_of_range_triangle_fails_validation() {
    let mut mesh = MeshBuffer::new();
    mesh.add_vertex(Vertex::new(Vec3::ZERO, Color32::WHITE));
    mesh.add_triangle(0, 0, 3);

    let err = mesh.validate().expect_err("index 3 does not exist");
    assert!(err.to_string().contains("references vertex 3"));

    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&mesh).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn non_finite_vertex_fails_validation() {
    let mut mesh = MeshBuffer::new();
    add_dot(&mut mesh, Vec3::new(f64::INFINITY, 0.0, 0.0), 1.0, Color32::WHITE).expect("dot");

    assert!(mesh.validate().is_err());
}

#[test]
fn clear_empties_mesh() {
    let mut mesh = MeshBuffer::new();
    add_dot(&mut mesh, Vec3::ZERO, 1.0, Color32::WHITE).expect("dot");
    assert!(!mesh.is_empty());

    mesh.clear();
    assert!(mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn mesh_json_lists_vertices_and_triangles() {
    let mut mesh = MeshBuffer::new();
    add_dot(&mut mesh, Vec3::new(1.0, 2.0, 0.0), 1.0, Color32::rgb(9, 8, 7)).expect("dot");

    let json = mesh.to_json_pretty().expect("serialize mesh");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["vertices"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["triangles"][1], serde_json::json!([2, 3, 0]));
    assert_eq!(value["vertices"][0]["color"]["red"], 9);
}
