use contact3d::math::Point;
use contact3d::shape::TriMesh;
use contact3d::transformation::dcel::{ComponentTags, DcelMesh, TraversalMarks, INVALID};

// A grid of `n * n` quads with random heights.
fn height_grid(n: u32, rng: &mut oorandom::Rand32) -> TriMesh {
    let mut vertices = vec![];
    let mut indices = vec![];

    for i in 0..=n {
        for j in 0..=n {
            vertices.push(Point::new(i as f32, j as f32, rng.rand_float()));
        }
    }

    for i in 0..n {
        for j in 0..n {
            let a = i * (n + 1) + j;
            let b = a + n + 1;
            indices.push([a, b, b + 1]);
            indices.push([a, b + 1, a + 1]);
        }
    }

    TriMesh::new(vertices, indices).unwrap()
}

#[test]
fn height_grid_round_trip() {
    let mut rng = oorandom::Rand32::new(3);
    let n = 6;
    let grid = height_grid(n, &mut rng);
    let dcel = DcelMesh::from_triangle_mesh(&grid).unwrap();

    assert!(dcel.is_valid());
    assert!(dcel.is_triangle_mesh());
    assert!(!dcel.is_closed());

    let num_boundary = (0..dcel.num_edges() as u32)
        .filter(|e| dcel.edge(*e).face == INVALID)
        .count();
    assert_eq!(num_boundary, 4 * n as usize);
    assert_eq!(dcel.edges().len(), dcel.num_edges());

    let back = dcel.to_triangle_mesh().unwrap();
    assert_eq!(back.vertices().len(), grid.vertices().len());
    assert_eq!(back.num_triangles(), grid.num_triangles());
    assert!(relative_eq!(back.area(), grid.area(), epsilon = 1.0e-3));
}

#[test]
fn octahedron_is_closed() {
    let vertices = vec![
        Point::new(1.0, 0.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, -1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
    ];
    let indices = vec![
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];
    let mesh = TriMesh::new(vertices, indices).unwrap();
    let dcel = DcelMesh::from_triangle_mesh(&mesh).unwrap();

    assert!(dcel.is_closed());
    assert!(dcel.is_triangle_mesh());
    // Euler characteristic of a sphere.
    assert_eq!(
        dcel.num_vertices() as i32 - dcel.num_edges() as i32 / 2 + dcel.num_faces() as i32,
        2
    );

    for &fid in dcel.faces() {
        let boundary = dcel.face(fid).boundary;
        assert!(dcel.cycle(boundary).all(|e| dcel.edge(e).face == fid));
    }
}

#[test]
fn traversal_marks_are_reusable() {
    let mut rng = oorandom::Rand32::new(11);
    let dcel = DcelMesh::from_triangle_mesh(&height_grid(3, &mut rng)).unwrap();
    let mut marks = TraversalMarks::new();

    for _ in 0..3 {
        marks.reset(&dcel);
        let all = dcel.traverse_from(dcel.root(), &mut marks);
        assert_eq!(all.faces.len(), dcel.num_faces());

        // Everything is marked now.
        assert!(dcel.traverse_from(dcel.root(), &mut marks).edges.is_empty());
    }

    let tags = ComponentTags::from_components(&dcel, &dcel.connected_components());
    assert!((0..dcel.num_faces() as u32).all(|f| tags.face(f) == 1));
}
