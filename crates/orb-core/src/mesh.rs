//! Geometry provider: a subdivided icosahedron projected onto the unit sphere.

use glam::Vec3;

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
    .map(Vec3::normalize)
}

/// Unit icosphere with each icosahedron edge split into `detail` segments.
///
/// Vertices along face seams are duplicated per face; every triangle winds
/// counter-clockwise seen from outside.
pub fn icosphere(detail: u32) -> Mesh {
    let n = detail.max(1) as usize;
    let corners = icosahedron_vertices();
    let per_face = (n + 1) * (n + 2) / 2;

    let mut mesh = Mesh {
        positions: Vec::with_capacity(ICOSAHEDRON_FACES.len() * per_face),
        indices: Vec::with_capacity(ICOSAHEDRON_FACES.len() * n * n * 3),
    };

    for face in ICOSAHEDRON_FACES {
        let (a, b, c) = (corners[face[0]], corners[face[1]], corners[face[2]]);
        let base = mesh.positions.len() as u32;

        // Row i runs from a toward b, column j from that row toward c
        for i in 0..=n {
            for j in 0..=(n - i) {
                let u = i as f32 / n as f32;
                let v = j as f32 / n as f32;
                let p = a + (b - a) * u + (c - a) * v;
                mesh.positions.push(p.normalize().to_array());
            }
        }

        let index = |i: usize, j: usize| base + (row_offset(n, i) + j) as u32;

        for i in 0..n {
            for j in 0..(n - i) {
                push_outward(&mut mesh, [index(i, j), index(i + 1, j), index(i, j + 1)]);
                if j + 1 < n - i {
                    push_outward(
                        &mut mesh,
                        [index(i + 1, j), index(i + 1, j + 1), index(i, j + 1)],
                    );
                }
            }
        }
    }
    mesh
}

/// Index of the first vertex of row `i` within a face.
#[inline]
fn row_offset(n: usize, i: usize) -> usize {
    // rows shrink by one vertex each step
    i * (n + 1) - i * i.saturating_sub(1) / 2
}

fn push_outward(mesh: &mut Mesh, tri: [u32; 3]) {
    let p = |k: u32| Vec3::from(mesh.positions[k as usize]);
    let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
    if (b - a).cross(c - a).dot(a + b + c) < 0.0 {
        mesh.indices.extend_from_slice(&[tri[0], tri[2], tri[1]]);
    } else {
        mesh.indices.extend_from_slice(&tri);
    }
}
