use super::mesh::{MeshData, MeshVertex};

/// Color of every ground-grid vertex (amber).
const GRID_COLOR: [f32; 3] = [1.0, 0.7, 0.0];

/// Color of every light-box vertex.
const CUBE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Corner positions of the 6 unit-cube faces, 4 vertices each, wound
/// counter-clockwise when viewed from outside.
const CUBE_FACES: [[[f32; 3]; 4]; 6] = [
    // +Z
    [
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, 1.0],
        [-1.0, 1.0, 1.0],
    ],
    // +X
    [
        [1.0, -1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
    ],
    // +Y
    [
        [1.0, 1.0, 1.0],
        [1.0, 1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, 1.0, 1.0],
    ],
    // -X
    [
        [-1.0, 1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
    ],
    // -Y
    [
        [-1.0, -1.0, 1.0],
        [-1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
    ],
    // -Z
    [
        [-1.0, -1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ],
];

/// Mesh shape selected at model construction time.
///
/// Each variant produces an owned vertex/index buffer pair; the caller
/// decides what to do with it (typically upload to the GPU once).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshGenerator {
    /// Flat ground plane at `y = 0` made of `quads_x · quads_z`
    /// independent quads, spanning `[-extent/2, extent/2]` on x and z.
    GridSurface {
        /// Quad count along the x axis.
        quads_x: u32,
        /// Quad count along the z axis.
        quads_z: u32,
        /// World-space side length of the grid.
        extent: f32,
    },
    /// Axis-aligned cube spanning `[-1, 1]` on every axis, one quad per
    /// face.
    UnitCube,
}

impl MeshGenerator {
    /// Generate the mesh for this shape.
    pub fn generate(&self) -> MeshData {
        match *self {
            Self::GridSurface {
                quads_x,
                quads_z,
                extent,
            } => grid_surface(quads_x, quads_z, extent),
            Self::UnitCube => unit_cube(),
        }
    }
}

/// Append the two-triangle index pattern (0,1,2, 2,3,0) for the quad whose
/// first vertex is `base`.
fn push_quad_indices(indices: &mut Vec<u32>, base: u32) {
    indices
        .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
}

fn grid_surface(quads_x: u32, quads_z: u32, extent: f32) -> MeshData {
    let quad_count = (quads_x * quads_z) as usize;
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(quad_count * 4),
        indices: Vec::with_capacity(quad_count * 6),
    };

    let step_x = extent / quads_x as f32;
    let step_z = extent / quads_z as f32;
    let half = extent / 2.0;

    for i in 0..quads_x {
        for j in 0..quads_z {
            // Quad corners in the order 0: (i,j), 1: (i+1,j),
            // 2: (i+1,j+1), 3: (i,j+1).
            for k in 0..4u32 {
                let xi = i + u32::from(k == 1 || k == 2);
                let zj = j + u32::from(k == 2 || k == 3);
                mesh.vertices.push(MeshVertex {
                    position: [
                        xi as f32 * step_x - half,
                        0.0,
                        zj as f32 * step_z - half,
                    ],
                    color: GRID_COLOR,
                });
            }
            let base = mesh.vertices.len() as u32 - 4;
            push_quad_indices(&mut mesh.indices, base);
        }
    }

    mesh
}

fn unit_cube() -> MeshData {
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
    };

    for face in &CUBE_FACES {
        for position in face {
            mesh.vertices.push(MeshVertex {
                position: *position,
                color: CUBE_COLOR,
            });
        }
        let base = mesh.vertices.len() as u32 - 4;
        push_quad_indices(&mut mesh.indices, base);
    }

    mesh
}
