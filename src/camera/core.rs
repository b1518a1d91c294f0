use glam::{Mat4, Vec3};

/// Perspective projection parameters.
pub struct Projection {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Projection {
    /// Update the aspect ratio for a new viewport size. Zero-sized
    /// dimensions are ignored so a minimized window cannot produce a
    /// NaN aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Build the projection matrix.
    pub fn matrix(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and eye position.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position, for specular lighting.
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad: 0.0,
        }
    }

    /// Update the uniform from a freshly computed view-projection matrix
    /// and eye position.
    pub fn update(&mut self, view_proj: Mat4, eye: Vec3) {
        self.view_proj = view_proj.to_cols_array_2d();
        self.position = eye.to_array();
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::{CameraUniform, Projection};

    #[test]
    fn new_uniform_is_identity_at_origin() {
        let uniform = CameraUniform::new();
        assert_eq!(uniform.view_proj, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(uniform.position, [0.0; 3]);
    }

    #[test]
    fn update_copies_matrix_and_eye() {
        let mut uniform = CameraUniform::new();
        let view_proj = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        uniform.update(view_proj, Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(uniform.view_proj, view_proj.to_cols_array_2d());
        assert_eq!(uniform.position, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn projection_maps_a_point_on_the_axis_into_clip_space() {
        let projection = Projection {
            aspect: 1.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        };
        let clip = projection
            .matrix()
            .project_point3(Vec3::new(0.0, 0.0, -10.0));
        // A point straight ahead projects onto the view axis with
        // depth inside [0, 1].
        assert!(clip.x.abs() < 1e-6);
        assert!(clip.y.abs() < 1e-6);
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }

    #[test]
    fn resize_ignores_zero_dimensions() {
        let mut projection = Projection {
            aspect: 1.6,
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
        };
        projection.resize(0, 0);
        assert_eq!(projection.aspect, 1.6);
        projection.resize(800, 0);
        assert_eq!(projection.aspect, 1.6);
        projection.resize(0, 600);
        assert_eq!(projection.aspect, 1.6);
        projection.resize(800, 400);
        assert_eq!(projection.aspect, 2.0);
    }
}
