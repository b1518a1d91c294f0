use std::f32::consts::PI;

use glam::{Mat4, Vec2};
use wgpu::util::DeviceExt;

use crate::camera::arcball::ArcballCamera;
use crate::camera::core::{CameraUniform, Projection};
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// Pixel-to-radian conversion for mouse drags: one pixel of drag turns
/// the camera by 180/600 of a degree, scaled by the sensitivity option.
const RADIANS_PER_PIXEL: f32 = PI / 600.0;

/// Owns the arcball camera, the projection, and their GPU resources
/// (uniform buffer + bind group), and maps drag deltas onto the two
/// rotate operations.
pub struct CameraController {
    /// The orbit camera state.
    pub arcball: ArcballCamera,
    /// Perspective projection parameters.
    pub projection: Projection,
    /// CPU copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer backing [`Self::bind_group`].
    pub buffer: wgpu::Buffer,
    /// Bind group layout for the camera uniform (group 0 in all shaders).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group binding [`Self::buffer`].
    pub bind_group: wgpu::BindGroup,

    /// Whether the left mouse button is currently held.
    pub mouse_pressed: bool,
    rotate_sensitivity: f32,
}

impl CameraController {
    /// Create the controller and its GPU resources from the configured
    /// camera options.
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let arcball = ArcballCamera::new(
            glam::Vec3::ZERO,
            glam::Vec3::Y,
            options.radius,
            options.min_radius,
            options.azimuth_deg.to_radians(),
            options.polar_deg.to_radians(),
        );
        let projection = Projection {
            aspect: context.config.width as f32 / context.config.height as f32,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update(projection.matrix() * arcball.view_matrix(), arcball.eye());

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            arcball,
            projection,
            uniform,
            buffer,
            layout,
            bind_group,
            mouse_pressed: false,
            rotate_sensitivity: options.rotate_sensitivity,
        }
    }

    /// Apply a mouse-drag delta (in pixels): horizontal movement orbits
    /// around the vertical axis, vertical movement changes elevation.
    pub fn rotate(&mut self, delta: Vec2) {
        let scale = RADIANS_PER_PIXEL * self.rotate_sensitivity;
        self.arcball.rotate_azimuth(delta.x * scale);
        self.arcball.rotate_polar(delta.y * scale);
    }

    /// Combined view-projection matrix for the current camera state.
    pub fn view_proj(&self) -> Mat4 {
        self.projection.matrix() * self.arcball.view_matrix()
    }

    /// Refresh the CPU uniform and write it to the GPU buffer.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update(self.view_proj(), self.arcball.eye());
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }

    /// Track a window resize so the projection keeps the right aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }
}
