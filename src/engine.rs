//! The render engine: explicit, exclusively-owned application state.
//!
//! Everything the demo needs per frame (GPU context, camera controller,
//! the two models with their meshes, lighting) lives here and is borrowed
//! into the event handlers; there are no process-wide singletons.

use glam::Vec3;
use winit::event::WindowEvent;

use crate::camera::{CameraController, InputHandler};
use crate::error::OrbitviewError;
use crate::gpu::depth::DepthTexture;
use crate::gpu::render_context::RenderContext;
use crate::options::Options;
use crate::renderer::{GpuMesh, MeshRenderer, ModelBinding, ModelUniform};
use crate::scene::{MeshGenerator, Model};

/// Top-level render engine owning all GPU and scene state.
pub struct RenderEngine {
    context: RenderContext,
    depth: DepthTexture,
    camera: CameraController,
    input: InputHandler,

    surface_model: Model,
    surface_mesh: GpuMesh,
    surface_renderer: MeshRenderer,
    surface_binding: ModelBinding,

    lightbox_model: Model,
    lightbox_mesh: GpuMesh,
    lightbox_renderer: MeshRenderer,
    lightbox_binding: ModelBinding,

    light_position: Vec3,
    clear_color: wgpu::Color,
    options: Options,
}

impl RenderEngine {
    /// Create the engine for a window surface: GPU context, camera,
    /// meshes, and pipelines.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitviewError::Gpu`] when GPU context initialization
    /// fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, OrbitviewError> {
        let context = RenderContext::new(window, size).await?;
        let depth = DepthTexture::new(&context.device, size.0, size.1);
        let camera = CameraController::new(&context, &options.camera);

        let scene = &options.scene;
        let light_position = Vec3::from_array(scene.light_position);

        let surface_model = Model::new(
            scene.surface_extent,
            scene.surface_scale,
            scene.min_scale,
            scene.scroll_speed,
        );

        let mut lightbox_model = Model::new(
            1.0,
            scene.lightbox_scale,
            scene.min_scale,
            scene.scroll_speed,
        );
        lightbox_model.translate(light_position);

        let surface_data = MeshGenerator::GridSurface {
            quads_x: scene.grid_quads,
            quads_z: scene.grid_quads,
            extent: scene.surface_extent,
        }
        .generate();
        let lightbox_data = MeshGenerator::UnitCube.generate();
        log::info!(
            "uploading meshes: surface {} vertices, light box {} vertices",
            surface_data.vertices.len(),
            lightbox_data.vertices.len()
        );

        let surface_mesh =
            GpuMesh::upload(&context, &surface_data, "Surface Mesh");
        let lightbox_mesh =
            GpuMesh::upload(&context, &lightbox_data, "Light Box Mesh");

        let surface_renderer = MeshRenderer::new(
            &context,
            &camera.layout,
            wgpu::include_wgsl!("../assets/shaders/surface.wgsl"),
            "Surface Pipeline",
        );
        let lightbox_renderer = MeshRenderer::new(
            &context,
            &camera.layout,
            wgpu::include_wgsl!("../assets/shaders/lightbox.wgsl"),
            "Light Box Pipeline",
        );
        let surface_binding = surface_renderer.create_binding(&context);
        let lightbox_binding = lightbox_renderer.create_binding(&context);

        let clear_color = wgpu::Color {
            r: f64::from(scene.clear_color[0]),
            g: f64::from(scene.clear_color[1]),
            b: f64::from(scene.clear_color[2]),
            a: 1.0,
        };

        Ok(Self {
            context,
            depth,
            camera,
            input: InputHandler::new(),
            surface_model,
            surface_mesh,
            surface_renderer,
            surface_binding,
            lightbox_model,
            lightbox_mesh,
            lightbox_renderer,
            lightbox_binding,
            light_position,
            clear_color,
            options,
        })
    }

    /// The active options the engine was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Reconfigure the surface, depth buffer, and projection for a new
    /// window size. Zero-sized dimensions (minimized windows) leave all
    /// three untouched so the attachments keep matching extents.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.context.resize(width, height);
            self.depth =
                DepthTexture::new(&self.context.device, width, height);
            self.camera.resize(width, height);
        }
    }

    /// Route a window event to the input handler. Returns true if it was
    /// consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.input.handle_event(
            &mut self.camera,
            &mut self.surface_model,
            event,
        )
    }

    /// Render one frame.
    ///
    /// # Errors
    ///
    /// Propagates `wgpu::SurfaceError` so the caller can reconfigure on
    /// `Lost`/`Outdated`.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.camera.update_gpu(&self.context.queue);

        let view_proj = self.camera.view_proj();
        let surface_matrix = self.surface_model.matrix();
        self.surface_binding.update(
            &self.context.queue,
            &ModelUniform::new(
                view_proj * surface_matrix,
                surface_matrix,
                self.light_position,
                self.surface_model.max_value,
            ),
        );

        // The light box inherits the surface's scroll scaling so the two
        // stay proportioned while zooming.
        let lightbox_matrix = self.lightbox_model.translation_matrix()
            * self.lightbox_model.rotation_matrix()
            * self.surface_model.scaling_matrix()
            * self.lightbox_model.scaling_matrix();
        self.lightbox_binding.update(
            &self.context.queue,
            &ModelUniform::new(
                view_proj * lightbox_matrix,
                lightbox_matrix,
                self.light_position,
                self.lightbox_model.max_value,
            ),
        );

        let mut encoder = self.context.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            },
        );

        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Mesh Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(self.clear_color),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });

            pass.set_bind_group(0, &self.camera.bind_group, &[]);
            self.surface_renderer.draw(
                &mut pass,
                &self.surface_binding,
                &self.surface_mesh,
            );
            self.lightbox_renderer.draw(
                &mut pass,
                &self.lightbox_binding,
                &self.lightbox_mesh,
            );
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
