//! Renderer
//!
//! A single forward pass over the robot's draw list:
//!
//! ```text
//! DrawCommand[] → ObjectUniforms (dynamic UBO) → lit pipeline → Surface
//! ```
//!
//! GPU resources are allocated once in [`Renderer::init`]. Each frame only
//! rewrites the per-draw uniform records.

pub mod core;
pub mod dynamic_buffer;
pub mod gpu_mesh;
pub mod pipeline;
pub mod settings;
pub mod uniforms;

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::errors::{DanceError, Result};
use crate::resources::primitives::{SphereOptions, create_axis_points, create_box, create_sphere};
use crate::resources::Color;
use crate::robot::DrawCommand;
use crate::scene::Camera;

pub use self::core::WgpuContext;
use self::dynamic_buffer::ObjectUniformBuffer;
use self::gpu_mesh::GpuMesh;
use self::pipeline::RobotPipelines;
pub use self::settings::RendererSettings;
use self::uniforms::ObjectUniforms;

/// Axis guide: points every 0.1 units out to ±3 on each axis.
const AXIS_EXTENT: f32 = 3.0;
const AXIS_STEP: f32 = 0.1;

/// GPU state that only exists after [`Renderer::init`].
struct RenderState {
    context: WgpuContext,
    pipelines: RobotPipelines,
    objects: ObjectUniformBuffer,
    /// Indexed by [`Shape::index`](crate::resources::Shape::index).
    meshes: [GpuMesh; 2],
    axes: GpuMesh,
    records: Vec<ObjectUniforms>,
}

pub struct Renderer {
    settings: RendererSettings,
    state: Option<RenderState>,
}

impl Renderer {
    #[must_use]
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings, state: None }
    }

    /// Creates the GPU context, pipelines, and uploads the shared meshes.
    pub async fn init<W>(&mut self, window: W, width: u32, height: u32) -> Result<()>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        let context = WgpuContext::new(window, &self.settings, width, height).await?;
        let device = &context.device;

        let objects = ObjectUniformBuffer::new(device);
        let pipelines = RobotPipelines::new(
            device,
            objects.layout(),
            context.color_format(),
            context.depth_format,
        );

        let meshes = [
            GpuMesh::upload(device, "Cube Mesh", &create_box(2.0, 2.0, 2.0)),
            GpuMesh::upload(device, "Sphere Mesh", &create_sphere(SphereOptions::default())),
        ];
        let axes = GpuMesh::upload(device, "Axis Points", &create_axis_points(AXIS_EXTENT, AXIS_STEP));

        log::info!(
            "Renderer ready: {}x{} {:?}",
            context.config.width,
            context.config.height,
            context.color_format()
        );

        self.state = Some(RenderState {
            context,
            pipelines,
            objects,
            meshes,
            axes,
            records: Vec::new(),
        });
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(state) = &mut self.state {
            state.context.resize(width, height);
        }
    }

    /// Current surface size, `(0, 0)` before initialization.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.state.as_ref().map_or((0, 0), |s| s.context.size())
    }

    /// Draws one frame.
    ///
    /// A lost or outdated surface is reconfigured and the frame is skipped.
    pub fn render(&mut self, camera: &Camera, draws: &[DrawCommand]) -> Result<()> {
        let show_axes = self.settings.show_axes;
        let state = self.state.as_mut().ok_or(DanceError::NotInitialized)?;

        let view = camera.view_matrix();
        let projection = camera.projection_matrix();

        state.records.clear();
        state.records.extend(
            draws
                .iter()
                .map(|d| ObjectUniforms::new(d.model, view, projection, d.color)),
        );
        if show_axes {
            state.records.push(ObjectUniforms::new(
                glam::Mat4::IDENTITY,
                view,
                projection,
                Color::GREY,
            ));
        }
        state
            .objects
            .write(&state.context.device, &state.context.queue, &state.records);

        let output = match state.context.surface.get_current_texture() {
            wgpu::CurrentSurfaceTexture::Success(output)
            | wgpu::CurrentSurfaceTexture::Suboptimal(output) => output,
            wgpu::CurrentSurfaceTexture::Lost | wgpu::CurrentSurfaceTexture::Outdated => {
                log::warn!("Surface lost, reconfiguring");
                state.context.reconfigure();
                return Ok(());
            }
            e => {
                log::warn!("Skipping frame: {e:?}");
                return Ok(());
            }
        };
        let target = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = state
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Robot Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Robot Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(state.context.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &state.context.depth_texture_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            pass.set_pipeline(&state.pipelines.lit);
            for (i, draw) in draws.iter().enumerate() {
                pass.set_bind_group(0, state.objects.bind_group(), &[state.objects.offset(i)]);
                state.meshes[draw.shape.index()].draw(&mut pass);
            }

            if show_axes {
                pass.set_pipeline(&state.pipelines.points);
                pass.set_bind_group(0, state.objects.bind_group(), &[state.objects.offset(draws.len())]);
                state.axes.draw(&mut pass);
            }
        }

        state.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RendererSettings::default())
    }
}
