use std::borrow::Cow;

use crate::resources::Vertex;

/// Fixed-function state that distinguishes the robot pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PipelineKey {
    pub topology: wgpu::PrimitiveTopology,
    pub cull_mode: Option<wgpu::Face>,
    pub depth_compare: wgpu::CompareFunction,
}

impl PipelineKey {
    /// Solid triangles: back faces culled, depth `LessEqual`.
    pub const LIT_TRIANGLES: Self = Self {
        topology: wgpu::PrimitiveTopology::TriangleList,
        cull_mode: Some(wgpu::Face::Back),
        depth_compare: wgpu::CompareFunction::LessEqual,
    };

    /// Debug points: nothing to cull.
    pub const POINTS: Self = Self {
        topology: wgpu::PrimitiveTopology::PointList,
        cull_mode: None,
        depth_compare: wgpu::CompareFunction::LessEqual,
    };
}

/// The shader module plus every pipeline built from it.
pub struct RobotPipelines {
    pub lit: wgpu::RenderPipeline,
    pub points: wgpu::RenderPipeline,
}

impl RobotPipelines {
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        object_layout: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
    ) -> Self {
        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Robot Shader"),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(include_str!("shaders/robot.wgsl"))),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Robot Pipeline Layout"),
            bind_group_layouts: &[Some(object_layout)],
            immediate_size: 0,
        });

        let build = |label: &str, key: PipelineKey| {
            create_pipeline(device, &module, &layout, label, key, color_format, depth_format)
        };

        Self {
            lit: build("Robot Lit Pipeline", PipelineKey::LIT_TRIANGLES),
            points: build("Robot Points Pipeline", PipelineKey::POINTS),
        }
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    module: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    label: &str,
    key: PipelineKey,
    color_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let color_targets = [Some(wgpu::ColorTargetState {
        format: color_format,
        blend: Some(wgpu::BlendState::REPLACE),
        write_mask: wgpu::ColorWrites::ALL,
    })];

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module,
            entry_point: Some("fs_main"),
            targets: &color_targets,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: key.topology,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: key.cull_mode,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: depth_format,
            depth_write_enabled: Some(true),
            depth_compare: Some(key.depth_compare),
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}
