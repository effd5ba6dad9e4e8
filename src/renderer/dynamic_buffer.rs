use crate::renderer::uniforms::ObjectUniforms;

/// Dynamic-offset uniform buffer holding one [`ObjectUniforms`] record per draw.
///
/// Records sit `stride` bytes apart, where `stride` honours the device's
/// `min_uniform_buffer_offset_alignment`. The buffer doubles when a frame
/// needs more records than it holds; the bind group is rebuilt with it.
pub struct ObjectUniformBuffer {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    layout: wgpu::BindGroupLayout,
    capacity: u32,
    stride: u32,
    staging: Vec<u8>,
}

impl ObjectUniformBuffer {
    /// Enough for the whole robot without a resize.
    const INITIAL_CAPACITY: u32 = 32;

    #[must_use]
    pub fn new(device: &wgpu::Device) -> Self {
        let min_alignment = device.limits().min_uniform_buffer_offset_alignment.max(1);
        let stride = align_to(ObjectUniforms::SIZE as u32, min_alignment);

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Object Uniforms BindGroup Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(ObjectUniforms::SIZE),
                },
                count: None,
            }],
        });

        let buffer = Self::create_buffer(device, stride, Self::INITIAL_CAPACITY);
        let bind_group = Self::create_bind_group(device, &layout, &buffer);

        Self {
            buffer,
            bind_group,
            layout,
            capacity: Self::INITIAL_CAPACITY,
            stride,
            staging: Vec::new(),
        }
    }

    #[must_use]
    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    #[must_use]
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Dynamic offset of record `index`.
    #[inline]
    #[must_use]
    pub fn offset(&self, index: usize) -> u32 {
        self.stride * index as u32
    }

    /// Uploads `records`, growing the buffer first if needed.
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, records: &[ObjectUniforms]) {
        if records.is_empty() {
            return;
        }
        self.ensure_capacity(device, records.len() as u32);

        let stride = self.stride as usize;
        self.staging.clear();
        self.staging.resize(stride * records.len(), 0);
        for (chunk, record) in self.staging.chunks_exact_mut(stride).zip(records) {
            chunk[..ObjectUniforms::SIZE as usize].copy_from_slice(bytemuck::bytes_of(record));
        }

        queue.write_buffer(&self.buffer, 0, &self.staging);
    }

    fn ensure_capacity(&mut self, device: &wgpu::Device, required: u32) {
        if required <= self.capacity {
            return;
        }

        let mut capacity = self.capacity.max(1);
        while capacity < required {
            capacity = capacity.saturating_mul(2);
        }
        log::debug!("Growing object uniform buffer: {} -> {capacity} records", self.capacity);

        self.buffer = Self::create_buffer(device, self.stride, capacity);
        self.bind_group = Self::create_bind_group(device, &self.layout, &self.buffer);
        self.capacity = capacity;
    }

    fn create_buffer(device: &wgpu::Device, stride: u32, capacity: u32) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Object Uniform Buffer"),
            size: u64::from(stride) * u64::from(capacity),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Object Uniforms BindGroup"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(ObjectUniforms::SIZE),
                }),
            }],
        })
    }
}

/// Rounds `value` up to a multiple of `alignment`.
#[inline]
#[must_use]
pub fn align_to(value: u32, alignment: u32) -> u32 {
    value.div_ceil(alignment) * alignment
}
