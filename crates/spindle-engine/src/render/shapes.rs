//! Renderer for static scene shapes.

use anyhow::{ensure, Result};
use bytemuck::{Pod, Zeroable};
use spindle_scene::{GpuError, Mat4, Shape};
use wgpu::util::DeviceExt;

use crate::device::Gpu;
use crate::render::{RenderCtx, RenderTarget, ShaderProgram};

const SHAPE_SHADER: &str = include_str!("shaders/shape.wgsl");

/// Draws a fixed list of shapes, one MVP per shape per frame.
///
/// Every shape owns its own program, buffers and uniform. Shapes are drawn in
/// the order they were given.
pub struct ShapeRenderer {
    meshes: Vec<ShapeMesh>,
}

struct ShapeMesh {
    name: &'static str,
    program: ShaderProgram,
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
    index_count: u32,
    ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    color: [f32; 4],
}

impl ShapeRenderer {
    /// Uploads geometry and compiles one program per shape.
    pub fn new<'s, I>(gpu: &Gpu<'_>, shapes: I) -> std::result::Result<Self, GpuError>
    where
        I: IntoIterator<Item = &'s Shape>,
    {
        let meshes = shapes
            .into_iter()
            .map(|shape| {
                gpu.validate(&format!("create {} program", shape.name), |gpu| {
                    ShapeMesh::new(gpu, shape)
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        log::debug!("shape renderer ready with {} shapes", meshes.len());
        Ok(Self { meshes })
    }

    /// Records one draw per shape with the matching MVP from `transforms`.
    pub fn draw(
        &self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        transforms: &[Mat4],
    ) -> Result<()> {
        ensure!(
            transforms.len() == self.meshes.len(),
            "got {} transforms for {} shapes",
            transforms.len(),
            self.meshes.len()
        );

        for (mesh, mvp) in self.meshes.iter().zip(transforms) {
            let uniform = ShapeUniform::new(mvp, mesh.color);
            ctx.queue.write_buffer(&mesh.ubo, 0, bytemuck::bytes_of(&uniform));
        }

        let mut rpass = target.begin_load_pass("spindle shape pass");

        for mesh in &self.meshes {
            log::trace!("draw {} ({} indices)", mesh.name, mesh.index_count);
            rpass.set_pipeline(mesh.program.pipeline());
            rpass.set_bind_group(0, &mesh.bind_group, &[]);
            rpass.set_vertex_buffer(0, mesh.vbo.slice(..));
            rpass.set_index_buffer(mesh.ibo.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }

        Ok(())
    }
}

impl ShapeMesh {
    fn new(gpu: &Gpu<'_>, shape: &Shape) -> Self {
        let device = gpu.device();
        let label = format!("spindle {}", shape.name);

        let program = ShaderProgram::new(
            device,
            &label,
            SHAPE_SHADER,
            ShapeVertex::layout(),
            ShapeUniform::min_binding_size(),
            gpu.surface_format(),
            gpu.depth_format(),
        );

        let vertices: Vec<ShapeVertex> = shape
            .positions
            .iter()
            .map(|&position| ShapeVertex { position })
            .collect();

        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vbo")),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // `create_buffer_init` pads odd u16 counts to the copy alignment.
        let ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} ibo")),
            contents: bytemuck::cast_slice(&shape.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{label} ubo")),
            size: std::mem::size_of::<ShapeUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} bind group")),
            layout: program.bind_group_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        Self {
            name: shape.name,
            program,
            vbo,
            ibo,
            index_count: shape.index_count(),
            ubo,
            bind_group,
            color: shape.color,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ShapeVertex {
    position: [f32; 3],
}

impl ShapeVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ShapeUniform {
    mvp: [f32; 16], // column-major
    color: [f32; 4],
}

impl ShapeUniform {
    fn new(mvp: &Mat4, color: [f32; 4]) -> Self {
        let mut cols = [0.0; 16];
        cols.copy_from_slice(mvp.as_slice());
        Self { mvp: cols, color }
    }

    fn min_binding_size() -> wgpu::BufferSize {
        wgpu::BufferSize::new(std::mem::size_of::<ShapeUniform>() as u64)
            .expect("ShapeUniform has non-zero size by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_std140_sized() {
        // mat4x4<f32> + vec4<f32>
        assert_eq!(std::mem::size_of::<ShapeUniform>(), 80);
        assert_eq!(ShapeUniform::min_binding_size().get(), 80);
    }

    #[test]
    fn uniform_matrix_is_column_major() {
        #[rustfmt::skip]
        let m = Mat4::new(
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        );
        let u = ShapeUniform::new(&m, [0.0; 4]);
        assert_eq!(&u.mvp[..4], &[1.0, 5.0, 9.0, 13.0]);
        assert_eq!(u.mvp[12], 4.0);
    }

    #[test]
    fn vertex_stride_matches_layout() {
        assert_eq!(ShapeVertex::layout().array_stride, 12);
    }
}
