use anyhow::{anyhow, Result};
use bytemuck::Pod;
use glow::HasContext;

use super::VertexAttribute;

/// A `STATIC_DRAW` array buffer (VBO).
#[derive(Debug)]
pub struct VertexBuffer {
    raw: glow::Buffer,
    vertex_count: usize,
}

impl VertexBuffer {
    /// Creates the buffer, binds it to `ARRAY_BUFFER` and uploads `vertices`.
    ///
    /// The buffer stays bound, so a following [`VertexArray::new`] picks it
    /// up as the attribute source.
    pub fn upload<T: Pod>(gl: &glow::Context, vertices: &[T]) -> Result<Self> {
        let bytes: &[u8] = bytemuck::cast_slice(vertices);

        let raw = unsafe {
            let raw = gl
                .create_buffer()
                .map_err(|e| anyhow!("failed to create vertex buffer: {e}"))?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(raw));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);
            raw
        };

        log::debug!(
            "uploaded {} vertices ({} bytes) to buffer {:?}",
            vertices.len(),
            bytes.len(),
            raw
        );

        Ok(Self { raw, vertex_count: vertices.len() })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn delete(self, gl: &glow::Context) {
        unsafe { gl.delete_buffer(self.raw) }
    }
}

/// A vertex array object (VAO) recording an attribute layout.
#[derive(Debug)]
pub struct VertexArray {
    raw: glow::VertexArray,
}

impl VertexArray {
    /// Creates and binds a VAO, then enables and describes each attribute
    /// against the buffer currently bound to `ARRAY_BUFFER`.
    pub fn new(gl: &glow::Context, attributes: &[VertexAttribute]) -> Result<Self> {
        let raw = unsafe {
            let raw = gl
                .create_vertex_array()
                .map_err(|e| anyhow!("failed to create vertex array: {e}"))?;
            gl.bind_vertex_array(Some(raw));

            for attr in attributes {
                gl.enable_vertex_attrib_array(attr.location);
                gl.vertex_attrib_pointer_f32(
                    attr.location,
                    attr.components,
                    attr.data_type,
                    attr.normalized,
                    attr.stride,
                    attr.offset,
                );
            }
            raw
        };

        Ok(Self { raw })
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_vertex_array(Some(self.raw)) }
    }

    pub fn delete(self, gl: &glow::Context) {
        unsafe { gl.delete_vertex_array(self.raw) }
    }
}
