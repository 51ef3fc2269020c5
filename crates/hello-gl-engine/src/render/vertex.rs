use bytemuck::{Pod, Zeroable};

/// A 2D position vertex in normalized device coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex2 {
    pub pos: [f32; 2],
}

impl Vertex2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { pos: [x, y] }
    }

    pub const ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute::f32(
        0,
        2,
        std::mem::size_of::<Vertex2>() as i32,
        0,
    )];
}

/// One `glVertexAttribPointer` description.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    /// Shader `layout(location = N)`.
    pub location: u32,
    /// Components per vertex (1..=4).
    pub components: i32,
    /// Component type, a GL enum (`glow::FLOAT`, ...).
    pub data_type: u32,
    pub normalized: bool,
    /// Bytes between consecutive vertices.
    pub stride: i32,
    /// Byte offset of the first component.
    pub offset: i32,
}

impl VertexAttribute {
    /// A non-normalized `FLOAT` attribute.
    pub const fn f32(location: u32, components: i32, stride: i32, offset: i32) -> Self {
        Self {
            location,
            components,
            data_type: glow::FLOAT,
            normalized: false,
            stride,
            offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex2_is_two_packed_floats() {
        assert_eq!(std::mem::size_of::<Vertex2>(), 8);

        let verts = [Vertex2::new(-0.5, -0.5), Vertex2::new(0.0, 0.5)];
        let floats: &[f32] = bytemuck::cast_slice(&verts);
        assert_eq!(floats, &[-0.5, -0.5, 0.0, 0.5]);
    }

    #[test]
    fn vertex2_layout_is_location_0_vec2() {
        let [attr] = Vertex2::ATTRIBUTES;
        assert_eq!(attr.location, 0);
        assert_eq!(attr.components, 2);
        assert_eq!(attr.data_type, glow::FLOAT);
        assert!(!attr.normalized);
        assert_eq!(attr.stride, 8);
        assert_eq!(attr.offset, 0);
    }
}
