//! GLSL sources for the triangle.

/// Passes the vertex position straight through to clip space.
pub const VERTEX: &str = "#version 330 core

layout(location = 0) in vec4 position;

void main()
{
  gl_Position = position;
}
";

/// Paints every covered pixel solid red.
pub const FRAGMENT: &str = "#version 330 core

layout(location = 0) out vec4 color;

void main()
{
  color = vec4(1.0, 0.0, 0.0, 1.0);
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_stages_target_glsl_330_core() {
        for src in [VERTEX, FRAGMENT] {
            assert!(src.starts_with("#version 330 core\n"));
        }
    }

    #[test]
    fn vertex_reads_position_at_location_0() {
        assert!(VERTEX.contains("layout(location = 0) in vec4 position;"));
        assert!(VERTEX.contains("gl_Position = position;"));
    }

    #[test]
    fn fragment_writes_opaque_red() {
        assert!(FRAGMENT.contains("layout(location = 0) out vec4 color;"));
        assert!(FRAGMENT.contains("color = vec4(1.0, 0.0, 0.0, 1.0);"));
    }
}
