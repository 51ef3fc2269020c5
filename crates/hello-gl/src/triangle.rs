use anyhow::{Context, Result};
use glow::HasContext;

use hello_gl_engine::core::{App, AppControl, FrameCtx};
use hello_gl_engine::paint::Color;
use hello_gl_engine::render::{Program, Vertex2, VertexArray, VertexBuffer};

use crate::shaders;

/// One triangle, centered, in normalized device coordinates.
pub const TRIANGLE: [Vertex2; 3] = [
    Vertex2::new(-0.5, -0.5),
    Vertex2::new(0.0, 0.5),
    Vertex2::new(0.5, -0.5),
];

/// GPU objects alive between `on_init` and `on_exit`.
struct Resources {
    vbo: VertexBuffer,
    vao: VertexArray,
    program: Program,
}

/// Draws a red triangle on black every frame.
#[derive(Default)]
pub struct TriangleApp {
    resources: Option<Resources>,
}

impl TriangleApp {
    pub fn new() -> Self {
        Self::default()
    }
}

impl App for TriangleApp {
    fn on_init(&mut self, gl: &glow::Context) -> Result<()> {
        let vbo = VertexBuffer::upload(gl, &TRIANGLE)?;
        let vao = VertexArray::new(gl, &Vertex2::ATTRIBUTES)?;

        let program = Program::from_sources(gl, shaders::VERTEX, shaders::FRAGMENT)
            .context("failed to build triangle shader program")?;
        if !program.is_linked() {
            log::warn!("continuing with an unlinked program; nothing will be drawn");
        }
        program.bind(gl);

        self.resources = Some(Resources { vbo, vao, program });
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let Some(res) = &self.resources else {
            return AppControl::Continue;
        };

        res.vao.bind(ctx.gl());

        let count = res.vbo.vertex_count() as i32;
        ctx.render(Color::BLACK, |gl| unsafe {
            gl.draw_arrays(glow::TRIANGLES, 0, count);
        })
    }

    fn on_exit(&mut self, gl: &glow::Context) {
        if let Some(Resources { vbo, vao, program }) = self.resources.take() {
            program.delete(gl);
            vao.delete(gl);
            vbo.delete(gl);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_is_six_floats() {
        let floats: Vec<f32> = TRIANGLE.iter().flat_map(|v| v.pos).collect();
        assert_eq!(floats, [-0.5, -0.5, 0.0, 0.5, 0.5, -0.5]);
        assert_eq!(std::mem::size_of_val(&TRIANGLE), 6 * std::mem::size_of::<f32>());
    }

    #[test]
    fn triangle_stays_inside_clip_space() {
        for v in TRIANGLE {
            assert!(v.pos.iter().all(|c| (-1.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn app_starts_without_gpu_resources() {
        assert!(TriangleApp::new().resources.is_none());
    }
}
