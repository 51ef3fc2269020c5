use winit::window::Window;

use crate::device::GlContext;
use crate::paint::Color;

use super::app::AppControl;

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub window: &'a Window,
    pub gpu: &'a GlContext,
}

impl FrameCtx<'_> {
    /// Returns the GL function table.
    pub fn gl(&self) -> &glow::Context {
        self.gpu.gl()
    }

    /// Clears the color buffer with `clear`, calls `draw`, then presents.
    ///
    /// A failed swap is logged and turned into [`AppControl::Exit`].
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&glow::Context),
    {
        use glow::HasContext;

        let gl = self.gpu.gl();
        unsafe {
            gl.clear_color(clear.r, clear.g, clear.b, clear.a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        draw(gl);

        self.window.pre_present_notify();
        if let Err(e) = self.gpu.swap_buffers() {
            log::error!("{e}");
            return AppControl::Exit;
        }

        AppControl::Continue
    }
}
