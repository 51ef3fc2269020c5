use std::num::NonZeroU32;

use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::{ContextInfo, DeviceError, GlInit};

/// Owns the GL context, the window surface it renders into, and the loaded
/// function table.
///
/// Field order matters: the surface and context are dropped before the
/// window that owns them is, so keep a `GlContext` declared ahead of its
/// `Window` in any struct holding both.
pub struct GlContext {
    /// Loaded GL entry points.
    gl: glow::Context,

    /// Window surface (default framebuffer).
    surface: Surface<WindowSurface>,

    /// Context, current on `surface` for the lifetime of this value.
    context: PossiblyCurrentContext,
}

impl GlContext {
    /// Creates a window and a current GL context for it.
    ///
    /// Must run on the event loop thread, from inside an active event loop
    /// callback (`resumed` under winit 0.30).
    pub fn create(
        event_loop: &ActiveEventLoop,
        window_attrs: WindowAttributes,
        init: &GlInit,
    ) -> Result<(Window, Self), DeviceError> {
        let template = ConfigTemplateBuilder::new();
        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attrs));

        let (window, config) = display_builder
            .build(event_loop, template, pick_config)
            .map_err(|e| DeviceError::WindowCreation(e.to_string()))?;

        let window = window.ok_or_else(|| {
            DeviceError::WindowCreation("display builder returned no window".to_string())
        })?;

        let raw_handle = window
            .window_handle()
            .map_err(|e| DeviceError::WindowCreation(e.to_string()))?
            .as_raw();

        let version = Version::new(init.version.major, init.version.minor);
        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(version)))
            .with_profile(init.profile.into())
            .build(Some(raw_handle));

        let display = config.display();

        let not_current = unsafe { display.create_context(&config, &context_attrs) }
            .map_err(DeviceError::Context)?;

        let surface_attrs = window
            .build_surface_attributes(Default::default())
            .map_err(|e| DeviceError::WindowCreation(e.to_string()))?;

        let surface = unsafe { display.create_window_surface(&config, &surface_attrs) }
            .map_err(DeviceError::Context)?;

        let context = not_current
            .make_current(&surface)
            .map_err(DeviceError::Context)?;

        // glow queries GL_VERSION while loading, so a dead loader has to be
        // caught before handing it the function table.
        if display.get_proc_address(c"glGetString").is_null() {
            return Err(DeviceError::Loader("glGetString could not be resolved".to_string()));
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| {
                display.get_proc_address(symbol).cast()
            })
        };

        if init.vsync {
            let interval = SwapInterval::Wait(NonZeroU32::MIN);
            if let Err(e) = surface.set_swap_interval(&context, interval) {
                log::warn!("vsync unavailable: {e}");
            }
        }

        let info = ContextInfo::query(&gl);
        info.log(init.version);

        log::debug!(
            "GL config: {} samples, alpha {} bits",
            config.num_samples(),
            config.alpha_size()
        );

        let gpu = Self { gl, surface, context };
        Ok((window, gpu))
    }

    /// Returns the loaded GL function table.
    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// Resizes the surface and the GL viewport.
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };

        self.surface.resize(&self.context, w, h);
        unsafe {
            self.gl.viewport(0, 0, size.width as i32, size.height as i32);
        }
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<(), DeviceError> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(DeviceError::Swap)
    }
}

/// Takes the config with the fewest samples; the default framebuffer is not
/// multisampled unless asked for.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    fewest_samples(configs, |c| c.num_samples())
        .expect("glutin-winit only calls the picker after find_configs returned at least one config")
}

/// First item with the lowest sample count, `None` for an empty iterator.
fn fewest_samples<T>(items: impl Iterator<Item = T>, samples: impl Fn(&T) -> u8) -> Option<T> {
    items.reduce(|best, item| if samples(&item) < samples(&best) { item } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_lowest_sample_count() {
        let configs = [("msaa4", 4), ("plain", 0), ("msaa2", 2)];
        let picked = fewest_samples(configs.into_iter(), |c| c.1);
        assert_eq!(picked, Some(("plain", 0)));
    }

    #[test]
    fn ties_keep_the_first_config() {
        let configs = [("first", 0), ("second", 0)];
        assert_eq!(fewest_samples(configs.into_iter(), |c| c.1), Some(("first", 0)));
    }

    #[test]
    fn empty_iterator_yields_none() {
        let none: Option<(&str, u8)> = fewest_samples(std::iter::empty(), |c: &(&str, u8)| c.1);
        assert!(none.is_none());
    }
}
