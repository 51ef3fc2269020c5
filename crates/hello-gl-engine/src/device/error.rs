use std::fmt;

/// Fatal failures while bringing up or driving the GL device.
#[derive(Debug)]
pub enum DeviceError {
    /// The windowing system could not be initialized.
    Platform(winit::error::EventLoopError),
    /// The window (or a GL config for it) could not be created.
    WindowCreation(String),
    /// Context creation or make-current failed.
    Context(glutin::error::Error),
    /// GL entry points could not be resolved.
    Loader(String),
    /// Presenting the back buffer failed.
    Swap(glutin::error::Error),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Platform(e) => write!(f, "windowing system init failed: {e}"),
            Self::WindowCreation(msg) => write!(f, "window creation failed: {msg}"),
            Self::Context(e) => write!(f, "OpenGL context creation failed: {e}"),
            Self::Loader(msg) => write!(f, "OpenGL function loader init failed: {msg}"),
            Self::Swap(e) => write!(f, "buffer swap failed: {e}"),
        }
    }
}

impl std::error::Error for DeviceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Platform(e) => Some(e),
            Self::Context(e) | Self::Swap(e) => Some(e),
            Self::WindowCreation(_) | Self::Loader(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_step() {
        let e = DeviceError::WindowCreation("no display".into());
        assert_eq!(e.to_string(), "window creation failed: no display");

        let e = DeviceError::Loader("glGetString not found".into());
        assert_eq!(
            e.to_string(),
            "OpenGL function loader init failed: glGetString not found"
        );
    }

    #[test]
    fn string_variants_have_no_source() {
        use std::error::Error;
        assert!(DeviceError::Loader(String::new()).source().is_none());
    }
}
