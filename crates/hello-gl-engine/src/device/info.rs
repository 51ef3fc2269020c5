use glow::HasContext;

use super::GlVersion;

/// Driver strings of a live GL context.
#[derive(Debug, Clone, Default)]
pub struct ContextInfo {
    pub version: String,
    pub renderer: String,
    pub vendor: String,
    pub shading_language: String,
    /// `version` parsed to `major.minor`, if the driver string was readable.
    pub parsed: Option<GlVersion>,
}

impl ContextInfo {
    /// Queries the driver strings. The context must be current.
    pub fn query(gl: &glow::Context) -> Self {
        let (version, renderer, vendor, shading_language) = unsafe {
            (
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER),
                gl.get_parameter_string(glow::VENDOR),
                gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION),
            )
        };
        let parsed = GlVersion::parse(&version);

        Self { version, renderer, vendor, shading_language, parsed }
    }

    /// Returns `true` if the context provides at least `requested`.
    ///
    /// An unparseable version string is treated as satisfying the request;
    /// context creation already succeeded with the requested attributes.
    pub fn satisfies(&self, requested: GlVersion) -> bool {
        self.parsed.is_none_or(|actual| actual >= requested)
    }

    /// Emits the context version (info) and the remaining strings (debug).
    pub fn log(&self, requested: GlVersion) {
        log::info!("OpenGL version: {}", self.version);
        log::debug!("OpenGL renderer: {} ({})", self.renderer, self.vendor);
        log::debug!("GLSL version: {}", self.shading_language);

        if !self.satisfies(requested) {
            log::warn!(
                "requested OpenGL {requested} but the driver reports {}",
                self.version
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(version: &str) -> ContextInfo {
        ContextInfo {
            version: version.to_string(),
            parsed: GlVersion::parse(version),
            ..ContextInfo::default()
        }
    }

    #[test]
    fn newer_context_satisfies_request() {
        assert!(info("4.6.0 NVIDIA 535.54.03").satisfies(GlVersion::new(4, 1)));
        assert!(info("4.1 Metal - 76.3").satisfies(GlVersion::new(4, 1)));
    }

    #[test]
    fn older_context_does_not() {
        assert!(!info("3.3 (Core Profile) Mesa 21.0").satisfies(GlVersion::new(4, 1)));
    }

    #[test]
    fn unreadable_version_is_accepted() {
        assert!(info("").satisfies(GlVersion::new(4, 1)));
    }
}
