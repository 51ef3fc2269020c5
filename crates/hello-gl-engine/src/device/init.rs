use std::fmt;

/// An OpenGL `major.minor` version.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GlVersion {
    pub major: u8,
    pub minor: u8,
}

impl GlVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Extracts the leading `major.minor` pair from a `GL_VERSION` string.
    ///
    /// Accepts the forms drivers actually return, e.g. `"4.1 Metal - 76.3"`,
    /// `"4.6.0 NVIDIA 535.54.03"` and `"OpenGL ES 3.2 Mesa 23.1"`.
    pub fn parse(version: &str) -> Option<Self> {
        let numeric = version
            .split_whitespace()
            .find(|word| word.starts_with(|c: char| c.is_ascii_digit()))?;

        let mut parts = numeric.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts
            .next()?
            .trim_end_matches(|c: char| !c.is_ascii_digit())
            .parse()
            .ok()?;

        Some(Self { major, minor })
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Requested GL context profile.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GlProfile {
    /// Core profile. Forward-compatible on macOS, which only offers core
    /// contexts without the deprecated entry points.
    Core,
    Compatibility,
}

impl From<GlProfile> for glutin::context::GlProfile {
    fn from(profile: GlProfile) -> Self {
        match profile {
            GlProfile::Core => glutin::context::GlProfile::Core,
            GlProfile::Compatibility => glutin::context::GlProfile::Compatibility,
        }
    }
}

/// Initialization parameters for the GL device.
///
/// Keep this structure minimal. Add knobs only when a platform requires one.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Context version to request.
    pub version: GlVersion,

    /// Context profile to request.
    pub profile: GlProfile,

    /// Wait for vertical blank on swap.
    ///
    /// A hint; platforms that refuse it keep rendering unthrottled.
    pub vsync: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: GlVersion::new(4, 1),
            profile: GlProfile::Core,
            vsync: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_requests_4_1_core() {
        let init = GlInit::default();
        assert_eq!(init.version, GlVersion::new(4, 1));
        assert_eq!(init.profile, GlProfile::Core);
        assert!(init.vsync);
    }

    #[test]
    fn parse_desktop_versions() {
        assert_eq!(GlVersion::parse("4.1 Metal - 76.3"), Some(GlVersion::new(4, 1)));
        assert_eq!(GlVersion::parse("4.6.0 NVIDIA 535.54.03"), Some(GlVersion::new(4, 6)));
        assert_eq!(
            GlVersion::parse("4.5 (Core Profile) Mesa 23.2.1"),
            Some(GlVersion::new(4, 5))
        );
    }

    #[test]
    fn parse_embedded_version() {
        assert_eq!(GlVersion::parse("OpenGL ES 3.2 Mesa 23.1"), Some(GlVersion::new(3, 2)));
    }

    #[test]
    fn parse_garbage() {
        assert_eq!(GlVersion::parse(""), None);
        assert_eq!(GlVersion::parse("unknown"), None);
        assert_eq!(GlVersion::parse("4"), None);
    }

    #[test]
    fn versions_order_by_major_then_minor() {
        assert!(GlVersion::new(3, 3) < GlVersion::new(4, 1));
        assert!(GlVersion::new(4, 1) < GlVersion::new(4, 6));
        assert_eq!(GlVersion::new(4, 1).to_string(), "4.1");
    }
}
