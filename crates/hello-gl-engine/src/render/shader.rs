use std::fmt;

use glow::HasContext;

/// Programmable pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    /// Runs once per vertex.
    Vertex,
    /// Runs once per covered pixel.
    Fragment,
}

impl ShaderStage {
    /// The GL shader type enum for this stage.
    pub const fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shader or program failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    /// The driver refused to allocate a shader or program object.
    Create { object: &'static str, message: String },
    /// Compilation failed; `log` is the driver info log.
    Compile { stage: ShaderStage, log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create { object, message } => {
                write!(f, "failed to create {object} object: {message}")
            }
            Self::Compile { stage, log } => {
                write!(f, "failed to compile {stage} shader: {}", log.trim_end())
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// Level at which shader sources are echoed before compiling.
pub(crate) const COMPILE_LOG_LEVEL: log::Level = log::Level::Info;

/// Compiles one shader stage.
///
/// On failure the driver info log is logged, the shader object is deleted and
/// `ShaderError::Compile` is returned.
pub fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    log::log!(COMPILE_LOG_LEVEL, "compiling {stage} shader:\n{source}");

    unsafe {
        let shader = gl.create_shader(stage.gl_enum()).map_err(|message| {
            ShaderError::Create { object: "shader", message }
        })?;

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if gl.get_shader_compile_status(shader) {
            return Ok(shader);
        }

        let info_log = gl.get_shader_info_log(shader);
        log::error!("failed to compile {stage} shader\n{}", info_log.trim_end());
        gl.delete_shader(shader);

        Err(ShaderError::Compile { stage, log: info_log })
    }
}

/// A linked (or failed-to-link) shader program.
#[derive(Debug)]
pub struct Program {
    raw: glow::Program,
    linked: bool,
}

impl Program {
    /// Builds a program from a vertex and a fragment shader source.
    ///
    /// A stage that fails to compile is logged and left out; the program is
    /// still linked and returned, in which case [`is_linked`](Self::is_linked)
    /// reports `false` and drawing with it produces nothing. Only a failure to
    /// allocate the program object is an error.
    pub fn from_sources(
        gl: &glow::Context,
        vertex: &str,
        fragment: &str,
    ) -> Result<Self, ShaderError> {
        let raw = unsafe { gl.create_program() }.map_err(|message| ShaderError::Create {
            object: "program",
            message,
        })?;

        let stages = [(ShaderStage::Vertex, vertex), (ShaderStage::Fragment, fragment)];
        let mut attached = Vec::with_capacity(stages.len());

        for (stage, source) in stages {
            match compile_shader(gl, stage, source) {
                Ok(shader) => {
                    unsafe { gl.attach_shader(raw, shader) };
                    attached.push(shader);
                }
                Err(ShaderError::Compile { .. }) => {}
                Err(e) => {
                    // Allocation failures cannot be papered over by linking.
                    unsafe {
                        for shader in attached {
                            gl.delete_shader(shader);
                        }
                        gl.delete_program(raw);
                    }
                    return Err(e);
                }
            }
        }

        let linked = unsafe {
            gl.link_program(raw);
            let linked = gl.get_program_link_status(raw);
            if !linked {
                log::warn!(
                    "shader program failed to link\n{}",
                    gl.get_program_info_log(raw).trim_end()
                );
            }

            for shader in attached {
                gl.detach_shader(raw, shader);
                gl.delete_shader(shader);
            }
            linked
        };

        if linked {
            log::debug!("linked shader program {raw:?}");
        }

        Ok(Self { raw, linked })
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Makes this the active program for subsequent draws.
    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.raw)) }
    }

    pub fn delete(self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.raw) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_map_to_gl_enums() {
        assert_eq!(ShaderStage::Vertex.gl_enum(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_enum(), glow::FRAGMENT_SHADER);
    }

    #[test]
    fn shader_sources_are_echoed_at_default_verbosity() {
        assert!(COMPILE_LOG_LEVEL <= log::LevelFilter::Info);
    }

    #[test]
    fn compile_error_shows_stage_and_log() {
        let e = ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log: "0:5(3): error: `colour' undeclared\n".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "failed to compile fragment shader: 0:5(3): error: `colour' undeclared"
        );
    }

    #[test]
    fn create_error_names_object() {
        let e = ShaderError::Create { object: "program", message: "out of memory".into() };
        assert_eq!(e.to_string(), "failed to create program object: out of memory");
    }
}
