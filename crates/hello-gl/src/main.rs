mod shaders;
mod triangle;

use std::process::ExitCode;

use hello_gl_engine::device::GlInit;
use hello_gl_engine::logging::{init_logging, LoggingConfig};
use hello_gl_engine::window::{Runtime, RuntimeConfig};

use triangle::TriangleApp;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match Runtime::run(RuntimeConfig::default(), GlInit::default(), TriangleApp::new()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
