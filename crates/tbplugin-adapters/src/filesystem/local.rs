//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tbplugin_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{GeneratorError, GeneratorResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GeneratorResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> GeneratorResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> GeneratorError {
    ApplicationError::Io {
        path: path.to_path_buf(),
        operation,
        reason: e.to_string(),
    }
    .into()
}
