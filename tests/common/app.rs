//! Scratch workspace for integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use scanclean::error::PipelineError;
use scanclean::services::{PipelineOutcome, ProcessingPipeline};

/// Captured result of running the `scanclean` binary
pub struct CliOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Temporary directory holding input images and produced PDFs
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Absolute path of `name` inside the workspace
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `bytes` as `name` and return its path
    pub fn write_input(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write input");
        path
    }

    pub fn read(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.path(name)).expect("Failed to read output")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Number of entries in the workspace directory
    pub fn file_count(&self) -> usize {
        std::fs::read_dir(self.dir.path())
            .expect("Failed to list temp dir")
            .count()
    }

    /// Run the library pipeline with default settings
    pub fn run_pipeline(&self, input: &Path) -> Result<PipelineOutcome, PipelineError> {
        ProcessingPipeline::default().run(input)
    }

    /// Run the compiled binary with `args`, inside the workspace directory
    pub fn run_cli(&self, args: &[&str]) -> CliOutput {
        let output = Command::new(env!("CARGO_BIN_EXE_scanclean"))
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run scanclean binary");

        CliOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
