//! Scratch directory laid out like a pearlerizer project.

use pearlerizer::models::AppConfig;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures;

/// Temporary `palette.png` + `input/` + `output/` layout
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Workspace whose palette holds [`fixtures::colors::ALL`]
    pub fn new() -> Self {
        Self::with_palette(&fixtures::colors::ALL)
    }

    pub fn with_palette(colors: &[[u8; 3]]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("input")).unwrap();
        fixtures::write_palette(&dir.path().join("palette.png"), colors);
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn palette_path(&self) -> PathBuf {
        self.root().join("palette.png")
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root().join("input")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root().join("output")
    }

    /// Path of `name` inside the input directory
    pub fn input(&self, name: &str) -> PathBuf {
        self.input_dir().join(name)
    }

    /// Path of `name` inside the output directory
    pub fn output(&self, name: &str) -> PathBuf {
        self.output_dir().join(name)
    }

    /// Config pointing at this workspace with the default block size
    pub fn config(&self) -> AppConfig {
        AppConfig {
            palette: self.palette_path(),
            input_dir: self.input_dir(),
            output_dir: self.output_dir(),
            ..Default::default()
        }
    }
}
