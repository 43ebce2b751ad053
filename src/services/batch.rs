//! Folder-level processing.
//!
//! Inputs are processed one at a time in path order. A failing image does
//! not abort the batch; it is logged and listed in the [`BatchReport`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PearlError;
use crate::models::AppConfig;
use crate::services::pipeline::Pearlerizer;

/// File extensions picked up from the input directory (lowercase)
pub const INPUT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Whether `path` has one of [`INPUT_EXTENSIONS`], ignoring case.
pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| INPUT_EXTENSIONS.iter().any(|ext| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Supported image files directly inside `dir`, sorted by path.
///
/// Subdirectories are not descended into.
pub fn collect_inputs(dir: &Path) -> Result<Vec<PathBuf>, PearlError> {
    let entries = fs::read_dir(dir).map_err(|e| PearlError::io(dir, e))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PearlError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && is_supported_input(&path) {
            inputs.push(path);
        } else {
            tracing::trace!(path = %path.display(), "Skipping");
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// `output_dir/<stem>.png`
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".png");
    output_dir.join(name)
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Inputs converted successfully, in processing order
    pub processed: Vec<PathBuf>,
    /// Inputs that failed, with the error message
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.processed.len() + self.failed.len()
    }
}

/// Process every supported image in `config.input_dir`.
///
/// Fails up front on invalid configuration, an unusable palette, or an
/// unreadable input directory. Per-image failures end up in the report.
pub fn run_batch(config: &AppConfig) -> Result<BatchReport, PearlError> {
    let pearlerizer = Pearlerizer::from_config(config)?;
    let inputs = collect_inputs(&config.input_dir)?;
    fs::create_dir_all(&config.output_dir).map_err(|e| PearlError::io(&config.output_dir, e))?;

    tracing::info!(
        input_dir = %config.input_dir.display(),
        output_dir = %config.output_dir.display(),
        images = inputs.len(),
        colors = pearlerizer.palette().len(),
        "Starting batch"
    );

    let mut report = BatchReport::default();
    for input in inputs {
        let output = output_path_for(&input, &config.output_dir);
        tracing::info!(path = %input.display(), "Processing image");
        match pearlerizer.process_file(&input, &output) {
            Ok(_) => report.processed.push(input),
            Err(e) => {
                tracing::warn!(path = %input.display(), error = %e, "Failed to process image");
                report.failed.push((input, e.to_string()));
            }
        }
    }

    tracing::info!(
        processed = report.processed.len(),
        failed = report.failed.len(),
        "Batch finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported_input() {
        assert!(is_supported_input(Path::new("a.png")));
        assert!(is_supported_input(Path::new("a.JPG")));
        assert!(is_supported_input(Path::new("dir/a.Jpeg")));
        assert!(is_supported_input(Path::new("a.gif")));
        assert!(is_supported_input(Path::new("a.bmp")));
        assert!(!is_supported_input(Path::new("a.txt")));
        assert!(!is_supported_input(Path::new("a.webp")));
        assert!(!is_supported_input(Path::new("png")));
    }

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("in/photo.JPG"), Path::new("out")),
            PathBuf::from("out/photo.png")
        );
        assert_eq!(
            output_path_for(Path::new("in/my.holiday.jpeg"), Path::new("out")),
            PathBuf::from("out/my.holiday.png")
        );
    }

    #[test]
    fn test_collect_inputs_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.JPG", "notes.txt", "c.gif"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("sub.png")).unwrap();

        let inputs = collect_inputs(dir.path()).unwrap();
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png", "c.gif"]);
    }

    #[test]
    fn test_collect_inputs_missing_dir() {
        assert!(matches!(
            collect_inputs(Path::new("/nonexistent/input")),
            Err(PearlError::Io { .. })
        ));
    }

    #[test]
    fn test_run_batch_rejects_invalid_config() {
        let config = AppConfig {
            block_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            run_batch(&config),
            Err(PearlError::InvalidArgument(_))
        ));
    }
}
