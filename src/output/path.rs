//! Output path handling shared by the JSON and image writers.

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Image encoding picked from the output file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// `.png` or `.svg`, case-insensitive
    ///
    /// The bitmap backend picks its encoder from the extension too, so any
    /// other extension has no format.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Some(ImageFormat::Svg),
            Some(ext) if ext.eq_ignore_ascii_case("png") => Some(ImageFormat::Png),
            _ => None,
        }
    }

    /// Like `from_path`, failing with the offending path
    ///
    /// # Errors
    /// * `OutputError::InvalidPath` - extension is missing or not png/svg
    pub fn require(path: &Path) -> Result<Self, OutputError> {
        Self::from_path(path).ok_or_else(|| {
            OutputError::InvalidPath(format!(
                "Image path must end in .png or .svg: {}",
                path.display()
            ))
        })
    }
}

/// Validate an output path and create its parent directories
///
/// **Public** - called before every file write
///
/// # Errors
/// * `OutputError::InvalidPath` - empty path, a directory, or uncreatable parent
pub fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("a/b.svg")), Some(ImageFormat::Svg));
        assert_eq!(ImageFormat::from_path(Path::new("a/b.SVG")), Some(ImageFormat::Svg));
        assert_eq!(ImageFormat::from_path(Path::new("a/b.png")), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_path(Path::new("a/b")), None);
        assert_eq!(ImageFormat::from_path(Path::new("a/b.jpg")), None);
    }

    #[test]
    fn test_require_rejects_unknown_extension() {
        let err = ImageFormat::require(Path::new("plots/swap.jpeg")).unwrap_err();
        assert!(matches!(err, OutputError::InvalidPath(_)));
        assert!(err.to_string().contains("swap.jpeg"));
        assert_eq!(ImageFormat::require(Path::new("swap.png")).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_empty_path() {
        assert!(prepare_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_directory_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(prepare_output_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested/dirs/plot.png");

        prepare_output_path(&nested).unwrap();
        assert!(nested.parent().unwrap().is_dir());
    }
}
