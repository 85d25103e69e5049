use std::path::{Path, PathBuf};

use crate::error::{ExportError, ExportResult};

/// Extension appended to paths that have none.
pub const DEFAULT_EXTENSION: &str = "png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Pdf];

    /// Infer the format from the extension, case-insensitively.
    pub fn from_path(path: &Path) -> ExportResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat { extension }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG Image",
            ExportFormat::Jpeg => "JPEG Image",
            ExportFormat::Pdf => "PDF File",
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ExportFormat::Png => &["png"],
            ExportFormat::Jpeg => &["jpg", "jpeg"],
            ExportFormat::Pdf => &["pdf"],
        }
    }

    /// Whether `path` carries one of this format's extensions.
    pub fn matches(self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            })
    }
}

/// Append the default extension when `path` has none. A trailing bare dot
/// counts as none.
pub fn resolve_path(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if !ext.is_empty() => path.to_path_buf(),
        _ => path.with_extension(DEFAULT_EXTENSION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_from_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("a/graph.png")).unwrap(),
            ExportFormat::Png
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("graph.JPG")).unwrap(),
            ExportFormat::Jpeg
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("graph.jpeg")).unwrap(),
            ExportFormat::Jpeg
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("graph.Pdf")).unwrap(),
            ExportFormat::Pdf
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = ExportFormat::from_path(Path::new("graph.bmp")).unwrap_err();
        assert!(err.to_string().contains(".bmp"));
        assert!(ExportFormat::from_path(Path::new("graph")).is_err());
    }

    #[test]
    fn missing_extension_defaults_to_png() {
        assert_eq!(resolve_path(Path::new("out/graph")), PathBuf::from("out/graph.png"));
        assert_eq!(resolve_path(Path::new("out/graph.pdf")), PathBuf::from("out/graph.pdf"));
    }

    #[test]
    fn matches_is_case_insensitive() {
        assert!(ExportFormat::Jpeg.matches(Path::new("dir/shot.JPG")));
        assert!(ExportFormat::Jpeg.matches(Path::new("shot.jpeg")));
        assert!(!ExportFormat::Jpeg.matches(Path::new("shot.png")));
        assert!(!ExportFormat::Pdf.matches(Path::new("report")));
    }

    #[test]
    fn trailing_dot_defaults_to_png() {
        let path = resolve_path(Path::new("out/graph."));
        assert_eq!(path, PathBuf::from("out/graph.png"));
        assert_eq!(ExportFormat::from_path(&path).unwrap(), ExportFormat::Png);
    }

    #[test]
    fn every_format_lists_its_extensions() {
        for format in ExportFormat::ALL {
            for ext in format.extensions() {
                let path = PathBuf::from(format!("x.{ext}"));
                assert_eq!(ExportFormat::from_path(&path).unwrap(), format);
            }
        }
    }
}
