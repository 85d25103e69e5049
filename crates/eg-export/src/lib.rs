//! Figure export to image and PDF files.
//!
//! The output format follows the file extension: `.png`, `.jpg`/`.jpeg` are
//! drawn with the plotters bitmap backend, `.pdf` is drawn as SVG and then
//! converted. A path without an extension is saved as PNG.

pub mod error;
pub mod fonts;
pub mod format;
pub mod pdf;
pub mod render;

pub use error::{ExportError, ExportResult};
pub use format::{ExportFormat, resolve_path};

use std::path::{Path, PathBuf};

use eg_figure::Figure;
use plotters::prelude::*;

/// Write `figure` to `path`, returning the path actually written.
///
/// The format is checked before anything touches the file system.
pub fn export_figure(figure: &Figure, path: &Path) -> ExportResult<PathBuf> {
    let path = resolve_path(path);
    let format = ExportFormat::from_path(&path)?;
    let size = (figure.size.width, figure.size.height);

    tracing::debug!(path = %path.display(), ?format, ?size, "exporting figure");

    match format {
        ExportFormat::Png | ExportFormat::Jpeg => {
            let root = BitMapBackend::new(&path, size).into_drawing_area();
            render::draw_figure(&root, figure)?;
            root.present().map_err(render::render_error)?;
        }
        ExportFormat::Pdf => {
            let svg = render::figure_to_svg(figure)?;
            let bytes = pdf::svg_to_pdf(&svg)?;
            std::fs::write(&path, bytes).map_err(|source| ExportError::Write {
                path: path.clone(),
                source,
            })?;
        }
    }

    tracing::info!(path = %path.display(), "figure exported");
    Ok(path)
}
