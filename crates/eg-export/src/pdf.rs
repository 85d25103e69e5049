//! SVG to PDF conversion.

use svg2pdf::usvg;

use crate::error::{ExportError, ExportResult};
use crate::fonts;

/// Convert a plotters-generated SVG document into PDF bytes.
pub fn svg_to_pdf(svg: &str) -> ExportResult<Vec<u8>> {
    let mut options = usvg::Options::default();
    let fontdb = options.fontdb_mut();
    fontdb.load_font_data(fonts::font_bytes().to_vec());
    // The SVG asks for the generic family; point it at the bundled face.
    let bundled_family = fontdb
        .faces()
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()));
    if let Some(family) = bundled_family {
        fontdb.set_sans_serif_family(family);
    }

    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| ExportError::Pdf(e.to_string()))?;
    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| ExportError::Pdf(e.to_string()))
}
