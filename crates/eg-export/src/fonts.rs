//! Bundled font registration.
//!
//! Text is drawn with the Ubuntu face that ships with egui, so exports look the
//! same on every machine and never depend on system font lookup.

use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};

use crate::error::{ExportError, ExportResult};

/// Family name every figure uses for its text.
pub const FONT_FAMILY: &str = "sans-serif";

pub fn font_bytes() -> &'static [u8] {
    epaint_default_fonts::UBUNTU_LIGHT
}

/// Register the bundled face with plotters once per process.
pub fn ensure_registered() -> ExportResult<()> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

    REGISTERED
        .get_or_init(|| {
            for style in [FontStyle::Normal, FontStyle::Bold] {
                register_font(FONT_FAMILY, style, font_bytes())
                    .map_err(|_| "bundled font data is invalid".to_string())?;
            }
            Ok(())
        })
        .clone()
        .map_err(ExportError::Font)
}
