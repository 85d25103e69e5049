use eg_export::*;
use eg_figure::*;

fn load_line() -> Figure {
    let params = BjtParams::new(22.0, 10_000.0, 1_500.0, 5.96, 178.0).unwrap();
    load_line_figure(&params, &analyze(&params))
}

fn custom() -> Figure {
    let mut curves = CurveRegistry::new();
    curves
        .add_from_text("ramp", "0,1,2,3", "0,1,4,9", CurveStyle::LineScatter)
        .unwrap();
    curves
        .add_from_text("", "0,3", "9,0", CurveStyle::Scatter)
        .unwrap();
    let labels = PlotLabels {
        title: "Custom".into(),
        x_label: "x".into(),
        y_label: "y".into(),
    };
    custom_figure(&curves, &labels).unwrap()
}

fn read_prefix(path: &std::path::Path, n: usize) -> Vec<u8> {
    let bytes = std::fs::read(path).unwrap();
    assert!(bytes.len() > n, "{} is too small", path.display());
    bytes[..n].to_vec()
}

#[test]
fn png_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_figure(&load_line(), &dir.path().join("graph.png")).unwrap();
    assert_eq!(read_prefix(&path, 8), b"\x89PNG\r\n\x1a\n");
}

#[test]
fn jpeg_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_figure(&custom(), &dir.path().join("graph.JPEG")).unwrap();
    assert_eq!(read_prefix(&path, 3), [0xFF, 0xD8, 0xFF]);
}

#[test]
fn pdf_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_figure(&load_line(), &dir.path().join("graph.pdf")).unwrap();
    assert_eq!(read_prefix(&path, 5), b"%PDF-");
}

#[test]
fn missing_extension_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_figure(&custom(), &dir.path().join("graph")).unwrap();
    assert_eq!(path, dir.path().join("graph.png"));
    assert!(path.exists());
}

#[test]
fn trailing_dot_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_figure(&custom(), &dir.path().join("graph.")).unwrap();
    assert_eq!(path, dir.path().join("graph.png"));
    assert_eq!(read_prefix(&path, 4), b"\x89PNG");
}

#[test]
fn unsupported_extension_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("graph.gif");
    let err = export_figure(&custom(), &target).unwrap_err();
    assert!(matches!(err, ExportError::UnsupportedFormat { .. }));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
