//! Drawing a [`Figure`] onto any plotters backend.

use eg_figure::{Color as FigureColor, Figure};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::error::{ExportError, ExportResult};
use crate::fonts::{self, FONT_FAMILY};

const CAPTION_SIZE: f64 = 24.0;
const AXIS_LABEL_SIZE: f64 = 16.0;
const LEGEND_SWATCH: i32 = 20;

pub(crate) fn render_error<E>(err: DrawingAreaErrorKind<E>) -> ExportError
where
    E: std::error::Error + Send + Sync,
{
    ExportError::Render(err.to_string())
}

fn rgba(color: FigureColor) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.opacity())
}

fn font(size: f64, bold: bool) -> FontDesc<'static> {
    let style = if bold {
        FontStyle::Bold
    } else {
        FontStyle::Normal
    };
    FontDesc::new(FontFamily::Name(FONT_FAMILY), size, style)
}

/// Draw the whole figure: background, mesh, origin axes, series, annotations, legend.
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> ExportResult<()> {
    fonts::ensure_registered()?;
    root.fill(&rgba(FigureColor::WHITE)).map_err(render_error)?;

    let (x, y) = figure.view_bounds();
    let mut builder = ChartBuilder::on(root);
    builder
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70);
    if !figure.title.is_empty() {
        builder.caption(&figure.title, font(CAPTION_SIZE, false));
    }
    let mut chart = builder
        .build_cartesian_2d(x.min..x.max, y.min..y.max)
        .map_err(render_error)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(figure.x_label.as_str())
            .y_desc(figure.y_label.as_str())
            .axis_desc_style(font(AXIS_LABEL_SIZE, false))
            .label_style(font(AXIS_LABEL_SIZE - 3.0, false));
        if figure.grid.is_visible() {
            mesh.bold_line_style(rgba(figure.grid.line_color()))
                .light_line_style(TRANSPARENT);
        } else {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(render_error)?;
    }

    if figure.origin_axes {
        let axis = ShapeStyle::from(&BLACK).stroke_width(1);
        chart
            .draw_series(LineSeries::new([(x.min, 0.0), (x.max, 0.0)], axis))
            .map_err(render_error)?;
        chart
            .draw_series(LineSeries::new([(0.0, y.min), (0.0, y.max)], axis))
            .map_err(render_error)?;
    }

    for (index, series) in figure.series.iter().enumerate() {
        let color = rgba(figure.series_color(index));
        let stroke = ShapeStyle::from(color).stroke_width(series.width.round().max(1.0) as u32);
        let radius = series.marker_radius.round().max(1.0) as i32;
        let points: Vec<(f64, f64)> = series.points.iter().map(|p| (p[0], p[1])).collect();

        if series.kind.draws_line() {
            chart
                .draw_series(LineSeries::new(points.iter().copied(), stroke))
                .map_err(render_error)?
                .label(series.label.as_str())
                .legend(move |(px, py)| {
                    PathElement::new(vec![(px, py), (px + LEGEND_SWATCH, py)], stroke)
                });
        }
        if series.kind.draws_markers() {
            let markers = chart
                .draw_series(
                    points
                        .iter()
                        .map(|&p| Circle::new(p, radius, color.filled())),
                )
                .map_err(render_error)?;
            if !series.kind.draws_line() {
                markers
                    .label(series.label.as_str())
                    .legend(move |(px, py)| {
                        Circle::new((px + LEGEND_SWATCH / 2, py), radius, color.filled())
                    });
            }
        }
    }

    for annotation in &figure.annotations {
        let position = (annotation.position[0], annotation.position[1]);
        if let Some([tx, ty]) = annotation.arrow_to {
            let arrow = ShapeStyle::from(&BLACK).stroke_width(1);
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![position, (tx, ty)],
                    arrow,
                )))
                .map_err(render_error)?;
            chart
                .draw_series(std::iter::once(Circle::new((tx, ty), 3, BLACK.filled())))
                .map_err(render_error)?;
        }
        let style =
            font(annotation.font_size as f64, annotation.bold).color(&rgba(annotation.color));
        chart
            .draw_series(std::iter::once(Text::new(
                annotation.text.clone(),
                position,
                style,
            )))
            .map_err(render_error)?;
    }

    if figure.legend && !figure.series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(font(AXIS_LABEL_SIZE - 2.0, false))
            .draw()
            .map_err(render_error)?;
    }

    Ok(())
}

/// Render to an in-memory SVG document.
pub fn figure_to_svg(figure: &Figure) -> ExportResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (figure.size.width, figure.size.height))
            .into_drawing_area();
        draw_figure(&root, figure)?;
        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eg_figure::{BjtParams, analyze, load_line_figure};

    #[test]
    fn svg_contains_labels() {
        let params = BjtParams::new(22.0, 10_000.0, 1_500.0, 5.96, 178.0).unwrap();
        let figure = load_line_figure(&params, &analyze(&params));

        let svg = figure_to_svg(&figure).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("BJT DC Load Line Analysis"));
        assert!(svg.contains("DC Load Line"));
        assert!(svg.contains("Q (9.8V, 1.06mA)"));
    }
}
