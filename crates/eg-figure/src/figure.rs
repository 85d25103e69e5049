//! Backend-agnostic description of a single plot.
//!
//! A [`Figure`] is built once per generate action and then handed to whichever
//! renderer needs it: the interactive plot in the window or the file exporter.

use crate::color::Color;

/// Relative padding added around auto-scaled data bounds.
pub const AUTO_MARGIN: f64 = 0.05;

/// Output size of a figure in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureSize {
    pub width: u32,
    pub height: u32,
}

impl FigureSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Closed interval shown along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub min: f64,
    pub max: f64,
}

impl AxisLimits {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Widen by `fraction` of the span on both sides; a zero-width interval
    /// is opened to one unit around its value.
    pub fn padded(&self, fraction: f64) -> Self {
        let span = self.span();
        if span <= 0.0 {
            return Self::new(self.min - 0.5, self.max + 0.5);
        }
        Self::new(self.min - span * fraction, self.max + span * fraction)
    }

    fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }
}

/// Grid line appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridStyle {
    #[default]
    Dashed,
    Dotted,
    Hidden,
}

impl GridStyle {
    /// Grid opacity used by both generators.
    pub const OPACITY: f32 = 0.6;

    pub fn is_visible(self) -> bool {
        !matches!(self, GridStyle::Hidden)
    }

    pub fn line_color(self) -> Color {
        Color::GRAY.with_opacity(Self::OPACITY)
    }
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Line,
    Scatter,
    /// Polyline with a circle marker at every point.
    LineMarkers,
}

impl SeriesKind {
    pub fn draws_line(self) -> bool {
        matches!(self, SeriesKind::Line | SeriesKind::LineMarkers)
    }

    pub fn draws_markers(self) -> bool {
        matches!(self, SeriesKind::Scatter | SeriesKind::LineMarkers)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend entry
    pub label: String,
    pub points: Vec<[f64; 2]>,
    pub kind: SeriesKind,
    /// `None` picks the palette color for the series index
    pub color: Option<Color>,
    pub width: f32,
    pub marker_radius: f32,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<[f64; 2]>, kind: SeriesKind) -> Self {
        Self {
            label: label.into(),
            points,
            kind,
            color: None,
            width: 1.5,
            marker_radius: 3.0,
        }
    }

    pub fn line(label: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        Self::new(label, points, SeriesKind::Line)
    }

    pub fn scatter(label: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        Self::new(label, points, SeriesKind::Scatter)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_marker_radius(mut self, radius: f32) -> Self {
        self.marker_radius = radius;
        self
    }
}

/// Text placed at a data coordinate, optionally with an arrow to another point.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub position: [f64; 2],
    pub arrow_to: Option<[f64; 2]>,
    pub color: Color,
    pub bold: bool,
    pub font_size: f32,
}

impl Annotation {
    pub fn new(text: impl Into<String>, position: [f64; 2]) -> Self {
        Self {
            text: text.into(),
            position,
            arrow_to: None,
            color: Color::BLACK,
            bold: false,
            font_size: 13.0,
        }
    }

    pub fn with_arrow_to(mut self, target: [f64; 2]) -> Self {
        self.arrow_to = Some(target);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub size: FigureSize,
    /// Fixed limits; `None` auto-scales to the data
    pub x_limits: Option<AxisLimits>,
    pub y_limits: Option<AxisLimits>,
    pub grid: GridStyle,
    /// Draw solid lines along x = 0 and y = 0
    pub origin_axes: bool,
    pub legend: bool,
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
}

impl Figure {
    pub fn new(size: FigureSize) -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            size,
            x_limits: None,
            y_limits: None,
            grid: GridStyle::default(),
            origin_axes: false,
            legend: false,
            series: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Effective color of the series at `index`.
    pub fn series_color(&self, index: usize) -> Color {
        self.series
            .get(index)
            .and_then(|s| s.color)
            .unwrap_or_else(|| Color::palette(index))
    }

    /// Tight bounds around every series point, or `None` for a figure without data.
    pub fn data_bounds(&self) -> Option<(AxisLimits, AxisLimits)> {
        let mut points = self.series.iter().flat_map(|s| s.points.iter());
        let first = points.next()?;
        let mut x = AxisLimits::new(first[0], first[0]);
        let mut y = AxisLimits::new(first[1], first[1]);
        for p in points {
            x.include(p[0]);
            y.include(p[1]);
        }
        Some((x, y))
    }

    /// Limits a renderer should show: fixed limits where set, padded data bounds otherwise.
    pub fn view_bounds(&self) -> (AxisLimits, AxisLimits) {
        let (data_x, data_y) = self
            .data_bounds()
            .unwrap_or((AxisLimits::new(0.0, 1.0), AxisLimits::new(0.0, 1.0)));
        let x = self
            .x_limits
            .unwrap_or_else(|| data_x.padded(AUTO_MARGIN));
        let y = self
            .y_limits
            .unwrap_or_else(|| data_y.padded(AUTO_MARGIN));
        (x, y)
    }
}
