//! DC load-line analysis of a fixed-bias BJT stage.
//!
//! ## Model
//!
//! The collector-emitter loop holds the supply, the collector resistor and the
//! emitter resistor in series, so every operating point satisfies
//!
//! ```text
//! VCE = VCC - IC * (RC + RE)
//! ```
//!
//! which is the load line between the saturation point `(0, VCC / (RC + RE))`
//! and the cutoff point `(VCC, 0)`. The transistor side is an active-region
//! knee approximation, not a device model:
//!
//! ```text
//! IC(VCE) = beta * IB * tanh(VCE / 0.7 V)
//! ```
//!
//! The Q-point takes `IC = beta * IB` and solves the loop equation for `VCE`.
//! A non-positive `VCE` means the bias drives the stage past saturation.
//!
//! All chart coordinates are volts on X and milliamperes on Y.

use eg_core::units::{
    Current, Ratio, Resistance, Voltage, microamps, ohms, to_milliamps, unitless, volts,
};
use eg_core::{ensure_finite, format_trimmed, linspace};
use uom::si::electric_current::microampere;

use crate::color::Color;
use crate::error::{FigureError, FigureResult};
use crate::figure::{Annotation, AxisLimits, Figure, FigureSize, GridStyle, Series};

pub const LOAD_LINE_SAMPLES: usize = 100;
pub const CHARACTERISTIC_SAMPLES: usize = 200;
/// Knee voltage of the characteristic approximation (V)
pub const KNEE_VOLTAGE: f64 = 0.7;
/// Characteristic curve and X axis extend to this multiple of VCC
pub const VCE_SPAN: f64 = 1.1;
/// Y axis extends to this multiple of the saturation current
pub const IC_HEADROOM: f64 = 1.2;

pub const LOAD_LINE_FIGURE_SIZE: FigureSize = FigureSize::new(800, 600);

/// Circuit inputs for the load-line analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BjtParams {
    /// Supply voltage
    pub vcc: Voltage,
    /// Collector resistance
    pub rc: Resistance,
    /// Emitter resistance
    pub re: Resistance,
    /// Base current
    pub ib: Current,
    /// DC current gain
    pub beta: Ratio,
}

impl BjtParams {
    /// Build parameters from plain numbers in V, Ω, Ω, µA and a bare gain.
    ///
    /// # Errors
    /// Non-finite inputs, a non-positive supply, negative resistances, a zero
    /// total resistance, or a negative base current or gain.
    pub fn new(
        vcc_v: f64,
        rc_ohm: f64,
        re_ohm: f64,
        ib_ua: f64,
        beta: f64,
    ) -> FigureResult<Self> {
        let vcc_v = ensure_finite(vcc_v, "VCC")?;
        let rc_ohm = ensure_finite(rc_ohm, "RC")?;
        let re_ohm = ensure_finite(re_ohm, "RE")?;
        let ib_ua = ensure_finite(ib_ua, "IB")?;
        let beta = ensure_finite(beta, "beta")?;

        if vcc_v <= 0.0 {
            return Err(FigureError::InvalidParameter {
                what: "VCC",
                reason: "supply voltage must be positive",
            });
        }
        if rc_ohm < 0.0 || re_ohm < 0.0 {
            return Err(FigureError::InvalidParameter {
                what: if rc_ohm < 0.0 { "RC" } else { "RE" },
                reason: "resistance must not be negative",
            });
        }
        if rc_ohm + re_ohm <= 0.0 {
            return Err(FigureError::InvalidParameter {
                what: "RC + RE",
                reason: "total resistance must be positive",
            });
        }
        if ib_ua < 0.0 {
            return Err(FigureError::InvalidParameter {
                what: "IB",
                reason: "base current must not be negative",
            });
        }
        if beta < 0.0 {
            return Err(FigureError::InvalidParameter {
                what: "beta",
                reason: "current gain must not be negative",
            });
        }

        check_chart_range(vcc_v, rc_ohm + re_ohm, ib_ua, beta)?;

        Ok(Self {
            vcc: volts(vcc_v),
            rc: ohms(rc_ohm),
            re: ohms(re_ohm),
            ib: microamps(ib_ua),
            beta: unitless(beta),
        })
    }

    pub fn total_resistance(&self) -> Resistance {
        self.rc + self.re
    }

    pub fn ib_microamps(&self) -> f64 {
        self.ib.get::<microampere>()
    }
}

/// Every value the chart is built from must be a finite, non-degenerate float.
fn check_chart_range(vcc_v: f64, r_ohm: f64, ib_ua: f64, beta: f64) -> FigureResult<()> {
    let out_of_range = |what: &'static str| FigureError::InvalidParameter {
        what,
        reason: "values are too large or too small to plot",
    };

    let r_ohm = ensure_finite(r_ohm, "RC + RE").map_err(|_| out_of_range("RC + RE"))?;
    let ic_sat_ma = vcc_v / r_ohm * 1e3;
    if !(ic_sat_ma * IC_HEADROOM).is_normal() {
        return Err(out_of_range("VCC / (RC + RE)"));
    }
    if !(vcc_v * VCE_SPAN).is_normal() {
        return Err(out_of_range("VCC"));
    }
    let ic_q_a = beta * ib_ua * 1e-6;
    if !(ic_q_a * 1e3).is_finite() {
        return Err(out_of_range("beta * IB"));
    }
    if !(vcc_v - ic_q_a * r_ohm).is_finite() {
        return Err(out_of_range("Q-point VCE"));
    }
    Ok(())
}

/// Quiescent operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QPoint {
    pub vce: Voltage,
    pub ic: Current,
}

impl QPoint {
    /// Chart coordinates (V, mA).
    pub fn chart_point(&self) -> [f64; 2] {
        [self.vce.value, to_milliamps(self.ic)]
    }
}

/// Everything computed from one set of [`BjtParams`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadLineAnalysis {
    pub r_total: Resistance,
    /// Y-intercept of the load line
    pub ic_sat: Current,
    /// X-intercept of the load line
    pub vce_cutoff: Voltage,
    pub q_point: QPoint,
    /// (V, mA) samples from saturation to cutoff
    pub load_line: Vec<[f64; 2]>,
    /// (V, mA) samples of the knee approximation
    pub characteristic: Vec<[f64; 2]>,
}

impl LoadLineAnalysis {
    pub fn ic_sat_ma(&self) -> f64 {
        to_milliamps(self.ic_sat)
    }

    /// The Q-point lies at or beyond the saturation end of the load line.
    pub fn is_saturated(&self) -> bool {
        self.q_point.vce.value <= 0.0
    }
}

pub fn analyze(params: &BjtParams) -> LoadLineAnalysis {
    let r_total = params.total_resistance();
    let ic_sat: Current = params.vcc / r_total;
    let vce_cutoff = params.vcc;

    let vcc_v = params.vcc.value;
    let r_ohm = r_total.value;
    let load_line = linspace(0.0, vcc_v, LOAD_LINE_SAMPLES)
        .into_iter()
        .map(|vce| [vce, (vcc_v - vce) / r_ohm * 1e3])
        .collect();

    let ic_q: Current = params.beta * params.ib;
    let ic_max_ma = to_milliamps(ic_q);
    let characteristic = linspace(0.0, vcc_v * VCE_SPAN, CHARACTERISTIC_SAMPLES)
        .into_iter()
        .map(|vce| [vce, ic_max_ma * (vce / KNEE_VOLTAGE).tanh()])
        .collect();

    let vce_q: Voltage = params.vcc - ic_q * r_total;

    LoadLineAnalysis {
        r_total,
        ic_sat,
        vce_cutoff,
        q_point: QPoint { vce: vce_q, ic: ic_q },
        load_line,
        characteristic,
    }
}

/// The annotated load-line chart.
///
/// Layout is fixed: axes start at the origin, X runs to 1.1·VCC and Y to
/// 1.2·Ic_sat. Label offsets scale with the axis spans.
pub fn load_line_figure(params: &BjtParams, analysis: &LoadLineAnalysis) -> Figure {
    let vcc_v = params.vcc.value;
    let ic_sat_ma = analysis.ic_sat_ma();
    let q = analysis.q_point.chart_point();
    let ib_label = format_trimmed(params.ib_microamps(), 6);

    let mut figure = Figure::new(LOAD_LINE_FIGURE_SIZE);
    figure.title = "BJT DC Load Line Analysis".to_string();
    figure.x_label = "VCE (Volts)".to_string();
    figure.y_label = "IC (mA)".to_string();
    figure.x_limits = Some(AxisLimits::new(0.0, vcc_v * VCE_SPAN));
    figure.y_limits = Some(AxisLimits::new(0.0, ic_sat_ma * IC_HEADROOM));
    figure.grid = GridStyle::Dotted;
    figure.origin_axes = true;
    figure.legend = true;

    figure.series.push(
        Series::line("DC Load Line", analysis.load_line.clone())
            .with_color(Color::NAVY)
            .with_width(2.0),
    );
    figure.series.push(
        Series::line(format!("IB = {ib_label} µA"), analysis.characteristic.clone())
            .with_color(Color::ROYAL_BLUE),
    );
    figure.series.push(
        Series::scatter("Q-point", vec![q])
            .with_color(Color::RED)
            .with_marker_radius(5.0),
    );

    let dx = vcc_v * 0.05;
    let dy = ic_sat_ma * 0.05;
    figure.annotations.push(
        Annotation::new(format!("{ic_sat_ma:.2} mA"), [dx, ic_sat_ma])
            .with_arrow_to([0.0, ic_sat_ma]),
    );
    figure.annotations.push(
        Annotation::new(
            format!("{} V", format_trimmed(vcc_v, 6)),
            [vcc_v - 3.0 * dx, 2.0 * dy],
        )
        .with_arrow_to([vcc_v, 0.0]),
    );
    figure.annotations.push(
        Annotation::new(
            format!("Q ({:.1}V, {:.2}mA)", q[0], q[1]),
            [q[0] + dx / 2.0, q[1] + dy],
        )
        .with_color(Color::DARK_RED)
        .with_font_size(12.0)
        .bold(),
    );
    if let Some(&end) = analysis.characteristic.last() {
        figure
            .annotations
            .push(Annotation::new(format!(" IB={ib_label} µA"), end));
    }

    figure
}

#[cfg(test)]
mod tests {
    use super::*;
    use eg_core::{Tolerances, nearly_equal};

    fn textbook() -> BjtParams {
        BjtParams::new(22.0, 10_000.0, 1_500.0, 5.96, 178.0).unwrap()
    }

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn textbook_operating_point() {
        let analysis = analyze(&textbook());
        let [vce_q, ic_q_ma] = analysis.q_point.chart_point();

        assert!(close(ic_q_ma, 1.060_88, 1e-4), "Ic_q = {ic_q_ma}");
        assert!(close(vce_q, 9.80, 0.01), "Vce_q = {vce_q}");
        assert!(close(analysis.ic_sat_ma(), 1.913_04, 1e-4));
        assert!(close(analysis.r_total.value, 11_500.0, 1e-9));
        assert_eq!(analysis.vce_cutoff.value, 22.0);
        assert!(!analysis.is_saturated());
    }

    #[test]
    fn sample_counts() {
        let analysis = analyze(&textbook());
        assert_eq!(analysis.load_line.len(), LOAD_LINE_SAMPLES);
        assert_eq!(analysis.characteristic.len(), CHARACTERISTIC_SAMPLES);
        let last = analysis.characteristic[CHARACTERISTIC_SAMPLES - 1];
        assert!(nearly_equal(last[0], 22.0 * VCE_SPAN, Tolerances::default()));
    }

    #[test]
    fn characteristic_starts_at_origin_and_flattens() {
        let analysis = analyze(&textbook());
        assert_eq!(analysis.characteristic[0], [0.0, 0.0]);
        let [_, ic_end] = analysis.characteristic[CHARACTERISTIC_SAMPLES - 1];
        let ic_q_ma = analysis.q_point.chart_point()[1];
        assert!(close(ic_end, ic_q_ma, 1e-9));
    }

    #[test]
    fn heavy_bias_is_saturated() {
        let params = BjtParams::new(10.0, 1_000.0, 0.0, 100.0, 200.0).unwrap();
        let analysis = analyze(&params);
        assert!(analysis.is_saturated());
    }

    #[test]
    fn rejects_non_physical_inputs() {
        assert!(matches!(
            BjtParams::new(0.0, 1.0, 1.0, 1.0, 1.0),
            Err(FigureError::InvalidParameter { what: "VCC", .. })
        ));
        assert!(matches!(
            BjtParams::new(5.0, -1.0, 1.0, 1.0, 1.0),
            Err(FigureError::InvalidParameter { what: "RC", .. })
        ));
        assert!(matches!(
            BjtParams::new(5.0, 0.0, 0.0, 1.0, 1.0),
            Err(FigureError::InvalidParameter { what: "RC + RE", .. })
        ));
        assert!(matches!(
            BjtParams::new(5.0, 1.0, 1.0, f64::NAN, 1.0),
            Err(FigureError::Core(_))
        ));
    }

    #[test]
    fn rejects_inputs_that_overflow_the_chart() {
        let overflowing = [
            (1e300, 1e-10, 0.0, 1.0, 1.0),
            (1e308, 1e308, 1e308, 1.0, 1.0),
            (5.0, 1_000.0, 0.0, 1e300, 1e300),
            (5.0, 1e300, 0.0, 1e10, 1e10),
            (1e-300, 1e300, 0.0, 1.0, 1.0),
        ];
        for (vcc, rc, re, ib, beta) in overflowing {
            let result = BjtParams::new(vcc, rc, re, ib, beta);
            assert!(
                matches!(result, Err(FigureError::InvalidParameter { .. })),
                "accepted VCC={vcc} RC={rc} RE={re} IB={ib} beta={beta}"
            );
        }
    }

    #[test]
    fn accepted_inputs_give_finite_limits() {
        let params = BjtParams::new(1e6, 1e-3, 0.0, 1e3, 1e3).unwrap();
        let figure = load_line_figure(&params, &analyze(&params));
        let (x, y) = figure.view_bounds();
        for v in [x.min, x.max, y.min, y.max] {
            assert!(v.is_finite());
        }
        assert!(y.max > y.min);
    }

    #[test]
    fn figure_layout() {
        let params = textbook();
        let analysis = analyze(&params);
        let figure = load_line_figure(&params, &analysis);

        assert_eq!(figure.title, "BJT DC Load Line Analysis");
        assert_eq!(figure.size, LOAD_LINE_FIGURE_SIZE);
        assert_eq!(figure.x_limits, Some(AxisLimits::new(0.0, 22.0 * VCE_SPAN)));
        let y = figure.y_limits.unwrap();
        assert_eq!(y.min, 0.0);
        assert!(close(y.max, analysis.ic_sat_ma() * IC_HEADROOM, 1e-12));
        assert!(figure.origin_axes);
        assert_eq!(figure.grid, GridStyle::Dotted);

        let labels: Vec<_> = figure.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["DC Load Line", "IB = 5.96 µA", "Q-point"]);

        let texts: Vec<_> = figure.annotations.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["1.91 mA", "22 V", "Q (9.8V, 1.06mA)", " IB=5.96 µA"]
        );
        assert_eq!(figure.annotations[0].arrow_to, Some([0.0, analysis.ic_sat_ma()]));
        assert_eq!(figure.annotations[1].arrow_to, Some([22.0, 0.0]));
        assert!(figure.annotations[2].bold);
    }
}
