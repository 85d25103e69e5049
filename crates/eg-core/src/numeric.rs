use crate::{CoreError, CoreResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Parse a single finite number from user text. Surrounding whitespace is ignored.
pub fn parse_number(text: &str, what: &'static str) -> CoreResult<Real> {
    let trimmed = text.trim();
    let value = trimmed.parse::<Real>().map_err(|_| CoreError::Parse {
        what,
        input: trimmed.to_string(),
    })?;
    ensure_finite(value, what)
}

/// Parse a comma-separated list of finite numbers.
///
/// Every token must parse; an empty token (including an empty input) is an error.
pub fn parse_number_list(text: &str, what: &'static str) -> CoreResult<Vec<Real>> {
    text.split(',').map(|token| parse_number(token, what)).collect()
}

/// `count` evenly spaced samples from `start` to `end`, both endpoints included exactly.
pub fn linspace(start: Real, end: Real, count: usize) -> Vec<Real> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as Real;
            let mut values: Vec<Real> = (0..count).map(|i| start + step * i as Real).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Format `v` with at most `decimals` decimals, dropping trailing zeros ("22", "5.96").
pub fn format_trimmed(v: Real, decimals: usize) -> String {
    let text = format!("{v:.decimals$}");
    if !text.contains('.') {
        return text;
    }
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn parse_number_trims_whitespace() {
        assert_eq!(parse_number("  22 ", "VCC").unwrap(), 22.0);
        assert_eq!(parse_number("5.96e0", "IB").unwrap(), 5.96);
    }

    #[test]
    fn parse_number_rejects_text_and_infinity() {
        assert!(matches!(
            parse_number("abc", "VCC"),
            Err(CoreError::Parse { what: "VCC", .. })
        ));
        assert!(matches!(
            parse_number("inf", "VCC"),
            Err(CoreError::NonFinite { .. })
        ));
    }

    #[test]
    fn parse_list_accepts_spaces_after_commas() {
        let values = parse_number_list("1, 2.5,-3 ,4e1", "X values").unwrap();
        assert_eq!(values, vec![1.0, 2.5, -3.0, 40.0]);
    }

    #[test]
    fn parse_list_rejects_empty_tokens() {
        assert!(parse_number_list("", "X values").is_err());
        assert!(parse_number_list("1,,2", "X values").is_err());
        assert!(parse_number_list("1,2,", "X values").is_err());
    }

    #[test]
    fn format_trimmed_drops_noise() {
        assert_eq!(format_trimmed(22.0, 6), "22");
        assert_eq!(format_trimmed(5.960_000_000_000_001, 6), "5.96");
        assert_eq!(format_trimmed(-0.000_000_1, 3), "0");
        assert_eq!(format_trimmed(1500.26, 1), "1500.3");
    }

    #[test]
    fn linspace_hits_endpoints() {
        let v = linspace(0.0, 22.0, 100);
        assert_eq!(v.len(), 100);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[99], 22.0);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 1.0, 1), vec![3.0]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn formatted_lists_parse_back(values in prop::collection::vec(-1e6_f64..1e6_f64, 1..20)) {
            let text = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let parsed = parse_number_list(&text, "values").unwrap();
            prop_assert_eq!(parsed, values);
        }

        #[test]
        fn linspace_is_monotonic(end in 0.001_f64..1e4_f64, count in 2_usize..500) {
            let v = linspace(0.0, end, count);
            prop_assert_eq!(v.len(), count);
            prop_assert_eq!(v[count - 1], end);
            prop_assert!(v.windows(2).all(|w| w[1] >= w[0]));
        }
    }
}
