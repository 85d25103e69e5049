use eg_figure::*;
use proptest::prelude::*;

#[test]
fn mismatched_curve_leaves_registry_untouched() {
    let mut registry = CurveRegistry::new();
    registry
        .add_from_text("first", "1,2", "3,4", CurveStyle::Line)
        .unwrap();
    let before = registry.curves().to_vec();

    let err = registry
        .add_from_text("second", "1,2,3", "3,4", CurveStyle::Scatter)
        .unwrap_err();

    assert!(matches!(err, FigureError::LengthMismatch { x_len: 3, y_len: 2 }));
    assert_eq!(registry.curves(), before.as_slice());
}

#[test]
fn unparsable_curve_leaves_registry_untouched() {
    let mut registry = CurveRegistry::new();
    let err = registry
        .add_from_text("bad", "1,two,3", "1,2,3", CurveStyle::Line)
        .unwrap_err();
    assert!(matches!(err, FigureError::Core(_)));
    assert!(registry.is_empty());
}

#[test]
fn custom_figure_follows_registration_order() {
    let mut registry = CurveRegistry::new();
    registry
        .add_from_text("b", "0,1", "0,1", CurveStyle::Line)
        .unwrap();
    registry
        .add_from_text("a", "0,1", "1,0", CurveStyle::LineScatter)
        .unwrap();

    let figure = custom_figure(&registry, &PlotLabels::default()).unwrap();
    let names: Vec<_> = figure.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert!(figure.x_limits.is_none());
}

proptest! {
    #[test]
    fn clear_always_empties(count in 0_usize..20) {
        let mut registry = CurveRegistry::new();
        for i in 0..count {
            let text = i.to_string();
            registry.add_from_text("", &text, &text, CurveStyle::Scatter).unwrap();
        }
        prop_assert_eq!(registry.len(), count);
        registry.clear();
        prop_assert!(registry.is_empty());
    }
}
