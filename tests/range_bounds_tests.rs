use approx::assert_relative_eq;
use chartkit::core::{
    AxisBound, RangeQuery, SeriesRow, SymbolicBound, ZeroValuePolicy, range_bounds,
};

fn fixture_rows() -> Vec<SeriesRow> {
    let samples: [(f64, f64); 20] = [
        (4.11, 100.0),
        (2.39, 120.0),
        (1.37, 150.0),
        (1.16, 180.0),
        (2.29, 200.0),
        (3.0, 499.0),
        (0.53, 50.0),
        (2.52, 100.0),
        (1.79, 200.0),
        (2.94, 222.0),
        (4.3, 210.0),
        (4.41, 300.0),
        (2.1, 50.0),
        (8.0, 190.0),
        (0.0, 300.0),
        (9.0, 400.0),
        (3.0, 200.0),
        (2.0, 50.0),
        (3.0, 100.0),
        (7.0, 100.0),
    ];

    samples
        .iter()
        .enumerate()
        .map(|(index, (cost, impression))| {
            SeriesRow::new((index + 1) as f64)
                .with_value("cost", *cost)
                .with_value("impression", *impression)
        })
        .collect()
}

fn expect_values(bounds: (AxisBound, AxisBound)) -> (f64, f64) {
    match bounds {
        (AxisBound::Value(bottom), AxisBound::Value(top)) => (bottom, top),
        other => panic!("expected numeric bounds, got {other:?}"),
    }
}

#[test]
fn empty_rows_return_the_fallback_pair() {
    let query = RangeQuery::new("cost", 2.0);
    let bounds = range_bounds(&[], Some(1), Some(4), &query);

    assert_eq!(
        bounds,
        (
            AxisBound::Symbolic(SymbolicBound::DataMin(-1)),
            AxisBound::Symbolic(SymbolicBound::DataMax(1)),
        )
    );
}

#[test]
fn missing_indices_return_the_fallback_pair() {
    let rows = fixture_rows();
    let query = RangeQuery::new("cost", 2.0);

    let no_from = range_bounds(&rows, None, Some(4), &query);
    let no_to = range_bounds(&rows, Some(1), None, &query);
    assert_eq!(no_from, no_to);
    assert!(matches!(no_from.0, AxisBound::Symbolic(_)));
}

#[test]
fn fixture_bounds_over_first_four_rows() {
    let rows = fixture_rows();
    let query = RangeQuery::new("cost", 2.0);

    let (bottom, top) = expect_values(range_bounds(&rows, Some(1), Some(4), &query));
    assert_relative_eq!(bottom, 1.16 - 2.0);
    assert_relative_eq!(top, 4.11 + 2.0);
}

#[test]
fn zero_is_skipped_under_the_default_policy() {
    let rows = fixture_rows();

    // Rows 14..=16 carry cost values 8.0, 0.0, 9.0.
    let query = RangeQuery::new("cost", 1.0);
    let (bottom, top) = expect_values(range_bounds(&rows, Some(14), Some(16), &query));
    assert_relative_eq!(bottom, 7.0);
    assert_relative_eq!(top, 10.0);
}

#[test]
fn zero_participates_when_treated_as_value() {
    let rows = fixture_rows();

    let query = RangeQuery::new("cost", 1.0).with_policy(ZeroValuePolicy::TreatAsValue);
    let (bottom, top) = expect_values(range_bounds(&rows, Some(14), Some(16), &query));
    assert_relative_eq!(bottom, -1.0);
    assert_relative_eq!(top, 10.0);
}

#[test]
fn missing_field_returns_the_fallback_pair_unpadded() {
    let rows = fixture_rows();
    let query = RangeQuery::new("revenue", 2.0);

    let bounds = range_bounds(&rows, Some(1), Some(4), &query);
    assert!(matches!(bounds.0, AxisBound::Symbolic(_)));
    assert!(matches!(bounds.1, AxisBound::Symbolic(_)));
}

#[test]
fn inverted_range_returns_the_fallback_pair() {
    let rows = fixture_rows();
    let query = RangeQuery::new("cost", 2.0);

    let bounds = range_bounds(&rows, Some(9), Some(2), &query);
    assert!(matches!(bounds.0, AxisBound::Symbolic(_)));
}

#[test]
fn indices_past_the_end_clamp_to_the_row_count() {
    let rows = fixture_rows();
    let query = RangeQuery::new("cost", 0.0);

    let clamped = range_bounds(&rows, Some(17), Some(999), &query);
    let exact = range_bounds(&rows, Some(17), Some(20), &query);
    assert_eq!(clamped, exact);
}

#[test]
fn custom_fallback_pair_is_honored() {
    let query = RangeQuery::new("impression", 50.0).with_fallback(
        AxisBound::Symbolic(SymbolicBound::DataMin(-50)),
        AxisBound::Symbolic(SymbolicBound::DataMax(50)),
    );

    let bounds = range_bounds(&[], Some(1), Some(4), &query);
    assert_eq!(
        bounds,
        (
            AxisBound::Symbolic(SymbolicBound::DataMin(-50)),
            AxisBound::Symbolic(SymbolicBound::DataMax(50)),
        )
    );
}
