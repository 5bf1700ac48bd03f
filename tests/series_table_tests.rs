use multiline_rs::core::{SeriesRow, SeriesTable, VisibilitySet, year_to_unix_seconds};

fn brics_columns() -> Vec<String> {
    ["Brazil", "China", "India"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[test]
fn table_derives_one_series_per_column_in_header_order() {
    let table = SeriesTable::from_rows(
        brics_columns(),
        vec![
            SeriesRow::new(2000, vec![Some(42.5), Some(35.6), Some(16.5)]),
            SeriesRow::new(2001, vec![Some(50.0), Some(30.0), Some(17.0)]),
        ],
    )
    .expect("valid table");

    assert_eq!(table.columns(), &brics_columns()[..]);
    assert_eq!(table.series().len(), 3);
    assert_eq!(table.row_count(), 2);

    let brazil = table.series_by_id("Brazil").expect("brazil series");
    assert_eq!(brazil.points.len(), 2);
    assert_eq!(brazil.points[0].value, Some(42.5));
    assert_eq!(brazil.points[1].value, Some(50.0));
}

#[test]
fn rows_are_sorted_by_year_with_last_wins_dedup() {
    let table = SeriesTable::from_rows(
        vec!["Brazil".to_owned()],
        vec![
            SeriesRow::new(2002, vec![Some(3.0)]),
            SeriesRow::new(2000, vec![Some(1.0)]),
            SeriesRow::new(2002, vec![Some(4.0)]),
            SeriesRow::new(2001, vec![Some(2.0)]),
        ],
    )
    .expect("valid table");

    assert_eq!(table.row_count(), 3);
    let brazil = table.series_by_id("Brazil").expect("brazil series");
    let values: Vec<Option<f64>> = brazil.points.iter().map(|point| point.value).collect();
    assert_eq!(values, vec![Some(1.0), Some(2.0), Some(4.0)]);
}

#[test]
fn time_extent_spans_first_and_last_year() {
    let table = SeriesTable::from_rows(
        vec!["Brazil".to_owned()],
        vec![
            SeriesRow::new(2014, vec![Some(1.0)]),
            SeriesRow::new(2000, vec![Some(2.0)]),
        ],
    )
    .expect("valid table");

    let (start, end) = table.time_extent();
    assert_eq!(start, year_to_unix_seconds(2000).expect("year"));
    assert_eq!(end, year_to_unix_seconds(2014).expect("year"));
}

#[test]
fn value_extent_covers_visible_series_only() {
    let table = SeriesTable::from_rows(
        brics_columns(),
        vec![
            SeriesRow::new(2000, vec![Some(42.5), Some(35.6), Some(16.5)]),
            SeriesRow::new(2001, vec![Some(50.0), Some(30.0), Some(17.0)]),
        ],
    )
    .expect("valid table");

    let mut visibility = table.default_visibility();
    visibility.set("China", false).expect("known id");
    visibility.set("India", false).expect("known id");

    assert_eq!(table.value_extent(&visibility), Some((42.5, 50.0)));
}

#[test]
fn missing_samples_are_skipped_in_the_extent() {
    let table = SeriesTable::from_rows(
        vec!["Brazil".to_owned(), "China".to_owned()],
        vec![
            SeriesRow::new(2000, vec![Some(10.0), None]),
            SeriesRow::new(2001, vec![None, Some(99.0)]),
        ],
    )
    .expect("valid table");

    let mut visibility = table.default_visibility();
    visibility.set("China", false).expect("known id");

    assert_eq!(table.value_extent(&visibility), Some((10.0, 10.0)));
}

#[test]
fn all_missing_series_stays_listed_but_contributes_nothing() {
    let table = SeriesTable::from_rows(
        vec!["Brazil".to_owned(), "Atlantis".to_owned()],
        vec![
            SeriesRow::new(2000, vec![Some(10.0), None]),
            SeriesRow::new(2001, vec![Some(20.0), None]),
        ],
    )
    .expect("valid table");

    let atlantis = table.series_by_id("Atlantis").expect("listed series");
    assert!(!atlantis.has_values());

    let visibility = table.default_visibility();
    assert!(visibility.is_visible("Atlantis"));
    assert_eq!(table.value_extent(&visibility), Some((10.0, 20.0)));

    // Alone it yields no extent at all.
    let only_atlantis = VisibilitySet::all_visible(["Atlantis"]);
    assert_eq!(table.value_extent(&only_atlantis), None);
}

#[test]
fn malformed_input_is_rejected_as_a_whole() {
    assert!(SeriesTable::from_rows(vec![], vec![SeriesRow::new(2000, vec![])]).is_err());

    assert!(SeriesTable::from_rows(brics_columns(), vec![]).is_err());

    let duplicate = SeriesTable::from_rows(
        vec!["Brazil".to_owned(), "Brazil".to_owned()],
        vec![SeriesRow::new(2000, vec![Some(1.0), Some(2.0)])],
    );
    assert!(duplicate.is_err());

    let arity = SeriesTable::from_rows(
        brics_columns(),
        vec![SeriesRow::new(2000, vec![Some(1.0)])],
    );
    assert!(arity.is_err());

    let non_finite = SeriesTable::from_rows(
        vec!["Brazil".to_owned()],
        vec![SeriesRow::new(2000, vec![Some(f64::NAN)])],
    );
    assert!(non_finite.is_err());
}
