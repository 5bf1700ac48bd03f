use multiline_rs::api::compute_render_plan;
use multiline_rs::core::{ChartLayout, Margins, SeriesRow, SeriesTable, Viewport};

fn layout() -> ChartLayout {
    ChartLayout::new(Viewport::new(960, 500), Margins::default())
}

fn table_with_gaps() -> SeriesTable {
    SeriesTable::from_rows(
        vec![
            "Brazil".to_owned(),
            "China".to_owned(),
            "Atlantis".to_owned(),
        ],
        vec![
            SeriesRow::new(2000, vec![Some(42.5), Some(35.6), None]),
            SeriesRow::new(2001, vec![Some(50.0), None, None]),
            SeriesRow::new(2002, vec![Some(47.0), Some(31.0), None]),
        ],
    )
    .expect("valid table")
}

#[test]
fn legend_lists_every_column_even_when_nothing_is_drawable() {
    let table = table_with_gaps();
    let plan =
        compute_render_plan(&table, &table.default_visibility(), layout(), 8).expect("plan");

    let ids: Vec<&str> = plan.legend.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, vec!["Brazil", "China", "Atlantis"]);
    assert!(plan.legend.iter().all(|entry| entry.visible));

    // The all-missing series is listed but never planned for drawing.
    assert!(plan.series_by_id("Atlantis").is_none());
    assert_eq!(plan.series.len(), 2);
}

#[test]
fn hidden_series_are_absent_from_the_drawn_set_but_kept_in_the_legend() {
    let table = table_with_gaps();
    let visibility = table
        .default_visibility()
        .toggled("China")
        .expect("known id");

    let plan = compute_render_plan(&table, &visibility, layout(), 8).expect("plan");

    assert!(plan.series_by_id("China").is_none());
    let china = plan
        .legend
        .iter()
        .find(|entry| entry.id == "China")
        .expect("legend entry");
    assert!(!china.visible);
}

#[test]
fn missing_interior_samples_are_dropped_from_the_path() {
    let table = table_with_gaps();
    let plan =
        compute_render_plan(&table, &table.default_visibility(), layout(), 8).expect("plan");

    // China has samples in 2000 and 2002 only; its path still spans two
    // projected points with no placeholder in between.
    let china = plan.series_by_id("China").expect("china plan");
    assert_eq!(china.path.vertices().len(), 2);
}

#[test]
fn end_labels_anchor_at_the_last_drawn_sample() {
    let table = table_with_gaps();
    let plan =
        compute_render_plan(&table, &table.default_visibility(), layout(), 8).expect("plan");

    let brazil = plan.series_by_id("Brazil").expect("brazil plan");
    let end_label = brazil.end_label.as_ref().expect("end label");
    assert_eq!(end_label.text, "Brazil");

    let last = brazil.path.end().expect("path end");
    assert!((end_label.x - last.x).abs() <= 1e-9);
    assert!((end_label.y - last.y).abs() <= 1e-9);
}

#[test]
fn paths_stay_inside_the_vertical_plot_extent() {
    let table = table_with_gaps();
    let layout = layout();
    let plan = compute_render_plan(&table, &table.default_visibility(), layout, 8).expect("plan");

    // Sampled curve points are convex blends of the projected samples,
    // and the extreme samples land exactly on the plot edges.
    for series in &plan.series {
        for vertex in series.path.vertices() {
            assert!(vertex.y >= -1e-9);
            assert!(vertex.y <= layout.plot_height() + 1e-9);
        }
    }
}
