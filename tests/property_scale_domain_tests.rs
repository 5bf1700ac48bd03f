use multiline_rs::api::compute_render_plan;
use multiline_rs::core::{ChartLayout, Margins, SeriesRow, SeriesTable, Viewport, VisibilitySet};
use proptest::prelude::*;

const COLUMNS: [&str; 3] = ["Brazil", "China", "India"];

fn layout() -> ChartLayout {
    ChartLayout::new(Viewport::new(1160, 500), Margins::default())
}

fn table_from(values: &[Vec<f64>]) -> SeriesTable {
    let rows = values
        .iter()
        .enumerate()
        .map(|(index, row)| {
            SeriesRow::new(2000 + index as i32, row.iter().map(|v| Some(*v)).collect())
        })
        .collect();
    SeriesTable::from_rows(COLUMNS.iter().map(|c| (*c).to_owned()).collect(), rows)
        .expect("valid table")
}

proptest! {
    #[test]
    fn value_domain_is_exactly_the_visible_subset_extent(
        values in proptest::collection::vec(
            proptest::collection::vec(-1_000.0f64..1_000.0, 3),
            2..16
        ),
        mask in proptest::collection::vec(any::<bool>(), 3)
    ) {
        let table = table_from(&values);
        let mut visibility = VisibilitySet::all_visible(COLUMNS);
        for (column, visible) in COLUMNS.iter().zip(&mask) {
            visibility.set(column, *visible).expect("known id");
        }

        let plan = compute_render_plan(&table, &visibility, layout(), 8).expect("plan");

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in &values {
            for (value, visible) in row.iter().zip(&mask) {
                if *visible {
                    min = min.min(*value);
                    max = max.max(*value);
                }
            }
        }

        if mask.iter().any(|visible| *visible) {
            let domain = plan.value_scale.expect("visible values").domain();
            if min == max {
                prop_assert!(domain.0 < min && max < domain.1);
            } else {
                prop_assert_eq!(domain, (min, max));
            }
        } else {
            prop_assert!(plan.is_degenerate());
            prop_assert!(plan.series.is_empty());
        }
    }

    #[test]
    fn time_domain_is_invariant_under_any_mask(
        values in proptest::collection::vec(
            proptest::collection::vec(-1_000.0f64..1_000.0, 3),
            2..16
        ),
        mask in proptest::collection::vec(any::<bool>(), 3)
    ) {
        let table = table_from(&values);

        let full = VisibilitySet::all_visible(COLUMNS);
        let mut masked = full.clone();
        for (column, visible) in COLUMNS.iter().zip(&mask) {
            masked.set(column, *visible).expect("known id");
        }

        let plan_full = compute_render_plan(&table, &full, layout(), 8).expect("plan");
        let plan_masked = compute_render_plan(&table, &masked, layout(), 8).expect("plan");

        prop_assert_eq!(
            plan_full.time_scale.domain(),
            plan_masked.time_scale.domain()
        );
    }

    #[test]
    fn colors_never_depend_on_the_mask(
        mask in proptest::collection::vec(any::<bool>(), 3)
    ) {
        let values = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let table = table_from(&values);

        let full = VisibilitySet::all_visible(COLUMNS);
        let mut masked = full.clone();
        for (column, visible) in COLUMNS.iter().zip(&mask) {
            masked.set(column, *visible).expect("known id");
        }

        let plan_full = compute_render_plan(&table, &full, layout(), 8).expect("plan");
        let plan_masked = compute_render_plan(&table, &masked, layout(), 8).expect("plan");

        for (before, after) in plan_full.legend.iter().zip(&plan_masked.legend) {
            prop_assert_eq!(&before.id, &after.id);
            prop_assert_eq!(before.color, after.color);
        }

        for series in &plan_masked.series {
            let legend = plan_full
                .legend
                .iter()
                .find(|entry| entry.id == series.id)
                .expect("legend entry");
            prop_assert_eq!(series.color, legend.color);
        }
    }
}
