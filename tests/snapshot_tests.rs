use multiline_rs::api::{ChartEngine, ChartEngineConfig};
use multiline_rs::core::{SeriesRow, Viewport};
use multiline_rs::render::NullRenderer;

fn engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(1160, 500));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .load_rows(
            vec!["Brazil".to_owned(), "China".to_owned()],
            vec![
                SeriesRow::new(2000, vec![Some(42.5), Some(35.6)]),
                SeriesRow::new(2001, vec![Some(50.0), Some(30.0)]),
            ],
        )
        .expect("load rows");
    engine
}

#[test]
fn plan_snapshot_exposes_scales_series_and_legend() {
    let mut engine = engine();
    let json = engine.render_plan_json().expect("snapshot");
    let value: serde_json::Value = serde_json::from_str(&json).expect("well-formed json");

    assert!(value.get("time_scale").is_some());
    assert!(value.get("value_scale").is_some());
    assert_eq!(value["series"].as_array().expect("series array").len(), 2);
    assert_eq!(value["legend"].as_array().expect("legend array").len(), 2);
    assert_eq!(value["series"][0]["id"], "Brazil");
}

#[test]
fn snapshot_is_stable_across_repeated_calls() {
    let mut engine = engine();
    let first = engine.render_plan_json().expect("snapshot");
    let second = engine.render_plan_json().expect("snapshot");
    assert_eq!(first, second);
}

#[test]
fn snapshot_reflects_toggle_state() {
    let mut engine = engine();
    engine.toggle_series("China").expect("known id");

    let json = engine.render_plan_json().expect("snapshot");
    let value: serde_json::Value = serde_json::from_str(&json).expect("well-formed json");

    assert_eq!(value["series"].as_array().expect("series array").len(), 1);
    let legend = value["legend"].as_array().expect("legend array");
    assert_eq!(legend.len(), 2);
    assert_eq!(legend[1]["visible"], false);
}
