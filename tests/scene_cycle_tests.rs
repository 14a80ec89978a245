use car_scenes::api::{SceneChart, SceneChartConfig};
use car_scenes::core::{CarRecord, Dataset, Viewport};
use car_scenes::render::{Color, NullRenderer};
use car_scenes::scene::SceneKind;
use car_scenes::ChartError;

fn two_car_dataset() -> Dataset {
    Dataset::from_json_str(
        r#"[
            {"Name": "A", "Horsepower": 100, "Miles_per_Gallon": 35},
            {"Name": "B", "Horsepower": 200, "Miles_per_Gallon": 20}
        ]"#,
    )
    .expect("dataset")
}

fn build_chart(dataset: Dataset) -> SceneChart<NullRenderer> {
    let config = SceneChartConfig::new(Viewport::new(800, 600));
    SceneChart::new(NullRenderer::default(), config, dataset).expect("chart init")
}

fn marker_names(chart: &SceneChart<NullRenderer>) -> Vec<String> {
    chart
        .frame()
        .circles
        .iter()
        .map(|marker| chart.dataset().records()[marker.record_index].name.clone())
        .collect()
}

#[test]
fn initial_render_shows_all_scene_once() {
    let chart = build_chart(two_car_dataset());
    assert_eq!(chart.current_scene_index(), 0);
    assert_eq!(chart.current_scene().kind, SceneKind::All);
    assert_eq!(chart.renderer().render_count, 1);
    assert_eq!(chart.renderer().last_circle_count, 2);
}

#[test]
fn two_car_scenario_walks_every_scene_and_wraps() {
    let mut chart = build_chart(two_car_dataset());

    assert_eq!(marker_names(&chart), ["A", "B"]);
    assert!(chart.frame().circles.iter().all(|m| m.fill_color == Color::STEELBLUE));

    assert_eq!(chart.advance_scene().expect("advance"), 1);
    assert_eq!(chart.current_scene().kind, SceneKind::HighMpg);
    assert_eq!(marker_names(&chart), ["A"]);
    assert_eq!(chart.frame().circles[0].fill_color, Color::ORANGE);

    assert_eq!(chart.advance_scene().expect("advance"), 2);
    assert_eq!(chart.current_scene().kind, SceneKind::HighHp);
    assert_eq!(marker_names(&chart), ["B"]);
    assert_eq!(chart.frame().circles[0].fill_color, Color::GREEN);

    assert_eq!(chart.advance_scene().expect("advance"), 0);
    assert_eq!(chart.current_scene().kind, SceneKind::All);
    assert_eq!(chart.renderer().last_circle_count, 2);
}

#[test]
fn three_advances_restore_the_original_frame() {
    let mut chart = build_chart(two_car_dataset());
    let initial = chart.frame().clone();
    for _ in 0..3 {
        chart.advance_scene().expect("advance");
    }
    assert_eq!(chart.frame(), &initial);
}

#[test]
fn advance_reuses_existing_scales() {
    let mut chart = build_chart(two_car_dataset());
    let scales = chart.scales();
    chart.advance_scene().expect("advance");
    chart.advance_scene().expect("advance");
    assert_eq!(chart.scales(), scales);
}

#[test]
fn scene_change_never_superimposes_markers() {
    let mut chart = build_chart(two_car_dataset());
    chart.advance_scene().expect("advance");
    let colors: Vec<_> = chart.frame().circles.iter().map(|m| m.fill_color).collect();
    assert_eq!(colors, [Color::ORANGE]);
}

#[test]
fn set_scene_jumps_and_rejects_out_of_range() {
    let mut chart = build_chart(two_car_dataset());
    chart.set_scene(2).expect("set scene");
    assert_eq!(chart.current_scene().kind, SceneKind::HighHp);

    let err = chart.set_scene(3).expect_err("out of range");
    assert!(matches!(err, ChartError::SceneOutOfRange { index: 3, count: 3 }));
    assert_eq!(chart.current_scene_index(), 2);
}

#[test]
fn empty_scene_renders_axes_and_annotations_only() {
    let dataset = Dataset::from_records([CarRecord::new("slow", 90.0, 18.0)]);
    let mut chart = build_chart(dataset);
    chart.advance_scene().expect("advance");

    assert!(chart.frame().circles.is_empty());
    assert!(!chart.frame().lines.is_empty());
    assert_eq!(chart.snapshot().annotations.len(), 1);
}

#[test]
fn empty_dataset_is_not_an_error() {
    let mut chart = build_chart(Dataset::default());
    assert!(chart.frame().circles.is_empty());
    assert!(chart.scales().x.is_degenerate());
    chart.advance_scene().expect("advance");
    assert_eq!(chart.snapshot().annotations.len(), 1);
}
