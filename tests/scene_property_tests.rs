use car_scenes::api::{SceneChart, SceneChartConfig};
use car_scenes::core::{CarRecord, Dataset, Viewport};
use car_scenes::render::NullRenderer;
use car_scenes::scene::{SCENE_COUNT, SceneCatalog};
use proptest::prelude::*;

fn records_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((1.0f64..250.0, 5.0f64..50.0), 1..40)
}

fn build_chart(records: &[(f64, f64)]) -> SceneChart<NullRenderer> {
    let dataset = Dataset::from_records(
        records
            .iter()
            .enumerate()
            .map(|(index, (hp, mpg))| CarRecord::new(format!("car-{index}"), *hp, *mpg)),
    );
    let config = SceneChartConfig::new(Viewport::new(900, 700));
    SceneChart::new(NullRenderer::default(), config, dataset).expect("chart init")
}

proptest! {
    #[test]
    fn wrapped_lookup_is_total_and_deterministic(index in 0usize..100_000) {
        let catalog = SceneCatalog::standard();
        let scene = catalog.scene(index % SCENE_COUNT).expect("wrapped index in range");
        prop_assert_eq!(scene.index, index % SCENE_COUNT);
        prop_assert_eq!(catalog.scene_wrapping(index).kind, scene.kind);
    }

    #[test]
    fn high_mpg_scene_renders_exactly_records_above_thirty(records in records_strategy()) {
        let mut chart = build_chart(&records);
        chart.advance_scene().expect("advance");

        let rendered: Vec<usize> = chart.frame().circles.iter().map(|m| m.record_index).collect();
        let expected: Vec<usize> = chart
            .dataset()
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| record.miles_per_gallon > 30.0)
            .map(|(index, _)| index)
            .collect();
        prop_assert_eq!(rendered, expected);
    }

    #[test]
    fn high_hp_scene_renders_only_records_above_one_fifty(records in records_strategy()) {
        let mut chart = build_chart(&records);
        chart.set_scene(2).expect("high hp");

        for marker in &chart.frame().circles {
            let record = &chart.dataset().records()[marker.record_index];
            prop_assert!(record.horsepower > 150.0);
        }
        let expected = chart
            .dataset()
            .records()
            .iter()
            .filter(|record| record.horsepower > 150.0)
            .count();
        prop_assert_eq!(chart.frame().circles.len(), expected);
    }

    #[test]
    fn markers_stay_inside_plot_area(records in records_strategy()) {
        let chart = build_chart(&records);
        let state = chart.viewport_state();
        for marker in &chart.frame().circles {
            prop_assert!(marker.cx >= state.plot_left() - 1e-9);
            prop_assert!(marker.cx <= state.plot_right() + 1e-9);
            prop_assert!(marker.cy >= state.plot_top() - 1e-9);
            prop_assert!(marker.cy <= state.plot_bottom() + 1e-9);
        }
    }
}
