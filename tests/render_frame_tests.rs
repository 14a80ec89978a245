use car_scenes::api::{HORSEPOWER_AXIS_TITLE, MPG_AXIS_TITLE, SceneChart, SceneChartConfig};
use car_scenes::core::{CarRecord, Dataset, Viewport};
use car_scenes::render::{NullRenderer, SvgRenderer, TextRole};

fn dataset() -> Dataset {
    Dataset::from_records([
        CarRecord::new("A", 100.0, 35.0),
        CarRecord::new("B", 200.0, 20.0),
        CarRecord::new("C & D", 150.0, 25.0),
    ])
}

#[test]
fn rerendering_same_scene_is_idempotent() {
    let config = SceneChartConfig::new(Viewport::new(800, 600));
    let mut chart = SceneChart::new(NullRenderer::default(), config, dataset()).expect("chart");
    let first = chart.frame().clone();

    chart.render().expect("render");
    chart.render().expect("render");

    assert_eq!(chart.frame(), &first);
    assert_eq!(chart.renderer().last_circle_count, 3);
    assert_eq!(chart.renderer().render_count, 3);
    assert_eq!(chart.renderer().last_frame.as_ref(), Some(&first));
}

#[test]
fn every_scene_draws_axes_and_titles() {
    let config = SceneChartConfig::new(Viewport::new(800, 600));
    let mut chart = SceneChart::new(NullRenderer::default(), config, dataset()).expect("chart");
    for _ in 0..3 {
        let titles: Vec<_> = chart
            .frame()
            .texts_with_role(TextRole::AxisTitle)
            .map(|text| text.text.clone())
            .collect();
        assert_eq!(titles, [HORSEPOWER_AXIS_TITLE, MPG_AXIS_TITLE]);
        assert!(chart.frame().texts_with_role(TextRole::TickLabel).count() >= 4);
        chart.advance_scene().expect("advance");
    }
}

#[test]
fn custom_marker_radius_is_applied() {
    let config = SceneChartConfig::new(Viewport::new(800, 600)).with_marker_radius(3.0);
    let chart = SceneChart::new(NullRenderer::default(), config, dataset()).expect("chart");
    assert!(chart.frame().circles.iter().all(|marker| marker.radius == 3.0));
}

#[test]
fn svg_output_reflects_scene_colors() {
    let config = SceneChartConfig::new(Viewport::new(800, 600));
    let mut chart = SceneChart::new(SvgRenderer::new(), config, dataset()).expect("chart");
    assert_eq!(chart.renderer().document().matches("fill=\"#4682b4\"").count(), 3);

    chart.advance_scene().expect("advance");
    let doc = chart.renderer().document();
    assert_eq!(doc.matches("<circle").count(), 1);
    assert!(doc.contains("fill=\"#ffa500\""));
    assert!(!doc.contains("fill=\"#4682b4\""));

    chart.advance_scene().expect("advance");
    let doc = chart.renderer().document();
    assert_eq!(doc.matches("fill=\"#008000\"").count(), 1);
    assert!(doc.contains("Cars with Horsepower &gt; 150"));
}
