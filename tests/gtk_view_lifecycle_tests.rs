#![cfg(feature = "gtk4-adapter")]

use std::rc::Rc;
use std::time::{Duration, Instant};

use car_scenes::api::{SceneChart, SceneChartConfig};
use car_scenes::core::{CarRecord, Dataset, Viewport};
use car_scenes::platform_gtk::GtkSceneView;
use car_scenes::render::CairoRenderer;

#[test]
fn dropping_view_releases_chart_and_stops_tooltip_timer() {
    // Needs a display; headless runners skip.
    if gtk4::init().is_err() {
        return;
    }

    let dataset = Dataset::from_records([CarRecord::new("A", 100.0, 35.0)]);
    let chart = SceneChart::new(
        CairoRenderer::new(800, 600).expect("cairo renderer"),
        SceneChartConfig::new(Viewport::new(800, 600)),
        dataset,
    )
    .expect("chart init");

    let view = GtkSceneView::new(chart);
    let shared = view.chart();
    assert!(Rc::strong_count(&shared) > 2);

    drop(view);
    let context = gtk4::glib::MainContext::default();
    let deadline = Instant::now() + Duration::from_secs(1);
    while Rc::strong_count(&shared) > 1 && Instant::now() < deadline {
        context.iteration(false);
        std::thread::sleep(Duration::from_millis(5));
    }

    assert_eq!(Rc::strong_count(&shared), 1);
}
