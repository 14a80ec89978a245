//! GTK4 host surface: a drawing area for the chart plus a "Next" button.
//!
//! Every GTK signal maps onto one chart handler; the chart value itself is
//! the only state shared between them.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::SceneChart;
use crate::core::Viewport;
use crate::render::{CairoContextRenderer, Renderer};

const TOOLTIP_TICK_MS: u64 = 16;

pub type SharedChart<R> = Rc<RefCell<SceneChart<R>>>;

pub struct GtkSceneView<R: Renderer + CairoContextRenderer + 'static> {
    root: gtk::Box,
    drawing_area: gtk::DrawingArea,
    next_button: gtk::Button,
    chart: SharedChart<R>,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkSceneView<R> {
    #[must_use]
    pub fn new(chart: SceneChart<R>) -> Self {
        let chart = Rc::new(RefCell::new(chart));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        drawing_area.set_draw_func({
            let chart = Rc::clone(&chart);
            move |_widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut chart) = chart.try_borrow_mut() else {
                    return;
                };
                let viewport = Viewport::new(width as u32, height as u32);
                if chart.viewport_state().viewport != viewport {
                    if let Err(err) = chart.resize(viewport) {
                        warn!(error = %err, "gtk resize ignored");
                    }
                }
                if let Err(err) = chart.render_on_cairo_context(context) {
                    warn!(error = %err, "gtk draw failed");
                }
            }
        });

        let motion = gtk::EventControllerMotion::new();
        {
            let chart = Rc::clone(&chart);
            let drawing_area = drawing_area.downgrade();
            motion.connect_motion(move |_, x, y| {
                if let Ok(mut chart) = chart.try_borrow_mut() {
                    if let Err(err) = chart.pointer_move(x, y) {
                        warn!(error = %err, "pointer move failed");
                    }
                }
                if let Some(drawing_area) = drawing_area.upgrade() {
                    drawing_area.queue_draw();
                }
            });
        }
        {
            let chart = Rc::clone(&chart);
            let drawing_area = drawing_area.downgrade();
            motion.connect_leave(move |_| {
                if let Ok(mut chart) = chart.try_borrow_mut() {
                    if let Err(err) = chart.pointer_leave() {
                        warn!(error = %err, "pointer leave failed");
                    }
                }
                if let Some(drawing_area) = drawing_area.upgrade() {
                    drawing_area.queue_draw();
                }
            });
        }
        drawing_area.add_controller(motion);

        let next_button = gtk::Button::with_label("Next");
        {
            let chart = Rc::clone(&chart);
            let drawing_area = drawing_area.downgrade();
            next_button.connect_clicked(move |_| {
                if let Ok(mut chart) = chart.try_borrow_mut() {
                    if let Err(err) = chart.advance_scene() {
                        warn!(error = %err, "advance scene failed");
                    }
                }
                if let Some(drawing_area) = drawing_area.upgrade() {
                    drawing_area.queue_draw();
                }
            });
        }

        {
            let chart = Rc::clone(&chart);
            // Weak so the timer stops once the view is dropped.
            let drawing_area = drawing_area.downgrade();
            gtk::glib::timeout_add_local(Duration::from_millis(TOOLTIP_TICK_MS), move || {
                let Some(drawing_area) = drawing_area.upgrade() else {
                    return gtk::glib::ControlFlow::Break;
                };
                if let Ok(mut chart) = chart.try_borrow_mut() {
                    if chart.tooltip_state().is_fading() {
                        if let Err(err) = chart.step_tooltip(TOOLTIP_TICK_MS as f64) {
                            warn!(error = %err, "tooltip step failed");
                        }
                        drawing_area.queue_draw();
                    }
                }
                gtk::glib::ControlFlow::Continue
            });
        }

        let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
        root.append(&next_button);
        root.append(&drawing_area);

        Self {
            root,
            drawing_area,
            next_button,
            chart,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn next_button(&self) -> &gtk::Button {
        &self.next_button
    }

    #[must_use]
    pub fn chart(&self) -> SharedChart<R> {
        Rc::clone(&self.chart)
    }
}
