//! Running-total chart drawn on a `<canvas>` through [`CanvasSurface`].

use countdash_app::chart::LineChart;
use leptos::html::Canvas;
use leptos::prelude::*;

use crate::canvas::CanvasSurface;

const WIDTH: &str = "800";
const HEIGHT: &str = "400";

/// Canvas that redraws whenever `chart` changes.
#[component]
pub fn CountChart(#[prop(into)] chart: Signal<LineChart>) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        let chart = chart.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let drawn = CanvasSurface::new(canvas).and_then(|mut surface| chart.draw(&mut surface));
        if let Err(err) = drawn {
            leptos::logging::error!("Failed to draw chart: {err}");
        }
    });

    view! {
        <div class="chart-container">
            <canvas id="countChart" node_ref=canvas_ref width=WIDTH height=HEIGHT></canvas>
        </div>
    }
}
