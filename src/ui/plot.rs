use eframe::egui::{Color32, ScrollArea, Stroke, Ui};
use egui_plot::{
    uniform_grid_spacer, BoxElem, BoxPlot, BoxSpread, Corner, Legend, Line, MarkerShape, Plot,
    PlotPoints, Points,
};

use crate::chart::scatter::POINT_RADIUS;
use crate::chart::{BoxChart, ChartLayout, ScatterChart};
use crate::color::{category_color, tint};
use crate::state::AppState;

const MEDIAN_COLOR: Color32 = Color32::RED;
const MEDIAN_WIDTH: f32 = 2.0;

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render both charts, scatter plot first. Draws nothing when the charts
/// could not be built.
pub fn charts(ui: &mut Ui, state: &AppState) {
    let charts = match &state.charts {
        Some(c) => c,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                if state.status_message.is_some() {
                    ui.heading("Nothing to draw, see the error above");
                } else {
                    ui.heading("Open a dataset to view charts  (File → Open…)");
                }
            });
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            with_margins(ui, &charts.scatter.layout, |ui| {
                scatter_plot(ui, &charts.scatter)
            });
            with_margins(ui, &charts.boxes.layout, |ui| box_plot(ui, &charts.boxes));
        });
}

fn with_margins(ui: &mut Ui, layout: &ChartLayout, add_contents: impl FnOnce(&mut Ui)) {
    ui.add_space(layout.margin.top);
    ui.horizontal(|ui: &mut Ui| {
        ui.add_space(layout.margin.left);
        add_contents(ui);
        ui.add_space(layout.margin.right);
    });
    ui.add_space(layout.margin.bottom);
}

// ---------------------------------------------------------------------------
// Scatter plot
// ---------------------------------------------------------------------------

fn scatter_plot(ui: &mut Ui, chart: &ScatterChart) {
    Plot::new("scatter_plot")
        .width(chart.layout.inner_width())
        .height(chart.layout.inner_height())
        .legend(Legend::default().position(Corner::RightTop))
        .x_axis_label(chart.x_label)
        .y_axis_label(chart.y_label)
        .include_x(chart.x_domain.min)
        .include_x(chart.x_domain.max)
        .include_y(chart.y_domain.min)
        .include_y(chart.y_domain.max)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points = Points::new(PlotPoints::from(series.points.clone()))
                    .name(&series.label)
                    .color(series.color)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(POINT_RADIUS);

                plot_ui.points(points);
            }
        });
}

// ---------------------------------------------------------------------------
// Box plot
// ---------------------------------------------------------------------------

fn box_plot(ui: &mut Ui, chart: &BoxChart) {
    let bands = chart.bands.clone();
    let x_domain = bands.domain();
    let bandwidth = bands.bandwidth();

    Plot::new("box_plot")
        .width(chart.layout.inner_width())
        .height(chart.layout.inner_height())
        .x_axis_label(chart.x_label)
        .y_axis_label(chart.y_label)
        .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
        .x_axis_formatter(move |mark, _range| {
            bands.label_at(mark.value).unwrap_or_default().to_string()
        })
        .include_x(x_domain.min)
        .include_x(x_domain.max)
        .include_y(chart.y_domain.min)
        .include_y(chart.y_domain.max)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            // Whisker min..max, box Q1..Q3.
            let elems: Vec<BoxElem> = chart
                .boxes
                .iter()
                .enumerate()
                .map(|(i, b)| {
                    let s = &b.summary;
                    BoxElem::new(b.position, BoxSpread::new(s.min, s.q1, s.median, s.q3, s.max))
                        .name(&b.label)
                        .box_width(bandwidth)
                        .whisker_width(0.0)
                        .fill(tint(category_color(i), 0.3))
                        .stroke(Stroke::new(1.0, Color32::BLACK))
                })
                .collect();
            plot_ui.box_plot(BoxPlot::new(elems).name(chart.y_label));

            // Median drawn on top, across the full band.
            for b in &chart.boxes {
                let m = b.summary.median;
                let half = bandwidth / 2.0;
                let median = Line::new(PlotPoints::from(vec![
                    [b.position - half, m],
                    [b.position + half, m],
                ]))
                .color(MEDIAN_COLOR)
                .width(MEDIAN_WIDTH);

                plot_ui.line(median);
            }
        });
}
