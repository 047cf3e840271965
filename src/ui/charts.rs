use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::data::model::{Metric, SeriesPoint};
use crate::state::AppState;
use crate::ui::panels::capitalize;

// ---------------------------------------------------------------------------
// Metric charts (central panel)
// ---------------------------------------------------------------------------

/// Render one interactive line chart per configured metric for the selected
/// industry, or a warning when the industry has no matching data.
pub fn metric_charts(ui: &mut Ui, state: &AppState) {
    let industry = match &state.selected_industry {
        Some(name) => name,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Select an industry in the sidebar");
            });
            return;
        }
    };

    let Some(series) = &state.series else {
        // Load failure: the error itself is shown in the top bar.
        return;
    };

    ui.heading(format!("Data for {} Industry", capitalize(industry)));

    if series.is_empty() {
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!(
                "No data available for the {} industry.",
                capitalize(industry)
            ))
            .color(Color32::YELLOW),
        );
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for &metric in &state.config.metrics {
                let points: Vec<SeriesPoint> = series.metric_points(metric).copied().collect();
                if points.is_empty() {
                    continue;
                }
                ui.add_space(4.0);
                ui.strong(format!("Change in {} Over Years", metric.title()));
                metric_chart(ui, metric, &points, state.colors.color_for(metric));
                ui.separator();
            }
        });
}

/// One line chart: Year on x, Value on y, a marker per sample, and a hover
/// tooltip showing Year, Value and YoY change.
fn metric_chart(ui: &mut Ui, metric: Metric, points: &[SeriesPoint], color: Color32) {
    let coords: Vec<[f64; 2]> = points
        .iter()
        .map(|p| [f64::from(p.year), p.value])
        .collect();

    // Tooltip data, looked up by the hovered point's year.
    let tooltip_points = points.to_vec();
    let formatter = move |_name: &str, value: &egui_plot::PlotPoint| {
        let year = value.x.round() as i32;
        let nearest = tooltip_points
            .iter()
            .min_by_key(|p| (p.year - year).abs())
            .copied();
        match nearest {
            Some(p) => format!(
                "Year: {}\nValue: {:.2}\nYear over Year Change: {}",
                p.year,
                p.value,
                match p.yoy_change {
                    Some(c) => format!("{c:.2}%"),
                    None => "n/a".to_string(),
                }
            ),
            None => String::new(),
        }
    };

    Plot::new(metric.column())
        .height(240.0)
        .x_axis_label("Year")
        .y_axis_label(metric.title())
        .label_formatter(formatter)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(coords.clone()))
                .name(metric.title())
                .color(color)
                .width(1.5);
            plot_ui.line(line);

            let markers = Points::new(PlotPoints::from(coords))
                .color(color)
                .radius(3.0);
            plot_ui.points(markers);
        });
}
