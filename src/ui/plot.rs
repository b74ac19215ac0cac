use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::data::view::{self, AxisScale};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Cross-sectional scatterplot (upper half)
// ---------------------------------------------------------------------------

/// Render the scatterplot for the selected year and indicator pair.
pub fn scatter_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a Eurostat CSV to explore it  (File → Open…)");
            });
            return;
        }
    };
    let Some(year) = state.year else {
        return;
    };

    let series = view::cross_section(
        dataset,
        &state.x_indicator,
        &state.y_indicator,
        year,
        state.x_scale,
        state.y_scale,
    );

    Plot::new("cross_section")
        .legend(Legend::default())
        .height(height)
        .x_axis_label(axis_title(&series.x_title, series.x_scale))
        .y_axis_label(axis_title(&series.y_title, series.y_scale))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (x, y, region) in series.points() {
                let (Some(px), Some(py)) =
                    (scaled(x, series.x_scale), scaled(y, series.y_scale))
                else {
                    continue;
                };

                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(region))
                    .unwrap_or(Color32::LIGHT_BLUE);

                plot_ui.points(
                    Points::new(vec![[px, py]])
                        .name(region)
                        .color(color)
                        .radius(5.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Per-country time-series line chart (lower half)
// ---------------------------------------------------------------------------

/// Render the line chart for the selected country and indicator.
pub fn line_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let series = view::time_series(dataset, &state.country, &state.line_indicator);

    let color = state
        .color_map
        .as_ref()
        .map(|cm| cm.color_for(&series.region))
        .unwrap_or(Color32::LIGHT_BLUE);

    Plot::new("time_series")
        .legend(Legend::default())
        .height(height)
        .x_axis_label("Year")
        .y_axis_label(series.indicator.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = series
                .values()
                .map(|(year, v)| [f64::from(year), v])
                .collect();

            plot_ui.line(
                Line::new(points)
                    .name(&series.region)
                    .color(color)
                    .width(1.5),
            );
        });
}

// ---------------------------------------------------------------------------
// Axis-scale rendering
// ---------------------------------------------------------------------------

/// The Log hint renders as a log10 coordinate transform; non-positive
/// values cannot be placed on a log axis and are not drawn.
fn scaled(v: f64, scale: AxisScale) -> Option<f64> {
    match scale {
        AxisScale::Linear => Some(v),
        AxisScale::Log => (v > 0.0).then(|| v.log10()),
    }
}

fn axis_title(title: &str, scale: AxisScale) -> String {
    match scale {
        AxisScale::Linear => title.to_owned(),
        AxisScale::Log => format!("{title} (log10)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_scaling_drops_non_positive_values() {
        assert_eq!(scaled(100.0, AxisScale::Log), Some(2.0));
        assert_eq!(scaled(0.0, AxisScale::Log), None);
        assert_eq!(scaled(-5.0, AxisScale::Log), None);
        assert_eq!(scaled(-5.0, AxisScale::Linear), Some(-5.0));
    }

    #[test]
    fn axis_title_marks_log_axes() {
        assert_eq!(axis_title("GDP (EUR)", AxisScale::Linear), "GDP (EUR)");
        assert_eq!(axis_title("GDP (EUR)", AxisScale::Log), "GDP (EUR) (log10)");
    }
}
