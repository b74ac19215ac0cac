use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::view::AxisScale;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the selection panel: scatterplot controls on top, line-chart
/// controls below. Option order is the dataset's lookup-list order.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Selections");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the option lists so we can mutate state inside the widgets.
    let indicators = dataset.indicators.clone();
    let regions = dataset.regions.clone();
    let years = dataset.years.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Cross-section");

            ui.label("X indicator");
            option_combo(ui, "x_indicator", &indicators, &mut state.x_indicator);
            scale_radio(ui, "x_scale", &mut state.x_scale);
            ui.add_space(4.0);

            ui.label("Y indicator");
            option_combo(ui, "y_indicator", &indicators, &mut state.y_indicator);
            scale_radio(ui, "y_scale", &mut state.y_scale);
            ui.add_space(4.0);

            year_slider(ui, &years, &mut state.year);

            ui.separator();
            ui.strong("Time series");

            ui.label("Country");
            option_combo(ui, "country", &regions, &mut state.country);
            ui.add_space(4.0);

            ui.label("Indicator");
            option_combo(ui, "line_indicator", &indicators, &mut state.line_indicator);
        });
}

/// Dropdown over a pre-computed option list.
fn option_combo(ui: &mut Ui, id: &str, options: &[String], selected: &mut String) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.clone())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for opt in options {
                if ui.selectable_label(*selected == *opt, opt).clicked() {
                    *selected = opt.clone();
                }
            }
        });
}

fn scale_radio(ui: &mut Ui, id: &str, scale: &mut AxisScale) {
    ui.push_id(id, |ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            for option in [AxisScale::Linear, AxisScale::Log] {
                ui.radio_value(scale, option, option.label());
            }
        });
    });
}

/// Slider over list positions, so only years actually present in the
/// dataset can be selected.
fn year_slider(ui: &mut Ui, years: &[i32], selected: &mut Option<i32>) {
    if years.is_empty() {
        return;
    }
    let last = years.len() - 1;
    let mut idx = selected
        .and_then(|y| years.iter().position(|&v| v == y))
        .unwrap_or(last);

    ui.label("Year");
    ui.add(
        egui::Slider::new(&mut idx, 0..=last)
            .custom_formatter(|v, _| years[(v as usize).min(last)].to_string()),
    );
    *selected = Some(years[idx]);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} observations, {} countries, {} indicators",
                ds.len(),
                ds.regions.len(),
                ds.indicators.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// A failed load keeps the current dataset and reports in the status label.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open Eurostat extract")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!(
                    "loaded {} observations, {} countries from {}",
                    dataset.len(),
                    dataset.regions.len(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
                state.loading = false;
            }
        }
    }
}
