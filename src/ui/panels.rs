use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, GROUPING_COLUMNS};

/// Default export target when `JKE_EXPORT_FIGURE` is unset.
const DEFAULT_EXPORT_PATH: &str = "figure.json";

// ---------------------------------------------------------------------------
// Left side panel – figure settings
// ---------------------------------------------------------------------------

/// Render the left settings panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Settings");
    ui.separator();

    let mut changed = false;

    // ---- Category selector ----
    ui.strong("Subplot by");
    egui::ComboBox::from_id_salt("category")
        .selected_text(state.category.clone())
        .show_ui(ui, |ui: &mut Ui| {
            for col in GROUPING_COLUMNS {
                changed |= ui
                    .selectable_value(&mut state.category, col.to_string(), col)
                    .changed();
            }
        });

    // ---- Hue selector ("" = none) ----
    ui.strong("Color by");
    let hue_label = if state.hue.is_empty() { "none" } else { state.hue.as_str() };
    egui::ComboBox::from_id_salt("hue")
        .selected_text(hue_label.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            changed |= ui
                .selectable_value(&mut state.hue, String::new(), "none")
                .changed();
            for col in GROUPING_COLUMNS {
                changed |= ui
                    .selectable_value(&mut state.hue, col.to_string(), col)
                    .changed();
            }
        });
    ui.separator();

    // ---- Transforms ----
    ui.strong("Rolling mean window");
    changed |= ui
        .add(egui::Slider::new(&mut state.window, 1..=30).suffix(" days"))
        .changed();

    changed |= ui
        .checkbox(&mut state.interpolate, "Interpolate single-day gaps")
        .changed();

    ui.separator();
    ui.label(format!("{} flagged gaps", state.gaps.len()));
    if !state.uninterpolated.is_empty() {
        ui.label(
            RichText::new(format!("{} left unfilled", state.uninterpolated.len()))
                .color(Color32::YELLOW),
        );
    }

    if changed {
        state.rebuild();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export JSON").clicked() {
                export(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(fig) = &state.figure {
            ui.label(format!(
                "{} rows, {} sub-plots",
                state.table.len(),
                fig.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

fn export(state: &mut AppState) {
    let path = std::env::var("JKE_EXPORT_FIGURE").unwrap_or_else(|_| DEFAULT_EXPORT_PATH.to_string());
    match state.export_figure(&path) {
        Ok(()) => {
            log::info!("Exported figure to {path}");
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to export figure: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
