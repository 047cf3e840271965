use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::PipelineConfig;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – industry navigation
// ---------------------------------------------------------------------------

/// Render the industry picker. Single-select: clicking an entry runs the
/// whole pipeline for that industry.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Industry Navigation");
    ui.separator();

    if state.industries.is_empty() {
        ui.label("No industries found.");
        ui.label("File → Open data folder…");
        return;
    }

    let industries = state.industries.clone();
    let mut clicked: Option<String> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for industry in &industries {
                let is_selected = state.selected_industry.as_deref() == Some(industry);
                if ui
                    .selectable_label(is_selected, capitalize(industry))
                    .clicked()
                {
                    clicked = Some(industry.clone());
                }
            }
        });

    if let Some(industry) = clicked {
        state.select_industry(&industry);
    }
}

/// Capitalize the first letter for display, as directory names are lowercase.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Load config…").clicked() {
                open_config_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} industries under {}",
            state.industries.len(),
            state.config.root.display()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Select the industries data folder")
        .pick_folder();

    if let Some(path) = folder {
        state.set_root(path);
    }
}

pub fn open_config_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Load pipeline configuration")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match PipelineConfig::from_json_file(&path) {
            Ok(config) => state.set_config(config),
            Err(e) => {
                log::error!("Failed to load config: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("retail"), "Retail");
        assert_eq!(capitalize("oil and gas"), "Oil and gas");
        assert_eq!(capitalize(""), "");
    }
}
