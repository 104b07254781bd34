use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::export::export_view;
use crate::state::{AppState, Event};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Companies");
    ui.separator();

    let Some(table) = state.table.clone() else {
        ui.label("No watchlist loaded.");
        return;
    };

    // Widgets record events; state is updated once rendering is done.
    let mut events = Vec::new();
    let criteria = &state.criteria;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Industry multi-select ----
            let n_selected = criteria.industries.len();
            let n_total = table.industries.len();
            ui.strong(format!("Select Industry  ({n_selected}/{n_total})"));
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    events.push(Event::IndustriesSelectedAll);
                }
                if ui.small_button("Clear").clicked() {
                    events.push(Event::IndustriesCleared);
                }
            });
            if criteria.industries.is_empty() {
                ui.label(RichText::new("No industry selected: showing all").weak());
            }
            egui::CollapsingHeader::new("Industries")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    for industry in &table.industries {
                        let mut checked = criteria.industries.contains(industry);
                        let text =
                            RichText::new(industry).color(state.color_map.color_for(industry));
                        if ui.checkbox(&mut checked, text).changed() {
                            events.push(Event::IndustryToggled(industry.clone()));
                        }
                    }
                });
            ui.separator();

            // ---- P/E range (two sliders that cannot cross) ----
            let bounds = state.config.pe_bounds.clone();
            ui.strong("P/E Ratio Range");
            let (mut lo, mut hi) = (criteria.pe_min, criteria.pe_max);
            let lo_changed = ui
                .add(Slider::new(&mut lo, *bounds.start()..=hi).text("min").integer())
                .changed();
            let hi_changed = ui
                .add(Slider::new(&mut hi, lo..=*bounds.end()).text("max").integer())
                .changed();
            if lo_changed || hi_changed {
                events.push(Event::PeRangeChanged { min: lo, max: hi });
            }
            ui.separator();

            // ---- Minimum RoE ----
            ui.strong("Minimum RoE %");
            let mut roe = criteria.roe_min;
            if ui
                .add(Slider::new(&mut roe, state.config.roe_bounds.clone()).integer())
                .changed()
            {
                events.push(Event::MinRoeChanged(roe));
            }
        });

    for event in events {
        state.handle(event);
    }
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
            if ui.button("Reload").clicked() {
                if let Err(e) = state.reload() {
                    state.status_message = Some(format!("Error: {e}"));
                }
                ui.close_menu();
            }
            let can_export = state.view().is_some_and(|v| !v.is_empty());
            if ui
                .add_enabled(can_export, egui::Button::new("Export filtered…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} companies loaded, {} visible",
                table.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open watchlist")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        // The error is also kept in `state.load_error`, which blocks the
        // central panel until a load succeeds.
        if let Err(e) = state.load(&path) {
            log::warn!("could not open {}: {e}", path.display());
        }
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered companies")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .set_file_name("filtered.csv")
        .save_file();

    let (Some(path), Some(view)) = (file, state.view()) else {
        return;
    };
    let message = match export_view(&path, &view) {
        Ok(n) => format!("Exported {n} companies to {}", path.display()),
        Err(e) => {
            log::error!("Failed to export: {e:#}");
            format!("Error: {e:#}")
        }
    };
    state.status_message = Some(message);
}
