use eframe::egui::{self, RichText, Ui};

use crate::error::SelectionError;
use crate::state::{AppState, Event};
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Company insights: selector, detail block, return chart
// ---------------------------------------------------------------------------

pub fn company_insights(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Company Insights");

    let Some(view) = state.view() else {
        return;
    };

    let mut picked = None;
    let current = state.selected_name.clone().unwrap_or_default();
    ui.add_enabled_ui(!view.is_empty(), |ui: &mut Ui| {
        egui::ComboBox::from_label("Select a Company")
            .selected_text(&current)
            .show_ui(ui, |ui: &mut Ui| {
                for name in view.names() {
                    if ui.selectable_label(current == name, name).clicked() {
                        picked = Some(name.to_string());
                    }
                }
            });
    });
    if let Some(name) = picked {
        state.handle(Event::EntitySelected(name));
    }

    ui.add_space(6.0);

    match state.selected_record() {
        Ok(record) => {
            ui.label(RichText::new(&record.name).size(20.0).strong());
            egui::Grid::new("company_details")
                .num_columns(2)
                .spacing([24.0, 4.0])
                .show(ui, |ui: &mut Ui| {
                    ui.strong("Industry");
                    ui.label(
                        RichText::new(&record.industry)
                            .color(state.color_map.color_for(&record.industry)),
                    );
                    ui.end_row();
                    ui.strong("Current Price");
                    ui.label(record.current_price.to_string());
                    ui.end_row();
                    ui.strong("P/E Ratio");
                    ui.label(record.pe.to_string());
                    ui.end_row();
                    ui.strong("RoE %");
                    ui.label(record.roe.to_string());
                    ui.end_row();
                });
            ui.add_space(8.0);
            if let Ok(trend) = state.selected_trend() {
                plot::trend_plot(ui, &trend);
            }
        }
        Err(SelectionError::EmptySubset) => {
            ui.label(RichText::new("Adjust the filters to see company details.").italics());
        }
        Err(e) => {
            log::debug!("no company details: {e}");
            ui.label(RichText::new("Pick a company to see its details.").italics());
        }
    }
}
