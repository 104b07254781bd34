use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::INDUSTRY_COLUMN;
use crate::state::{AppState, Event};

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Filtered company table (every column of the source file)
// ---------------------------------------------------------------------------

/// Render the filtered companies. Clicking a row selects that company.
pub fn filtered_table(ui: &mut Ui, state: &mut AppState, max_height: f32) {
    let Some(view) = state.view() else {
        return;
    };
    if view.is_empty() {
        ui.label(RichText::new("No companies match the current filters.").italics());
        return;
    }

    let headers = view.table.headers();
    let industry_col = headers.iter().position(|h| h == INDUSTRY_COLUMN);
    let selected = state.selected_name.as_deref();
    let mut clicked = None;

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .sense(egui::Sense::click())
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(60.0).clip(true), headers.len())
            .max_scroll_height(max_height)
            .header(ROW_HEIGHT, |mut header| {
                for name in headers {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, view.len(), |mut row| {
                    let record = &view.table.records[view.indices[row.index()]];
                    row.set_selected(selected == Some(record.name.as_str()));
                    for col in 0..headers.len() {
                        row.col(|ui| {
                            let text = RichText::new(record.cell(col));
                            if Some(col) == industry_col {
                                ui.label(text.color(state.color_map.color_for(&record.industry)));
                            } else {
                                ui.label(text);
                            }
                        });
                    }
                    if row.response().clicked() {
                        clicked = Some(record.name.clone());
                    }
                });
            });
    });

    if let Some(name) = clicked {
        state.handle(Event::EntitySelected(name));
    }
}
