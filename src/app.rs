use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{details, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
}

impl DashboardApp {
    /// Build the app and load the configured watchlist. A load failure is
    /// kept in the state and rendered as a blocking message.
    pub fn new(config: DashboardConfig) -> Self {
        let mut state = AppState::new(config);
        let path = state.config.data_path.clone();
        if let Err(e) = state.load(&path) {
            log::warn!("starting without a watchlist: {e}");
        }
        Self { state }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        if let Some(err) = self.state.load_error.clone() {
            egui::CentralPanel::default().show(ctx, |ui| {
                load_error_screen(ui, &mut self.state, &err);
            });
            return;
        }

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table, details, chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Stock Watchlist Dashboard");
            ui.separator();
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.strong("Filtered Company Data");
                    table::filtered_table(ui, &mut self.state, 300.0);
                    ui.separator();
                    details::company_insights(ui, &mut self.state);
                });
        });
    }
}

fn load_error_screen(ui: &mut Ui, state: &mut AppState, err: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.heading(RichText::new("Could not load the watchlist").color(Color32::RED));
        ui.label(err);
        ui.add_space(12.0);
        ui.horizontal(|ui: &mut Ui| {
            if ui.button("Retry").clicked() {
                if let Err(e) = state.reload() {
                    log::warn!("retry failed: {e}");
                }
            }
            if ui.button("Open another file…").clicked() {
                panels::open_file_dialog(state);
            }
        });
    });
}
