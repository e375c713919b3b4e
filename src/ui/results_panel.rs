//! Ergebnis-Panel: Tabelle aller Prüfungen samt Diagnose-Zeilen.

use eframe::egui;

use crate::app::{AppIntent, AppState};
use crate::storage::RowOutcome;

/// Farbe für Treffer-Zellen.
const HIT_COLOR: egui::Color32 = egui::Color32::from_rgb(39, 174, 96);
/// Farbe für Fehlschlag-Zellen.
const MISS_COLOR: egui::Color32 = egui::Color32::from_rgb(231, 76, 60);

/// Rendert die Ergebnis-Tabelle und den Leeren-Button.
pub fn render_results_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("results_panel")
        .resizable(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Ergebnisse");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(
                            !state.results.rows.is_empty(),
                            egui::Button::new("Leeren"),
                        )
                        .clicked()
                    {
                        events.push(AppIntent::ClearRequested);
                    }
                });
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    egui::Grid::new("results_grid")
                        .striped(true)
                        .num_columns(6)
                        .min_col_width(36.0)
                        .show(ui, |ui| {
                            ui.strong("X");
                            ui.strong("Y");
                            ui.strong("R");
                            ui.strong("Ergebnis");
                            ui.strong("Zeit");
                            ui.strong("Dauer");
                            ui.end_row();

                            for row in &state.results.rows {
                                ui.label(format!("{}", row.x));
                                ui.label(format!("{}", row.y));
                                ui.label(&row.r);
                                match &row.outcome {
                                    RowOutcome::Hit => {
                                        ui.colored_label(HIT_COLOR, "Treffer");
                                    }
                                    RowOutcome::Miss => {
                                        ui.colored_label(MISS_COLOR, "Kein Treffer");
                                    }
                                    RowOutcome::Diagnostic(message) => {
                                        ui.colored_label(MISS_COLOR, message);
                                    }
                                }
                                ui.label(&row.time);
                                ui.label(&row.exec_time);
                                ui.end_row();
                            }
                        });

                    if state.results.rows.is_empty() {
                        ui.add_space(12.0);
                        ui.weak("Noch keine Prüfungen");
                    }
                });
        });

    events
}
