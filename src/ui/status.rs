//! Status-Bar am unteren Bildschirmrand.

use eframe::egui;

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Zeilen: {}", state.results.rows.len()));

            ui.separator();

            ui.label(format!("Aktive Bereiche: {}", state.animations.len()));

            ui.separator();

            if let Some(request) = &state.submission.in_flight {
                ui.label(format!(
                    "Anfrage läuft: x={} y={} listR={}",
                    request.x,
                    request.y,
                    request.list_r_param()
                ));
            } else if !state.submission.queue.is_empty() {
                ui.label(format!(
                    "Ausstehende Schritte: {}",
                    state.submission.queue.len()
                ));
            } else {
                ui.label("Bereit");
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
