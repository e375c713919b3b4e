//! Formular-Panel: Punkt-Koordinaten und Radius-Auswahl.

use eframe::egui;

use crate::app::{AppIntent, AppState};
use crate::core::region::{CoordinateX, Radius, Y_MAX, Y_MIN};

/// Rendert das Formular-Panel und sammelt die Eingabe-Intents.
pub fn render_form_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("form_panel")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("Punkt prüfen");
            ui.separator();

            ui.label("X-Koordinate:");
            ui.horizontal_wrapped(|ui| {
                for &x in &CoordinateX::DOMAIN {
                    let selected = state.form.x.map(|c| c.value()) == Some(x);
                    if ui.selectable_label(selected, format!("{x}")).clicked() {
                        events.push(AppIntent::XSelected { x });
                    }
                }
            });

            ui.add_space(8.0);
            ui.label(format!("Y-Koordinate [{Y_MIN} … {Y_MAX}]:"));
            let mut y_text = state.form.y_input.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut y_text)
                    .desired_width(120.0)
                    .hint_text("z.B. -1.25"),
            );
            if response.changed() {
                events.push(AppIntent::YInputChanged { text: y_text });
            }
            if let Some(error) = &state.form.y_error {
                ui.colored_label(egui::Color32::LIGHT_RED, error);
            }

            ui.add_space(8.0);
            ui.label("Radius R:");
            ui.horizontal_wrapped(|ui| {
                for radius in Radius::ALL {
                    let mut checked = state.form.radii.contains(&radius);
                    if ui.checkbox(&mut checked, radius.label()).changed() {
                        events.push(AppIntent::RadiusToggled {
                            radius,
                            selected: checked,
                        });
                    }
                }
            });

            ui.add_space(14.0);
            let busy = state.submission.is_busy();
            let label = if busy { "Auswertung läuft…" } else { "Prüfen" };
            // Absende-Freigabe: alle drei Felder gültig, keine laufende Anfrage
            if ui
                .add_enabled(state.form.valid && !busy, egui::Button::new(label))
                .clicked()
            {
                events.push(AppIntent::SubmitRequested);
            }

            if let Some(message) = &state.ui.status_message {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::YELLOW, message);
            }
        });

    events
}
