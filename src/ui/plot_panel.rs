//! Zentrales Plot-Panel: Darstellung und Klick-Eingabe.

use eframe::egui;
use glam::Vec2;

use crate::app::{AppIntent, AppState};
use crate::core::PlotTransform;
use crate::render;

/// Rendert den Plot und übersetzt Klicks in `PointPicked`-Intents.
///
/// Die Transformation entsteht pro Frame aus dem Panel-Rechteck: Zentrum
/// in der Mitte, fester Maßstab aus den Optionen.
pub fn render_plot_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

            let transform = PlotTransform::new(
                Vec2::new(rect.center().x, rect.center().y),
                state.options.unit_scale_px,
            );

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let click = Vec2::new(pos.x, pos.y);
                    events.push(AppIntent::PointPicked {
                        x: transform.snap_click_x(click),
                        y: transform.clamp_click_y(click),
                    });
                }
            }

            let painter = ui.painter_at(rect);
            render::paint_plot(&painter, rect, state, &transform, response.hover_pos());
        });

    events
}
