//! Plot-Rendering: Trefferbereiche, Achsen, Beschriftung und Punkte.
//!
//! Liest ausschließlich aus dem AppState — der Frame-Loop rendert jeden
//! Frame einen idempotenten Schnappschuss, Zustand mutiert hier nichts.

use eframe::egui;
use glam::Vec2;

use crate::app::AppState;
use crate::core::region::{self, Radius};
use crate::core::transform::{clamp_round_y, PlotTransform};
use crate::core::{CoordinateX, RegionAnimation};

/// Bogen-Unterteilungen des Viertelkreises.
///
/// 48 ergibt bei 300 px Radius eine glatte Kontur; mehr bringt sichtbar
/// nichts.
const ARC_SEGMENTS: usize = 48;

/// Linienstärke der Bereichs-Kontur in Pixeln.
const REGION_STROKE_WIDTH: f32 = 2.0;
/// Halbe Länge eines Achsen-Ticks in Pixeln.
const TICK_HALF_PX: f32 = 5.0;
/// Konturfarbe der Punkte.
const POINT_OUTLINE: egui::Color32 = egui::Color32::BLACK;
/// Achsen- und Beschriftungsfarbe.
const AXIS_COLOR: egui::Color32 = egui::Color32::from_rgb(44, 62, 80);
/// Hintergrund der Plot-Fläche.
const PLOT_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(248, 249, 250);

/// Zeichnet den kompletten Plot in das gegebene Rechteck.
pub fn paint_plot(
    painter: &egui::Painter,
    rect: egui::Rect,
    state: &AppState,
    transform: &PlotTransform,
    hover_pos: Option<egui::Pos2>,
) {
    painter.rect_filled(rect, 0.0, PLOT_BACKGROUND);

    for (radius, anim) in state.animations.iter() {
        paint_region(painter, transform, state, radius, anim.opacity);
        paint_points(painter, transform, state, anim);
    }

    paint_axes(painter, rect, transform);
    paint_labels(painter, transform);

    if let Some(pos) = hover_pos {
        paint_hover_readout(painter, transform, pos);
    }
}

/// Zeichnet den Trefferbereich eines Radius mit gegebener Deckkraft.
///
/// Füllung trägt die Basis-Deckkraft aus den Optionen multipliziert mit
/// der Animations-Deckkraft; die Kontur blendet mit.
fn paint_region(
    painter: &egui::Painter,
    transform: &PlotTransform,
    state: &AppState,
    radius: Radius,
    opacity: f32,
) {
    let r = radius.value();
    let fill = fade_color(state.options.region_fill_color, opacity);
    let stroke = egui::Stroke::new(
        REGION_STROKE_WIDTH,
        fade_color(state.options.region_stroke_color, opacity),
    );

    // Rechteck im zweiten Quadranten
    let corners = region::rectangle_corners(r)
        .iter()
        .map(|p| to_screen(transform, *p))
        .collect();
    painter.add(egui::Shape::convex_polygon(corners, fill, stroke));

    // Viertelkreis-Sektor im vierten Quadranten
    let sector = region::quarter_disc_outline(r, ARC_SEGMENTS)
        .iter()
        .map(|p| to_screen(transform, *p))
        .collect();
    painter.add(egui::Shape::convex_polygon(sector, fill, stroke));

    // Dreieck im dritten Quadranten
    let triangle = region::triangle_corners(r)
        .iter()
        .map(|p| to_screen(transform, *p))
        .collect();
    painter.add(egui::Shape::convex_polygon(triangle, fill, stroke));
}

/// Zeichnet die Punkte einer Animation in voller Deckkraft.
///
/// Einzige Stelle, an der das Urteil sichtbar codiert wird: Grün für
/// Treffer, Rot für Fehlschlag, neutrale Kontur.
fn paint_points(
    painter: &egui::Painter,
    transform: &PlotTransform,
    state: &AppState,
    anim: &RegionAnimation,
) {
    for point in &anim.points {
        let pos = to_screen(transform, Vec2::new(point.x, point.y));
        let fill = if point.accepted {
            opaque_color(state.options.point_hit_color)
        } else {
            opaque_color(state.options.point_miss_color)
        };
        painter.circle_filled(pos, state.options.point_radius_px, fill);
        painter.circle_stroke(
            pos,
            state.options.point_radius_px,
            egui::Stroke::new(1.0, POINT_OUTLINE),
        );
    }
}

/// Zeichnet beide Achsen über die volle Plot-Fläche samt Pfeilspitzen
/// und Tick-Marken an allen Radius-Vielfachen.
fn paint_axes(painter: &egui::Painter, rect: egui::Rect, transform: &PlotTransform) {
    let stroke = egui::Stroke::new(1.0, AXIS_COLOR);
    let center = egui::pos2(transform.center.x, transform.center.y);

    painter.line_segment(
        [
            egui::pos2(rect.left(), center.y),
            egui::pos2(rect.right(), center.y),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(center.x, rect.bottom()),
            egui::pos2(center.x, rect.top()),
        ],
        stroke,
    );

    // Pfeilspitzen an den positiven Achsen-Enden
    painter.add(egui::Shape::convex_polygon(
        vec![
            egui::pos2(rect.right(), center.y),
            egui::pos2(rect.right() - 10.0, center.y - 5.0),
            egui::pos2(rect.right() - 10.0, center.y + 5.0),
        ],
        AXIS_COLOR,
        egui::Stroke::NONE,
    ));
    painter.add(egui::Shape::convex_polygon(
        vec![
            egui::pos2(center.x, rect.top()),
            egui::pos2(center.x - 5.0, rect.top() + 10.0),
            egui::pos2(center.x + 5.0, rect.top() + 10.0),
        ],
        AXIS_COLOR,
        egui::Stroke::NONE,
    ));

    for radius in Radius::ALL {
        for sign in [1.0_f32, -1.0] {
            let offset = sign * radius.value() * transform.scale;
            painter.line_segment(
                [
                    egui::pos2(center.x + offset, center.y - TICK_HALF_PX),
                    egui::pos2(center.x + offset, center.y + TICK_HALF_PX),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(center.x - TICK_HALF_PX, center.y + offset),
                    egui::pos2(center.x + TICK_HALF_PX, center.y + offset),
                ],
                stroke,
            );
        }
    }
}

/// Beschriftet Achsen, Ursprung und Tick-Werte.
fn paint_labels(painter: &egui::Painter, transform: &PlotTransform) {
    let font = egui::FontId::proportional(11.0);
    let axis_font = egui::FontId::proportional(14.0);
    let center = egui::pos2(transform.center.x, transform.center.y);

    let max_extent = Radius::ALL[Radius::ALL.len() - 1].value() * transform.scale;
    painter.text(
        egui::pos2(center.x + max_extent + 28.0, center.y - 12.0),
        egui::Align2::CENTER_CENTER,
        "X",
        axis_font.clone(),
        AXIS_COLOR,
    );
    painter.text(
        egui::pos2(center.x + 14.0, center.y - max_extent - 28.0),
        egui::Align2::CENTER_CENTER,
        "Y",
        axis_font,
        AXIS_COLOR,
    );
    painter.text(
        egui::pos2(center.x + 8.0, center.y + 10.0),
        egui::Align2::CENTER_CENTER,
        "0",
        font.clone(),
        AXIS_COLOR,
    );

    for radius in Radius::ALL {
        let offset = radius.value() * transform.scale;
        painter.text(
            egui::pos2(center.x + offset, center.y + 14.0),
            egui::Align2::CENTER_CENTER,
            radius.label(),
            font.clone(),
            AXIS_COLOR,
        );
        painter.text(
            egui::pos2(center.x - offset, center.y + 14.0),
            egui::Align2::CENTER_CENTER,
            format!("-{}", radius.label()),
            font.clone(),
            AXIS_COLOR,
        );
        painter.text(
            egui::pos2(center.x - 16.0, center.y - offset),
            egui::Align2::CENTER_CENTER,
            radius.label(),
            font.clone(),
            AXIS_COLOR,
        );
        painter.text(
            egui::pos2(center.x - 16.0, center.y + offset),
            egui::Align2::CENTER_CENTER,
            format!("-{}", radius.label()),
            font.clone(),
            AXIS_COLOR,
        );
    }
}

/// Vorschau-Box am Mauszeiger: gerastetes X und geklemmtes Y des Klicks.
fn paint_hover_readout(painter: &egui::Painter, transform: &PlotTransform, pos: egui::Pos2) {
    let math = transform.screen_to_math(Vec2::new(pos.x, pos.y));
    let snapped_x = CoordinateX::snap(math.x);
    let clamped_y = clamp_round_y(math.y);

    let box_rect = egui::Rect::from_min_size(
        egui::pos2(pos.x + 12.0, pos.y - 20.0),
        egui::vec2(96.0, 36.0),
    );
    painter.rect_filled(
        box_rect,
        2.0,
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 210),
    );
    painter.rect_stroke(
        box_rect,
        2.0,
        egui::Stroke::new(1.0, AXIS_COLOR),
        egui::StrokeKind::Inside,
    );

    let font = egui::FontId::monospace(11.0);
    painter.text(
        box_rect.min + egui::vec2(6.0, 6.0),
        egui::Align2::LEFT_TOP,
        format!("X: {}", snapped_x),
        font.clone(),
        AXIS_COLOR,
    );
    painter.text(
        box_rect.min + egui::vec2(6.0, 20.0),
        egui::Align2::LEFT_TOP,
        format!("Y: {:.2}", clamped_y),
        font,
        AXIS_COLOR,
    );
}

/// Mathe-Punkt → egui-Bildschirmposition.
fn to_screen(transform: &PlotTransform, p: Vec2) -> egui::Pos2 {
    let s = transform.math_to_screen(p);
    egui::pos2(s.x, s.y)
}

/// RGBA-Farbe mit zusätzlicher Animations-Deckkraft.
fn fade_color(rgba: [f32; 4], opacity: f32) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * opacity.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// RGBA-Farbe in voller Deckkraft des Alpha-Kanals.
fn opaque_color(rgba: [f32; 4]) -> egui::Color32 {
    fade_color(rgba, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_color_scales_only_alpha() {
        let half = fade_color([1.0, 0.5, 0.0, 0.8], 0.5);

        assert_eq!(half.r(), 255);
        assert_eq!(half.g(), 127);
        assert_eq!(half.a(), 102);
    }

    #[test]
    fn fade_color_clamps_opacity() {
        let over = fade_color([0.0, 0.0, 0.0, 1.0], 1.5);
        assert_eq!(over.a(), 255);

        let under = fade_color([0.0, 0.0, 0.0, 1.0], -0.2);
        assert_eq!(under.a(), 0);
    }
}
