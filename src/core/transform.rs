//! Abbildung zwischen Mathe- und Bildschirm-Koordinaten.

use glam::Vec2;

use super::region::{self, CoordinateX};

/// Nachkommastellen, auf die ein geklicktes Y gerundet wird.
const Y_CLICK_DECIMALS: f32 = 100.0;

/// Transformation des Plots: fester Maßstab um ein Zentrum, Y invertiert.
///
/// Bildschirm-Y wächst nach unten, Mathe-Y nach oben. Reine Funktionen ohne
/// Seiteneffekte; der Maßstab ist Pixel pro Mathe-Einheit.
#[derive(Debug, Clone, Copy)]
pub struct PlotTransform {
    /// Zentrum des Plots in Bildschirm-Koordinaten
    pub center: Vec2,
    /// Pixel pro Mathe-Einheit
    pub scale: f32,
}

impl PlotTransform {
    /// Erstellt eine Transformation um `center` mit `scale` px/Einheit.
    pub fn new(center: Vec2, scale: f32) -> Self {
        Self { center, scale }
    }

    /// Mathe-Punkt → Bildschirm-Punkt.
    pub fn math_to_screen(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.center.x + p.x * self.scale,
            self.center.y - p.y * self.scale,
        )
    }

    /// Bildschirm-Punkt → Mathe-Punkt (Umkehrung).
    pub fn screen_to_math(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            (p.x - self.center.x) / self.scale,
            (self.center.y - p.y) / self.scale,
        )
    }

    /// Rastet einen Bildschirm-Klick auf die diskrete X-Domäne.
    pub fn snap_click_x(&self, screen_pos: Vec2) -> CoordinateX {
        CoordinateX::snap(self.screen_to_math(screen_pos).x)
    }

    /// Begrenzt und rundet das Y eines Bildschirm-Klicks.
    ///
    /// Klemmt auf den gültigen Bereich und rundet auf zwei Nachkommastellen.
    pub fn clamp_click_y(&self, screen_pos: Vec2) -> f32 {
        clamp_round_y(self.screen_to_math(screen_pos).y)
    }
}

/// Klemmt ein Y auf `[Y_MIN, Y_MAX]` und rundet auf zwei Nachkommastellen.
pub fn clamp_round_y(raw_y: f32) -> f32 {
    let clamped = raw_y.clamp(region::Y_MIN, region::Y_MAX);
    (clamped * Y_CLICK_DECIMALS).round() / Y_CLICK_DECIMALS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn transform() -> PlotTransform {
        PlotTransform::new(Vec2::new(400.0, 300.0), 100.0)
    }

    #[test]
    fn test_math_to_screen_inverts_y() {
        let t = transform();
        let screen = t.math_to_screen(Vec2::new(1.0, 2.0));
        assert_relative_eq!(screen.x, 500.0);
        assert_relative_eq!(screen.y, 100.0);
    }

    #[test]
    fn test_round_trip_recovers_point() {
        let t = transform();
        for &(x, y) in &[(0.0, 0.0), (-3.0, -5.0), (5.0, 3.0), (1.25, -2.75)] {
            let p = Vec2::new(x, y);
            let back = t.screen_to_math(t.math_to_screen(p));
            assert_relative_eq!(back.x, p.x, epsilon = 1e-4);
            assert_relative_eq!(back.y, p.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_snap_click_x_uses_domain() {
        let t = transform();
        // 130 px rechts vom Zentrum = Mathe-X 1.3 → rastet auf 1
        let snapped = t.snap_click_x(Vec2::new(530.0, 300.0));
        assert_eq!(snapped.value(), 1);
    }

    #[test]
    fn test_clamp_click_y_limits_and_rounds() {
        let t = transform();
        // Weit unterhalb des Plots → untere Grenze
        assert_relative_eq!(t.clamp_click_y(Vec2::new(400.0, 1200.0)), -5.0);
        // Weit oberhalb → obere Grenze
        assert_relative_eq!(t.clamp_click_y(Vec2::new(400.0, -1200.0)), 3.0);
        // 123 px oberhalb des Zentrums = 1.23
        assert_relative_eq!(t.clamp_click_y(Vec2::new(400.0, 177.0)), 1.23);
    }

    #[test]
    fn test_clamp_round_y_two_decimals() {
        assert_relative_eq!(clamp_round_y(1.2345), 1.23);
        assert_relative_eq!(clamp_round_y(-4.999), -5.0);
    }
}
