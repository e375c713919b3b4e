//! Wertebereiche und Geometrie des zusammengesetzten Trefferbereichs.
//!
//! Der Bereich ist die Vereinigung aus Rechteck (zweiter Quadrant),
//! Viertelkreis (vierter Quadrant) und rechtwinkligem Dreieck (dritter
//! Quadrant), jeweils skaliert mit dem Radius R. Die Zugehörigkeit eines
//! Punkts entscheidet ausschließlich der Auswertungsdienst — hier liegt nur
//! die Geometrie für die Darstellung.

use glam::Vec2;

/// Untere Grenze des gültigen Y-Bereichs.
pub const Y_MIN: f32 = -5.0;
/// Obere Grenze des gültigen Y-Bereichs.
pub const Y_MAX: f32 = 3.0;

/// Zulässige Radius-Multiplikatoren des Trefferbereichs.
///
/// Geschlossene Menge — dient gleichzeitig als Schlüssel der
/// Animations-Zustände.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radius {
    /// R = 1
    R1,
    /// R = 1.5
    R1_5,
    /// R = 2
    R2,
    /// R = 2.5
    R2_5,
    /// R = 3
    R3,
}

impl Radius {
    /// Alle zulässigen Radien in deklarierter (aufsteigender) Reihenfolge.
    pub const ALL: [Radius; 5] = [
        Radius::R1,
        Radius::R1_5,
        Radius::R2,
        Radius::R2_5,
        Radius::R3,
    ];

    /// Numerischer Wert des Radius.
    pub fn value(self) -> f32 {
        match self {
            Radius::R1 => 1.0,
            Radius::R1_5 => 1.5,
            Radius::R2 => 2.0,
            Radius::R2_5 => 2.5,
            Radius::R3 => 3.0,
        }
    }

    /// Anzeige-Text (Checkbox-Beschriftung, Tabellenspalte).
    pub fn label(self) -> &'static str {
        match self {
            Radius::R1 => "1",
            Radius::R1_5 => "1.5",
            Radius::R2 => "2",
            Radius::R2_5 => "2.5",
            Radius::R3 => "3",
        }
    }

    /// Ordnet einen rohen Zahlenwert dem Domänen-Mitglied zu.
    ///
    /// `None` für Werte außerhalb der geschlossenen Menge.
    pub fn try_from_value(value: f32) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.value() == value)
    }
}

/// Zulässige X-Koordinate — geschlossene ganzzahlige Menge, kein freier Wert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateX(i32);

impl CoordinateX {
    /// Zulässige Werte in deklarierter (aufsteigender) Reihenfolge.
    pub const DOMAIN: [i32; 9] = [-3, -2, -1, 0, 1, 2, 3, 4, 5];

    /// Erstellt eine Koordinate, sofern der Wert in der Domäne liegt.
    pub fn new(value: i32) -> Option<Self> {
        Self::DOMAIN.contains(&value).then_some(Self(value))
    }

    /// Rohwert der Koordinate.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Rastet einen kontinuierlichen X-Wert auf das nächste Domänen-Mitglied.
    ///
    /// Iteriert die Domäne in deklarierter Reihenfolge mit striktem
    /// Vergleich — bei Gleichstand gewinnt deterministisch das zuerst
    /// angetroffene Minimum.
    pub fn snap(raw_x: f32) -> Self {
        let mut best = Self::DOMAIN[0];
        let mut best_dist = (raw_x - best as f32).abs();
        for &candidate in &Self::DOMAIN[1..] {
            let dist = (raw_x - candidate as f32).abs();
            if dist < best_dist {
                best = candidate;
                best_dist = dist;
            }
        }
        Self(best)
    }
}

impl std::fmt::Display for CoordinateX {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Umrisse in Mathe-Koordinaten ────────────────────────────────────

/// Eckpunkte des Rechtecks `[-r, 0] × [0, r/2]` gegen den Uhrzeigersinn.
pub fn rectangle_corners(r: f32) -> [Vec2; 4] {
    [
        Vec2::new(-r, 0.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, r / 2.0),
        Vec2::new(-r, r / 2.0),
    ]
}

/// Eckpunkte des Dreiecks mit Katheten `r/2` im dritten Quadranten.
pub fn triangle_corners(r: f32) -> [Vec2; 3] {
    [
        Vec2::new(0.0, 0.0),
        Vec2::new(-r / 2.0, 0.0),
        Vec2::new(0.0, -r / 2.0),
    ]
}

/// Umriss des Viertelkreis-Sektors im vierten Quadranten.
///
/// Beginnt im Ursprung, läuft über den Bogen von `(r, 0)` nach `(0, -r)`.
/// `segments` Bogen-Unterteilungen; der Sektor ist konvex.
pub fn quarter_disc_outline(r: f32, segments: usize) -> Vec<Vec2> {
    let mut outline = Vec::with_capacity(segments + 2);
    outline.push(Vec2::ZERO);
    for i in 0..=segments {
        let angle = -(i as f32) * std::f32::consts::FRAC_PI_2 / segments as f32;
        outline.push(Vec2::new(r * angle.cos(), r * angle.sin()));
    }
    outline
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_radius_values_match_domain() {
        let values: Vec<f32> = Radius::ALL.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
    }

    #[test]
    fn test_radius_try_from_value_rejects_foreign_values() {
        assert_eq!(Radius::try_from_value(2.5), Some(Radius::R2_5));
        assert_eq!(Radius::try_from_value(0.5), None);
        assert_eq!(Radius::try_from_value(4.0), None);
    }

    #[test]
    fn test_coordinate_x_rejects_out_of_domain() {
        assert!(CoordinateX::new(-3).is_some());
        assert!(CoordinateX::new(5).is_some());
        assert!(CoordinateX::new(-4).is_none());
        assert!(CoordinateX::new(6).is_none());
    }

    #[test]
    fn test_snap_picks_nearest_member() {
        assert_eq!(CoordinateX::snap(1.2).value(), 1);
        assert_eq!(CoordinateX::snap(4.7).value(), 5);
        assert_eq!(CoordinateX::snap(-10.0).value(), -3);
        assert_eq!(CoordinateX::snap(10.0).value(), 5);
    }

    #[test]
    fn test_snap_tie_resolves_to_first_member() {
        // Exakt zwischen -1 und 0: das zuerst deklarierte Minimum gewinnt
        assert_eq!(CoordinateX::snap(-0.5).value(), -1);
        assert_eq!(CoordinateX::snap(2.5).value(), 2);
    }

    #[test]
    fn test_rectangle_spans_second_quadrant() {
        let corners = rectangle_corners(2.0);
        assert_relative_eq!(corners[0].x, -2.0);
        assert_relative_eq!(corners[2].y, 1.0);
        assert!(corners.iter().all(|c| c.x <= 0.0 && c.y >= 0.0));
    }

    #[test]
    fn test_quarter_disc_stays_in_fourth_quadrant() {
        let outline = quarter_disc_outline(3.0, 32);
        assert_eq!(outline[0], Vec2::ZERO);
        assert_relative_eq!(outline[1].x, 3.0, epsilon = 1e-5);
        assert_relative_eq!(outline.last().unwrap().y, -3.0, epsilon = 1e-5);
        assert!(outline.iter().all(|p| p.x >= -1e-5 && p.y <= 1e-5));
    }

    #[test]
    fn test_triangle_legs_are_half_radius() {
        let corners = triangle_corners(3.0);
        assert_relative_eq!(corners[1].x, -1.5);
        assert_relative_eq!(corners[2].y, -1.5);
    }
}
