//! Feldvalidierung und Absende-Freigabe des Formulars.
//!
//! Reine Funktionen; der aggregierte Formular-Zustand wird nach jeder
//! Feldänderung neu berechnet und steuert die Submit-Schaltfläche.

use indexmap::IndexSet;

use super::region::{CoordinateX, Radius, Y_MAX, Y_MIN};

/// Fehler der Feldvalidierung.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// X liegt nicht in der zulässigen Menge
    #[error("x must be one of [-3, -2, -1, 0, 1, 2, 3, 4, 5]")]
    XOutOfDomain(i32),
    /// Y ist keine endliche Zahl im zulässigen Intervall
    #[error("y must be a number between -5 and 3")]
    YOutOfRange(f32),
    /// Kein Radius ausgewählt
    #[error("at least one radius must be selected")]
    EmptyRadiusSelection,
    /// Radius liegt nicht in der zulässigen Menge
    #[error("r must be one of [1, 1.5, 2, 2.5, 3]")]
    RadiusOutOfDomain(f32),
}

/// Prüft die Zugehörigkeit eines rohen X zur Koordinaten-Domäne.
pub fn validate_x(value: i32) -> Result<CoordinateX, ValidationError> {
    CoordinateX::new(value).ok_or(ValidationError::XOutOfDomain(value))
}

/// Prüft Y auf Endlichkeit und das geschlossene Intervall `[-5, 3]`.
pub fn validate_y(value: f32) -> Result<f32, ValidationError> {
    if value.is_finite() && (Y_MIN..=Y_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::YOutOfRange(value))
    }
}

/// Ordnet einen rohen Radius-Wert dem Domänen-Mitglied zu.
pub fn validate_radius(value: f32) -> Result<Radius, ValidationError> {
    Radius::try_from_value(value).ok_or(ValidationError::RadiusOutOfDomain(value))
}

/// Prüft die Radius-Auswahl auf Nicht-Leere.
///
/// Die Mitglieder selbst sind durch den `Radius`-Typ bereits
/// domänengültig.
pub fn validate_selection(radii: &IndexSet<Radius>) -> Result<(), ValidationError> {
    if radii.is_empty() {
        Err(ValidationError::EmptyRadiusSelection)
    } else {
        Ok(())
    }
}

/// Aggregierte Absende-Freigabe: alle drei Felder gültig.
pub fn is_form_valid(
    x: Option<CoordinateX>,
    y: Option<f32>,
    radii: &IndexSet<Radius>,
) -> bool {
    let x_valid = x.is_some();
    let y_valid = y.map(|v| validate_y(v).is_ok()).unwrap_or(false);
    let r_valid = validate_selection(radii).is_ok();
    x_valid && y_valid && r_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_x_accepts_every_domain_member() {
        for &x in &CoordinateX::DOMAIN {
            let validated = validate_x(x).expect("Domänen-Mitglied muss gültig sein");
            assert_eq!(validated.value(), x);
        }
    }

    #[test]
    fn test_validate_x_rejects_every_foreign_value() {
        for x in [-100, -4, 6, 100] {
            assert_eq!(validate_x(x), Err(ValidationError::XOutOfDomain(x)));
        }
    }

    #[test]
    fn test_validate_y_bounds_are_inclusive() {
        assert!(validate_y(-5.0).is_ok());
        assert!(validate_y(3.0).is_ok());
        assert!(validate_y(0.0).is_ok());
        assert!(validate_y(-5.001).is_err());
        assert!(validate_y(3.001).is_err());
    }

    #[test]
    fn test_validate_y_rejects_non_finite() {
        assert!(validate_y(f32::NAN).is_err());
        assert!(validate_y(f32::INFINITY).is_err());
        assert!(validate_y(f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_radius_domain() {
        for radius in Radius::ALL {
            assert_eq!(validate_radius(radius.value()), Ok(radius));
        }
        assert!(validate_radius(0.0).is_err());
        assert!(validate_radius(3.5).is_err());
    }

    #[test]
    fn test_validate_selection_requires_nonempty() {
        let empty = IndexSet::new();
        assert_eq!(
            validate_selection(&empty),
            Err(ValidationError::EmptyRadiusSelection)
        );

        let mut one = IndexSet::new();
        one.insert(Radius::R1);
        assert!(validate_selection(&one).is_ok());
    }

    #[test]
    fn test_is_form_valid_exhaustive_combinations() {
        let mut radii = IndexSet::new();
        radii.insert(Radius::R2);
        let empty: IndexSet<Radius> = IndexSet::new();

        let xs = [None, CoordinateX::new(0)];
        let ys = [None, Some(0.0_f32), Some(9.0_f32)];

        for x in xs {
            for y in ys {
                for r in [&empty, &radii] {
                    let expected = x.is_some()
                        && matches!(y, Some(v) if (-5.0..=3.0).contains(&v))
                        && !r.is_empty();
                    assert_eq!(is_form_valid(x, y, r), expected);
                }
            }
        }
    }
}
