//! Handler für Formularfeld-Änderungen.
//!
//! Jede Mutation endet mit `revalidate`, damit die Absende-Freigabe immer
//! den allerneuesten Feldstand widerspiegelt.

use crate::app::AppState;
use crate::core::region::{CoordinateX, Radius};
use crate::core::validation;

/// Übernimmt eine über die Buttons gewählte X-Koordinate.
pub fn set_x(state: &mut AppState, x: i32) {
    match validation::validate_x(x) {
        Ok(coordinate) => {
            state.form.x = Some(coordinate);
            state.ui.status_message = None;
        }
        Err(e) => {
            state.form.x = None;
            state.ui.status_message = Some(e.to_string());
        }
    }
    state.form.revalidate();
}

/// Übernimmt den rohen Y-Eingabetext, parst und validiert ihn.
///
/// Leere Eingabe ist unausgefüllt, kein Fehler.
pub fn set_y_input(state: &mut AppState, text: String) {
    let trimmed = text.trim().to_string();
    state.form.y_input = text;

    if trimmed.is_empty() {
        state.form.y = None;
        state.form.y_error = None;
    } else {
        match trimmed.parse::<f32>() {
            Ok(value) => match validation::validate_y(value) {
                Ok(y) => {
                    state.form.y = Some(y);
                    state.form.y_error = None;
                }
                Err(e) => {
                    state.form.y = None;
                    state.form.y_error = Some(e.to_string());
                }
            },
            Err(_) => {
                state.form.y = None;
                state.form.y_error =
                    Some(validation::ValidationError::YOutOfRange(f32::NAN).to_string());
            }
        }
    }
    state.form.revalidate();
}

/// Schaltet einen Radius in der Auswahl um.
pub fn toggle_radius(state: &mut AppState, radius: Radius, selected: bool) {
    if selected {
        state.form.radii.insert(radius);
    } else {
        state.form.radii.shift_remove(&radius);
    }
    state.form.revalidate();
}

/// Übernimmt einen Plot-Klick in beide Koordinatenfelder.
pub fn set_point(state: &mut AppState, x: CoordinateX, y: f32) {
    state.form.x = Some(x);
    state.form.y = Some(y);
    state.form.y_input = format!("{:.2}", y);
    state.form.y_error = None;
    state.form.revalidate();
    state.ui.status_message = Some(format!("Punkt übernommen: X={}, Y={:.2}", x, y));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_y_input_accepts_value_in_range() {
        let mut state = AppState::new();

        set_y_input(&mut state, "-2.5".to_string());

        assert_eq!(state.form.y, Some(-2.5));
        assert!(state.form.y_error.is_none());
    }

    #[test]
    fn set_y_input_flags_out_of_range() {
        let mut state = AppState::new();

        set_y_input(&mut state, "4.2".to_string());

        assert!(state.form.y.is_none());
        assert!(state.form.y_error.is_some());
        assert!(!state.form.valid);
    }

    #[test]
    fn set_y_input_empty_clears_error() {
        let mut state = AppState::new();
        set_y_input(&mut state, "abc".to_string());
        assert!(state.form.y_error.is_some());

        set_y_input(&mut state, "".to_string());

        assert!(state.form.y_error.is_none());
        assert!(state.form.y.is_none());
    }

    #[test]
    fn toggle_radius_keeps_selection_order() {
        let mut state = AppState::new();

        toggle_radius(&mut state, Radius::R3, true);
        toggle_radius(&mut state, Radius::R1, true);
        toggle_radius(&mut state, Radius::R3, false);
        toggle_radius(&mut state, Radius::R2, true);

        let selected: Vec<Radius> = state.form.radii.iter().copied().collect();
        assert_eq!(selected, vec![Radius::R1, Radius::R2]);
    }

    #[test]
    fn set_point_fills_both_fields_and_revalidates() {
        let mut state = AppState::new();
        toggle_radius(&mut state, Radius::R1, true);

        set_point(&mut state, CoordinateX::new(2).unwrap(), -1.25);

        assert_eq!(state.form.x.map(|x| x.value()), Some(2));
        assert_eq!(state.form.y, Some(-1.25));
        assert_eq!(state.form.y_input, "-1.25");
        assert!(state.form.valid);
    }
}
