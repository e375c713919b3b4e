//! Handler für die Ergebnis-Tabelle.

use crate::app::AppState;

/// Leert Tabelle, Historie und alle Bereichs-Animationen sofort.
///
/// Laufende Fade-Ketten enden mit ihren Einträgen; ausstehende
/// Sende-Schritte werden verworfen.
pub fn clear(state: &mut AppState) {
    state.animations.clear();
    state.submission.reset_steps();
    state.results.clear();
    state.ui.status_message = None;
    log::info!("Ergebnisse und Animationen geleert");
}
