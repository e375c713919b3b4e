//! Handler für Anwendungssteuerung.

use crate::app::AppState;

/// Beendet die Anwendung kontrolliert über das Exit-Flag.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
