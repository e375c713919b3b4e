//! Application State — zentrale Datenhaltung.

use indexmap::IndexSet;

use crate::api::EvalRequest;
use crate::core::validation;
use crate::core::AnimationManager;
use crate::core::{CoordinateX, Radius};
use crate::shared::ClientOptions;
use crate::storage::{HistoryStore, ResultRow};

use super::submission::SubmissionState;
use super::CommandLog;

/// Formular-Zustand: Punkt und Radius-Auswahl.
///
/// `valid` wird nach jeder Feldänderung neu berechnet und nirgendwo
/// persistiert.
pub struct FormState {
    /// Gewählte X-Koordinate
    pub x: Option<CoordinateX>,
    /// Roher Inhalt des Y-Eingabefelds
    pub y_input: String,
    /// Geparstes, gültiges Y (sonst `None`)
    pub y: Option<f32>,
    /// Inline-Fehlertext des Y-Felds
    pub y_error: Option<String>,
    /// Gewählte Radien in Auswahl-Reihenfolge
    pub radii: IndexSet<Radius>,
    /// Aggregierte Absende-Freigabe
    pub valid: bool,
}

impl FormState {
    /// Erstellt ein leeres, ungültiges Formular.
    pub fn new() -> Self {
        Self {
            x: None,
            y_input: String::new(),
            y: None,
            y_error: None,
            radii: IndexSet::new(),
            valid: false,
        }
    }

    /// Berechnet die Absende-Freigabe aus dem aktuellen Feldstand neu.
    pub fn revalidate(&mut self) {
        self.valid = validation::is_form_valid(self.x, self.y, &self.radii);
    }

    /// Liefert die Anfrage zum aktuellen Feldstand, sofern gültig.
    pub fn snapshot(&self) -> Option<EvalRequest> {
        if !self.valid {
            return None;
        }
        Some(EvalRequest {
            x: self.x?.value(),
            y: self.y?,
            radii: self.radii.iter().copied().collect(),
        })
    }

    /// Setzt alle Felder zurück.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Ergebnis-Tabelle samt dahinterliegender Historie.
pub struct ResultsState {
    /// Zeilen in Anzeige-Reihenfolge (älteste zuerst)
    pub rows: Vec<ResultRow>,
    store: HistoryStore,
}

impl ResultsState {
    /// Erstellt eine leere Tabelle über dem gegebenen Speicher.
    pub fn new(store: HistoryStore) -> Self {
        Self {
            rows: Vec::new(),
            store,
        }
    }

    /// Lädt die gespeicherte Historie (aufsteigend nach Zeitstempel).
    pub fn load_history(&mut self) {
        self.rows = self.store.load();
        log::info!("{} gespeicherte Ergebnis-Zeilen geladen", self.rows.len());
    }

    /// Hängt eine Zeile an und persistiert den Bestand.
    pub fn append(&mut self, row: ResultRow) {
        self.rows.push(row);
        self.persist();
    }

    /// Leert Tabelle und Historie.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.rows) {
            log::warn!("Historie konnte nicht gespeichert werden: {:#}", e);
        }
    }
}

/// UI-bezogener Anwendungszustand.
#[derive(Default)]
pub struct UiState {
    /// Temporäre Statusnachricht (z.B. Freigabe-Diagnose)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            status_message: None,
        }
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Formular-Zustand
    pub form: FormState,
    /// Aktive Bereichs-Animationen
    pub animations: AnimationManager,
    /// Sende-Ablauf
    pub submission: SubmissionState,
    /// Ergebnis-Tabelle und Historie
    pub results: ResultsState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Endpoint, Farben, Maßstab)
    pub options: ClientOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit der Standard-Historie.
    pub fn new() -> Self {
        Self::with_history_store(HistoryStore::new(HistoryStore::default_path()))
    }

    /// Erstellt einen App-State über einem expliziten Historie-Speicher.
    pub fn with_history_store(store: HistoryStore) -> Self {
        Self {
            form: FormState::new(),
            animations: AnimationManager::new(),
            submission: SubmissionState::new(),
            results: ResultsState::new(store),
            ui: UiState::new(),
            options: ClientOptions::default(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormState {
        let mut form = FormState::new();
        form.x = CoordinateX::new(1);
        form.y = Some(-0.5);
        form.radii.insert(Radius::R2);
        form.revalidate();
        form
    }

    #[test]
    fn snapshot_requires_valid_form() {
        let form = FormState::new();
        assert!(form.snapshot().is_none());

        let form = valid_form();
        let request = form.snapshot().expect("gültiges Formular");
        assert_eq!(request.x, 1);
        assert_eq!(request.radii, vec![Radius::R2]);
    }

    #[test]
    fn snapshot_preserves_radius_selection_order() {
        let mut form = valid_form();
        form.radii.insert(Radius::R1);
        form.revalidate();

        let request = form.snapshot().unwrap();

        assert_eq!(request.radii, vec![Radius::R2, Radius::R1]);
    }

    #[test]
    fn reset_invalidates_form() {
        let mut form = valid_form();
        assert!(form.valid);

        form.reset();

        assert!(!form.valid);
        assert!(form.x.is_none());
        assert!(form.radii.is_empty());
    }
}
