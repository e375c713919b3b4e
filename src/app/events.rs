//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::api::{EvalRequest, EvalResponse, OracleError};
use crate::core::region::{CoordinateX, Radius};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// X-Koordinate über die Formular-Buttons gewählt
    XSelected { x: i32 },
    /// Inhalt des Y-Eingabefelds geändert
    YInputChanged { text: String },
    /// Radius-Checkbox umgeschaltet
    RadiusToggled { radius: Radius, selected: bool },
    /// Plot-Klick, bereits auf die Domäne gerastet und geklemmt
    PointPicked { x: CoordinateX, y: f32 },
    /// Formular absenden
    SubmitRequested,
    /// Hintergrund-Auswertung abgeschlossen (Erfolg oder Fehler)
    OracleCompleted {
        request: EvalRequest,
        outcome: Result<EvalResponse, OracleError>,
    },
    /// Tabelle, Historie und Animationen leeren
    ClearRequested,
    /// Anwendung beenden
    ExitRequested,
}

/// Mutierende Commands auf dem AppState.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// X-Koordinate setzen und Formular neu validieren
    SetX { x: i32 },
    /// Y-Eingabe übernehmen, parsen und validieren
    SetYInput { text: String },
    /// Radius-Auswahl ändern
    ToggleRadius { radius: Radius, selected: bool },
    /// Punkt aus Plot-Klick in beide Formularfelder übernehmen
    SetPoint { x: CoordinateX, y: f32 },
    /// Auswertung starten (Freigabe vorausgesetzt)
    BeginSubmission,
    /// Erfolgs-Antwort in Animations- und Tabellen-Schritte übersetzen
    ApplyEvaluation {
        request: EvalRequest,
        response: EvalResponse,
    },
    /// Fehlgeschlagene Auswertung als Diagnose-Zeile ausgeben
    ReportEvaluationFailure {
        request: EvalRequest,
        error: OracleError,
    },
    /// Tabelle, Historie und Animationen leeren
    ClearResults,
    /// Anwendung beenden
    RequestExit,
}
