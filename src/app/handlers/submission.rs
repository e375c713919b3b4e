//! Handler für Start und Abschluss einer Auswertung.

use chrono::{NaiveDateTime, Utc};

use crate::api::{EvalRequest, EvalResponse, OracleError};
use crate::app::submission::PendingStep;
use crate::app::AppState;
use crate::core::animation::PlotPoint;
use crate::storage::{ResultRow, RowOutcome};

/// Anzeige-Wert für unbekannte Zellen in Diagnose-Zeilen.
const NOT_AVAILABLE: &str = "N/A";

/// Startet eine Auswertung, sofern die Freigabe es erlaubt.
///
/// Prüft die Freigabe erneut gegen den aktuellen Feldstand; ohne Freigabe
/// geht keine Anfrage ins Netz und die Oberfläche erhält eine Diagnose.
pub fn begin(state: &mut AppState) {
    state.form.revalidate();
    if !state.form.valid {
        log::warn!("Absenden ohne Freigabe abgewiesen");
        state.ui.status_message =
            Some("Formular unvollständig: X, Y und mindestens ein R wählen".to_string());
        return;
    }
    if state.submission.is_busy() {
        state.ui.status_message = Some("Auswertung läuft bereits".to_string());
        return;
    }

    let Some(request) = state.form.snapshot() else {
        return;
    };
    log::info!(
        "Auswertung angefordert: x={} y={} listR={}",
        request.x,
        request.y,
        request.list_r_param()
    );
    state.submission.in_flight = Some(request.clone());
    state.submission.outbox = Some(request);
    state.ui.status_message = None;
}

/// Übersetzt eine Erfolgs-Antwort in die Schritt-Warteschlange.
///
/// Pro Radius entsteht ein Schritt in Anfrage-Reihenfolge; der erste ist
/// sofort fällig, die Taktung der weiteren übernimmt `submission::poll`.
pub fn apply_evaluation(state: &mut AppState, request: EvalRequest, response: EvalResponse) {
    state.submission.in_flight = None;

    let time = format_server_time(&response.now);
    let exec_time = format!("{} ns", response.time);
    let base_timestamp = Utc::now().timestamp_millis();

    for (index, (radius, accepted)) in request
        .radii
        .iter()
        .zip(response.results.iter().copied())
        .enumerate()
    {
        state.submission.queue.push_back(PendingStep {
            radius: *radius,
            point: PlotPoint {
                x: request.x as f32,
                y: request.y,
                accepted,
            },
            row: ResultRow {
                x: request.x as f32,
                y: request.y,
                r: radius.label().to_string(),
                outcome: if accepted {
                    RowOutcome::Hit
                } else {
                    RowOutcome::Miss
                },
                time: time.clone(),
                exec_time: exec_time.clone(),
                // Index wahrt die Reihenfolge beim sortierten Neu-Laden
                timestamp: base_timestamp + index as i64,
            },
        });
    }
    state.submission.next_step_due = None;
}

/// Gibt eine fehlgeschlagene Auswertung als einzelne Diagnose-Zeile aus.
///
/// Ablehnungen des Diensts tragen dessen Begründung wörtlich; alle anderen
/// Fehler bleiben generisch. Es entsteht kein Animations-Zustand.
pub fn report_failure(state: &mut AppState, request: EvalRequest, error: OracleError) {
    state.submission.in_flight = None;
    state.submission.reset_steps();

    log::error!("Auswertung fehlgeschlagen: {}", error);

    let (message, time) = match &error {
        OracleError::Rejected { message, now } => (
            format!("error: {}", message),
            now.as_deref()
                .map(format_server_time)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
        OracleError::Transport(_) => ("Network error".to_string(), NOT_AVAILABLE.to_string()),
        OracleError::MalformedBody(_) | OracleError::UnexpectedStatus(_) => {
            ("error".to_string(), NOT_AVAILABLE.to_string())
        }
    };

    state.results.append(ResultRow {
        x: request.x as f32,
        y: request.y,
        r: NOT_AVAILABLE.to_string(),
        outcome: RowOutcome::Diagnostic(message),
        time,
        exec_time: NOT_AVAILABLE.to_string(),
        timestamp: Utc::now().timestamp_millis(),
    });
}

/// Formatiert den Server-Zeitstempel für die Tabelle.
///
/// Der Dienst sendet ein `LocalDateTime` ohne Zone, optional mit
/// Sekundenbruchteilen; Unlesbares bleibt wörtlich stehen.
fn format_server_time(raw: &str) -> String {
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, pattern) {
            return parsed.format("%d.%m.%Y %H:%M:%S").to_string();
        }
    }
    raw.to_string()
}
