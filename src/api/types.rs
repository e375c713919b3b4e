//! Anfrage- und Antwort-Typen des Auswertungsdiensts.

use serde::Deserialize;

use crate::core::region::Radius;

/// Eine validierte Auswertungs-Anfrage: Punkt plus Radius-Liste.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalRequest {
    /// X-Koordinate (Domänen-Mitglied)
    pub x: i32,
    /// Y-Koordinate
    pub y: f32,
    /// Angefragte Radien in Auswahl-Reihenfolge
    pub radii: Vec<Radius>,
}

impl EvalRequest {
    /// `listR`-Query-Parameter: Radien kommagetrennt in Anfrage-Reihenfolge.
    pub fn list_r_param(&self) -> String {
        self.radii
            .iter()
            .map(|r| r.label())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Erfolgs-Antwort des Diensts.
///
/// `results` trägt genau ein Urteil pro angefragtem Radius, in
/// Anfrage-Reihenfolge. `time` ist die Server-Rechendauer in Nanosekunden.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvalResponse {
    /// Urteile in Anfrage-Reihenfolge
    pub results: Vec<bool>,
    /// Server-Zeitstempel
    pub now: String,
    /// Rechendauer in Nanosekunden
    pub time: String,
}

/// Körper einer Ablehnung (HTTP 400).
#[derive(Debug, Clone, Deserialize)]
pub struct RejectionBody {
    /// Begründung des Diensts
    pub message: String,
    /// Server-Zeitstempel
    pub now: Option<String>,
}

/// Fehler der Dienst-Kommunikation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OracleError {
    /// Keine Antwort erhalten (DNS, Verbindung, Timeout)
    #[error("network error: {0}")]
    Transport(String),
    /// Strukturierte Ablehnung des Diensts (HTTP 400)
    #[error("{message}")]
    Rejected {
        message: String,
        now: Option<String>,
    },
    /// Antwort-Körper nicht verwertbar
    #[error("malformed server response: {0}")]
    MalformedBody(String),
    /// Sonstiger Nicht-2xx-Status, Körper wird nicht interpretiert
    #[error("unexpected server status: HTTP {0}")]
    UnexpectedStatus(u16),
}
