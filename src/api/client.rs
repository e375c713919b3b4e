//! HTTP-Client des Auswertungsdiensts.
//!
//! Dünner blockierender Wrapper um `GET <endpoint>?x=..&y=..&listR=..`.
//! Die Antwort-Interpretation liegt als reine Funktion in
//! `parse_response`, damit sie ohne Netz testbar bleibt.

use std::sync::mpsc::Sender;
use std::time::Duration;

use super::types::{EvalRequest, EvalResponse, OracleError, RejectionBody};

/// Verbindungs-Timeout unabhängig vom Anfrage-Timeout.
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Ergebnis einer Hintergrund-Auswertung samt auslösender Anfrage.
pub type OracleEvent = (EvalRequest, Result<EvalResponse, OracleError>);

/// Blockierender Client; klonbar für den Worker-Thread.
#[derive(Clone)]
pub struct OracleClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl OracleClient {
    /// Erstellt einen Client für den gegebenen Endpoint.
    pub fn new(endpoint: String, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, endpoint })
    }

    /// Führt eine Auswertung synchron aus.
    pub fn evaluate(&self, request: &EvalRequest) -> Result<EvalResponse, OracleError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("x", request.x.to_string()),
                ("y", request.y.to_string()),
                ("listR", request.list_r_param()),
            ])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| OracleError::Transport(e.to_string()))?;

        parse_response(request, status, &body)
    }
}

/// Startet eine Auswertung auf einem Hintergrund-Thread.
///
/// Das Ergebnis kommt über den Kanal zurück und wird vom Frame-Loop
/// abgeholt; ein geschlossener Empfänger (Teardown) wird still ignoriert.
pub fn spawn_evaluation(client: OracleClient, request: EvalRequest, tx: Sender<OracleEvent>) {
    std::thread::spawn(move || {
        log::debug!(
            "Auswertung gestartet: x={} y={} listR={}",
            request.x,
            request.y,
            request.list_r_param()
        );
        let outcome = client.evaluate(&request);
        if tx.send((request, outcome)).is_err() {
            log::debug!("Empfänger geschlossen, Auswertungs-Ergebnis verworfen");
        }
    });
}

/// Interpretiert Status und Körper einer Dienst-Antwort.
///
/// 2xx: Erfolgs-JSON, dessen `results`-Länge zur Anfrage passen muss.
/// 400: strukturierte Ablehnung mit `message`.
/// Sonst: opaker Fehler ohne Körper-Interpretation.
pub fn parse_response(
    request: &EvalRequest,
    status: u16,
    body: &str,
) -> Result<EvalResponse, OracleError> {
    match status {
        200..=299 => {
            let parsed: EvalResponse = serde_json::from_str(body)
                .map_err(|e| OracleError::MalformedBody(e.to_string()))?;
            if parsed.results.len() != request.radii.len() {
                return Err(OracleError::MalformedBody(format!(
                    "expected {} results, got {}",
                    request.radii.len(),
                    parsed.results.len()
                )));
            }
            Ok(parsed)
        }
        400 => match serde_json::from_str::<RejectionBody>(body) {
            Ok(rejection) => Err(OracleError::Rejected {
                message: rejection.message,
                now: rejection.now,
            }),
            Err(_) => Err(OracleError::UnexpectedStatus(400)),
        },
        other => Err(OracleError::UnexpectedStatus(other)),
    }
}
