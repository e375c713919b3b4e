//! Sende-Ablauf: pro Radius ein Animations- und Tabellen-Schritt,
//! getaktet über die Haltedauer der Animation.
//!
//! Die Antwort des Diensts wird in eine Warteschlange aus Schritten
//! übersetzt; `poll` führt pro Frame höchstens einen fälligen Schritt aus.
//! So überlappen die Einblend-Fenster aufeinanderfolgender Radien nicht
//! und die Zahl gleichzeitiger Animationen bleibt unterhalb der
//! Verdrängungsgrenze.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::api::EvalRequest;
use crate::core::animation::PlotPoint;
use crate::core::region::Radius;
use crate::storage::ResultRow;

use super::AppState;

/// Zusätzliche Wartezeit zwischen zwei Radien, auf die Haltedauer addiert.
pub const INTER_RADIUS_EXTRA_DELAY: Duration = Duration::from_millis(2000);

/// Ein noch auszuführender Schritt der aktuellen Auswertung.
#[derive(Debug, Clone)]
pub struct PendingStep {
    /// Radius dieses Schritts
    pub radius: Radius,
    /// Punkt mit Urteil für die Punktliste des Radius
    pub point: PlotPoint,
    /// Zugehörige Tabellenzeile
    pub row: ResultRow,
}

/// Zustand des Sende-Ablaufs.
#[derive(Default)]
pub struct SubmissionState {
    /// Laufende Anfrage (höchstens eine gleichzeitig)
    pub in_flight: Option<EvalRequest>,
    /// Vom Frame-Loop abzuholende Anfrage für den Worker-Thread
    pub outbox: Option<EvalRequest>,
    /// Noch auszuführende Schritte in Anfrage-Reihenfolge
    pub queue: VecDeque<PendingStep>,
    /// Fälligkeit des nächsten Schritts; `None` = sofort fällig
    pub next_step_due: Option<Instant>,
}

impl SubmissionState {
    /// Erstellt einen leeren Sende-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` solange eine Anfrage läuft oder Schritte ausstehen.
    ///
    /// Steuert die Submit-Sperre der Oberfläche.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some() || self.outbox.is_some() || !self.queue.is_empty()
    }

    /// Verwirft alle ausstehenden Schritte und die Taktung.
    pub fn reset_steps(&mut self) {
        self.queue.clear();
        self.next_step_due = None;
    }
}

/// Führt den nächsten fälligen Schritt aus, falls vorhanden.
///
/// Reihenfolge pro Schritt: Bereich einblenden, Punkt anhängen, Zeile
/// anfügen. Folgt ein weiterer Radius, wird er erst nach
/// `Haltedauer + INTER_RADIUS_EXTRA_DELAY` fällig.
pub fn poll(state: &mut AppState, now: Instant) {
    if state.submission.queue.is_empty() {
        return;
    }
    if let Some(due) = state.submission.next_step_due {
        if now < due {
            return;
        }
    }

    let Some(step) = state.submission.queue.pop_front() else {
        return;
    };

    state.animations.show(step.radius, now);
    state.animations.add_point(step.radius, step.point, now);
    state.results.append(step.row);

    state.submission.next_step_due = if state.submission.queue.is_empty() {
        None
    } else {
        Some(now + state.animations.hold_duration() + INTER_RADIUS_EXTRA_DELAY)
    };
}
