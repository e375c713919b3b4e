//! Application Controller für zentrale Event-Verarbeitung.

use std::time::Instant;

use super::{submission, AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Formular ===
            AppCommand::SetX { x } => handlers::form::set_x(state, x),
            AppCommand::SetYInput { text } => handlers::form::set_y_input(state, text),
            AppCommand::ToggleRadius { radius, selected } => {
                handlers::form::toggle_radius(state, radius, selected)
            }
            AppCommand::SetPoint { x, y } => handlers::form::set_point(state, x, y),

            // === Auswertung ===
            AppCommand::BeginSubmission => handlers::submission::begin(state),
            AppCommand::ApplyEvaluation { request, response } => {
                handlers::submission::apply_evaluation(state, request, response)
            }
            AppCommand::ReportEvaluationFailure { request, error } => {
                handlers::submission::report_failure(state, request, error)
            }

            // === Tabelle & Anwendungssteuerung ===
            AppCommand::ClearResults => handlers::results::clear(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Treibt zeitgesteuerte Abläufe bis `now` voran.
    ///
    /// Wird einmal pro Frame aufgerufen: erst die Fade-Ketten, dann der
    /// nächste fällige Sende-Schritt. Kein Command — der Frame-Takt gehört
    /// nicht ins Command-Log.
    pub fn advance(&mut self, state: &mut AppState, now: Instant) {
        state.animations.tick(now);
        submission::poll(state, now);
    }
}
