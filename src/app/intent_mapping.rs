//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::XSelected { x } => vec![AppCommand::SetX { x }],
        AppIntent::YInputChanged { text } => vec![AppCommand::SetYInput { text }],
        AppIntent::RadiusToggled { radius, selected } => {
            vec![AppCommand::ToggleRadius { radius, selected }]
        }
        AppIntent::PointPicked { x, y } => vec![AppCommand::SetPoint { x, y }],
        AppIntent::SubmitRequested => vec![AppCommand::BeginSubmission],
        AppIntent::OracleCompleted { request, outcome } => match outcome {
            Ok(response) => vec![AppCommand::ApplyEvaluation { request, response }],
            Err(error) => vec![AppCommand::ReportEvaluationFailure { request, error }],
        },
        AppIntent::ClearRequested => vec![AppCommand::ClearResults],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests {
    use super::map_intent_to_commands;
    use crate::api::{EvalRequest, EvalResponse, OracleError};
    use crate::app::{AppCommand, AppIntent, AppState};
    use crate::core::region::Radius;

    fn request() -> EvalRequest {
        EvalRequest {
            x: 0,
            y: 0.0,
            radii: vec![Radius::R1],
        }
    }

    #[test]
    fn submit_requested_maps_to_begin_submission() {
        let state = AppState::new();

        let commands = map_intent_to_commands(&state, AppIntent::SubmitRequested);

        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], AppCommand::BeginSubmission));
    }

    #[test]
    fn oracle_success_maps_to_apply_evaluation() {
        let state = AppState::new();
        let response = EvalResponse {
            results: vec![true],
            now: "2025-01-15T10:00:00".to_string(),
            time: "4100".to_string(),
        };

        let commands = map_intent_to_commands(
            &state,
            AppIntent::OracleCompleted {
                request: request(),
                outcome: Ok(response),
            },
        );

        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], AppCommand::ApplyEvaluation { .. }));
    }

    #[test]
    fn oracle_failure_maps_to_report_failure() {
        let state = AppState::new();

        let commands = map_intent_to_commands(
            &state,
            AppIntent::OracleCompleted {
                request: request(),
                outcome: Err(OracleError::Transport("connection refused".to_string())),
            },
        );

        assert_eq!(commands.len(), 1);
        assert!(matches!(
            commands[0],
            AppCommand::ReportEvaluationFailure { .. }
        ));
    }

    #[test]
    fn radius_toggle_maps_to_command_with_payload() {
        let state = AppState::new();

        let commands = map_intent_to_commands(
            &state,
            AppIntent::RadiusToggled {
                radius: Radius::R2_5,
                selected: true,
            },
        );

        assert_eq!(commands.len(), 1);
        assert!(matches!(
            commands[0],
            AppCommand::ToggleRadius {
                radius: Radius::R2_5,
                selected: true
            }
        ));
    }
}
