//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Formular, Animationen,
/// Sende-Ablauf, Ergebnisse).
pub mod state;
pub mod submission;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, FormState, ResultsState, UiState};
pub use submission::{SubmissionState, INTER_RADIUS_EXTRA_DELAY};
