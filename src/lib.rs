//! AreaCheck Client Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod api;
pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod storage;
pub mod ui;

pub use api::{EvalRequest, EvalResponse, OracleClient, OracleError};
pub use app::{
    AppCommand, AppController, AppIntent, AppState, FormState, SubmissionState,
    INTER_RADIUS_EXTRA_DELAY,
};
pub use core::{
    AnimationManager, CoordinateX, FadePhase, PlotPoint, PlotTransform, Radius, ValidationError,
};
pub use shared::ClientOptions;
pub use storage::{HistoryStore, ResultRow, RowOutcome};
