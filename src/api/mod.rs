//! Anbindung an den entfernten Auswertungsdienst.

pub mod client;
pub mod types;

pub use client::{parse_response, spawn_evaluation, OracleClient, OracleEvent};
pub use types::{EvalRequest, EvalResponse, OracleError};
