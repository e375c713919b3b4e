//! Persistenz der Ergebnis-Historie.

pub mod history;

pub use history::{HistoryStore, ResultRow, RowOutcome};
