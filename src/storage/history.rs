//! Persistente Ergebnis-Historie.
//!
//! Die Tabellenzeilen werden als JSON neben der Binary abgelegt und beim
//! Start aufsteigend nach Zeitstempel geladen. Fehlende oder defekte
//! Dateien ergeben eine leere Historie.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Urteil einer Tabellenzeile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RowOutcome {
    /// Punkt liegt im Bereich
    Hit,
    /// Punkt liegt außerhalb
    Miss,
    /// Diagnose-Zeile (Fehlertext statt Urteil)
    Diagnostic(String),
}

/// Eine Zeile der Ergebnis-Tabelle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// X-Koordinate der Anfrage
    pub x: f32,
    /// Y-Koordinate der Anfrage
    pub y: f32,
    /// Radius-Beschriftung, `"N/A"` bei Diagnose-Zeilen
    pub r: String,
    /// Urteil oder Diagnose
    pub outcome: RowOutcome,
    /// Formatierter Server-Zeitstempel, `"N/A"` wenn unbekannt
    pub time: String,
    /// Server-Rechendauer, `"N/A"` wenn unbekannt
    pub exec_time: String,
    /// Epoch-Millisekunden beim Anfügen — Sortierschlüssel beim Laden
    pub timestamp: i64,
}

/// Dateigestützter Speicher der Ergebnis-Historie.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Erstellt einen Speicher für den gegebenen Pfad.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Ermittelt den Standard-Pfad neben der Binary.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("area_check_client"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("area_check_history.json")
    }

    /// Lädt alle Zeilen, aufsteigend nach Zeitstempel.
    ///
    /// Fehlende oder unlesbare Datei: leere Historie.
    pub fn load(&self) -> Vec<ResultRow> {
        let mut rows: Vec<ResultRow> = match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(rows) => rows,
                Err(e) => {
                    log::warn!("Historie defekt, beginne leer: {}", e);
                    Vec::new()
                }
            },
            Err(_) => {
                log::info!("Keine Historie gefunden, beginne leer");
                Vec::new()
            }
        };
        rows.sort_by_key(|row| row.timestamp);
        rows
    }

    /// Schreibt den kompletten Zeilen-Bestand.
    pub fn save(&self, rows: &[ResultRow]) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(rows)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> HistoryStore {
        let path = std::env::temp_dir().join(format!(
            "area_check_history_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        HistoryStore::new(path)
    }

    fn row(timestamp: i64) -> ResultRow {
        ResultRow {
            x: 1.0,
            y: -0.5,
            r: "2".to_string(),
            outcome: RowOutcome::Hit,
            time: "15.01.2025 10:00:00".to_string(),
            exec_time: "4100 ns".to_string(),
            timestamp,
        }
    }

    #[test]
    fn load_without_file_is_empty() {
        let store = temp_store("missing");

        assert!(store.load().is_empty());
    }

    #[test]
    fn save_and_load_round_trip_sorted_by_timestamp() {
        let store = temp_store("roundtrip");
        let rows = vec![row(300), row(100), row(200)];

        store.save(&rows).expect("Speichern muss gelingen");
        let loaded = store.load();

        let stamps: Vec<i64> = loaded.iter().map(|r| r.timestamp).collect();
        assert_eq!(stamps, vec![100, 200, 300]);
    }

    #[test]
    fn corrupt_file_falls_back_to_empty() {
        let store = temp_store("corrupt");
        std::fs::write(
            std::env::temp_dir().join(format!("area_check_history_corrupt_{}.json", std::process::id())),
            "not json",
        )
        .unwrap();

        assert!(store.load().is_empty());
    }
}
