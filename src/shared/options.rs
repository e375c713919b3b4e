//! Zentrale Konfiguration des AreaCheck-Clients.
//!
//! `ClientOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Dienst ──────────────────────────────────────────────────────────

/// Standard-Endpoint des Auswertungsdiensts.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/calculate";
/// Anfrage-Timeout in Sekunden.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// ── Plot ────────────────────────────────────────────────────────────

/// Pixel pro Mathe-Einheit (fester Maßstab, kein Zoom).
pub const UNIT_SCALE_PX: f32 = 100.0;
/// Punkt-Radius in Screen-Pixeln.
pub const POINT_RADIUS_PX: f32 = 4.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Füllfarbe des Trefferbereichs (RGBA, Alpha = Basis-Deckkraft).
pub const REGION_FILL_COLOR: [f32; 4] = [0.24, 0.83, 0.97, 0.79];
/// Konturfarbe des Trefferbereichs (RGBA).
pub const REGION_STROKE_COLOR: [f32; 4] = [0.0, 0.39, 0.78, 1.0];
/// Füllfarbe akzeptierter Punkte (RGBA: Grün).
pub const POINT_HIT_COLOR: [f32; 4] = [0.15, 0.68, 0.38, 1.0];
/// Füllfarbe abgelehnter Punkte (RGBA: Rot).
pub const POINT_MISS_COLOR: [f32; 4] = [0.91, 0.30, 0.24, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Client-Optionen.
/// Wird als `area_check_client.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientOptions {
    // ── Dienst ──────────────────────────────────────────────────
    /// Endpoint des Auswertungsdiensts
    pub endpoint: String,
    /// Anfrage-Timeout in Sekunden
    pub request_timeout_secs: u64,

    // ── Plot ────────────────────────────────────────────────────
    /// Pixel pro Mathe-Einheit
    pub unit_scale_px: f32,
    /// Punkt-Radius in Screen-Pixeln
    pub point_radius_px: f32,

    // ── Farben ──────────────────────────────────────────────────
    /// Füllfarbe des Trefferbereichs (Alpha = Basis-Deckkraft)
    pub region_fill_color: [f32; 4],
    /// Konturfarbe des Trefferbereichs
    pub region_stroke_color: [f32; 4],
    /// Füllfarbe akzeptierter Punkte
    pub point_hit_color: [f32; 4],
    /// Füllfarbe abgelehnter Punkte
    pub point_miss_color: [f32; 4],
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            unit_scale_px: UNIT_SCALE_PX,
            point_radius_px: POINT_RADIUS_PX,
            region_fill_color: REGION_FILL_COLOR,
            region_stroke_color: REGION_STROKE_COLOR,
            point_hit_color: POINT_HIT_COLOR,
            point_miss_color: POINT_MISS_COLOR,
        }
    }
}

impl ClientOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("area_check_client"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("area_check_client.toml")
    }
}
