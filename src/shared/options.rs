//! Zentrale Konfiguration für das Selektionswerkzeug.
//!
//! `ToolOptions` enthält die zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Selektion ───────────────────────────────────────────────────────

/// Maximale Distanz (Welteinheiten), innerhalb derer ein Kanten-Treffer
/// auf den näheren Endpunkt einrastet.
pub const SELECT_DISTANCE_DEFAULT: f32 = 16.0;
/// Maximale Anzahl gleichzeitig selektierter Nodes.
pub const MAX_SELECTED_NODES: usize = 2;

// ── Traversierung ───────────────────────────────────────────────────

/// Startkapazität der BFS-Arbeitspuffer (Queue, Visited-Set).
pub const TRAVERSAL_INITIAL_CAPACITY: usize = 64;
/// Startkapazität des Pfad-Puffers.
pub const PATH_INITIAL_CAPACITY: usize = 16;

/// Laufzeit-Optionen des Selektionswerkzeugs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOptions {
    /// Snap-Distanz für Kanten-Treffer in Welteinheiten.
    pub select_distance: f32,
    /// Hover-Hervorhebung aktiv (Pfad-Vorschau im Zustand "erster Node gewählt").
    pub hover_highlight: bool,
}

impl Default for ToolOptions {
    fn default() -> Self {
        Self {
            select_distance: SELECT_DISTANCE_DEFAULT,
            hover_highlight: true,
        }
    }
}

impl ToolOptions {
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
}
