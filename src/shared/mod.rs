//! Geteilte Typen und Konfiguration für layer-übergreifende Verträge.

pub mod options;

pub use options::ToolOptions;
pub use options::{MAX_SELECTED_NODES, SELECT_DISTANCE_DEFAULT};
