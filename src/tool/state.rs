//! Zustand des Selektionswerkzeugs über Ticks hinweg.

use indexmap::IndexSet;

use crate::core::NodeHandle;

/// Zustand der Zwei-Punkt-Selektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Keine Selektion: alle Nodes sind selektierbar
    #[default]
    NoSelection,
    /// Erster Node gewählt: nur erreichbare Nodes sind selektierbar
    FirstNodeSelected,
    /// Beide Nodes gewählt: Pfad steht, keine weitere Selektion
    BothNodesSelected,
}

/// Vom Werkzeug gehaltener Zustand: Selektionsliste und Caches.
///
/// Die drei Caches (Selektionsliste, selektierbare Nodes, Hover-Pfad)
/// sind die einzigen tick-übergreifenden Puffer; alle anderen
/// Arbeitspuffer leben nur innerhalb eines Algorithmus-Aufrufs.
#[derive(Debug, Default)]
pub struct ToolState {
    /// Aktueller Selektionszustand
    pub state: SelectionState,
    /// Werkzeug aktiv? Vor der Aktivierung trägt kein Node ein Tag.
    pub active: bool,
    /// Geordnete Selektionsliste, maximal zwei Einträge
    pub selected_nodes: Vec<NodeHandle>,
    /// Cache der selektierbaren Nodes (nur im Zustand `FirstNodeSelected` gültig)
    pub eligible_nodes: IndexSet<NodeHandle>,
    /// Cache des aktuellen Hover-Pfads für Delta-Hervorhebung
    pub hover_path: Vec<NodeHandle>,
    /// Zuletzt gehoverter Node des Vortick
    pub last_hovered: Option<NodeHandle>,
}

impl ToolState {
    /// Leert Selektionsliste, Caches und Hover-Tracking.
    pub fn reset(&mut self) {
        self.state = SelectionState::NoSelection;
        self.selected_nodes.clear();
        self.eligible_nodes.clear();
        self.hover_path.clear();
        self.last_hovered = None;
    }
}
