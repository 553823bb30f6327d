//! Die Zustandsmaschine des Selektionswerkzeugs.
//!
//! Verarbeitet pro Tick das Raycast-Ergebnis des Hosts und die beiden
//! diskreten Eingabesignale (Primär-/Sekundärklick). Hover-Behandlung
//! läuft in jedem Tick vor der Transitionslogik; ein Sekundärklick hat
//! Vorrang vor einem gleichzeitigen Primärklick.
//!
//! Zustandsmaschine:
//! - `NoSelection` -> `FirstNodeSelected`: Primärklick auf beliebigen Node
//! - `FirstNodeSelected` -> `BothNodesSelected`: Primärklick auf selektierbaren Node
//! - `FirstNodeSelected` -> `NoSelection`: Sekundärklick
//! - `BothNodesSelected` -> `FirstNodeSelected`: Sekundärklick

use anyhow::ensure;

use crate::core::{MarkerStore, MarkerTag, NetGraph, NodeHandle};
use crate::shared::options::MAX_SELECTED_NODES;
use crate::shared::ToolOptions;

use super::eligibility::find_eligible_nodes;
use super::highlight::{apply_path_highlight, paths_equal, swap_highlight};
use super::pathfind::find_path_between;
use super::raycast::{narrow_to_node, RaycastHit};
use super::state::{SelectionState, ToolState};

/// Eingaben eines einzelnen interaktiven Tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Raycast-Ergebnis des Hosts, sofern vorhanden
    pub raycast: Option<RaycastHit>,
    /// Primärklick in diesem Tick gedrückt
    pub primary_pressed: bool,
    /// Sekundärklick in diesem Tick gedrückt
    pub secondary_pressed: bool,
}

/// Selektionswerkzeug: Zwei-Punkt-Auswahl entlang ununterbrochener Segmente.
///
/// Besitzt Marker-Tags, Selektionsliste und Caches; der Weltgraph
/// gehört dem Host und wird pro Tick nur gelesen.
#[derive(Debug, Default)]
pub struct SelectionTool {
    options: ToolOptions,
    state: ToolState,
    markers: MarkerStore,
}

impl SelectionTool {
    /// Erstellt ein inaktives Werkzeug mit Standard-Optionen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein inaktives Werkzeug mit den übergebenen Optionen.
    pub fn with_options(options: ToolOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Aktuelle Optionen.
    pub fn options(&self) -> &ToolOptions {
        &self.options
    }

    /// Ob das Werkzeug aktiv ist.
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Aktueller Selektionszustand.
    pub fn selection_state(&self) -> SelectionState {
        self.state.state
    }

    /// Die bestätigte Selektion in Reihenfolge (0–2 Handles).
    pub fn selected_nodes(&self) -> &[NodeHandle] {
        &self.state.selected_nodes
    }

    /// Lesezugriff auf die Marker-Tags, etwa für Renderer und Tooltips.
    pub fn markers(&self) -> &MarkerStore {
        &self.markers
    }

    // ── Aktivierung ─────────────────────────────────────────────────

    /// Aktiviert das Werkzeug und betritt `NoSelection`:
    /// alle aktuell existierenden Nodes werden selektierbar.
    pub fn activate(&mut self, graph: &NetGraph) {
        if self.state.active {
            return;
        }
        self.state.active = true;
        self.state.reset();
        self.enter_no_selection(graph);
        log::debug!("SelectionTool aktiviert");
    }

    /// Deaktiviert das Werkzeug: sämtliche Marker-Tags verschwinden,
    /// Selektionsliste und Caches werden geleert. Kein Tag überlebt
    /// die Deaktivierung.
    pub fn deactivate(&mut self) {
        if !self.state.active {
            return;
        }
        self.markers.clear();
        self.state.reset();
        self.state.active = false;
        log::debug!("SelectionTool deaktiviert, alle Tags entfernt");
    }

    // ── Tick ────────────────────────────────────────────────────────

    /// Verarbeitet einen interaktiven Tick.
    ///
    /// Fehler treten nur bei internen Invariantenbrüchen auf; ungültige
    /// Nutzeraktionen verpuffen wirkungslos.
    pub fn tick(&mut self, graph: &NetGraph, input: TickInput) -> anyhow::Result<()> {
        if !self.state.active {
            return Ok(());
        }

        ensure!(
            self.state.selected_nodes.len() <= MAX_SELECTED_NODES,
            "Selektionsliste hat {} Einträge (maximal {})",
            self.state.selected_nodes.len(),
            MAX_SELECTED_NODES
        );

        let hovered = input
            .raycast
            .and_then(|hit| narrow_to_node(graph, hit, self.options.select_distance));

        self.update_hover(graph, hovered);
        self.state.last_hovered = hovered;

        if input.secondary_pressed {
            self.remove_last_point(graph);
        } else if input.primary_pressed {
            if let Some(node) = hovered {
                self.add_point(graph, node);
            }
        }

        Ok(())
    }

    // ── Hover ───────────────────────────────────────────────────────

    fn update_hover(&mut self, graph: &NetGraph, hovered: Option<NodeHandle>) {
        if !self.options.hover_highlight {
            return;
        }

        match self.state.state {
            SelectionState::NoSelection => {
                swap_highlight(graph, &mut self.markers, self.state.last_hovered, hovered);
            }
            SelectionState::FirstNodeSelected => {
                self.update_hover_path(graph, hovered);
            }
            // Keine Hover-Hervorhebung: Selektion ist abgeschlossen.
            SelectionState::BothNodesSelected => {}
        }
    }

    /// Hervorhebung des Pfads vom ersten gewählten Node zum Hover-Ziel.
    fn update_hover_path(&mut self, graph: &NetGraph, hovered: Option<NodeHandle>) {
        let target = hovered.filter(|&node| self.markers.has(node, MarkerTag::Eligible));
        let Some(target) = target else {
            self.clear_hover_highlights();
            return;
        };
        let Some(&first) = self.state.selected_nodes.first() else {
            return;
        };

        match find_path_between(graph, first, target) {
            Some(new_path) => {
                if !paths_equal(&new_path, &self.state.hover_path) {
                    apply_path_highlight(&mut self.markers, &self.state.hover_path, &new_path);
                    self.state.hover_path = new_path;
                }
            }
            // Ziel zwischenzeitlich unerreichbar: keine veralteten Marker stehen lassen.
            None => self.clear_hover_highlights(),
        }
    }

    fn clear_hover_highlights(&mut self) {
        self.markers.remove_everywhere(MarkerTag::Highlighted);
        self.state.hover_path.clear();
    }

    // ── Transitionen ────────────────────────────────────────────────

    /// Primärklick: Node in die Selektion aufnehmen.
    fn add_point(&mut self, graph: &NetGraph, node: NodeHandle) {
        if self.state.selected_nodes.contains(&node) {
            return;
        }

        match self.state.selected_nodes.len() {
            0 => {
                self.state.selected_nodes.push(node);
                self.enter_first_node_selected(graph, node);
                log::debug!("add_point: erster Node {} gewählt", node);
            }
            1 => {
                if !self.markers.has(node, MarkerTag::Eligible) {
                    log::warn!("add_point: Node {} ist nicht selektierbar, Klick ignoriert", node);
                    return;
                }
                let first = self.state.selected_nodes[0];
                self.state.selected_nodes.push(node);
                self.markers.add(node, MarkerTag::Selected);
                self.enter_both_nodes_selected(graph, first, node);
                log::debug!("add_point: zweiter Node {} gewählt", node);
            }
            // Selektion ist voll: Primärklick ohne Wirkung.
            _ => {}
        }
    }

    /// Sekundärklick: letzten Selektionspunkt entfernen.
    fn remove_last_point(&mut self, graph: &NetGraph) {
        match self.state.selected_nodes.len() {
            0 => {}
            1 => {
                let first = self.state.selected_nodes[0];
                self.markers.remove(first, MarkerTag::Selected);
                self.markers.remove(first, MarkerTag::SelectedFirst);
                self.state.selected_nodes.clear();
                self.enter_no_selection(graph);
                log::debug!("remove_last_point: zurück zu NoSelection");
            }
            _ => {
                let Some(last) = self.state.selected_nodes.pop() else {
                    return;
                };
                let first = self.state.selected_nodes[0];
                self.markers.remove(last, MarkerTag::Selected);
                self.markers.remove(last, MarkerTag::SelectedLast);

                // Zwischennodes des Pfads freigeben, der erste Node bleibt markiert.
                let interior: Vec<NodeHandle> = self
                    .markers
                    .nodes_with(MarkerTag::Selected)
                    .into_iter()
                    .filter(|&node| node != first)
                    .collect();
                self.markers.remove_batch(interior, MarkerTag::Selected);

                self.enter_first_node_selected(graph, first);
                log::debug!("remove_last_point: zurück zu FirstNodeSelected");
            }
        }
    }

    /// Eintrittsaktion `NoSelection`: alle Nodes werden selektierbar,
    /// Hover-Hervorhebungen des vorherigen Zustands verschwinden.
    fn enter_no_selection(&mut self, graph: &NetGraph) {
        self.state.state = SelectionState::NoSelection;
        self.state.eligible_nodes.clear();
        self.state.hover_path.clear();
        self.markers.remove_everywhere(MarkerTag::Highlighted);
        self.state.last_hovered = None;

        let tagged = self.markers.add_batch(graph.node_handles(), MarkerTag::Eligible);
        log::debug!("enter_no_selection: {} Nodes als selektierbar markiert", tagged);
    }

    /// Eintrittsaktion `FirstNodeSelected`: Flood-Fill ab dem ersten Node,
    /// Eligibility-Tags neu verteilen.
    fn enter_first_node_selected(&mut self, graph: &NetGraph, first: NodeHandle) {
        self.state.state = SelectionState::FirstNodeSelected;
        self.markers.add(first, MarkerTag::Selected);
        self.markers.add(first, MarkerTag::SelectedFirst);

        let eligible = find_eligible_nodes(graph, first);
        self.markers.remove_everywhere(MarkerTag::Eligible);
        self.markers.add_batch(eligible.iter().copied(), MarkerTag::Eligible);
        log::debug!(
            "enter_first_node_selected: {} Nodes erreichbar ab {}",
            eligible.len(),
            first
        );

        self.state.eligible_nodes = eligible;
        self.state.hover_path.clear();
    }

    /// Eintrittsaktion `BothNodesSelected`: Pfad markieren, Eligibility
    /// und Hervorhebung vollständig abräumen.
    fn enter_both_nodes_selected(&mut self, graph: &NetGraph, first: NodeHandle, last: NodeHandle) {
        self.state.state = SelectionState::BothNodesSelected;
        self.markers.add(last, MarkerTag::SelectedLast);

        match find_path_between(graph, first, last) {
            Some(path) => {
                if path.len() > 2 {
                    let interior = path[1..path.len() - 1].iter().copied();
                    let tagged = self.markers.add_batch(interior, MarkerTag::Selected);
                    log::debug!(
                        "enter_both_nodes_selected: {} Zwischennodes markiert",
                        tagged
                    );
                }
            }
            None => {
                log::warn!(
                    "enter_both_nodes_selected: kein Pfad zwischen {} und {}",
                    first,
                    last
                );
            }
        }

        self.markers.remove_everywhere(MarkerTag::Eligible);
        self.markers.remove_everywhere(MarkerTag::Highlighted);
        self.state.eligible_nodes.clear();
        self.state.hover_path.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::raycast::ElementHandle;
    use glam::Vec2;

    fn hover_input(node: NodeHandle) -> TickInput {
        TickInput {
            raycast: Some(RaycastHit {
                element: ElementHandle::Node(node),
                position: Vec2::ZERO,
            }),
            ..TickInput::default()
        }
    }

    #[test]
    fn disabled_hover_highlight_suppresses_all_highlighting() {
        let mut graph = NetGraph::new();
        let a = graph.add_node(Vec2::ZERO);
        let b = graph.add_node(Vec2::new(10.0, 0.0));
        graph.add_edge(a, b).unwrap();

        let mut tool = SelectionTool::with_options(ToolOptions {
            hover_highlight: false,
            ..ToolOptions::default()
        });
        tool.activate(&graph);

        tool.tick(&graph, hover_input(a)).unwrap();
        assert!(tool.markers().nodes_with(MarkerTag::Highlighted).is_empty());

        let select = TickInput {
            primary_pressed: true,
            ..hover_input(a)
        };
        tool.tick(&graph, select).unwrap();
        tool.tick(&graph, hover_input(b)).unwrap();
        assert!(tool.markers().nodes_with(MarkerTag::Highlighted).is_empty());
    }

    #[test]
    fn repeated_activation_and_deactivation_are_noops() {
        let mut graph = NetGraph::new();
        graph.add_node(Vec2::ZERO);

        let mut tool = SelectionTool::new();
        tool.deactivate();
        assert!(!tool.is_active());

        tool.activate(&graph);
        let eligible = tool.markers().nodes_with(MarkerTag::Eligible).len();
        tool.activate(&graph);
        assert_eq!(tool.markers().nodes_with(MarkerTag::Eligible).len(), eligible);

        tool.deactivate();
        tool.deactivate();
        assert_eq!(tool.markers().tagged_node_count(), 0);
    }
}
