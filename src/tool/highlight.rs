//! Delta-Updates der Hover-Hervorhebung.
//!
//! Statt bei jedem Tick alle Hervorhebungen zu löschen und neu zu
//! setzen, wird nur die Differenz zwischen altem und neuem Pfad
//! angewendet. Bei unverändertem Pfad passiert gar nichts.

use indexmap::IndexSet;

use crate::core::{MarkerStore, MarkerTag, NetGraph, NodeHandle};

/// Vergleicht zwei Pfade über Länge und elementweise Handle-Gleichheit.
pub fn paths_equal(a: &[NodeHandle], b: &[NodeHandle]) -> bool {
    a == b
}

/// Wendet das Hervorhebungs-Delta zwischen altem und neuem Pfad an.
///
/// Nodes des alten Pfads, die im neuen fehlen, verlieren `Highlighted`;
/// Nodes des neuen Pfads erhalten es, sofern es fehlt. Liefert die
/// Anzahl tatsächlich durchgeführter Tag-Mutationen — bei identischen
/// Pfaden also 0.
pub fn apply_path_highlight(
    markers: &mut MarkerStore,
    old_path: &[NodeHandle],
    new_path: &[NodeHandle],
) -> usize {
    if paths_equal(old_path, new_path) {
        return 0;
    }

    let new_set: IndexSet<NodeHandle> = new_path.iter().copied().collect();
    let mut mutations = 0;

    for &node in old_path {
        if !new_set.contains(&node) && markers.remove(node, MarkerTag::Highlighted) {
            mutations += 1;
        }
    }
    for &node in new_path {
        if markers.add(node, MarkerTag::Highlighted) {
            mutations += 1;
        }
    }

    mutations
}

/// Einzelnode-Tausch der Hervorhebung (Zustand ohne Selektion).
///
/// Entfernen und Setzen sind jeweils durch Existenzprüfung und
/// Idempotenz abgesichert; `old == new` ist ein No-op.
pub fn swap_highlight(
    graph: &NetGraph,
    markers: &mut MarkerStore,
    old: Option<NodeHandle>,
    new: Option<NodeHandle>,
) -> usize {
    if old == new {
        return 0;
    }

    let mut mutations = 0;
    if let Some(node) = old {
        if markers.remove(node, MarkerTag::Highlighted) {
            mutations += 1;
        }
    }
    if let Some(node) = new {
        if graph.node_exists(node) && markers.add(node, MarkerTag::Highlighted) {
            mutations += 1;
        }
    }

    mutations
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn node(index: u32) -> NodeHandle {
        NodeHandle { index, version: 0 }
    }

    #[test]
    fn identical_paths_produce_zero_mutations() {
        let mut markers = MarkerStore::new();
        let path = vec![node(1), node(2), node(3)];
        apply_path_highlight(&mut markers, &[], &path);

        let mutations = apply_path_highlight(&mut markers, &path, &path);
        assert_eq!(mutations, 0);
    }

    #[test]
    fn delta_is_minimal_for_overlapping_paths() {
        let mut markers = MarkerStore::new();
        let old = vec![node(1), node(2), node(3)];
        let new = vec![node(1), node(2), node(4)];
        apply_path_highlight(&mut markers, &[], &old);

        // Nur node(3) verliert, nur node(4) erhält das Tag.
        let mutations = apply_path_highlight(&mut markers, &old, &new);
        assert_eq!(mutations, 2);
        assert!(!markers.has(node(3), MarkerTag::Highlighted));
        assert!(markers.has(node(4), MarkerTag::Highlighted));
        assert!(markers.has(node(1), MarkerTag::Highlighted));
    }

    #[test]
    fn clearing_removes_every_old_highlight() {
        let mut markers = MarkerStore::new();
        let old = vec![node(1), node(2)];
        apply_path_highlight(&mut markers, &[], &old);

        let mutations = apply_path_highlight(&mut markers, &old, &[]);
        assert_eq!(mutations, 2);
        assert!(markers.nodes_with(MarkerTag::Highlighted).is_empty());
    }

    #[test]
    fn swap_is_noop_for_same_node_and_checks_existence() {
        let mut graph = NetGraph::new();
        let a = graph.add_node(Vec2::ZERO);
        let b = graph.add_node(Vec2::ONE);
        let mut markers = MarkerStore::new();

        assert_eq!(swap_highlight(&graph, &mut markers, None, Some(a)), 1);
        assert_eq!(swap_highlight(&graph, &mut markers, Some(a), Some(a)), 0);

        graph.remove_node(b);
        // Toter Ziel-Node: nur das Entfernen greift.
        assert_eq!(swap_highlight(&graph, &mut markers, Some(a), Some(b)), 1);
        assert!(!markers.has(b, MarkerTag::Highlighted));
    }
}
