//! Eingrenzung des Host-Raycasts auf einen selektierbaren Node.

use glam::Vec2;

use crate::core::{EdgeHandle, NetGraph, NodeHandle};

/// Vom Raycast getroffenes Graph-Element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementHandle {
    /// Treffer direkt auf einem Node
    Node(NodeHandle),
    /// Treffer auf einer Kante
    Edge(EdgeHandle),
}

/// Raycast-Ergebnis des Hosts: getroffenes Element plus Trefferposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// Getroffenes Element
    pub element: ElementHandle,
    /// Trefferposition in Weltkoordinaten
    pub position: Vec2,
}

/// Grenzt ein Raycast-Ergebnis auf einen Node ein.
///
/// Node-Treffer passieren nach Existenzprüfung unverändert. Kanten-Treffer
/// rasten auf den näheren Endpunkt ein, sofern dieser innerhalb von
/// `select_distance` liegt und strikt näher ist als der andere Endpunkt;
/// andernfalls gibt es kein verwertbares Ergebnis.
pub fn narrow_to_node(
    graph: &NetGraph,
    hit: RaycastHit,
    select_distance: f32,
) -> Option<NodeHandle> {
    match hit.element {
        ElementHandle::Node(node) => graph.node_exists(node).then_some(node),
        ElementHandle::Edge(edge) => {
            let (start, end) = graph.edge_endpoints(edge)?;
            let start_pos = graph.node_position(start)?;
            let end_pos = graph.node_position(end)?;

            let distance_to_start = hit.position.distance(start_pos);
            let distance_to_end = hit.position.distance(end_pos);

            if distance_to_start < select_distance && distance_to_start < distance_to_end {
                Some(start)
            } else if distance_to_end < select_distance && distance_to_end < distance_to_start {
                Some(end)
            } else {
                None
            }
        }
    }
}
