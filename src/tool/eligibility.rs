//! Flood-Fill der selektierbaren Nodes ab einem Startpunkt.
//!
//! Die Traversierung läuft über inzidente Kanten in alle Richtungen und
//! stoppt an Kreuzungen (mehr als zwei inzidente Kanten) — die Kreuzung
//! selbst bleibt erreichbar, wird aber nicht weiter expandiert. Einzige
//! Ausnahme: der Startnode wird immer expandiert, auch wenn er selbst
//! eine Kreuzung ist.

use std::collections::VecDeque;

use indexmap::IndexSet;

use crate::core::{NetGraph, NodeHandle};
use crate::shared::options::TRAVERSAL_INITIAL_CAPACITY;

/// Kantengrad, ab dem ein Node als Kreuzung gilt und nicht expandiert wird.
const JUNCTION_DEGREE: usize = 2;

/// Findet alle ab `start` über ununterbrochene Segmente erreichbaren Nodes.
///
/// Der Startnode ist immer enthalten, auch ohne inzidente Kanten.
/// Veraltete Kanten und verschwundene Endpunkte werden übersprungen,
/// ohne die Traversierung abzubrechen. Das Ergebnis listet die Nodes in
/// BFS-Besuchsreihenfolge.
pub fn find_eligible_nodes(graph: &NetGraph, start: NodeHandle) -> IndexSet<NodeHandle> {
    let mut visited: IndexSet<NodeHandle> =
        IndexSet::with_capacity(TRAVERSAL_INITIAL_CAPACITY);
    let mut to_visit = VecDeque::with_capacity(TRAVERSAL_INITIAL_CAPACITY);

    visited.insert(start);
    to_visit.push_back(start);

    while let Some(current) = to_visit.pop_front() {
        let incident = graph.incident_edges(current);

        // Hinter Kreuzungen nicht weiterlaufen — außer am Startnode.
        if incident.len() > JUNCTION_DEGREE && current != start {
            continue;
        }

        for &edge in incident {
            let Some((edge_start, edge_end)) = graph.edge_endpoints(edge) else {
                continue;
            };
            let neighbor = if edge_start == current {
                edge_end
            } else {
                edge_start
            };
            if !graph.node_exists(neighbor) {
                continue;
            }

            if visited.insert(neighbor) {
                to_visit.push_back(neighbor);
            }
        }
    }

    log::debug!(
        "find_eligible_nodes: {} selektierbare Nodes ab {}",
        visited.len(),
        start
    );
    visited
}
