//! Kürzester Pfad (BFS) zwischen zwei Nodes des Weltgraphen.

use std::collections::{HashMap, VecDeque};

use indexmap::IndexSet;

use crate::core::{NetGraph, NodeHandle};
use crate::shared::options::{PATH_INITIAL_CAPACITY, TRAVERSAL_INITIAL_CAPACITY};

/// Berechnet den kanten-minimalen Pfad von `start` nach `end`, beide inklusive.
///
/// Die Suche terminiert erst, wenn der Zielnode aus der Queue entnommen
/// wird — damit ist die rekonstruierte Pfadlänge garantiert minimal.
/// `start == end` liefert den Ein-Element-Pfad. Reißt die
/// Vorgängerkette beim Rekonstruieren ab (sollte bei tatsächlich
/// verbundenen Nodes nicht vorkommen), gibt es `None` statt eines
/// verstümmelten Pfads.
pub fn find_path_between(
    graph: &NetGraph,
    start: NodeHandle,
    end: NodeHandle,
) -> Option<Vec<NodeHandle>> {
    if start == end {
        return Some(vec![start]);
    }

    let mut queue = VecDeque::with_capacity(TRAVERSAL_INITIAL_CAPACITY);
    let mut visited: IndexSet<NodeHandle> = IndexSet::with_capacity(TRAVERSAL_INITIAL_CAPACITY);
    let mut predecessors: HashMap<NodeHandle, NodeHandle> =
        HashMap::with_capacity(TRAVERSAL_INITIAL_CAPACITY);

    visited.insert(start);
    queue.push_back(start);

    let mut found = false;
    while let Some(current) = queue.pop_front() {
        if current == end {
            found = true;
            break;
        }

        for &edge in graph.incident_edges(current) {
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
                predecessors.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    if !found {
        return None;
    }

    // Rückwärts über die Vorgängerkette laufen, dann umdrehen.
    let mut path = Vec::with_capacity(PATH_INITIAL_CAPACITY);
    let mut current = end;
    path.push(current);
    while current != start {
        let Some(&previous) = predecessors.get(&current) else {
            log::warn!(
                "find_path_between: Vorgängerkette von {} erreicht {} nicht",
                end,
                start
            );
            return None;
        };
        path.push(previous);
        current = previous;
    }

    path.reverse();
    Some(path)
}
