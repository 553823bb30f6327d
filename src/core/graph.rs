//! Der Weltgraph: Nodes und Kanten in versionierten Slot-Arenen.
//!
//! Der Graph gehört dem Host und kann zwischen Ticks mutieren. Das
//! Selektionswerkzeug nutzt ausschließlich die Lese-Oberfläche; jede
//! Abfrage toleriert veraltete Handles und antwortet mit "nicht
//! gefunden" statt zu panicken.

use glam::Vec2;

use super::{EdgeHandle, NodeHandle};

/// Ein wiederverwendbarer Slot mit Versionszähler.
#[derive(Debug, Clone)]
struct Slot<T> {
    version: u32,
    data: Option<T>,
}

#[derive(Debug, Clone)]
struct NodeData {
    position: Vec2,
    incident: Vec<EdgeHandle>,
}

#[derive(Debug, Clone)]
struct EdgeData {
    start: NodeHandle,
    end: NodeHandle,
}

/// Container für das gesamte Straßennetzwerk.
///
/// Slots freigegebener Elemente landen in einer Freelist; bei
/// Wiederverwendung sorgt die erhöhte Version dafür, dass alte Handles
/// ungültig bleiben.
#[derive(Debug, Clone, Default)]
pub struct NetGraph {
    nodes: Vec<Slot<NodeData>>,
    edges: Vec<Slot<EdgeData>>,
    free_nodes: Vec<u32>,
    free_edges: Vec<u32>,
}

impl NetGraph {
    /// Erstellt einen leeren Graphen.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Host-Mutationen ─────────────────────────────────────────────

    /// Fügt einen Node an der gegebenen Weltposition hinzu.
    pub fn add_node(&mut self, position: Vec2) -> NodeHandle {
        let data = NodeData {
            position,
            incident: Vec::new(),
        };

        if let Some(index) = self.free_nodes.pop() {
            let slot = &mut self.nodes[index as usize];
            slot.data = Some(data);
            NodeHandle {
                index,
                version: slot.version,
            }
        } else {
            let index = self.nodes.len() as u32;
            self.nodes.push(Slot {
                version: 0,
                data: Some(data),
            });
            NodeHandle { index, version: 0 }
        }
    }

    /// Fügt eine ungerichtete Kante zwischen zwei Nodes hinzu.
    ///
    /// Schlägt fehl, wenn einer der Nodes nicht (mehr) existiert oder
    /// beide Endpunkte identisch sind.
    pub fn add_edge(&mut self, start: NodeHandle, end: NodeHandle) -> Option<EdgeHandle> {
        if start == end || !self.node_exists(start) || !self.node_exists(end) {
            return None;
        }

        let data = EdgeData { start, end };
        let handle = if let Some(index) = self.free_edges.pop() {
            let slot = &mut self.edges[index as usize];
            slot.data = Some(data);
            EdgeHandle {
                index,
                version: slot.version,
            }
        } else {
            let index = self.edges.len() as u32;
            self.edges.push(Slot {
                version: 0,
                data: Some(data),
            });
            EdgeHandle { index, version: 0 }
        };

        self.node_data_mut(start)?.incident.push(handle);
        self.node_data_mut(end)?.incident.push(handle);
        Some(handle)
    }

    /// Entfernt einen Node inklusive aller inzidenten Kanten.
    pub fn remove_node(&mut self, handle: NodeHandle) -> bool {
        let Some(data) = self.node_data(handle) else {
            return false;
        };

        let incident = data.incident.clone();
        for edge in incident {
            self.remove_edge(edge);
        }

        let slot = &mut self.nodes[handle.index as usize];
        slot.data = None;
        slot.version = slot.version.wrapping_add(1);
        self.free_nodes.push(handle.index);
        true
    }

    /// Entfernt eine Kante und trägt sie bei beiden Endpunkten aus.
    pub fn remove_edge(&mut self, handle: EdgeHandle) -> bool {
        let Some(data) = self.edge_data(handle) else {
            return false;
        };

        let (start, end) = (data.start, data.end);
        for endpoint in [start, end] {
            if let Some(node) = self.node_data_mut(endpoint) {
                node.incident.retain(|&e| e != handle);
            }
        }

        let slot = &mut self.edges[handle.index as usize];
        slot.data = None;
        slot.version = slot.version.wrapping_add(1);
        self.free_edges.push(handle.index);
        true
    }

    // ── Lese-Oberfläche ─────────────────────────────────────────────

    /// Prüft ob der Node hinter dem Handle noch existiert.
    pub fn node_exists(&self, handle: NodeHandle) -> bool {
        self.node_data(handle).is_some()
    }

    /// Prüft ob die Kante hinter dem Handle noch existiert.
    pub fn edge_exists(&self, handle: EdgeHandle) -> bool {
        self.edge_data(handle).is_some()
    }

    /// Weltposition eines Nodes.
    pub fn node_position(&self, handle: NodeHandle) -> Option<Vec2> {
        self.node_data(handle).map(|d| d.position)
    }

    /// Inzidente Kanten eines Nodes; leer bei veraltetem Handle.
    pub fn incident_edges(&self, handle: NodeHandle) -> &[EdgeHandle] {
        self.node_data(handle)
            .map(|d| d.incident.as_slice())
            .unwrap_or(&[])
    }

    /// Beide Endpunkte einer Kante.
    pub fn edge_endpoints(&self, handle: EdgeHandle) -> Option<(NodeHandle, NodeHandle)> {
        self.edge_data(handle).map(|d| (d.start, d.end))
    }

    /// Anzahl lebender Nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|s| s.data.is_some()).count()
    }

    /// Iteriert über die Handles aller lebenden Nodes.
    pub fn node_handles(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.nodes.iter().enumerate().filter_map(|(index, slot)| {
            slot.data.as_ref().map(|_| NodeHandle {
                index: index as u32,
                version: slot.version,
            })
        })
    }

    // ── Intern ──────────────────────────────────────────────────────

    fn node_data(&self, handle: NodeHandle) -> Option<&NodeData> {
        self.nodes
            .get(handle.index as usize)
            .filter(|slot| slot.version == handle.version)
            .and_then(|slot| slot.data.as_ref())
    }

    fn node_data_mut(&mut self, handle: NodeHandle) -> Option<&mut NodeData> {
        self.nodes
            .get_mut(handle.index as usize)
            .filter(|slot| slot.version == handle.version)
            .and_then(|slot| slot.data.as_mut())
    }

    fn edge_data(&self, handle: EdgeHandle) -> Option<&EdgeData> {
        self.edges
            .get(handle.index as usize)
            .filter(|slot| slot.version == handle.version)
            .and_then(|slot| slot.data.as_ref())
    }
}
