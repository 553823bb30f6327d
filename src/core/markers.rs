//! Marker-Tags als sparse Seitentabelle über Node-Handles.
//!
//! Die Tags sind rein werkzeug-lokale Annotationen (Selektion,
//! Eligibility, Hover-Hervorhebung) und gehören nicht zum persistenten
//! Graphen. Alle Operationen sind idempotent; Batch-Operationen melden
//! die Anzahl tatsächlich durchgeführter Mutationen.

use std::collections::HashMap;

use super::NodeHandle;

/// Ein einzelnes Marker-Tag auf einem Node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerTag {
    /// Gültiger Kandidat für die (zweite) Selektion
    Eligible,
    /// Teil der bestätigten Selektion (inkl. Pfad-Zwischennodes)
    Selected,
    /// Erster Endpunkt der Selektion
    SelectedFirst,
    /// Zweiter Endpunkt der Selektion
    SelectedLast,
    /// Hover-Hervorhebung
    Highlighted,
}

impl MarkerTag {
    /// Alle fünf Tags, für Aufräum-Schleifen.
    pub const ALL: [MarkerTag; 5] = [
        MarkerTag::Eligible,
        MarkerTag::Selected,
        MarkerTag::SelectedFirst,
        MarkerTag::SelectedLast,
        MarkerTag::Highlighted,
    ];

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Bitset der fünf Marker-Tags eines einzelnen Nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkerTagSet(u8);

impl MarkerTagSet {
    /// Prüft ob das Tag gesetzt ist.
    pub fn contains(self, tag: MarkerTag) -> bool {
        self.0 & tag.bit() != 0
    }

    /// Setzt das Tag; `true` wenn es vorher fehlte.
    pub fn insert(&mut self, tag: MarkerTag) -> bool {
        let changed = !self.contains(tag);
        self.0 |= tag.bit();
        changed
    }

    /// Entfernt das Tag; `true` wenn es vorher gesetzt war.
    pub fn remove(&mut self, tag: MarkerTag) -> bool {
        let changed = self.contains(tag);
        self.0 &= !tag.bit();
        changed
    }

    /// `true` wenn kein Tag gesetzt ist.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Seitentabelle: Node-Handle → gesetzte Marker-Tags.
///
/// Nodes ohne Tags belegen keinen Eintrag; Einträge verschwinden,
/// sobald ihr letztes Tag entfernt wird.
#[derive(Debug, Clone, Default)]
pub struct MarkerStore {
    tags: HashMap<NodeHandle, MarkerTagSet>,
}

impl MarkerStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prüft ob ein Node das Tag trägt.
    pub fn has(&self, node: NodeHandle, tag: MarkerTag) -> bool {
        self.tags.get(&node).is_some_and(|set| set.contains(tag))
    }

    /// Setzt ein Tag auf einem Node; `true` bei tatsächlicher Mutation.
    pub fn add(&mut self, node: NodeHandle, tag: MarkerTag) -> bool {
        self.tags.entry(node).or_default().insert(tag)
    }

    /// Entfernt ein Tag von einem Node; `true` bei tatsächlicher Mutation.
    pub fn remove(&mut self, node: NodeHandle, tag: MarkerTag) -> bool {
        let Some(set) = self.tags.get_mut(&node) else {
            return false;
        };
        let changed = set.remove(tag);
        if set.is_empty() {
            self.tags.remove(&node);
        }
        changed
    }

    /// Setzt ein Tag auf allen übergebenen Nodes (Batch).
    ///
    /// Liefert die Anzahl der Nodes, auf denen das Tag vorher fehlte.
    pub fn add_batch<I>(&mut self, nodes: I, tag: MarkerTag) -> usize
    where
        I: IntoIterator<Item = NodeHandle>,
    {
        nodes
            .into_iter()
            .filter(|&node| self.add(node, tag))
            .count()
    }

    /// Entfernt ein Tag von allen übergebenen Nodes (Batch).
    pub fn remove_batch<I>(&mut self, nodes: I, tag: MarkerTag) -> usize
    where
        I: IntoIterator<Item = NodeHandle>,
    {
        nodes
            .into_iter()
            .filter(|&node| self.remove(node, tag))
            .count()
    }

    /// Entfernt ein Tag von sämtlichen Nodes, die es tragen.
    pub fn remove_everywhere(&mut self, tag: MarkerTag) -> usize {
        let tagged = self.nodes_with(tag);
        self.remove_batch(tagged, tag)
    }

    /// Alle Nodes, die das Tag tragen (ungeordnet).
    pub fn nodes_with(&self, tag: MarkerTag) -> Vec<NodeHandle> {
        self.tags
            .iter()
            .filter(|(_, set)| set.contains(tag))
            .map(|(&node, _)| node)
            .collect()
    }

    /// Anzahl der Nodes mit mindestens einem Tag.
    pub fn tagged_node_count(&self) -> usize {
        self.tags.len()
    }

    /// Entfernt sämtliche Tags von sämtlichen Nodes.
    pub fn clear(&mut self) {
        self.tags.clear();
    }
}
