//! Generationen-basierte Handles auf Elemente des Weltgraphen.
//!
//! Ein Handle trägt Slot-Index plus Versionszähler. Wird ein Slot
//! freigegeben und wiederverwendet, erhöht sich die Version — alte
//! Handles zeigen dann ins Leere und schlagen bei jeder Abfrage fehl,
//! statt fremde Daten zu treffen.

use std::fmt;

/// Handle auf einen Node des Weltgraphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle {
    pub(crate) index: u32,
    pub(crate) version: u32,
}

impl NodeHandle {
    /// Slot-Index im Graphen.
    pub fn index(self) -> u32 {
        self.index
    }

    /// Version des Slots zum Zeitpunkt der Handle-Erzeugung.
    pub fn version(self) -> u32 {
        self.version
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}:{}", self.index, self.version)
    }
}

/// Handle auf eine Kante des Weltgraphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeHandle {
    pub(crate) index: u32,
    pub(crate) version: u32,
}

impl EdgeHandle {
    /// Slot-Index im Graphen.
    pub fn index(self) -> u32 {
        self.index
    }

    /// Version des Slots zum Zeitpunkt der Handle-Erzeugung.
    pub fn version(self) -> u32 {
        self.version
    }
}

impl fmt::Display for EdgeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}:{}", self.index, self.version)
    }
}
