//! Slot für das aktive Werkzeug: explizite Besitzübergabe statt
//! globalem Singleton.

use crate::core::NetGraph;

use super::controller::SelectionTool;

/// Hält höchstens ein aktives Werkzeug.
#[derive(Debug, Default)]
pub struct ToolSlot {
    active: Option<SelectionTool>,
}

impl ToolSlot {
    /// Erstellt einen leeren Slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktiviert das übergebene Werkzeug im Slot.
    ///
    /// Ein bereits aktives Werkzeug wird vorher deaktiviert (inklusive
    /// Tag-Aufräumen) und an den Aufrufer zurückgegeben.
    pub fn request_enable(
        &mut self,
        mut tool: SelectionTool,
        graph: &NetGraph,
    ) -> Option<SelectionTool> {
        let previous = self.request_disable();
        tool.activate(graph);
        self.active = Some(tool);
        previous
    }

    /// Deaktiviert das aktive Werkzeug und gibt es zurück.
    pub fn request_disable(&mut self) -> Option<SelectionTool> {
        let mut tool = self.active.take()?;
        tool.deactivate();
        Some(tool)
    }

    /// Lesezugriff auf das aktive Werkzeug.
    pub fn active(&self) -> Option<&SelectionTool> {
        self.active.as_ref()
    }

    /// Schreibzugriff auf das aktive Werkzeug (für den Tick des Hosts).
    pub fn active_mut(&mut self) -> Option<&mut SelectionTool> {
        self.active.as_mut()
    }
}
