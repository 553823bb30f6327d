//! Segment-Select Library.
//! Zwei-Punkt-Selektion entlang ununterbrochener Straßensegmente,
//! als Library exportiert für Tests und Einbettung in Hosts.

pub mod core;
pub mod shared;
pub mod tool;

pub use core::{EdgeHandle, MarkerStore, MarkerTag, MarkerTagSet, NetGraph, NodeHandle};
pub use shared::{ToolOptions, MAX_SELECTED_NODES, SELECT_DISTANCE_DEFAULT};
pub use tool::{
    find_eligible_nodes, find_path_between, narrow_to_node, ElementHandle, RaycastHit,
    SelectionState, SelectionTool, TickInput, ToolSlot, ToolState,
};
