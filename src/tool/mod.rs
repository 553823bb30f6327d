//! Das Selektionswerkzeug: Zustandsmaschine, Traversierung, Hervorhebung.

pub mod controller;
pub mod eligibility;
pub mod highlight;
pub mod pathfind;
pub mod raycast;
pub mod slot;
pub mod state;

pub use controller::{SelectionTool, TickInput};
pub use eligibility::find_eligible_nodes;
pub use highlight::{apply_path_highlight, paths_equal, swap_highlight};
pub use pathfind::find_path_between;
pub use raycast::{narrow_to_node, ElementHandle, RaycastHit};
pub use slot::ToolSlot;
pub use state::{SelectionState, ToolState};
