mod graph_handler;
mod graph_parts;
mod graph_parts_config;
mod layout;

pub use graph_handler::{GraphHandler, GraphListener, GraphSubscription, ListenerId};
pub use graph_parts::{GraphMeshBuilder, GraphParts};
pub use graph_parts_config::{GraphPartsConfig, ScopePolicy};
pub use layout::{LayoutElement, NO_LAYOUT_PREFERENCE, RaycastFilter};
