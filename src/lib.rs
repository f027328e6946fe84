//! graph-parts: shared base for graph plot widgets.
//!
//! Maps a logical scope rectangle onto a widget's local rect and tessellates
//! dots and line segments into a vertex/triangle mesh. Concrete plot types
//! plug in through `api::GraphMeshBuilder`.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{GraphHandler, GraphMeshBuilder, GraphParts, GraphPartsConfig};
pub use error::{GraphError, GraphResult};
