//! Scene graph.
//!
//! Responsibilities:
//! - own the node tree and the stores it references (transforms, shapes, shaders)
//! - run per-frame engines that animate transforms
//! - traverse the tree, accumulating render state, into a renderer-agnostic `DrawList`
//!
//! Nodes refer to shared resources through index handles, so an engine and a
//! node can point at the same transform without shared ownership.

mod attribute;
mod camera;
mod engine;
mod graph;
mod id;
mod list;
mod node;
mod state;
mod transforms;

pub mod shapes;

pub use attribute::Attribute;
pub use camera::{Camera, Camera2D};
pub use engine::{Engine, FnEngine, RotationEngine};
pub use graph::Scene;
pub use id::{NodeId, ShaderId, ShapeId, TransformId};
pub use list::{DrawItem, DrawList};
pub use node::Node;
pub use shapes::{Disk, Mesh, Quad, Shape, Triangle};
pub use state::State;
pub use transforms::Transforms;
