// Wire models for the design canvas

pub mod graph_models;

pub use graph_models::{Edge, GraphPayload, Node, Position, ValidationResult};
