// System Architect Backend - structural validation for design canvases

// HTTP routes and handlers
pub mod api;

// Process-wide state and configuration
pub mod app_state;
pub mod config;

// Canvas payload and verdict shapes
pub mod models;

// Graph structure rules
pub mod validator;

// Request-scoped middleware
pub mod middleware;

// Common utilities
pub mod error;
pub mod monitoring;

// Re-exports for convenience
pub use error::{AppError, AppResult};
pub use models::{Edge, GraphPayload, Node, Position, ValidationResult};
pub use validator::{GraphValidator, StructuralIssue};
