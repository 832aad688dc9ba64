// Request-scoped context shared by every route

pub mod request_context;

pub use request_context::*;
