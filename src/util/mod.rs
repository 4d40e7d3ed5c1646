//! Shared utilities

pub mod context;
pub mod diagnostic;

pub use context::GlobalContext;
pub use diagnostic::Diagnostic;
