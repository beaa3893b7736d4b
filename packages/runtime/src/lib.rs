#![deny(clippy::all)]

//! Capsule Runtime
//!
//! Collaborator plumbing around the pure `capsule-css` rewriters: per-scope
//! strategy selection, a registry batching scoped stylesheets for document
//! head emission, a memoizing style cache, and a file writer for linked
//! stylesheets. Everything stateful lives here; the rewriting engine itself
//! stays a pure function.

pub mod registry;
pub mod strategy;
pub mod style_cache;
pub mod writer;

pub use registry::{EmitMode, StyleRegistry};
pub use strategy::{scope_with, ScopeStrategy};
pub use style_cache::StyleCache;
pub use writer::{StyleFileWriter, WriterError, WriterResult};
