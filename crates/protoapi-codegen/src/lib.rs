//! protoapi-codegen - Multi-target code generation from a schema IR
//!
//! This crate turns a [`SchemaRequest`](protoapi_core::SchemaRequest) into
//! source files for one backend:
//!
//! ```text
//! SchemaRequest
//!     ↓
//!  [Generator] ── validates service count, picks a backend from the registry
//!     ↓
//!  [Backend::init] ── loads templates from the AssetStore, compiles them
//!     ↓
//!  [Backend::generate]
//!     ├─ flatten local package references
//!     ├─ union emulation (TypeScript type files)
//!     └─ render templates with the backend's TypeTable helpers
//!     ↓
//!  OutputFiles (filename → content, all or nothing)
//! ```
//!
//! # Modules
//!
//! - [`types`]: per-language scalar type tables
//! - [`union`]: discriminant injection for error unions
//! - [`flatten`]: local package prefix removal
//! - [`template`]: template compilation and rendering
//! - [`backend`]: the backend contract and the built-in backends
//! - [`registry`]: name to backend mapping
//! - [`naming`]: naming helpers

pub mod backend;
pub mod flatten;
mod generator;
pub mod naming;
mod output;
pub mod registry;
pub mod template;
pub mod types;
pub mod union;

pub use backend::{Backend, GenerateInput, MethodView, TsTransport};
pub use generator::Generator;
pub use output::OutputFiles;
pub use registry::BackendRegistry;
pub use template::{CompiledTemplate, TemplateEngine};
pub use types::TypeTable;
pub use union::{CommonErrorInfo, inject_discriminant};
