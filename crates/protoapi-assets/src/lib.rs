//! Template assets for protoapi backends
//!
//! Templates under `templates/` are gzip-compressed at build time and embedded
//! into the binary. At runtime the [`AssetStore`] resolves a path-like key
//! (e.g. `ts/objs.ts.j2`) to UTF-8 template text:
//!
//! - **Embedded mode** decodes each asset on first access, exactly once, even
//!   when several threads ask for the same key concurrently. Every caller
//!   observes the same decoded text or the same decode error.
//! - **Directory mode** reads the same keys from a live directory instead,
//!   for iterating on template text without rebuilding.
//!
//! # Example
//!
//! ```
//! use protoapi_assets::AssetStore;
//!
//! let store = AssetStore::embedded();
//! let helper = store.get("ts/helper.ts.j2")?;
//! assert!(helper.contains("generateUrl"));
//! # Ok::<(), protoapi_assets::AssetError>(())
//! ```

mod embedded;
mod error;
mod store;

pub use error::AssetError;
pub use store::AssetStore;

/// Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;
