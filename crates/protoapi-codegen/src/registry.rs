//! Backend registry.
//!
//! The registry is a plain value built from an explicit constructor list,
//! so the set of available backends is visible in one place and can be
//! inspected in tests.

use crate::backend::{Backend, EchoBackend, PhpBackend, SpringBackend, TsBackend, TsTransport};
use protoapi_core::{GenerateError, GenerateResult};
use std::collections::BTreeMap;

/// Constructor for a fresh, uninitialized backend.
pub type BackendFactory = fn() -> Box<dyn Backend>;

/// Name to backend constructor mapping.
#[derive(Clone, Default)]
pub struct BackendRegistry {
    factories: BTreeMap<&'static str, BackendFactory>,
}

impl BackendRegistry {
    /// Registry without any backends.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in backend.
    ///
    /// `ts` is an alias of `ts-axios`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("ts", || Box::new(TsBackend::new(TsTransport::Axios)));
        registry.register("ts-axios", || Box::new(TsBackend::new(TsTransport::Axios)));
        registry.register("ts-fetch", || Box::new(TsBackend::new(TsTransport::Fetch)));
        registry.register("echo", || Box::new(EchoBackend::new()));
        registry.register("spring", || Box::new(SpringBackend::new()));
        registry.register("php", || Box::new(PhpBackend::new()));
        registry
    }

    /// Add or replace the constructor for `name`.
    pub fn register(&mut self, name: &'static str, factory: BackendFactory) {
        self.factories.insert(name, factory);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    /// Construct the backend registered under `name`.
    pub fn create(&self, name: &str) -> GenerateResult<Box<dyn Backend>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| GenerateError::UnknownBackend(name.to_string()))
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("backends", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
