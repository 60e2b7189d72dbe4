//! In-memory type catalog.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::debug;

use archgen_core::{
    application::{ApplicationError, ports::TypeCatalog},
    domain::TypeDescriptor,
    error::ArchResult,
};

use crate::builtin_descriptors;

/// Thread-safe in-memory catalog keyed by fully qualified type name.
#[derive(Clone)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<HashMap<String, TypeDescriptor>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a catalog seeded with the built-in descriptors.
    pub fn with_builtin() -> Self {
        let catalog = Self::new();
        for descriptor in builtin_descriptors::all_descriptors() {
            // A fresh catalog cannot have a poisoned lock.
            let _ = catalog.register(descriptor);
        }
        catalog
    }

    /// Register a descriptor, replacing any previous entry of the same
    /// name.
    pub fn register(&self, descriptor: TypeDescriptor) -> ArchResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        debug!(name = descriptor.name(), "registering descriptor");
        inner.insert(descriptor.name().to_string(), descriptor);
        Ok(())
    }

    /// Register every descriptor of a parsed manifest.
    pub fn register_all(
        &self,
        descriptors: impl IntoIterator<Item = TypeDescriptor>,
    ) -> ArchResult<()> {
        for descriptor in descriptors {
            self.register(descriptor)?;
        }
        Ok(())
    }

    /// Registered type names, sorted. Recovers from a poisoned lock;
    /// only the port methods surface poisoning as an error.
    pub fn names(&self) -> Vec<String> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = inner.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the number of descriptors.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all descriptors.
    pub fn clear(&self) -> ArchResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;
        inner.clear();
        Ok(())
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeCatalog for InMemoryCatalog {
    fn load(&self, name: &str) -> ArchResult<TypeDescriptor> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        inner.get(name).cloned().ok_or_else(|| {
            ApplicationError::CatalogEntryMissing {
                name: name.to_string(),
            }
            .into()
        })
    }

    fn contains(&self, name: &str) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }
}

fn lock_error() -> ApplicationError {
    ApplicationError::CatalogUnavailable {
        reason: "catalog lock poisoned".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archgen_core::domain::{MethodSig, TypeExpr};

    #[test]
    fn register_then_load() {
        let catalog = InMemoryCatalog::new();
        catalog
            .register(
                TypeDescriptor::new("example.app.Worker")
                    .with_method(MethodSig::new("run", TypeExpr::concrete("void"))),
            )
            .unwrap();

        assert!(catalog.contains("example.app.Worker"));
        let loaded = catalog.load("example.app.Worker").unwrap();
        assert_eq!(loaded.methods().len(), 1);
    }

    #[test]
    fn missing_entry_is_an_error() {
        let catalog = InMemoryCatalog::new();
        assert!(!catalog.contains("example.Missing"));
        assert!(catalog.load("example.Missing").is_err());
    }

    #[test]
    fn builtin_catalog_is_not_empty() {
        let catalog = InMemoryCatalog::with_builtin();
        assert!(!catalog.is_empty());
        assert!(catalog.contains("java.lang.Runnable"));
    }

    #[test]
    fn register_replaces_by_name() {
        let catalog = InMemoryCatalog::new();
        catalog
            .register(TypeDescriptor::new("example.T").with_type_params(["A"]))
            .unwrap();
        catalog
            .register(TypeDescriptor::new("example.T"))
            .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.load("example.T").unwrap().arity(), 0);
    }

    #[test]
    fn accessors_survive_a_poisoned_lock() {
        let catalog = InMemoryCatalog::with_builtin();

        let clone = catalog.clone();
        let _ = std::thread::spawn(move || {
            let _guard = clone.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        // Read-only helpers recover and still report the seeded state.
        assert!(!catalog.is_empty());
        assert!(catalog.names().iter().any(|n| n == "java.lang.Runnable"));
        // The port surfaces poisoning as a catalog error instead.
        assert!(catalog.load("java.lang.Runnable").is_err());
    }
}
