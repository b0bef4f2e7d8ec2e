use std::collections::HashMap;
use std::sync::Arc;

use itertools::Itertools;

use crate::errors::{Result, SchemaError};

/// Trait for pluggable software-type definitions known to the build.
/// A software type contributes a named top-level block to project scripts,
/// backed by a model type the conversion stage instantiates.
pub trait SoftwareType: Send + Sync {
    fn name(&self) -> &str;
    fn model_type(&self) -> &str;
}

/// Thread-safe lookup table of registered software types.
#[derive(Clone, Default)]
pub struct SoftwareTypeRegistry {
    inner: Arc<HashMap<String, Arc<dyn SoftwareType>>>,
}

impl SoftwareTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a software type; duplicate names are rejected so a plugin
    /// cannot silently shadow another's block.
    pub fn register<T: SoftwareType + 'static>(&mut self, software_type: T) -> Result<()> {
        let name = software_type.name().to_string();
        let map = Arc::make_mut(&mut self.inner);
        if map.contains_key(&name) {
            return Err(SchemaError::DuplicateSoftwareType(name));
        }
        map.insert(name, Arc::new(software_type));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn SoftwareType>> {
        self.inner.get(name).cloned()
    }

    /// Registered type names, sorted for stable schema output.
    pub fn names(&self) -> Vec<String> {
        self.inner.keys().cloned().sorted().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Plain (name, model type) pair; enough for most registrations.
pub struct SoftwareTypeDefinition {
    pub name: String,
    pub model_type: String,
}

impl SoftwareTypeDefinition {
    pub fn new(name: impl Into<String>, model_type: impl Into<String>) -> Self {
        Self { name: name.into(), model_type: model_type.into() }
    }
}

impl SoftwareType for SoftwareTypeDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn model_type(&self) -> &str {
        &self.model_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn register_and_lookup() {
        let mut registry = SoftwareTypeRegistry::new();
        registry
            .register(SoftwareTypeDefinition::new("javaLibrary", "JavaLibrary"))
            .unwrap();

        let found = registry.get("javaLibrary").expect("registered type");
        assert_eq!(found.model_type(), "JavaLibrary");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = SoftwareTypeRegistry::new();
        registry
            .register(SoftwareTypeDefinition::new("app", "Application"))
            .unwrap();
        let err = registry
            .register(SoftwareTypeDefinition::new("app", "OtherApplication"))
            .unwrap_err();
        assert_eq!(err.to_string(), "duplicate software type: app");
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = SoftwareTypeRegistry::new();
        registry.register(SoftwareTypeDefinition::new("b", "B")).unwrap();
        registry.register(SoftwareTypeDefinition::new("a", "A")).unwrap();
        registry.register(SoftwareTypeDefinition::new("c", "C")).unwrap();
        assert_eq!(registry.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn clones_share_entries() {
        let mut registry = SoftwareTypeRegistry::new();
        registry.register(SoftwareTypeDefinition::new("app", "Application")).unwrap();
        let snapshot = registry.clone();
        // Copy-on-write: later registrations do not leak into the snapshot.
        registry.register(SoftwareTypeDefinition::new("lib", "Library")).unwrap();
        assert_eq!(snapshot.names(), vec!["app"]);
        assert_eq!(registry.names(), vec!["app", "lib"]);
    }
}
