//! Mapping Registry with Version Management
//!
//! Central, thread-safe store of [`FieldMap`]s keyed by qualified name,
//! with per-name version tracking and latest-version lookup. Deployments
//! register their own record shapes next to the built-ins so the rest of
//! the system resolves mappings by name instead of hardcoding alias lists.

use std::collections::HashMap;
use std::sync::RwLock;

use lazy_static::lazy_static;

use crate::{FieldMap, SchemaError};

/// Thread-safe field-map registry with version management.
pub struct MappingRegistry {
    /// Maps indexed by qualified name
    maps: RwLock<HashMap<String, FieldMap>>,

    /// Version mappings (name -> [versions])
    versions: RwLock<HashMap<String, Vec<String>>>,

    /// Latest version for each map name
    latest: RwLock<HashMap<String, String>>,
}

impl MappingRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            maps: RwLock::new(HashMap::new()),
            versions: RwLock::new(HashMap::new()),
            latest: RwLock::new(HashMap::new()),
        }
    }

    /// Register a field map.
    ///
    /// A map needs at least one parameter alias and one limit alias to be
    /// usable. Re-registering a qualified name replaces the stored map.
    pub fn register(&self, map: FieldMap) -> Result<(), SchemaError> {
        if map.parameter_aliases.is_empty()
            || (map.min_aliases.is_empty() && map.max_aliases.is_empty())
        {
            return Err(SchemaError::EmptyAliasTable(map.qualified_name()));
        }

        let qualified_name = map.qualified_name();
        let base_name = map.name.clone();
        let version = map.version.clone();

        {
            let mut maps = self.maps.write().map_err(|_| SchemaError::LockPoisoned)?;
            maps.insert(qualified_name, map);
        }

        {
            let mut versions = self
                .versions
                .write()
                .map_err(|_| SchemaError::LockPoisoned)?;
            let known = versions.entry(base_name.clone()).or_default();
            if !known.contains(&version) {
                known.push(version.clone());
            }
        }

        {
            let mut latest = self.latest.write().map_err(|_| SchemaError::LockPoisoned)?;
            // Simple lexical comparison - version tags are short and uniform
            match latest.get(&base_name) {
                Some(current) if *current >= version => {}
                _ => {
                    latest.insert(base_name, version);
                }
            }
        }

        Ok(())
    }

    /// Get a map by qualified name (e.g. "pod_row_v1").
    pub fn get(&self, qualified_name: &str) -> Result<FieldMap, SchemaError> {
        let maps = self.maps.read().map_err(|_| SchemaError::LockPoisoned)?;
        maps.get(qualified_name)
            .cloned()
            .ok_or_else(|| SchemaError::UnknownMapping(qualified_name.to_string()))
    }

    /// Get the latest registered version of a map name.
    pub fn latest(&self, name: &str) -> Result<FieldMap, SchemaError> {
        let version = {
            let latest = self.latest.read().map_err(|_| SchemaError::LockPoisoned)?;
            latest
                .get(name)
                .cloned()
                .ok_or_else(|| SchemaError::UnknownMapping(name.to_string()))?
        };
        self.get(&format!("{}_{}", name, version))
    }

    /// Registered versions of a map name, oldest first.
    pub fn versions(&self, name: &str) -> Result<Vec<String>, SchemaError> {
        let versions = self.versions.read().map_err(|_| SchemaError::LockPoisoned)?;
        Ok(versions.get(name).cloned().unwrap_or_default())
    }

    /// Number of registered maps.
    pub fn len(&self) -> usize {
        self.maps.read().map(|maps| maps.len()).unwrap_or(0)
    }

    /// Whether the registry holds no maps.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register the built-in record shapes.
    pub fn load_defaults(&self) -> Result<(), SchemaError> {
        self.register(FieldMap::pod_row_v1())?;
        self.register(FieldMap::dc_parameter_v1())?;
        Ok(())
    }
}

impl Default for MappingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref DEFAULT_REGISTRY: MappingRegistry = {
        let registry = MappingRegistry::new();
        // Built-in tables are well-formed; registration cannot fail
        registry
            .load_defaults()
            .expect("built-in field maps register cleanly");
        registry
    };
}

/// Shared registry pre-loaded with the built-in record shapes.
pub fn default_registry() -> &'static MappingRegistry {
    &DEFAULT_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_get() {
        let registry = MappingRegistry::new();
        registry.register(FieldMap::pod_row_v1()).unwrap();

        let map = registry.get("pod_row_v1").unwrap();
        assert_eq!(map.name, "pod_row");
        assert!(registry.get("pod_row_v9").is_err());
    }

    #[test]
    fn latest_tracks_highest_version() {
        let registry = MappingRegistry::new();
        registry.register(FieldMap::pod_row_v1()).unwrap();

        let mut v2 = FieldMap::pod_row_v1();
        v2.version = "v2".to_string();
        v2.min_aliases.push("lowLimit".to_string());
        registry.register(v2).unwrap();

        let latest = registry.latest("pod_row").unwrap();
        assert_eq!(latest.version, "v2");
        assert_eq!(
            registry.versions("pod_row").unwrap(),
            vec!["v1".to_string(), "v2".to_string()]
        );
    }

    #[test]
    fn empty_alias_tables_are_rejected() {
        let registry = MappingRegistry::new();
        let map = FieldMap::new("bad", "v1", &[], &["minValue"], &[]);
        assert_eq!(
            registry.register(map),
            Err(SchemaError::EmptyAliasTable("bad_v1".to_string()))
        );

        let limitless = FieldMap::new("bad", "v1", &["parameterName"], &[], &[]);
        assert!(registry.register(limitless).is_err());
    }

    #[test]
    fn defaults_are_loaded() {
        let registry = MappingRegistry::new();
        registry.load_defaults().unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.get("pod_row_v1").is_ok());
        assert!(registry.get("dc_parameter_v1").is_ok());
    }

    #[test]
    fn shared_default_registry() {
        let registry = default_registry();
        assert!(!registry.is_empty());
        assert!(registry.latest("dc_parameter").is_ok());
    }

    #[test]
    fn reregistration_replaces() {
        let registry = MappingRegistry::new();
        registry.register(FieldMap::dc_parameter_v1()).unwrap();

        let mut replacement = FieldMap::dc_parameter_v1();
        replacement.min_aliases.push("low".to_string());
        registry.register(replacement).unwrap();

        assert_eq!(registry.len(), 1);
        let map = registry.get("dc_parameter_v1").unwrap();
        assert!(map.min_aliases.contains(&"low".to_string()));
        assert_eq!(registry.versions("dc_parameter").unwrap().len(), 1);
    }
}
