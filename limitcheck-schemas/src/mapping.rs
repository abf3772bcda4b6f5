//! Field Maps for Record Normalization
//!
//! A [`FieldMap`] is a named, versioned alias table: for each logical field
//! of a parameter record (name, minimum, maximum) it lists the spellings a
//! record shape may use, in lookup order. Maps evolve like schemas - new
//! spellings are appended under a new version, old maps can be marked
//! deprecated with a pointer to their replacement.

use serde::{Deserialize, Serialize};

/// Versioned alias table for one parameter-record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    /// Shape name (e.g. "pod_row").
    pub name: String,

    /// Shape version (e.g. "v1").
    pub version: String,

    /// Spellings of the parameter-name field, in lookup order.
    pub parameter_aliases: Vec<String>,

    /// Spellings of the minimum-limit field, in lookup order.
    pub min_aliases: Vec<String>,

    /// Spellings of the maximum-limit field, in lookup order.
    pub max_aliases: Vec<String>,

    /// Whether this map is deprecated.
    #[serde(default)]
    pub deprecated: bool,

    /// Replacement map if deprecated.
    #[serde(default)]
    pub replacement: Option<String>,
}

impl FieldMap {
    /// Build a map from alias slices.
    pub fn new(
        name: &str,
        version: &str,
        parameter_aliases: &[&str],
        min_aliases: &[&str],
        max_aliases: &[&str],
    ) -> Self {
        let owned = |aliases: &[&str]| aliases.iter().map(|s| (*s).to_string()).collect();
        Self {
            name: name.to_string(),
            version: version.to_string(),
            parameter_aliases: owned(parameter_aliases),
            min_aliases: owned(min_aliases),
            max_aliases: owned(max_aliases),
            deprecated: false,
            replacement: None,
        }
    }

    /// Full qualified name (e.g. "pod_row_v1").
    pub fn qualified_name(&self) -> String {
        format!("{}_{}", self.name, self.version)
    }

    /// Row-binding records as rendered inside a data-collection table.
    ///
    /// Rows carry the widest spread of limit spellings, including the
    /// specification-limit forms quality modules emit.
    pub fn pod_row_v1() -> Self {
        Self::new(
            "pod_row",
            "v1",
            &["parameterName", "dcParameter", "parameter"],
            &[
                "minValue",
                "lowerLimit",
                "minLimit",
                "lowerSpecificationLimit",
                "minSpecLimit",
            ],
            &[
                "maxValue",
                "upperLimit",
                "maxLimit",
                "upperSpecificationLimit",
                "maxSpecLimit",
            ],
        )
    }

    /// Entries of a data-collection parameter list as published on the
    /// host context bus.
    pub fn dc_parameter_v1() -> Self {
        Self::new(
            "dc_parameter",
            "v1",
            &["parameterName", "dcParameter"],
            &["minValue", "lowerLimit"],
            &["maxValue", "upperLimit"],
        )
    }
}
