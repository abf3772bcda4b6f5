//! # limitcheck-schemas
//!
//! Versioned field mappings for data-collection parameter records.
//!
//! Host frameworks deliver parameter metadata as loosely-shaped records
//! whose field names drift between releases and deployments: the same limit
//! may arrive as `minValue`, `lowerLimit`, or `lowerSpecificationLimit`.
//! Probing every spelling at every use site scatters that instability
//! through the codebase, so this crate pins it down in one place:
//!
//! 1. A [`FieldMap`] names the accepted spellings for one record shape,
//!    under an explicit name and version.
//! 2. [`normalize`](normalize::normalize) applies a map to a raw record
//!    once, at the data-source boundary, producing a
//!    [`NormalizedParameter`] the engine consumes.
//! 3. A [`MappingRegistry`] tracks maps across versions so deployments can
//!    register their own shapes next to the built-ins.
//!
//! ```
//! use limitcheck_schemas::{normalize, FieldMap};
//! use serde_json::json;
//!
//! let record = json!({"parameterName": "WEIGHT", "lowerLimit": 1, "upperLimit": 10});
//! let parameter = normalize(&record, &FieldMap::dc_parameter_v1()).unwrap();
//! assert_eq!(parameter.name.as_deref(), Some("WEIGHT"));
//! assert_eq!(parameter.min.as_deref(), Some("1"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod mapping;
pub mod normalize;
pub mod registry;

// Re-export main types at crate root
pub use mapping::FieldMap;
pub use normalize::{
    find_parameter, normalize, normalize_payload, NormalizedParameter, LIST_KEYS,
};
pub use registry::{default_registry, MappingRegistry};

use thiserror_no_std::Error;

/// Errors raised while normalizing records or managing mappings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A parameter record was not a JSON object.
    #[error("parameter record is not a JSON object")]
    NotARecord,

    /// A payload carried none of the known parameter-list shapes.
    #[error("payload carries no parameter list")]
    NoParameterList,

    /// A lookup referenced a mapping the registry does not hold.
    #[error("unknown field mapping: {0}")]
    UnknownMapping(String),

    /// A mapping was registered without usable alias tables.
    #[error("field mapping {0} has an empty alias table")]
    EmptyAliasTable(String),

    /// A registry lock was poisoned by a panicking writer.
    #[error("mapping registry lock poisoned")]
    LockPoisoned,
}
