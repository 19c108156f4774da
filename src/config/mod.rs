//! Options for the dynamic `json` layer
//!
//! The typed helpers take no configuration. Untyped input can carry values
//! that are not objects at all, and [`JsonOptions`] decides what happens then.

use crate::error::{ErrorCode, ObjkitError, Result};
use serde::{Deserialize, Serialize};

/// What to do when an argument expected to be an object is something else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonObjectPolicy {
    /// Fail fast with [`ObjkitError::NotAnObject`]
    #[default]
    Reject,
    /// Treat the argument as an empty object
    TreatAsEmpty,
}

/// Options for the `json` layer
///
/// Deserializes from `{"non_object": "reject" | "treat_as_empty"}`; every
/// field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// How arguments that are not objects are handled
    pub non_object: NonObjectPolicy,
}

impl JsonOptions {
    /// Create options with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for non-object arguments
    pub fn with_non_object(mut self, policy: NonObjectPolicy) -> Self {
        self.non_object = policy;
        self
    }

    /// Parse options from a JSON document; missing fields take their defaults
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            ObjkitError::config_with_code(
                ErrorCode::CONFIG_PARSE_ERROR,
                format!("Failed to parse JSON options: {}", e),
            )
            .with_source(e)
        })
    }
}
