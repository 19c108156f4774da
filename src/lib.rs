//! # objkit
//!
//! Pure, order-preserving helpers for string-keyed records.
//!
//! ## Usage
//!
//! ```
//! use objkit::{map_obj, merge, merge_all, pick, record};
//!
//! let config = record! { "host" => "localhost", "port" => "8080" };
//! let overrides = record! { "port" => "9090", "tls" => "on" };
//!
//! let merged = merge(&config, &overrides);
//! assert_eq!(merged, record! { "host" => "localhost", "port" => "9090", "tls" => "on" });
//!
//! let lengths = map_obj(|v, _key, _obj| v.len(), &merged);
//! assert_eq!(lengths["host"], 9);
//!
//! assert_eq!(pick(["tls"], &merged), record! { "tls" => "on" });
//! assert_eq!(merge_all(&[config, overrides]), merged);
//! ```
//!
//! ## Modules
//!
//! - `record` - The insertion-ordered [`Record`] type and the [`record!`] macro
//! - `core` - Pure `map_obj`, `pick`, `merge` and `merge_all` over records
//! - `json` - The same operations over untyped `serde_json::Value` input
//! - `config` - Options controlling how the `json` layer treats non-objects
//! - `error` - Error type and error code registry
pub mod config;
pub mod core;
pub mod error;
pub mod json;
pub mod record;

pub use crate::config::{JsonOptions, NonObjectPolicy};
pub use crate::core::{map_obj, merge, merge_all, merge_all_owned, pick, try_map_obj, MergeInput};
pub use crate::error::{describe_error_code, ErrorCode, ObjkitError, Result};
pub use crate::json::{map_obj_value, merge_all_values, merge_values, pick_value};
pub use crate::record::Record;
