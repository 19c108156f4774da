//! Core record operations implemented as pure functions
//!
//! Following the "functional core, imperative shell" pattern, all functions here:
//! - Take inputs and return freshly allocated outputs
//! - Never mutate their arguments
//! - Have no side effects apart from calling a caller-supplied transform
//! - Don't log, so they stay cheap to call in hot loops
//!
//! The dynamic counterparts that validate untyped input live in [`crate::json`].

pub mod map_obj;
pub mod merge;
pub mod pick;

pub use map_obj::{map_obj, try_map_obj};
pub use merge::{merge, merge_all, merge_all_owned, MergeInput};
pub use pick::pick;
