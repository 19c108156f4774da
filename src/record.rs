//! Insertion-ordered, string-keyed records
//!
//! A [`Record`] is the single data type every helper in this crate consumes and
//! produces. It is backed by [`IndexMap`], so:
//!
//! - iteration order is insertion order
//! - re-inserting an existing key replaces the value but keeps the key's
//!   original position
//!
//! The second rule is what gives `merge` its ordering guarantee.

use indexmap::IndexMap;

/// An insertion-ordered mapping from string keys to values of type `V`
pub type Record<V> = IndexMap<String, V>;

/// Build a [`Record`] from `key => value` pairs, in the order written
///
/// ```
/// use objkit::record;
///
/// let r = record! { "a" => 1, "b" => 2 };
/// assert_eq!(r.keys().collect::<Vec<_>>(), ["a", "b"]);
///
/// let empty: objkit::Record<i32> = record! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert(::std::string::String::from($key), $value);
        )+
        record
    }};
}
