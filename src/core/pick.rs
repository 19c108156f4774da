//! Key selection

use crate::record::Record;

/// Pure: Copy the entries of `obj` whose keys appear in `keys`
///
/// The result follows the order of `keys`, not `obj`. Keys missing from `obj`
/// are skipped without a placeholder, and a key listed more than once yields a
/// single entry at the position of its first occurrence.
///
/// # Examples
///
/// ```
/// use objkit::{pick, record};
///
/// let picked = pick(["a", "c"], &record! { "a" => 1, "b" => 2 });
/// assert_eq!(picked, record! { "a" => 1 });
/// ```
pub fn pick<K, I, V>(keys: I, obj: &Record<V>) -> Record<V>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
    V: Clone,
{
    let mut result = Record::new();
    for key in keys {
        let key = key.as_ref();
        if result.contains_key(key) {
            continue;
        }
        if let Some(value) = obj.get(key) {
            result.insert(key.to_string(), value.clone());
        }
    }
    result
}
