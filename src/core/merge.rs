//! Shallow, last-write-wins record merging
//!
//! Merging is an associative operation with the empty record as identity, so
//! any grouping of a sequence of merges produces the same record:
//! `merge(merge(a, b), c) == merge(a, merge(b, c))`.
//!
//! Ordering rule: keys keep the position of their first appearance; a later
//! record only replaces the value.

use crate::record::Record;

/// Input to [`merge_all`]: a single record or an ordered sequence of records
///
/// A single record behaves exactly like a one-element sequence.
#[derive(Debug, Clone, Copy)]
pub enum MergeInput<'a, V> {
    One(&'a Record<V>),
    Many(&'a [Record<V>]),
}

impl<'a, V> MergeInput<'a, V> {
    /// View the input as a slice of records
    pub fn as_slice(&self) -> &'a [Record<V>] {
        match *self {
            MergeInput::One(record) => std::slice::from_ref(record),
            MergeInput::Many(records) => records,
        }
    }
}

impl<'a, V> From<&'a Record<V>> for MergeInput<'a, V> {
    fn from(record: &'a Record<V>) -> Self {
        MergeInput::One(record)
    }
}

impl<'a, V> From<&'a [Record<V>]> for MergeInput<'a, V> {
    fn from(records: &'a [Record<V>]) -> Self {
        MergeInput::Many(records)
    }
}

impl<'a, V> From<&'a Vec<Record<V>>> for MergeInput<'a, V> {
    fn from(records: &'a Vec<Record<V>>) -> Self {
        MergeInput::Many(records.as_slice())
    }
}

impl<'a, V, const N: usize> From<&'a [Record<V>; N]> for MergeInput<'a, V> {
    fn from(records: &'a [Record<V>; N]) -> Self {
        MergeInput::Many(records.as_slice())
    }
}

/// Pure: Create a record with the entries of `a` overwritten by those of `b`
///
/// # Examples
///
/// ```
/// use objkit::{merge, record};
///
/// let merged = merge(&record! { "a" => 1, "b" => 2 }, &record! { "b" => 3, "c" => 4 });
/// assert_eq!(merged, record! { "a" => 1, "b" => 3, "c" => 4 });
/// ```
pub fn merge<V: Clone>(a: &Record<V>, b: &Record<V>) -> Record<V> {
    let mut result = Record::with_capacity(a.len() + b.len());
    copy_into(&mut result, a);
    copy_into(&mut result, b);
    result
}

/// Pure: Merge one record or a sequence of records, later entries winning
///
/// Equivalent to folding [`merge`] left to right from the empty record.
///
/// # Examples
///
/// ```
/// use objkit::{merge_all, record};
///
/// let merged = merge_all(&[record! { "a" => 1 }, record! { "b" => 2 }, record! { "a" => 3 }]);
/// assert_eq!(merged, record! { "a" => 3, "b" => 2 });
///
/// let single = merge_all(&record! { "a" => 1 });
/// assert_eq!(single, record! { "a" => 1 });
/// ```
pub fn merge_all<'a, V, I>(objs: I) -> Record<V>
where
    V: Clone + 'a,
    I: Into<MergeInput<'a, V>>,
{
    let records = objs.into().as_slice();
    let capacity = records.iter().map(Record::len).max().unwrap_or(0);

    let mut result = Record::with_capacity(capacity);
    for record in records {
        copy_into(&mut result, record);
    }
    result
}

/// Pure: Merge records taken by value, moving values instead of cloning them
///
/// Same semantics as [`merge_all`] for any iterator of owned records.
pub fn merge_all_owned<V, I>(objs: I) -> Record<V>
where
    I: IntoIterator<Item = Record<V>>,
{
    objs.into_iter().fold(Record::new(), |mut acc, record| {
        acc.extend(record);
        acc
    })
}

fn copy_into<V: Clone>(target: &mut Record<V>, source: &Record<V>) {
    for (key, value) in source {
        match target.get_mut(key) {
            Some(slot) => slot.clone_from(value),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}
