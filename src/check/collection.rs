//! Collection guards and queries.
//!
//! Emptiness checks over anything with a length, plus guards rejecting
//! `None` elements inside sequences, sets, and map values.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::error::{Error, Result};

/// Types with a cheap element count, accepted by [`not_empty`].
///
/// Covers strings, slices, arrays, and the std collections; implement it to
/// make a custom container guardable.
pub trait HasLength {
    /// Number of elements (entries for maps, bytes for strings).
    fn length(&self) -> usize;
}

impl HasLength for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl HasLength for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> HasLength for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> HasLength for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasLength for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> HasLength for HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: HasLength + ?Sized> HasLength for &T {
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// Checks that a value with a length is non-empty.
///
/// Elements are not individually validated, and whitespace-only strings
/// pass; only [`not_blank`](crate::check::not_blank) trims. Returns the
/// input unchanged, preserving its concrete type.
pub fn not_empty<C: HasLength>(value: C, name: &str) -> Result<C> {
    if value.length() == 0 {
        return Err(Error::new(format!("argument '{name}' must not be empty")));
    }
    Ok(value)
}

/// Checks that an indexable sequence of optional values contains no `None`,
/// reporting the index of the first offender.
pub fn no_nones<T, C: AsRef<[Option<T>]>>(collection: C, name: &str) -> Result<C> {
    for (index, item) in collection.as_ref().iter().enumerate() {
        if item.is_none() {
            return Err(Error::new(format!(
                "argument '{name}' must not contain None at index {index}"
            )));
        }
    }
    Ok(collection)
}

/// Checks that an iterable container of optional values contains no `None`.
///
/// Non-indexable counterpart of [`no_nones`]; the error carries no
/// position.
pub fn no_none_items<T, C>(collection: C, name: &str) -> Result<C>
where
    for<'a> &'a C: IntoIterator<Item = &'a Option<T>>,
{
    for item in &collection {
        if item.is_none() {
            return Err(Error::new(format!(
                "argument '{name}' must not contain None"
            )));
        }
    }
    Ok(collection)
}

/// Checks that a key-value mapping contains no `None` value.
///
/// Keys need no check: a `None` key cannot occur in an idiomatic Rust map.
pub fn no_none_values<K, V, M>(map: M, name: &str) -> Result<M>
where
    for<'a> &'a M: IntoIterator<Item = (&'a K, &'a Option<V>)>,
{
    for (_key, value) in &map {
        if value.is_none() {
            return Err(Error::new(format!(
                "argument '{name}' must not contain a None value"
            )));
        }
    }
    Ok(map)
}

/// Returns true when any element of the iterable is `None`.
///
/// A query, not a guard: nothing fails.
pub fn has_none_element<'a, T: 'a, I>(iterable: I) -> bool
where
    I: IntoIterator<Item = &'a Option<T>>,
{
    iterable.into_iter().any(|item| item.is_none())
}

/// Returns true when any present element is negative; fails on a `None`
/// element.
///
/// Scanning stops at the first negative value, so a `None` after it is
/// never inspected.
pub fn has_negative_element<'a, I>(iterable: I) -> Result<bool>
where
    I: IntoIterator<Item = &'a Option<f64>>,
{
    for item in iterable {
        match item {
            None => {
                return Err(Error::new(
                    "argument 'collection element' must not be None",
                ));
            }
            Some(value) if *value < 0.0 => return Ok(true),
            Some(_) => {}
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── not_empty ───────────────────────────────────────────────────────

    #[test]
    fn test_not_empty_str_and_string() {
        assert_eq!(not_empty("a", "x"), Ok("a"));
        assert_eq!(not_empty("   ", "x"), Ok("   "));
        assert!(not_empty("", "x").is_err());
        assert_eq!(not_empty(String::from("s"), "x"), Ok(String::from("s")));
    }

    #[test]
    fn test_not_empty_sequences() {
        assert_eq!(not_empty(vec![1, 2], "x"), Ok(vec![1, 2]));
        assert!(not_empty(Vec::<i32>::new(), "x").is_err());
        assert_eq!(not_empty([0u8; 3], "x"), Ok([0u8; 3]));
        let slice: &[i32] = &[1];
        assert_eq!(not_empty(slice, "x"), Ok(slice));
        let deque: VecDeque<i32> = VecDeque::from(vec![7]);
        assert!(not_empty(deque, "x").is_ok());
    }

    #[test]
    fn test_not_empty_maps_and_sets() {
        let mut map: HashMap<&str, i32> = HashMap::new();
        assert!(not_empty(&map, "x").is_err());
        map.insert("k", 1);
        assert!(not_empty(&map, "x").is_ok());

        let mut tree: BTreeMap<i32, i32> = BTreeMap::new();
        assert!(not_empty(&tree, "x").is_err());
        tree.insert(1, 2);
        assert!(not_empty(&tree, "x").is_ok());

        let mut set: HashSet<i32> = HashSet::new();
        assert!(not_empty(&set, "x").is_err());
        set.insert(3);
        assert!(not_empty(&set, "x").is_ok());

        let sorted: BTreeSet<i32> = [5].into_iter().collect();
        assert!(not_empty(sorted, "x").is_ok());
    }

    #[test]
    fn test_not_empty_message() {
        let err = not_empty("", "tags").unwrap_err();
        assert_eq!(err.message(), "argument 'tags' must not be empty");
    }

    // ── no_nones family ─────────────────────────────────────────────────

    #[test]
    fn test_no_nones_reports_first_offending_index() {
        let items = vec![Some(1), None, Some(3), None];
        let err = no_nones(items, "values").unwrap_err();
        assert_eq!(
            err.message(),
            "argument 'values' must not contain None at index 1"
        );
    }

    #[test]
    fn test_no_nones_passes_dense_sequences() {
        let items = vec![Some(1), Some(2)];
        assert_eq!(no_nones(items.clone(), "values"), Ok(items));
        let arr = [Some("a"), Some("b")];
        assert!(no_nones(arr, "values").is_ok());
        // Emptiness is not this guard's concern.
        let empty: Vec<Option<i32>> = Vec::new();
        assert!(no_nones(empty, "values").is_ok());
    }

    #[test]
    fn test_no_none_items_over_unindexed_containers() {
        let dense: HashSet<Option<i32>> = [Some(1), Some(2)].into_iter().collect();
        assert!(no_none_items(dense, "set").is_ok());
        let sparse: HashSet<Option<i32>> = [Some(1), None].into_iter().collect();
        let err = no_none_items(sparse, "set").unwrap_err();
        assert_eq!(err.message(), "argument 'set' must not contain None");
    }

    #[test]
    fn test_no_none_values_checks_map_values() {
        let mut map: BTreeMap<&str, Option<i32>> = BTreeMap::new();
        map.insert("a", Some(1));
        map.insert("b", None);
        let err = no_none_values(map, "limits").unwrap_err();
        assert_eq!(
            err.message(),
            "argument 'limits' must not contain a None value"
        );

        let mut dense: BTreeMap<&str, Option<i32>> = BTreeMap::new();
        dense.insert("a", Some(1));
        assert!(no_none_values(dense, "limits").is_ok());
    }

    // ── queries ─────────────────────────────────────────────────────────

    #[test]
    fn test_has_none_element() {
        let sparse = vec![Some(1), None];
        assert!(has_none_element(&sparse));
        let dense = vec![Some(1), Some(2)];
        assert!(!has_none_element(&dense));
        let empty: Vec<Option<i32>> = Vec::new();
        assert!(!has_none_element(&empty));
    }

    #[test]
    fn test_has_negative_element_finds_negative() {
        let values = vec![Some(0.0), Some(1.5), Some(-0.25)];
        assert_eq!(has_negative_element(&values), Ok(true));
        let non_negative = vec![Some(0.0), Some(2.0)];
        assert_eq!(has_negative_element(&non_negative), Ok(false));
    }

    #[test]
    fn test_has_negative_element_rejects_none_elements() {
        let sparse = vec![Some(1.0), None, Some(-1.0)];
        let err = has_negative_element(&sparse).unwrap_err();
        assert_eq!(err.message(), "argument 'collection element' must not be None");
    }

    #[test]
    fn test_has_negative_element_short_circuits_on_negative() {
        // The None sits after the first negative and is never inspected.
        let values = vec![Some(-1.0), None];
        assert_eq!(has_negative_element(&values), Ok(true));
    }
}
