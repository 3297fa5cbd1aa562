// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Stage conventions.
//!
//! A stage is user logic that maps one input record into zero, one or many
//! outputs. Every convention is expressed through the one [`Stage`] trait; the
//! output type `O` says how results are emitted:
//!
//! | convention                 | closure                                   | `O`                    |
//! |----------------------------|-------------------------------------------|------------------------|
//! | [`map_values`]             | `FnMut(&V) -> Result<VR, Fault>`          | `Option<VR>`           |
//! | [`map_values_with_key`]    | `FnMut(&K, &V) -> Result<VR, Fault>`      | `Option<VR>`           |
//! | [`transform_values`]       | `FnMut(&K, &V) -> Result<Option<VR>, _>`  | `Option<VR>`           |
//! | [`flat_map_values`]        | `FnMut(&V) -> Result<Vec<VR>, Fault>`     | `Vec<VR>`              |
//! | [`flat_map_values_with_key`] | `FnMut(&K, &V) -> Result<Vec<VR>, _>`   | `Vec<VR>`              |
//! | [`map`]                    | `FnMut(&K, &V) -> Result<(KR, VR), _>`    | `Option<(KR, VR)>`     |
//! | [`flat_map`]               | `FnMut(&K, &V) -> Result<Vec<(KR, VR)>, _>` | `Vec<(KR, VR)>`      |
//!
//! Stages that forward through a context implement
//! [`Processor`](crate::traits::Processor) or
//! [`FixedKeyProcessor`](crate::traits::FixedKeyProcessor) instead.
//!
//! ```
//! use streamguard::stage::{self, Stage};
//! use streamguard::Fault;
//!
//! let mut lengths = stage::map_values(|value: &String| Ok::<_, Fault>(value.len()));
//! assert_eq!(lengths.call(&1, &"foo".to_string()).unwrap(), Some(3));
//! ```

use crate::fault::Fault;
use crate::outcome::Outcome;

/// User logic invoked once per input record.
///
/// Inputs are borrowed so the caller still owns them if the stage faults.
pub trait Stage<K, V, O> {
    fn call(&mut self, key: &K, value: &V) -> Result<O, Fault>;
}

/// How a stage's return value becomes outcomes.
///
/// * `Option<T>` is a single optional value: exactly one success, holding the
///   value or nothing. An absent value is not a failure.
/// * `Vec<T>` is a sequence: one success per item, in order. An empty
///   sequence emits nothing.
pub trait Emission {
    type Item;

    fn emit<K, V>(self) -> Vec<Outcome<K, V, Self::Item>>;
}

impl<T> Emission for Option<T> {
    type Item = T;

    fn emit<K, V>(self) -> Vec<Outcome<K, V, T>> {
        vec![Outcome::Success(self.into_iter().collect())]
    }
}

impl<T> Emission for Vec<T> {
    type Item = T;

    fn emit<K, V>(self) -> Vec<Outcome<K, V, T>> {
        self.into_iter().map(Outcome::success).collect()
    }
}

pub struct MapValues<F>(F);

impl<K, V, VR, F> Stage<K, V, Option<VR>> for MapValues<F>
where
    F: FnMut(&V) -> Result<VR, Fault>,
{
    fn call(&mut self, _key: &K, value: &V) -> Result<Option<VR>, Fault> {
        (self.0)(value).map(Some)
    }
}

pub struct MapValuesWithKey<F>(F);

impl<K, V, VR, F> Stage<K, V, Option<VR>> for MapValuesWithKey<F>
where
    F: FnMut(&K, &V) -> Result<VR, Fault>,
{
    fn call(&mut self, key: &K, value: &V) -> Result<Option<VR>, Fault> {
        (self.0)(key, value).map(Some)
    }
}

pub struct TransformValues<F>(F);

impl<K, V, VR, F> Stage<K, V, Option<VR>> for TransformValues<F>
where
    F: FnMut(&K, &V) -> Result<Option<VR>, Fault>,
{
    fn call(&mut self, key: &K, value: &V) -> Result<Option<VR>, Fault> {
        (self.0)(key, value)
    }
}

pub struct FlatMapValues<F>(F);

impl<K, V, VR, F> Stage<K, V, Vec<VR>> for FlatMapValues<F>
where
    F: FnMut(&V) -> Result<Vec<VR>, Fault>,
{
    fn call(&mut self, _key: &K, value: &V) -> Result<Vec<VR>, Fault> {
        (self.0)(value)
    }
}

pub struct FlatMapValuesWithKey<F>(F);

impl<K, V, VR, F> Stage<K, V, Vec<VR>> for FlatMapValuesWithKey<F>
where
    F: FnMut(&K, &V) -> Result<Vec<VR>, Fault>,
{
    fn call(&mut self, key: &K, value: &V) -> Result<Vec<VR>, Fault> {
        (self.0)(key, value)
    }
}

pub struct Map<F>(F);

impl<K, V, KR, VR, F> Stage<K, V, Option<(KR, VR)>> for Map<F>
where
    F: FnMut(&K, &V) -> Result<(KR, VR), Fault>,
{
    fn call(&mut self, key: &K, value: &V) -> Result<Option<(KR, VR)>, Fault> {
        (self.0)(key, value).map(Some)
    }
}

pub struct FlatMap<F>(F);

impl<K, V, KR, VR, F> Stage<K, V, Vec<(KR, VR)>> for FlatMap<F>
where
    F: FnMut(&K, &V) -> Result<Vec<(KR, VR)>, Fault>,
{
    fn call(&mut self, key: &K, value: &V) -> Result<Vec<(KR, VR)>, Fault> {
        (self.0)(key, value)
    }
}

pub fn map_values<V, VR, F>(f: F) -> MapValues<F>
where
    F: FnMut(&V) -> Result<VR, Fault>,
{
    MapValues(f)
}

pub fn map_values_with_key<K, V, VR, F>(f: F) -> MapValuesWithKey<F>
where
    F: FnMut(&K, &V) -> Result<VR, Fault>,
{
    MapValuesWithKey(f)
}

/// Single optional value: returning `Ok(None)` emits nothing.
pub fn transform_values<K, V, VR, F>(f: F) -> TransformValues<F>
where
    F: FnMut(&K, &V) -> Result<Option<VR>, Fault>,
{
    TransformValues(f)
}

pub fn flat_map_values<V, VR, F>(f: F) -> FlatMapValues<F>
where
    F: FnMut(&V) -> Result<Vec<VR>, Fault>,
{
    FlatMapValues(f)
}

pub fn flat_map_values_with_key<K, V, VR, F>(f: F) -> FlatMapValuesWithKey<F>
where
    F: FnMut(&K, &V) -> Result<Vec<VR>, Fault>,
{
    FlatMapValuesWithKey(f)
}

/// Key-rewriting, single output.
pub fn map<K, V, KR, VR, F>(f: F) -> Map<F>
where
    F: FnMut(&K, &V) -> Result<(KR, VR), Fault>,
{
    Map(f)
}

/// Key-rewriting, many outputs.
pub fn flat_map<K, V, KR, VR, F>(f: F) -> FlatMap<F>
where
    F: FnMut(&K, &V) -> Result<Vec<(KR, VR)>, Fault>,
{
    FlatMap(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_emits_exactly_one_success() {
        let some: Vec<Outcome<(), (), i32>> = Some(1).emit();
        assert_eq!(some.len(), 1);
        assert_eq!(some[0].values(), &[1]);

        let none: Vec<Outcome<(), (), i32>> = None.emit();
        assert_eq!(none.len(), 1);
        assert!(none[0].is_success());
        assert!(none[0].values().is_empty());
    }

    #[test]
    fn test_vec_emits_one_success_per_item() {
        let outcomes: Vec<Outcome<(), (), i32>> = vec![1, 2, 3].emit();
        let values: Vec<i32> = outcomes.into_iter().flat_map(Outcome::into_values).collect();
        assert_eq!(values, vec![1, 2, 3]);

        let empty: Vec<Outcome<(), (), i32>> = Vec::new().emit();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_adapters_see_the_right_inputs() {
        let mut with_key = map_values_with_key(|key: &i32, value: &&str| {
            Ok::<_, Fault>(format!("{key}:{value}"))
        });
        assert_eq!(with_key.call(&1, &"a").unwrap(), Some("1:a".to_string()));

        let mut rekey = map(|key: &i32, value: &&str| Ok::<_, Fault>((value.len(), *key)));
        assert_eq!(rekey.call(&7, &"abc").unwrap(), Some((3, 7)));

        let mut split = flat_map_values(|value: &&str| {
            Ok::<_, Fault>(value.split(',').map(str::to_string).collect::<Vec<_>>())
        });
        let parts: Vec<String> = Stage::<i32, &str, _>::call(&mut split, &0, &"a,b").unwrap();
        assert_eq!(parts, vec!["a", "b"]);
    }

    #[test]
    fn test_transform_values_may_decline() {
        let mut evens = transform_values(|_: &i32, value: &i32| {
            Ok::<_, Fault>((value % 2 == 0).then_some(*value))
        });
        assert_eq!(evens.call(&0, &2).unwrap(), Some(2));
        assert_eq!(evens.call(&0, &3).unwrap(), None);
    }

    #[test]
    fn test_faults_pass_through_adapters() {
        let mut parse = map_values(|value: &String| Ok::<_, Fault>(value.parse::<u32>()?));
        let fault = Stage::<(), String, _>::call(&mut parse, &(), &"x".to_string()).unwrap_err();
        assert!(fault.is::<std::num::ParseIntError>());
    }
}
