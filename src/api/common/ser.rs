//
//  eloqua-rs
//  api/common/ser.rs
//
//  Created by Daniel Mercer on 2026/07/18.
//  Copyright (c) 2026 Daniel Mercer. All rights reserved.
//

//! Serde adapters for Eloqua's stringly-typed JSON scalars.
//!
//! The Eloqua API transmits most numeric and boolean entity fields as JSON
//! strings (`"id": "100"`, `"isTracked": "true"`). The [`quoted`] adapter
//! serializes such fields back out as strings and accepts either encoding on
//! the way in, since the API is not consistent about it across endpoints.
//!
//! The [`is_empty`] predicate backs `skip_serializing_if`, giving entity
//! fields the omit-when-zero write behavior the API expects.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// True when a value equals its type's default.
///
/// Used with `skip_serializing_if` so zero-valued fields (`0`, `""`, `false`,
/// empty vectors) stay out of request bodies.
pub(crate) fn is_empty<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Serialize a scalar as a JSON string and deserialize it from either a
/// string or its native JSON form.
///
/// Apply with serde's `with` attribute:
///
/// ```rust,ignore
/// #[serde(default, with = "quoted", skip_serializing_if = "is_empty")]
/// pub id: i32,
/// ```
pub(crate) mod quoted {
    use super::*;
    use serde::{de, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: fmt::Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: fmt::Display,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QuotedVisitor(PhantomData))
    }

    struct QuotedVisitor<T>(PhantomData<T>);

    impl<'de, T> de::Visitor<'de> for QuotedVisitor<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        type Value = T;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a scalar or a string-encoded scalar")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
            value.parse().map_err(de::Error::custom)
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<T, E> {
            self.visit_str(&value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<T, E> {
            self.visit_str(&value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<T, E> {
            self.visit_str(&value.to_string())
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<T, E> {
            self.visit_str(&value.to_string())
        }
    }
}
