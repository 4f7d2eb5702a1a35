// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Three-state field values for generated schema types.
//!
//! The Google APIs distinguish between a field that is not present in a JSON
//! object, a field explicitly set to `null`, and a field with a value. An
//! `Option<T>` cannot represent all three states, so the generated types use
//! [Field] instead.
//!
//! # Example
//! ```
//! # use google_apis_gax::field::Field;
//! #[derive(Default, serde::Deserialize, serde::Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Album {
//!     #[serde(default, skip_serializing_if = "Field::is_absent")]
//!     title: Field<String>,
//!     #[serde(default, skip_serializing_if = "Field::is_absent")]
//!     product_url: Field<String>,
//! }
//!
//! let album: Album = serde_json::from_str(r#"{"title": "Trip", "productUrl": null}"#)?;
//! assert_eq!(album.title.value().map(String::as_str), Some("Trip"));
//! assert!(album.product_url.is_null());
//! assert_eq!(
//!     serde_json::to_value(&album)?,
//!     serde_json::json!({"title": "Trip", "productUrl": null})
//! );
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_with::de::DeserializeAsWrap;
use serde_with::ser::SerializeAsWrap;
use serde_with::{DeserializeAs, SerializeAs};

/// The value of an optional field in a generated schema type.
///
/// Use `#[serde(default, skip_serializing_if = "Field::is_absent")]` on the
/// struct field, so absent values are neither emitted nor required.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Field<T> {
    /// The field was not set, and it is not sent to the service.
    #[default]
    Absent,
    /// The field is explicitly set to `null`.
    Null,
    /// The field has a value.
    Value(T),
}

impl<T> Field<T> {
    /// Returns true if the field was never set.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns true if the field is explicitly `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the field holds a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// The contained value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// A mutable reference to the contained value, if any.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Converts from `&Field<T>` to `Field<&T>`.
    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Value(v) => Field::Value(v),
        }
    }

    /// Consumes the field, discarding the difference between absent and null.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Maps the contained value, preserving the absent and null states.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Value(v) => Field::Value(f(v)),
        }
    }

    /// Overwrites this field with `other`, unless `other` is absent.
    ///
    /// An explicit `null` in `other` does overwrite the current value.
    ///
    /// ```
    /// # use google_apis_gax::field::Field;
    /// let mut title = Field::Value("Trip".to_string());
    /// title.update(Field::Absent);
    /// assert_eq!(title, Field::Value("Trip".to_string()));
    /// title.update(Field::Null);
    /// assert!(title.is_null());
    /// ```
    pub fn update(&mut self, other: Field<T>) {
        if !other.is_absent() {
            *self = other;
        }
    }

    /// Creates a field from an `Option<T>`, mapping `None` to [Field::Absent].
    pub fn from_option(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Self::Value)
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only present keys reach this point, absent keys use `Default`.
        Option::<T>::deserialize(deserializer).map(|v| v.map_or(Self::Null, Self::Value))
    }
}

impl<T, U> SerializeAs<Field<T>> for Field<U>
where
    U: SerializeAs<T>,
{
    fn serialize_as<S>(source: &Field<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match source {
            Field::Value(v) => serializer.serialize_some(&SerializeAsWrap::<T, U>::new(v)),
            Field::Absent | Field::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T, U> DeserializeAs<'de, Field<T>> for Field<U>
where
    U: DeserializeAs<'de, T>,
{
    fn deserialize_as<D>(deserializer: D) -> Result<Field<T>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = Option::<DeserializeAsWrap<T, U>>::deserialize(deserializer)?;
        Ok(v.map_or(Field::Null, |w| Field::Value(w.into_inner())))
    }
}

/// Serializes `i64` values as decimal strings.
///
/// The JSON encoding for 64-bit integers in Google APIs uses strings. When
/// deserializing, both strings and numbers are accepted.
pub struct I64;

impl<'de> DeserializeAs<'de, i64> for I64 {
    fn deserialize_as<D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(I64Visitor)
    }
}

impl SerializeAs<i64> for I64 {
    fn serialize_as<S>(source: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(source)
    }
}

struct I64Visitor;

impl serde::de::Visitor<'_> for I64Visitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a 64-bit signed integer, or its string representation")
    }

    fn visit_i64<E>(self, value: i64) -> Result<i64, E>
    where
        E: serde::de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<i64, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(value)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<i64, E>
    where
        E: serde::de::Error,
    {
        value
            .parse::<i64>()
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(value), &self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use test_case::test_case;

    #[serde_with::serde_as]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Fake {
        #[serde(default, skip_serializing_if = "Field::is_absent")]
        name: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_absent")]
        #[serde_as(as = "Field<I64>")]
        item_count: Field<i64>,
        #[serde(default, skip_serializing_if = "Field::is_absent")]
        tags: Field<Vec<String>>,
    }

    #[test]
    fn default_is_absent() {
        let field = Field::<String>::default();
        assert!(field.is_absent(), "{field:?}");
        assert!(!field.is_null(), "{field:?}");
        assert!(!field.is_value(), "{field:?}");
        assert_eq!(field.value(), None);
    }

    #[test]
    fn accessors() {
        let mut field = Field::from("abc".to_string());
        assert!(field.is_value(), "{field:?}");
        assert_eq!(field.value().map(String::as_str), Some("abc"));
        if let Some(v) = field.value_mut() {
            v.push('d');
        }
        assert_eq!(field.as_ref(), Field::Value(&"abcd".to_string()));
        assert_eq!(field.clone().map(|s| s.len()), Field::Value(4));
        assert_eq!(field.into_option().as_deref(), Some("abcd"));
        assert_eq!(Field::<i32>::Null.into_option(), None);
        assert_eq!(Field::<i32>::Null.map(|v| v + 1), Field::Null);
        assert_eq!(Field::from_option(Some(7)), Field::Value(7));
        assert_eq!(Field::<i32>::from_option(None), Field::Absent);
    }

    #[test_case(Field::Absent, Field::Absent, Field::Absent)]
    #[test_case(Field::Value(1), Field::Absent, Field::Value(1))]
    #[test_case(Field::Value(1), Field::Null, Field::Null)]
    #[test_case(Field::Value(1), Field::Value(2), Field::Value(2))]
    #[test_case(Field::Null, Field::Value(2), Field::Value(2))]
    #[test_case(Field::Absent, Field::Null, Field::Null)]
    fn update(start: Field<i32>, other: Field<i32>, want: Field<i32>) {
        let mut got = start;
        got.update(other);
        assert_eq!(got, want);
    }

    #[test]
    fn serialize_skips_absent() -> anyhow::Result<()> {
        let fake = Fake {
            name: Field::Value("abc".into()),
            item_count: Field::Absent,
            tags: Field::Null,
        };
        let got = serde_json::to_value(&fake)?;
        assert_eq!(got, json!({"name": "abc", "tags": null}));
        Ok(())
    }

    #[test]
    fn deserialize_tri_state() -> anyhow::Result<()> {
        let got = serde_json::from_value::<Fake>(json!({"name": null, "tags": ["a", "b"]}))?;
        assert!(got.name.is_null(), "{got:?}");
        assert!(got.item_count.is_absent(), "{got:?}");
        assert_eq!(got.tags, Field::Value(vec!["a".to_string(), "b".to_string()]));
        Ok(())
    }

    #[test]
    fn deserialize_ignores_unknown() -> anyhow::Result<()> {
        let got = serde_json::from_value::<Fake>(json!({"unknownField": 42}))?;
        assert_eq!(got, Fake::default());
        Ok(())
    }

    #[test_case(json!({"itemCount": "123"}), 123)]
    #[test_case(json!({"itemCount": 123}), 123)]
    #[test_case(json!({"itemCount": "-9223372036854775808"}), i64::MIN)]
    #[test_case(json!({"itemCount": i64::MAX}), i64::MAX)]
    fn int64_as_string(input: Value, want: i64) -> anyhow::Result<()> {
        let got = serde_json::from_value::<Fake>(input)?;
        assert_eq!(got.item_count, Field::Value(want));
        let encoded = serde_json::to_value(&got)?;
        assert_eq!(encoded, json!({"itemCount": want.to_string()}));
        Ok(())
    }

    #[test_case(json!({"itemCount": "abc"}))]
    #[test_case(json!({"itemCount": 12.5}))]
    #[test_case(json!({"itemCount": u64::MAX}))]
    #[test_case(json!({"itemCount": {}}))]
    fn int64_errors(input: Value) {
        let got = serde_json::from_value::<Fake>(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn int64_null() -> anyhow::Result<()> {
        let got = serde_json::from_value::<Fake>(json!({"itemCount": null}))?;
        assert!(got.item_count.is_null(), "{got:?}");
        assert_eq!(serde_json::to_value(&got)?, json!({"itemCount": null}));
        Ok(())
    }
}
