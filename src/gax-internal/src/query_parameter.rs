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

//! Defines traits and helpers to format query parameters.
//!
//! Query parameters in the Google APIs can be strings, booleans, integers,
//! or repeated values of these. The generated request builders hold each
//! query parameter as an `Option<T>` or a `Vec<T>`. The code generator is
//! simpler if all the query parameters can be treated uniformly, without any
//! conditionally generated code for the different types.
//!
//! The types are not intended for application developers to use. They are
//! public because we generate one crate per service, and all these crates use
//! these helpers.

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
///
/// The result is the list of values to send for the parameter. An empty list
/// means the parameter is not sent, more than one value repeats the name.
pub trait QueryParameter {
    fn format(&self) -> Vec<String>;
}

/// A single query parameter value.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

macro_rules! scalar_query_parameter {
    ($($t:ty),*) => {
        $(
            impl QueryValue for $t {
                fn to_query_value(&self) -> String {
                    self.to_string()
                }
            }

            impl QueryParameter for $t {
                fn format(&self) -> Vec<String> {
                    vec![self.to_query_value()]
                }
            }
        )*
    };
}

scalar_query_parameter!(String, &str, bool, i32, i64, u32, u64);

impl<T: QueryValue> QueryParameter for Option<T> {
    fn format(&self) -> Vec<String> {
        self.iter().map(QueryValue::to_query_value).collect()
    }
}

impl<T: QueryValue> QueryParameter for Vec<T> {
    fn format(&self) -> Vec<String> {
        self.iter().map(QueryValue::to_query_value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn scalar() {
        assert_eq!("abc123".format(), vec!["abc123"]);
        assert_eq!("abc123".to_string().format(), vec!["abc123"]);
        assert_eq!(true.format(), vec!["true"]);
        assert_eq!(false.format(), vec!["false"]);
        assert_eq!(42_i32.format(), vec!["42"]);
        assert_eq!((-7_i64).format(), vec!["-7"]);
        assert_eq!(u64::MAX.format(), vec!["18446744073709551615"]);
    }

    #[test_case(None, &[]; "none")]
    #[test_case(Some(50), &["50"]; "some")]
    fn option(input: Option<i32>, want: &[&str]) {
        assert_eq!(input.format(), want);
    }

    #[test]
    fn option_string() {
        assert!(None::<String>.format().is_empty());
        assert_eq!(Some("token".to_string()).format(), vec!["token"]);
    }

    #[test]
    fn repeated() {
        let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(ids.format(), vec!["a", "b", "c"]);
        assert!(Vec::<String>::new().format().is_empty());
    }
}
