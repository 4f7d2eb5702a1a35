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

//! Expand the URL templates used in Discovery-based APIs.
//!
//! The templates use a subset of [RFC 6570]: `{name}` for simple string
//! expansion and `{+name}` for reserved expansion. All the parameters in a
//! path template are required. A missing parameter is reported as a binding
//! error, the client never sends a request with an unexpanded placeholder.
//!
//! [RFC 6570]: https://datatracker.ietf.org/doc/html/rfc6570

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped in reserved expansion (`{+name}`).
///
/// Anything outside the unreserved and reserved sets of RFC 3986.
const RESERVED_EXPANSION: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Characters escaped in simple expansion (`{name}`).
///
/// Anything outside the unreserved set of RFC 3986.
const SIMPLE_EXPANSION: &AsciiSet = &RESERVED_EXPANSION
    .add(b':')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'=');

#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
    #[error("unterminated expression in path template {0}")]
    UnterminatedExpression(String),
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Expands `template` using the values in `params`.
///
/// A parameter is missing if it does not appear in `params`, or if its value
/// is `None` or empty.
///
/// # Example
/// ```
/// # use google_apis_gax_internal::path_template::expand;
/// let path = expand("v1/albums/{+albumId}:share", &[("albumId", Some("abc 123"))])?;
/// assert_eq!(path, "v1/albums/abc%20123:share");
/// # Ok::<(), gax::error::Error>(())
/// ```
pub fn expand(template: &str, params: &[(&str, Option<&str>)]) -> gax::Result<String> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let end = tail.find('}').ok_or_else(|| {
            gax::error::Error::binding(Error::UnterminatedExpression(template.to_string()))
        })?;
        let expression = &tail[..end];
        let (name, set) = match expression.strip_prefix('+') {
            Some(name) => (name, RESERVED_EXPANSION),
            None => (expression, SIMPLE_EXPANSION),
        };
        let value = params
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| *v)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| missing(name))?;
        path.extend(utf8_percent_encode(value, set));
        rest = &tail[end + 1..];
    }
    path.push_str(rest);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case("v1/albums", &[], "v1/albums")]
    #[test_case("v1/albums/{+albumId}", &[("albumId", Some("abc123"))], "v1/albums/abc123")]
    #[test_case("v1/albums/{+albumId}", &[("albumId", Some("abc 123"))], "v1/albums/abc%20123")]
    #[test_case("v1/albums/{+albumId}", &[("albumId", Some("a/b:c"))], "v1/albums/a/b:c")]
    #[test_case("v1/albums/{albumId}", &[("albumId", Some("a/b:c"))], "v1/albums/a%2Fb%3Ac")]
    #[test_case("v1/albums/{albumId}", &[("albumId", Some("a-b._~c"))], "v1/albums/a-b._~c")]
    #[test_case("v1/albums/{+albumId}:share", &[("albumId", Some("100%"))], "v1/albums/100%25:share")]
    #[test_case("v1/sharedAlbums/{+shareToken}", &[("shareToken", Some("ñ"))], "v1/sharedAlbums/%C3%B1")]
    #[test_case("v1/{+a}/{b}", &[("b", Some("2")), ("a", Some("1"))], "v1/1/2")]
    fn expand_success(template: &str, params: &[(&str, Option<&str>)], want: &str) {
        let got = expand(template, params);
        assert!(matches!(&got, Ok(p) if p == want), "{got:?}");
    }

    #[test_case(&[])]
    #[test_case(&[("albumId", None)])]
    #[test_case(&[("albumId", Some(""))])]
    #[test_case(&[("mediaItemId", Some("abc"))])]
    fn expand_missing(params: &[(&str, Option<&str>)]) {
        let got = expand("v1/albums/{+albumId}", params);
        let err = got.expect_err("missing parameters should fail");
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<Error>());
        assert_eq!(
            source,
            Some(&Error::MissingRequiredParameter("albumId".to_string())),
            "{err:?}"
        );
    }

    #[test]
    fn expand_unterminated() {
        let got = expand("v1/albums/{+albumId", &[("albumId", Some("abc"))]);
        let err = got.expect_err("unterminated expression should fail");
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::UnterminatedExpression(_))),
            "{err:?}"
        );
    }

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }
}
