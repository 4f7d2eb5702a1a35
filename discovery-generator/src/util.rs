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

//! A grab bag of helper functions

use anyhow::Result;
use regex::Regex;
use std::fmt::Write as FmtWrite;

const MAX_COMMENT_LINE_LENGTH: usize = 70;

// Converts snake_case to PascalCase.
pub fn snake_to_pascal(s: &str) -> String {
    let mut value = String::new();
    let mut seen_underscore = true;
    for c in s.chars() {
        if c == '_' {
            seen_underscore = true;
            continue;
        }
        if seen_underscore {
            value.extend(c.to_uppercase());
            seen_underscore = false;
            continue;
        }
        value.push(c)
    }
    value
}

// Converts snake_case to camelCase, the inverse of `rename_all = "camelCase"`.
pub fn snake_to_camel(s: &str) -> String {
    let pascal = snake_to_pascal(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Converts camelCase or PascalCase to snake_case.
pub fn camel_to_snake(s: &str) -> String {
    let mut value = String::new();
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            if !value.is_empty() {
                value.push('_')
            }
            value.push(c.to_ascii_lowercase());
            continue;
        }
        value.push(c);
    }
    value
}

/// Returns a valid Rust identifier for a Discovery property name.
pub fn field_name(wire_name: &str) -> String {
    let name = camel_to_snake(&safe_name(wire_name));
    if is_keyword(&name) {
        return format!("{name}_");
    }
    name
}

/// Remove some invalid character for identifiers.
pub fn safe_name(s: &str) -> String {
    s.replace(['.', '-', '@', '$'], "_")
}

/// Determine if the string is a keyword. See https://doc.rust-lang.org/reference/keywords.html
pub fn is_keyword(s: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
        "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
        "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do",
        "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
    ];
    KEYWORDS.contains(&s)
}

/// Turns a discovery doc description into a rustdoc comment.
///
/// Each line in `comment` is wrapped at 70 characters, blank lines become
/// empty comment lines. URLs are never split.
pub fn as_comment(prefix: &str, comment: &str, add_padding: bool) -> Result<String> {
    let re_url = Regex::new(r"^\(?http\S+$")?;
    let mut buf = String::new();
    for line in comment.lines() {
        let mut rest = line.trim();
        if rest.is_empty() {
            writeln!(&mut buf, "{prefix}///")?;
            continue;
        }
        let mut padding = "";
        let mut line_length = MAX_COMMENT_LINE_LENGTH;
        while !rest.is_empty() {
            if rest.chars().count() < line_length {
                writeln!(&mut buf, "{prefix}/// {padding}{rest}")?;
                break;
            }
            // Find the number of bytes for line_length code-points.
            let i = rest
                .char_indices()
                .nth(line_length)
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            let split = if re_url.is_match(&rest[..i]) {
                rest.find(' ')
            } else {
                rest[..i].rfind(' ').or_else(|| rest.find(' '))
            };
            let Some(split) = split else {
                writeln!(&mut buf, "{prefix}/// {padding}{rest}")?;
                break;
            };
            writeln!(&mut buf, "{prefix}/// {padding}{}", &rest[..split])?;
            rest = rest[split + 1..].trim_start();
            if add_padding {
                padding = "  ";
                line_length = MAX_COMMENT_LINE_LENGTH - 2;
            }
        }
    }
    let empty = format!("{prefix}///\n");
    while buf.ends_with(&empty) {
        buf.truncate(buf.len() - empty.len());
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("snake_case", "SnakeCase")]
    #[test_case("photos_library", "PhotosLibrary")]
    #[test_case("get", "Get")]
    fn to_pascal(input: &str, want: &str) {
        assert_eq!(snake_to_pascal(input), want);
    }

    #[test_case("mediaItemsCount", "media_items_count")]
    #[test_case("AddEnrichmentToAlbum", "add_enrichment_to_album")]
    #[test_case("apertureFNumber", "aperture_f_number")]
    #[test_case("id", "id")]
    fn to_snake(input: &str, want: &str) {
        assert_eq!(camel_to_snake(input), want);
    }

    #[test_case("media_items_count", "mediaItemsCount")]
    #[test_case("aperture_f_number", "apertureFNumber")]
    #[test_case("latlng", "latlng")]
    fn to_camel(input: &str, want: &str) {
        assert_eq!(snake_to_camel(input), want);
    }

    #[test_case("type", "type_")]
    #[test_case("self", "self_")]
    #[test_case("pageToken", "page_token")]
    #[test_case("foo.bar", "foo_bar")]
    fn fields(input: &str, want: &str) {
        assert_eq!(field_name(input), want);
    }

    #[test]
    fn as_comment_long_text() -> Result<()> {
        let input = "This is meant to read like some documentation for rustdoc. It should be printed out in a way that can be easily read in code. Making sure not to exceed a line length of 70 chars when possible.";
        let expected = "/// This is meant to read like some documentation for rustdoc. It should
/// be printed out in a way that can be easily read in code. Making sure
/// not to exceed a line length of 70 chars when possible.
";
        let actual = as_comment("", input, false)?;
        assert_eq!(expected, &actual);
        Ok(())
    }

    #[test]
    fn as_comment_long_link() -> Result<()> {
        let input = "This make sure we don't split long links (http://example.com/really/really/really/really/really/really/really/really/really/really/really/long). We want them to show up well in rustdoc.";
        let expected = "/// This make sure we don't split long links
/// (http://example.com/really/really/really/really/really/really/really/really/really/really/really/long).
/// We want them to show up well in rustdoc.
";
        let actual = as_comment("", input, false)?;
        assert_eq!(expected, &actual);
        Ok(())
    }

    #[test]
    fn as_comment_with_padding() -> Result<()> {
        let input = "- var_input: This is meant for pretty printing docs for arguments passed to functions.";
        let expected = "/// - var_input: This is meant for pretty printing docs for arguments
///   passed to functions.
";
        let actual = as_comment("", input, true)?;
        assert_eq!(expected, &actual);
        Ok(())
    }

    #[test]
    fn as_comment_paragraphs() -> Result<()> {
        let input = "First paragraph.\n\nSecond paragraph.\n\n";
        let expected = "    /// First paragraph.
    ///
    /// Second paragraph.
";
        let actual = as_comment("    ", input, false)?;
        assert_eq!(expected, &actual);
        Ok(())
    }

    #[test]
    fn as_comment_empty() -> Result<()> {
        assert_eq!(as_comment("", "", false)?, "");
        Ok(())
    }
}
