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

/// Describes a response that is one page of a larger list.
///
/// List operations return at most one page per call. Applications request
/// the next page by setting the `pageToken` request parameter to the value
/// returned by [next_page_token][PageableResponse::next_page_token]. The
/// client libraries never fetch more than one page per call.
///
/// # Example
/// ```
/// # use google_apis_gax::paginator::PageableResponse;
/// struct Page { next: Option<String> }
/// impl PageableResponse for Page {
///     fn next_page_token(&self) -> String {
///         self.next.clone().unwrap_or_default()
///     }
/// }
/// assert!(Page { next: Some("abc".into()) }.has_next_page());
/// assert!(!Page { next: None }.has_next_page());
/// ```
pub trait PageableResponse {
    /// The token for the next page, empty when this is the last page.
    fn next_page_token(&self) -> String;

    /// Returns true if the service reported a continuation token.
    ///
    /// The presence of the token is the only reliable signal that more
    /// results exist. A page may have fewer items than requested, or even
    /// none at all, and still be followed by more pages.
    fn has_next_page(&self) -> bool {
        !self.next_page_token().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestResponse {
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    // Simulates the loop applications write to follow page tokens.
    fn list_all(mut pages: VecDeque<TestResponse>) -> (Vec<String>, Vec<String>) {
        let mut tokens = vec![String::new()];
        let mut items = Vec::new();
        while let Some(page) = pages.pop_front() {
            items.extend(page.items.iter().cloned());
            if !page.has_next_page() {
                break;
            }
            tokens.push(page.next_page_token());
        }
        (items, tokens)
    }

    #[test]
    fn follow_tokens() {
        let pages = VecDeque::from([
            TestResponse {
                items: vec!["item1".into(), "item2".into()],
                next_page_token: "token1".into(),
            },
            TestResponse {
                items: vec![],
                next_page_token: "token2".into(),
            },
            TestResponse {
                items: vec!["item3".into()],
                next_page_token: String::new(),
            },
        ]);
        let (items, tokens) = list_all(pages);
        assert_eq!(items, vec!["item1", "item2", "item3"]);
        assert_eq!(tokens, vec!["", "token1", "token2"]);
    }

    #[test]
    fn last_page() {
        let page = TestResponse {
            items: vec!["item1".into()],
            next_page_token: String::new(),
        };
        assert!(!page.has_next_page());
        assert_eq!(page.next_page_token(), "");
    }
}
