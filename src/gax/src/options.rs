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

//! Per request options.
//!
//! Applications sometimes need to customize the behavior of some calls made
//! via a client. For example, they may restrict the fields returned by the
//! service, attribute the request to a different quota user, or change the
//! timeout for an specific call. The `*Builder` returned by each client method
//! implements the [RequestOptionsBuilder] trait where applications can
//! override these defaults.

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    fields: Option<String>,
    quota_user: Option<String>,
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
}

impl RequestOptions {
    /// Restricts the response to the given field selector.
    ///
    /// The value is sent as the `fields` query parameter. The service returns
    /// a partial response with only the selected fields.
    pub fn set_fields<T: Into<String>>(&mut self, v: T) {
        self.fields = Some(v.into());
    }

    /// Gets the current field selector.
    pub fn fields(&self) -> &Option<String> {
        &self.fields
    }

    /// Attributes the request to a quota user.
    ///
    /// The value is sent as the `quotaUser` query parameter, and overrides
    /// any quota user configured in the client. The service expects at most
    /// 40 characters, the client library does not verify this.
    pub fn set_quota_user<T: Into<String>>(&mut self, v: T) {
        self.quota_user = Some(v.into());
    }

    /// Gets the current per-request quota user.
    pub fn quota_user(&self) -> &Option<String> {
        &self.quota_user
    }

    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the timeout for the request.
    ///
    /// The client libraries make a single attempt for each request, so this
    /// is also the overall timeout for the request.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client libraries provide a builder for each operation. These builders
/// can be used to set the request parameters, e.g., the identifier of the
/// album targeted by the request, as well as any options affecting the
/// request, such as a field selector or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Restricts the response to the given field selector.
    fn with_fields<V: Into<String>>(self, v: V) -> Self;

    /// Attributes the request to this quota user.
    fn with_quota_user<V: Into<String>>(self, v: V) -> Self;

    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the timeout for the request.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_fields<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_fields(v);
        self
    }

    fn with_quota_user<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_quota_user(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }
}
