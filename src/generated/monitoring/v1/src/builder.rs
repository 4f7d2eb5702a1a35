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
//
// Code generated by discogen. DO NOT EDIT.

pub mod monitoring {
    /// A builder for [Monitoring][crate::client::Monitoring].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_apis_monitoring_v1::*;
    /// # use builder::monitoring::ClientBuilder;
    /// # use client::Monitoring;
    /// let builder : ClientBuilder = Monitoring::builder();
    /// let client = builder
    ///     .with_endpoint("https://monitoring.googleapis.com/")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use crate::client::Monitoring;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Monitoring;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }
}
