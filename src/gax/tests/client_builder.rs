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

// Verify `ClientBuilder` can be used outside the crate.
#[cfg(test)]
mod test {
    use gax::client_builder::internal::ClientConfig;
    use google_apis_gax as gax;

    #[tokio::test]
    async fn test_default() -> anyhow::Result<()> {
        let client = MyClient::builder().build().await?;
        assert_eq!(client.config.endpoint, None);
        assert_eq!(client.config.api_key, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_with_endpoint() -> anyhow::Result<()> {
        let client = MyClient::builder()
            .with_endpoint("http://localhost:8080")
            .build()
            .await?;
        assert_eq!(
            client.config.endpoint.as_deref(),
            Some("http://localhost:8080")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_with_all() -> anyhow::Result<()> {
        let client = MyClient::builder()
            .with_api_key("test-key")
            .with_quota_user("test-quota-user")
            .with_access_token("test-token")
            .with_user_agent("test-agent")
            .with_tracing()
            .build()
            .await?;
        let config = client.config;
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.quota_user.as_deref(), Some("test-quota-user"));
        assert_eq!(config.access_token.as_deref(), Some("test-token"));
        assert_eq!(config.user_agent.as_deref(), Some("test-agent"));
        assert!(config.tracing);
        Ok(())
    }

    #[tokio::test]
    async fn test_error() -> anyhow::Result<()> {
        let result = MyClient::builder().with_endpoint("").build().await;
        let err = match result {
            Ok(_) => anyhow::bail!("expected an error"),
            Err(e) => e,
        };
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }

    pub struct MyClient {
        config: ClientConfig,
    }
    impl MyClient {
        pub fn builder() -> my_client::Builder {
            gax::client_builder::internal::new_builder(my_client::Factory)
        }

        async fn new(config: ClientConfig) -> gax::client_builder::Result<Self> {
            if config.endpoint.as_deref() == Some("") {
                return Err(gax::client_builder::Error::transport("empty endpoint"));
            }
            Ok(Self { config })
        }
    }
    mod my_client {
        use super::gax;
        pub type Builder = gax::client_builder::ClientBuilder<Factory>;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = super::MyClient;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }
}
