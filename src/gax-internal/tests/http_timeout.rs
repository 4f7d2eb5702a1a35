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

#[cfg(test)]
mod tests {
    use gax::command::{Command, Execute};
    use gax::options::RequestOptions;
    use google_apis_gax_internal::http::ReqwestClient;
    use google_apis_gax_internal::options::ClientConfig;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    fn delayed_server(delay: Duration) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/albums"))
                .respond_with(delay_and_then(delay, json_encoded(json!({"albums": []})))),
        );
        server
    }

    async fn list_albums(server: &Server, options: RequestOptions) -> gax::Result<serde_json::Value> {
        let config = ClientConfig {
            endpoint: Some(format!("http://{}", server.addr())),
            ..Default::default()
        };
        let client = ReqwestClient::new(config, "https://photoslibrary.googleapis.com/")
            .await
            .map_err(gax::error::Error::io)?;
        let command = Command::new(http::Method::GET, "v1/albums", "v1/albums");
        client
            .execute(command, options)
            .await
            .map(|r| r.into_body())
    }

    #[tokio::test]
    async fn no_timeout() -> Result<()> {
        let server = delayed_server(Duration::from_millis(100));
        let body = list_albums(&server, RequestOptions::default()).await?;
        assert_eq!(body, json!({"albums": []}));
        Ok(())
    }

    #[tokio::test]
    async fn timeout_does_not_expire() -> Result<()> {
        let server = delayed_server(Duration::from_millis(100));
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_secs(10));
        let body = list_albums(&server, options).await?;
        assert_eq!(body, json!({"albums": []}));
        Ok(())
    }

    #[tokio::test]
    async fn timeout_expires() -> Result<()> {
        let server = delayed_server(Duration::from_millis(2000));
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(100));
        let err = list_albums(&server, options).await.unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }
}
