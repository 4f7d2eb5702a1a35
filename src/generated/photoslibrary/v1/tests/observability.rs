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
    use google_apis_photoslibrary_v1::client::PhotosLibrary;
    use google_apis_test_utils::test_layer::TestLayer;
    use google_apis_test_utils::tracing::enable_tracing;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    #[tokio::test]
    async fn span_attributes() -> Result<()> {
        let (_guard, spans) = TestLayer::initialize();
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/albums/A1"))
                .respond_with(json_encoded(json!({"id": "A1"}))),
        );

        let client = PhotosLibrary::builder()
            .with_endpoint(format!("http://{}/", server.addr()))
            .with_api_key("secret-key")
            .with_tracing()
            .build()
            .await?;
        let _ = client.get_album("A1").send().await?;

        let captured = spans.take();
        let span = captured
            .iter()
            .find(|s| s.name == "http_request")
            .ok_or_else(|| format!("missing http_request span in {captured:?}"))?;
        let attr = |k: &str| span.attributes.get(k).map(String::as_str);
        assert_eq!(attr("otel.name"), Some("GET v1/albums/{+albumId}"));
        assert_eq!(attr("gcp.client.service"), Some("photoslibrary"));
        assert_eq!(
            attr("gcp.client.artifact"),
            Some("google-apis-photoslibrary-v1")
        );
        assert_eq!(attr("http.response.status_code"), Some("200"));
        assert!(
            span.attributes.values().all(|v| !v.contains("secret-key")),
            "{span:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn no_spans_by_default() -> Result<()> {
        let (_guard, spans) = TestLayer::initialize();
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/albums/A1"))
                .respond_with(json_encoded(json!({"id": "A1"}))),
        );

        let client = PhotosLibrary::builder()
            .with_endpoint(format!("http://{}/", server.addr()))
            .build()
            .await?;
        let _ = client.get_album("A1").send().await?;

        let captured = spans.take();
        assert!(
            captured.iter().all(|s| s.name != "http_request"),
            "{captured:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn error_with_logging() -> Result<()> {
        let _guard = enable_tracing();
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/albums/A1"))
                .respond_with(status_code(500)),
        );

        let client = PhotosLibrary::builder()
            .with_endpoint(format!("http://{}/", server.addr()))
            .with_tracing()
            .build()
            .await?;
        let err = client.get_album("A1").send().await.unwrap_err();
        assert!(err.is_server_error(), "{err:?}");
        Ok(())
    }
}
