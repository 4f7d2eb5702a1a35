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
    use gax::error::rpc::Code;
    use gax::options::RequestOptions;
    use google_apis_gax_internal::http::ReqwestClient;
    use google_apis_gax_internal::options::ClientConfig;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    async fn test_client(endpoint: String) -> Result<ReqwestClient> {
        let config = ClientConfig {
            endpoint: Some(endpoint),
            ..Default::default()
        };
        Ok(ReqwestClient::new(config, "https://photoslibrary.googleapis.com/").await?)
    }

    fn get_album() -> Command {
        Command::new(http::Method::GET, "v1/albums/{+albumId}", "v1/albums/a1")
    }

    #[tokio::test]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        let body = json!({"error": {
            "code": 404,
            "message": "Requested entity was not found.",
            "status": "NOT_FOUND",
        }});
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/albums/a1")).respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .body(body.to_string()),
            ),
        );

        let client = test_client(format!("http://{}", server.addr())).await?;
        let err = client
            .execute(get_album(), RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        assert!(!err.is_client_error(), "{err:?}");
        let status = err.status().expect("service errors include a status");
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "Requested entity was not found.");
        Ok(())
    }

    #[tokio::test]
    async fn authorization_error() -> Result<()> {
        let server = Server::run();
        let body = json!({"error": {
            "code": 403,
            "message": "The caller does not have permission",
            "status": "PERMISSION_DENIED",
        }});
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/albums/a1"))
                .respond_with(status_code(403).body(body.to_string())),
        );

        let client = test_client(format!("http://{}", server.addr())).await?;
        let err = client
            .execute(get_album(), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_authorization_error(), "{err:?}");
        assert!(!err.is_client_error(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn server_error_without_status() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/albums/a1"))
                .respond_with(status_code(503).body("try again later")),
        );

        let client = test_client(format!("http://{}", server.addr())).await?;
        let err = client
            .execute(get_album(), RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        assert!(err.is_server_error(), "{err:?}");
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from_static(b"try again later"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn bad_response_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/albums/a1"))
                .respond_with(status_code(200).body("not json")),
        );

        let client = test_client(format!("http://{}", server.addr())).await?;
        let err = client
            .execute(get_album(), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn connection_error() -> Result<()> {
        // Nothing listens on the discard port.
        let client = test_client("http://127.0.0.1:9".to_string()).await?;
        let err = client
            .execute(get_album(), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        assert!(err.http_status_code().is_none(), "{err:?}");
        Ok(())
    }
}
