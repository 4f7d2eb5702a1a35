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

// Verify applications can mock the `Execute` trait.
#[cfg(test)]
mod test {
    use gax::command::{Command, Execute};
    use gax::error::Error;
    use gax::options::RequestOptions;
    use gax::response::Response;
    use google_apis_gax as gax;
    use serde_json::json;
    use std::sync::Arc;

    mockall::mock! {
        #[derive(Debug)]
        Executor {}
        #[async_trait::async_trait]
        impl Execute for Executor {
            async fn execute(&self, command: Command, options: RequestOptions) -> gax::Result<Response<serde_json::Value>>;
        }
    }

    static_assertions::assert_impl_all!(MockExecutor: Send, Sync);

    #[tokio::test]
    async fn mock_success() -> anyhow::Result<()> {
        let mut mock = MockExecutor::new();
        mock.expect_execute()
            .withf(|command, options| {
                command.method == http::Method::GET
                    && command.path == "v1/albums/abc"
                    && options.fields().as_deref() == Some("id")
            })
            .times(1)
            .returning(|_, _| Ok(Response::from(json!({"id": "abc"}))));

        let stub: Arc<dyn Execute> = Arc::new(mock);
        let mut options = RequestOptions::default();
        options.set_fields("id");
        let command = Command::new(http::Method::GET, "v1/albums/{+albumId}", "v1/albums/abc");
        let response = stub.execute(command, options).await?;
        assert_eq!(response.into_body(), json!({"id": "abc"}));
        Ok(())
    }

    #[tokio::test]
    async fn mock_error() -> anyhow::Result<()> {
        let mut mock = MockExecutor::new();
        mock.expect_execute()
            .times(1)
            .returning(|_, _| Err(Error::http(404, http::HeaderMap::new(), bytes::Bytes::new())));

        let command = Command::new(http::Method::GET, "v1/albums/{+albumId}", "v1/albums/abc");
        let err = match mock.execute(command, RequestOptions::default()).await {
            Ok(r) => anyhow::bail!("expected an error, got {r:?}"),
            Err(e) => e,
        };
        assert!(err.is_client_error(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        Ok(())
    }
}
