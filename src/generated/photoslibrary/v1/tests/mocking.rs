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

// Verify applications can test their code with a mocked client.
#[cfg(test)]
mod tests {
    use gax::command::{Command, Execute};
    use gax::options::{RequestOptions, RequestOptionsBuilder};
    use gax::response::Response;
    use google_apis_photoslibrary_v1::{client::PhotosLibrary, model};
    use serde_json::json;

    mockall::mock! {
        #[derive(Debug)]
        Executor {}
        #[async_trait::async_trait]
        impl Execute for Executor {
            async fn execute(&self, command: Command, options: RequestOptions) -> gax::Result<Response<serde_json::Value>>;
        }
    }

    static_assertions::assert_impl_all!(PhotosLibrary: Clone, std::fmt::Debug, Send, Sync);

    // Application code under test.
    async fn album_titles(client: &PhotosLibrary) -> gax::Result<Vec<String>> {
        let response = client.list_albums().set_page_size(50).send().await?;
        Ok(response
            .albums
            .into_option()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|a| a.title.into_option())
            .collect())
    }

    #[tokio::test]
    async fn list_albums() -> anyhow::Result<()> {
        let mut mock = MockExecutor::new();
        mock.expect_execute()
            .withf(|command, _| {
                command.method == http::Method::GET
                    && command.path_template == "v1/albums"
                    && command.path == "v1/albums"
                    && command.query.get("pageSize") == Some(&vec!["50".to_string()])
                    && command.body.is_none()
                    && command.response_type.ends_with("ListAlbumsResponse")
            })
            .times(1)
            .returning(|_, _| {
                Ok(Response::from(json!({
                    "albums": [{"title": "Trip"}, {"id": "no-title"}, {"title": "Home"}]
                })))
            });

        let client = PhotosLibrary::from_stub(mock);
        assert_eq!(album_titles(&client).await?, vec!["Trip", "Home"]);
        Ok(())
    }

    #[tokio::test]
    async fn command_for_body_and_path() -> anyhow::Result<()> {
        let mut mock = MockExecutor::new();
        mock.expect_execute()
            .withf(|command, options| {
                command.method == http::Method::POST
                    && command.path_template == "v1/albums/{+albumId}:batchAddMediaItems"
                    && command.path == "v1/albums/A1:batchAddMediaItems"
                    && command.body == Some(json!({"mediaItemIds": ["m1"]}))
                    && command.query.get("quotaUser") == Some(&vec!["call-user".to_string()])
                    && options.quota_user().as_deref() == Some("call-user")
            })
            .times(1)
            .returning(|_, _| Ok(Response::from(json!({}))));

        let client = PhotosLibrary::from_stub(mock);
        let response = client
            .batch_add_media_items_to_album("A1")
            .set_body(model::BatchAddMediaItemsToAlbumRequest::new().set_media_item_ids(["m1"]))
            .with_quota_user("call-user")
            .send()
            .await?;
        assert_eq!(response, model::BatchAddMediaItemsToAlbumResponse::default());
        Ok(())
    }

    #[tokio::test]
    async fn error_is_returned() -> anyhow::Result<()> {
        let mut mock = MockExecutor::new();
        mock.expect_execute().times(1).returning(|_, _| {
            Err(gax::error::Error::http(
                403,
                http::HeaderMap::new(),
                bytes::Bytes::new(),
            ))
        });

        let client = PhotosLibrary::from_stub(mock);
        let err = match client.get_media_item("m1").send().await {
            Ok(r) => anyhow::bail!("expected an error, got {r:?}"),
            Err(e) => e,
        };
        assert!(err.is_authorization_error(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn binding_error_skips_stub() -> anyhow::Result<()> {
        let mut mock = MockExecutor::new();
        mock.expect_execute().never();

        let client = PhotosLibrary::from_stub(mock);
        let err = match client.unshare_album("").send().await {
            Ok(r) => anyhow::bail!("expected an error, got {r:?}"),
            Err(e) => e,
        };
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn send_with_callback() -> anyhow::Result<()> {
        let mut mock = MockExecutor::new();
        mock.expect_execute()
            .withf(|command, _| command.path == "v1/sharedAlbums/tok-1")
            .times(1)
            .returning(|_, _| Ok(Response::from(json!({"id": "A1"}))));

        let client = PhotosLibrary::from_stub(mock);
        let (tx, rx) = tokio::sync::oneshot::channel();
        client
            .get_shared_album("tok-1")
            .send_with(move |result| {
                let _ = tx.send(result);
            })
            .await?;
        let album = rx.await??;
        assert_eq!(album.id.value().map(String::as_str), Some("A1"));
        Ok(())
    }
}
