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
    use gax::error::rpc::Code;
    use gax::options::RequestOptionsBuilder;
    use gax::paginator::PageableResponse;
    use google_apis_photoslibrary_v1::{client::PhotosLibrary, model};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    async fn test_client(server: &Server) -> Result<PhotosLibrary> {
        let client = PhotosLibrary::builder()
            .with_endpoint(format!("http://{}/", server.addr()))
            .with_access_token("test-token")
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn create_album() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/albums"),
                request::headers(contains(("authorization", "Bearer test-token"))),
                request::body(json_decoded(eq(json!({"album": {"title": "Trip"}})))),
            ])
            .respond_with(json_encoded(json!({
                "id": "A1",
                "title": "Trip",
                "isWriteable": true,
                "mediaItemsCount": "3",
            }))),
        );

        let client = test_client(&server).await?;
        let album = client
            .create_album()
            .set_body(model::CreateAlbumRequest::new().set_album(model::Album::new().set_title("Trip")))
            .send()
            .await?;
        assert_eq!(album.id.value().map(String::as_str), Some("A1"));
        assert_eq!(album.title.value().map(String::as_str), Some("Trip"));
        assert!(album.is_writeable());
        assert_eq!(album.media_items_count.value(), Some(&3));
        Ok(())
    }

    #[tokio::test]
    async fn get_album_escapes_path() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/albums/abc%20123"))
                .respond_with(json_encoded(json!({"id": "abc 123"}))),
        );

        let client = test_client(&server).await?;
        let album = client.get_album("abc 123").send().await?;
        assert_eq!(album.id.value().map(String::as_str), Some("abc 123"));
        Ok(())
    }

    #[tokio::test]
    async fn get_album_missing_id() -> Result<()> {
        // No expectations, any request fails the test.
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client.get_album("").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn quota_user_precedence() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/albums/A1"),
                request::query(url_decoded(contains(("key", "test-key")))),
                request::query(url_decoded(contains(("quotaUser", "call-user")))),
                request::query(url_decoded(not(contains(("quotaUser", "client-user"))))),
                request::query(url_decoded(contains(("fields", "id,title")))),
            ])
            .respond_with(json_encoded(json!({"id": "A1", "title": "Trip"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/albums/A2"),
                request::query(url_decoded(contains(("quotaUser", "client-user")))),
            ])
            .respond_with(json_encoded(json!({"id": "A2"}))),
        );

        let client = PhotosLibrary::builder()
            .with_endpoint(format!("http://{}/", server.addr()))
            .with_api_key("test-key")
            .with_quota_user("client-user")
            .build()
            .await?;
        assert_eq!(client.api_key(), Some("test-key"));
        assert_eq!(client.quota_user(), Some("client-user"));

        let album = client
            .get_album("A1")
            .with_quota_user("call-user")
            .with_fields("id,title")
            .send()
            .await?;
        assert_eq!(album.title.value().map(String::as_str), Some("Trip"));

        let album = client.get_album("A2").send().await?;
        assert_eq!(album.id.value().map(String::as_str), Some("A2"));
        Ok(())
    }

    #[tokio::test]
    async fn list_albums_pages() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/albums"),
                request::query(url_decoded(contains(("pageSize", "2")))),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({
                "albums": [{"id": "A1"}, {"id": "A2"}],
                "nextPageToken": "p2",
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/albums"),
                request::query(url_decoded(contains(("pageToken", "p2")))),
            ])
            .respond_with(json_encoded(json!({"albums": [{"id": "A3"}]}))),
        );

        let client = test_client(&server).await?;
        let mut ids = Vec::new();
        let mut token = None;
        loop {
            let page = client
                .list_albums()
                .set_page_size(2)
                .set_or_clear_page_token(token.take())
                .send()
                .await?;
            ids.extend(page.albums.value().into_iter().flatten().filter_map(|a| a.id.value().cloned()));
            if !page.has_next_page() {
                break;
            }
            token = Some(page.next_page_token());
        }
        assert_eq!(ids, vec!["A1", "A2", "A3"]);
        Ok(())
    }

    #[tokio::test]
    async fn batch_remove_empty_response() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/albums/A1:batchRemoveMediaItems"),
                request::body(json_decoded(eq(json!({"mediaItemIds": ["m1", "m2"]})))),
            ])
            .respond_with(status_code(200)),
        );

        let client = test_client(&server).await?;
        let response = client
            .batch_remove_media_items_from_album("A1")
            .set_body(model::BatchRemoveMediaItemsFromAlbumRequest::new().set_media_item_ids(["m1", "m2"]))
            .send()
            .await?;
        assert_eq!(response, model::BatchRemoveMediaItemsFromAlbumResponse::default());
        Ok(())
    }

    #[tokio::test]
    async fn share_album() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/albums/A1:share"),
                request::body(json_decoded(eq(json!({
                    "sharedAlbumOptions": {"isCollaborative": true, "isCommentable": false}
                })))),
            ])
            .respond_with(json_encoded(json!({
                "shareInfo": {
                    "shareToken": "tok",
                    "shareableUrl": "https://photos.app.goo.gl/tok",
                    "isJoined": true,
                    "isOwned": true,
                }
            }))),
        );

        let client = test_client(&server).await?;
        let options = model::SharedAlbumOptions::new()
            .set_is_collaborative(true)
            .set_is_commentable(false);
        let response = client
            .share_album("A1")
            .set_body(model::ShareAlbumRequest::new().set_shared_album_options(options))
            .send()
            .await?;
        let info = response.share_info.value().cloned().unwrap_or_default();
        assert_eq!(info.share_token.value().map(String::as_str), Some("tok"));
        assert!(info.is_joined());
        assert!(info.is_owned());
        assert_eq!(
            info.shareable_url.value().map(String::as_str),
            Some("https://photos.app.goo.gl/tok")
        );
        Ok(())
    }

    #[tokio::test]
    async fn add_enrichment() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/albums/A1:addEnrichment"),
                request::body(json_decoded(eq(json!({
                    "newEnrichmentItem": {"textEnrichment": {"text": "Day 1"}},
                    "albumPosition": {"position": "FIRST_IN_ALBUM"},
                })))),
            ])
            .respond_with(json_encoded(json!({"enrichmentItem": {"id": "E1"}}))),
        );

        let client = test_client(&server).await?;
        let request = model::AddEnrichmentToAlbumRequest::new()
            .set_new_enrichment_item(
                model::NewEnrichmentItem::new()
                    .set_text_enrichment(model::TextEnrichment::new().set_text("Day 1")),
            )
            .set_album_position(
                model::AlbumPosition::new()
                    .set_position(model::album_position::position::FIRST_IN_ALBUM),
            );
        let response = client
            .add_enrichment_to_album("A1")
            .set_body(request)
            .send()
            .await?;
        let id = response
            .enrichment_item
            .value()
            .and_then(|e| e.id.value().cloned());
        assert_eq!(id.as_deref(), Some("E1"));
        Ok(())
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
            Expectation::matching(request::method_path("GET", "/v1/albums/missing"))
                .respond_with(status_code(404).body(body.to_string())),
        );

        let client = test_client(&server).await?;
        let err = client.get_album("missing").send().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        let status = err.status().cloned().unwrap_or_default();
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "Requested entity was not found.");
        Ok(())
    }

    #[tokio::test]
    async fn unexpected_response() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/albums/A1"))
                .respond_with(json_encoded(json!({"title": 42}))),
        );

        let client = test_client(&server).await?;
        let err = client.get_album("A1").send().await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }
}
