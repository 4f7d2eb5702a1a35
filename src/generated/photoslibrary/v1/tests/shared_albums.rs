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
    use gax::paginator::PageableResponse;
    use google_apis_photoslibrary_v1::{client::PhotosLibrary, model};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    async fn test_client(server: &Server) -> Result<PhotosLibrary> {
        let client = PhotosLibrary::builder()
            .with_endpoint(format!("http://{}/", server.addr()))
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn get_shared_album() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/sharedAlbums/tok-1"))
                .respond_with(json_encoded(json!({
                    "id": "A1",
                    "shareInfo": {
                        "shareToken": "tok-1",
                        "isOwned": false,
                        "sharedAlbumOptions": {"isCollaborative": true},
                    },
                }))),
        );

        let client = test_client(&server).await?;
        let album = client.get_shared_album("tok-1").send().await?;
        let info = album.share_info.value().cloned().unwrap_or_default();
        assert_eq!(info.share_token.value().map(String::as_str), Some("tok-1"));
        assert!(!info.is_joined());
        assert!(!info.is_owned());
        let options = info.shared_album_options.value().cloned().unwrap_or_default();
        assert!(options.is_collaborative());
        assert!(!options.is_commentable());
        Ok(())
    }

    #[tokio::test]
    async fn join_and_leave() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/sharedAlbums:join"),
                request::body(json_decoded(eq(json!({"shareToken": "tok-1"})))),
            ])
            .respond_with(json_encoded(json!({"album": {"id": "A1"}}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/sharedAlbums:leave"),
                request::body(json_decoded(eq(json!({"shareToken": "tok-1"})))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        let joined = client
            .join_shared_album()
            .set_body(model::JoinSharedAlbumRequest::new().set_share_token("tok-1"))
            .send()
            .await?;
        let id = joined.album.value().and_then(|a| a.id.value().cloned());
        assert_eq!(id.as_deref(), Some("A1"));

        let left = client
            .leave_shared_album()
            .set_body(model::LeaveSharedAlbumRequest::new().set_share_token("tok-1"))
            .send()
            .await?;
        assert_eq!(left, model::LeaveSharedAlbumResponse::default());
        Ok(())
    }

    #[tokio::test]
    async fn list_shared_albums() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/sharedAlbums"),
                request::query(url_decoded(contains(("excludeNonAppCreatedData", "true")))),
                request::query(url_decoded(contains(("pageToken", "p1")))),
            ])
            .respond_with(json_encoded(json!({
                "sharedAlbums": [{"id": "A1"}, {"id": "A2"}],
            }))),
        );

        let client = test_client(&server).await?;
        let page = client
            .list_shared_albums()
            .set_exclude_non_app_created_data(true)
            .set_page_token("p1")
            .send()
            .await?;
        let ids = page
            .shared_albums
            .value()
            .into_iter()
            .flatten()
            .filter_map(|a| a.id.value().cloned())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["A1", "A2"]);
        assert!(!page.has_next_page());
        Ok(())
    }
}
