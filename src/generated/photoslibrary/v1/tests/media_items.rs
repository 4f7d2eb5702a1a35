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
    async fn batch_get_repeats_ids() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/mediaItems:batchGet"),
                request::query(url_decoded(contains(("mediaItemIds", "m1")))),
                request::query(url_decoded(contains(("mediaItemIds", "m2")))),
            ])
            .respond_with(json_encoded(json!({"mediaItemResults": [
                {"mediaItem": {"id": "m1", "mediaMetadata": {"width": "4032", "height": "3024"}}},
                {"status": {"code": 5, "message": "not found"}},
            ]}))),
        );

        let client = test_client(&server).await?;
        let response = client
            .batch_get_media_items()
            .set_media_item_ids(["m1", "m2"])
            .send()
            .await?;
        let results = response.media_item_results.value().cloned().unwrap_or_default();
        assert_eq!(results.len(), 2, "{results:?}");

        let metadata = results[0]
            .media_item
            .value()
            .and_then(|m| m.media_metadata.value().cloned())
            .unwrap_or_default();
        assert_eq!(metadata.width.value(), Some(&4032));
        assert_eq!(metadata.height.value(), Some(&3024));

        let status = results[1].status.value().cloned().unwrap_or_default();
        assert_eq!(status.code.value(), Some(&5));
        assert!(results[1].media_item.is_absent());
        Ok(())
    }

    #[tokio::test]
    async fn get_media_item() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/mediaItems/m1")).respond_with(
                json_encoded(json!({
                    "id": "m1",
                    "filename": "IMG_0001.jpg",
                    "mimeType": "image/jpeg",
                    "mediaMetadata": {
                        "creationTime": "2024-05-01T10:00:00Z",
                        "photo": {"cameraMake": "Pixel", "apertureFNumber": 1.8, "isoEquivalent": 100},
                    },
                })),
            ),
        );

        let client = test_client(&server).await?;
        let item = client.get_media_item("m1").send().await?;
        assert_eq!(item.filename.value().map(String::as_str), Some("IMG_0001.jpg"));
        let photo = item
            .media_metadata
            .value()
            .and_then(|m| m.photo.value().cloned())
            .unwrap_or_default();
        assert_eq!(photo.camera_make.value().map(String::as_str), Some("Pixel"));
        assert_eq!(photo.aperture_f_number.value(), Some(&1.8));
        assert_eq!(photo.iso_equivalent.value(), Some(&100));
        Ok(())
    }

    #[tokio::test]
    async fn list_media_items_last_page() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/mediaItems"),
                request::query(url_decoded(contains(("pageSize", "100")))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        let page = client.list_media_items().set_page_size(100).send().await?;
        assert!(page.media_items.is_absent());
        assert!(!page.has_next_page());
        Ok(())
    }

    #[tokio::test]
    async fn search_with_filters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/mediaItems:search"),
                request::body(json_decoded(eq(json!({
                    "pageSize": 50,
                    "filters": {
                        "dateFilter": {"ranges": [{
                            "startDate": {"year": 2024, "month": 1, "day": 1},
                            "endDate": {"year": 2024, "month": 12, "day": 31},
                        }]},
                        "contentFilter": {"includedContentCategories": ["TRAVEL", "FOOD"]},
                        "mediaTypeFilter": {"mediaTypes": ["PHOTO"]},
                        "includeArchivedMedia": false,
                    },
                })))),
            ])
            .respond_with(json_encoded(json!({
                "mediaItems": [{"id": "m1"}],
                "nextPageToken": "next",
            }))),
        );

        let date = |y: i32, m: i32, d: i32| model::Date::new().set_year(y).set_month(m).set_day(d);
        let filters = model::Filters::new()
            .set_date_filter(model::DateFilter::new().set_ranges([model::DateRange::new()
                .set_start_date(date(2024, 1, 1))
                .set_end_date(date(2024, 12, 31))]))
            .set_content_filter(model::ContentFilter::new().set_included_content_categories([
                model::content_filter::included_content_categories::TRAVEL,
                model::content_filter::included_content_categories::FOOD,
            ]))
            .set_media_type_filter(
                model::MediaTypeFilter::new()
                    .set_media_types([model::media_type_filter::media_types::PHOTO]),
            )
            .set_include_archived_media(false);

        let client = test_client(&server).await?;
        let page = client
            .search_media_items()
            .set_body(
                model::SearchMediaItemsRequest::new()
                    .set_page_size(50)
                    .set_filters(filters),
            )
            .send()
            .await?;
        assert!(page.has_next_page());
        assert_eq!(page.next_page_token(), "next");
        Ok(())
    }

    #[tokio::test]
    async fn batch_create() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/mediaItems:batchCreate"),
                request::body(json_decoded(eq(json!({
                    "albumId": "A1",
                    "newMediaItems": [{
                        "description": "Beach",
                        "simpleMediaItem": {"uploadToken": "upload-1"},
                    }],
                })))),
            ])
            .respond_with(json_encoded(json!({"newMediaItemResults": [{
                "uploadToken": "upload-1",
                "status": {"message": "Success"},
                "mediaItem": {"id": "m1", "description": "Beach"},
            }]}))),
        );

        let client = test_client(&server).await?;
        let request = model::BatchCreateMediaItemsRequest::new()
            .set_album_id("A1")
            .set_new_media_items([model::NewMediaItem::new()
                .set_description("Beach")
                .set_simple_media_item(model::SimpleMediaItem::new().set_upload_token("upload-1"))]);
        let response = client.batch_create_media_items().set_body(request).send().await?;
        let results = response.new_media_item_results.value().cloned().unwrap_or_default();
        assert_eq!(results.len(), 1, "{results:?}");
        assert_eq!(
            results[0].upload_token.value().map(String::as_str),
            Some("upload-1")
        );
        let id = results[0].media_item.value().and_then(|m| m.id.value().cloned());
        assert_eq!(id.as_deref(), Some("m1"));
        Ok(())
    }
}
