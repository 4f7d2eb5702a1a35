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
    use gax::field::Field;
    use gax::paginator::PageableResponse;
    use google_apis_photoslibrary_v1::model::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn absent_null_and_value() -> anyhow::Result<()> {
        let album: Album = serde_json::from_value(json!({
            "id": "A1",
            "title": null,
        }))?;
        assert!(album.id.is_value());
        assert!(album.title.is_null());
        assert!(album.product_url.is_absent());

        // Absent fields are omitted, explicit nulls are preserved.
        let got = serde_json::to_value(&album)?;
        assert_eq!(got, json!({"id": "A1", "title": null}));
        Ok(())
    }

    #[test]
    fn int64_as_string() -> anyhow::Result<()> {
        let album = Album::new().set_media_items_count(42);
        assert_eq!(serde_json::to_value(&album)?, json!({"mediaItemsCount": "42"}));

        let album: Album = serde_json::from_value(json!({"mediaItemsCount": "7"}))?;
        assert_eq!(album.media_items_count, Field::Value(7));
        let album: Album = serde_json::from_value(json!({"mediaItemsCount": 8}))?;
        assert_eq!(album.media_items_count, Field::Value(8));

        let bad = serde_json::from_value::<Album>(json!({"mediaItemsCount": "many"}));
        assert!(bad.is_err(), "{bad:?}");
        Ok(())
    }

    #[test]
    fn unknown_fields_are_ignored() -> anyhow::Result<()> {
        let item: MediaItem = serde_json::from_value(json!({
            "id": "m1",
            "someFutureField": {"nested": true},
        }))?;
        assert_eq!(item, MediaItem::new().set_id("m1"));
        Ok(())
    }

    #[test]
    fn setters() {
        let album = Album::new()
            .set_title("Trip")
            .set_or_clear_cover_photo_media_item_id(None::<String>)
            .set_or_clear_product_url(Some("https://photos.example.com/a1"));
        assert_eq!(album.title, Field::Value("Trip".to_string()));
        assert!(album.cover_photo_media_item_id.is_absent());
        assert!(album.product_url.is_value());
        assert!(!album.is_writeable());

        let filter = MediaTypeFilter::new().set_media_types([media_type_filter::media_types::VIDEO]);
        assert_eq!(filter.media_types, Field::Value(vec!["VIDEO".to_string()]));
    }

    #[test]
    fn update_overwrites_present_fields() {
        let mut album = Album::new()
            .set_id("A1")
            .set_title("Old")
            .set_is_writeable(true);
        let mut patch = Album::new().set_title("New");
        patch.is_writeable = Field::Null;
        album.update(patch);

        assert_eq!(album.id, Field::Value("A1".to_string()));
        assert_eq!(album.title, Field::Value("New".to_string()));
        assert!(album.is_writeable.is_null());
        assert!(!album.is_writeable());
    }

    #[test]
    fn pageable_responses() {
        let page = ListAlbumsResponse::new().set_next_page_token("abc");
        assert!(page.has_next_page());
        assert_eq!(page.next_page_token(), "abc");

        let page = SearchMediaItemsResponse::new();
        assert!(!page.has_next_page());
        assert_eq!(page.next_page_token(), "");

        let page = ListSharedAlbumsResponse::new().set_next_page_token("");
        assert!(!page.has_next_page());
    }

    #[test]
    fn enum_values_round_trip() -> anyhow::Result<()> {
        let position = AlbumPosition::new()
            .set_position(album_position::position::AFTER_MEDIA_ITEM)
            .set_relative_media_item_id("m1");
        let json = serde_json::to_value(&position)?;
        assert_eq!(
            json,
            json!({"position": "AFTER_MEDIA_ITEM", "relativeMediaItemId": "m1"})
        );
        let got: AlbumPosition = serde_json::from_value(json)?;
        assert_eq!(got, position);
        Ok(())
    }

    #[test]
    fn nested_batch_get_response() -> anyhow::Result<()> {
        let json = json!({
            "mediaItemResults": [
                {
                    "mediaItem": {
                        "id": "m1",
                        "mediaMetadata": {
                            "creationTime": "2024-05-01T10:00:00Z",
                            "width": "4032",
                            "height": "3024",
                            "photo": {
                                "cameraMake": "Pixel",
                                "apertureFNumber": 1.8,
                                "focalLength": 4.5,
                                "isoEquivalent": 100,
                            },
                            "video": null,
                        },
                    },
                },
                {
                    "status": {
                        "code": 5,
                        "message": "media item not found",
                        "details": [
                            {"@type": "type.googleapis.com/google.rpc.ErrorInfo", "reason": "x"},
                        ],
                    },
                },
            ],
        });
        let decoded: BatchGetMediaItemsResponse = serde_json::from_value(json.clone())?;
        let results = decoded.media_item_results.value().cloned().unwrap_or_default();
        assert_eq!(results.len(), 2, "{results:?}");

        let metadata = results[0]
            .media_item
            .value()
            .and_then(|m| m.media_metadata.value())
            .cloned()
            .unwrap_or_default();
        assert_eq!(metadata.width, Field::Value(4032));
        assert_eq!(metadata.height, Field::Value(3024));
        assert!(metadata.video.is_null());
        let photo = metadata.photo.value().cloned().unwrap_or_default();
        assert_eq!(photo.aperture_f_number, Field::Value(1.8));
        assert_eq!(photo.focal_length, Field::Value(4.5));
        assert_eq!(photo.iso_equivalent, Field::Value(100));

        let status = results[1].status.value().cloned().unwrap_or_default();
        assert_eq!(status.code, Field::Value(5));
        let details = status.details.value().cloned().unwrap_or_default();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].get("reason"), Some(&json!("x")));

        let encoded = serde_json::to_value(&decoded)?;
        assert_eq!(encoded, json);
        let again: BatchGetMediaItemsResponse = serde_json::from_value(encoded)?;
        assert_eq!(again, decoded);
        Ok(())
    }

    #[test]
    fn float_values_keep_precision() -> anyhow::Result<()> {
        let photo = Photo::new()
            .set_aperture_f_number(1.8)
            .set_focal_length(4.38);
        let got = serde_json::to_value(&photo)?;
        assert_eq!(got, json!({"apertureFNumber": 1.8, "focalLength": 4.38}));
        Ok(())
    }
}
