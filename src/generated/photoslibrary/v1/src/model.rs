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
//
// Code generated by discogen. DO NOT EDIT.

use gax::field::Field;

/// Request to add an enrichment to a specific album at a specific
/// position.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddEnrichmentToAlbumRequest {
    /// Specifies a position in an album.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub album_position: Field<crate::model::AlbumPosition>,

    /// A new enrichment item to be added to an album, used by the
    /// `albums.addEnrichment` call.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub new_enrichment_item: Field<crate::model::NewEnrichmentItem>,
}

impl AddEnrichmentToAlbumRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [album_position][crate::model::AddEnrichmentToAlbumRequest::album_position].
    pub fn set_album_position<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AlbumPosition>,
    {
        self.album_position = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [album_position][crate::model::AddEnrichmentToAlbumRequest::album_position].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_album_position<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AlbumPosition>,
    {
        self.album_position = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [new_enrichment_item][crate::model::AddEnrichmentToAlbumRequest::new_enrichment_item].
    pub fn set_new_enrichment_item<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::NewEnrichmentItem>,
    {
        self.new_enrichment_item = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [new_enrichment_item][crate::model::AddEnrichmentToAlbumRequest::new_enrichment_item].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_new_enrichment_item<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NewEnrichmentItem>,
    {
        self.new_enrichment_item = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.album_position.update(other.album_position);
        self.new_enrichment_item.update(other.new_enrichment_item);
    }
}

/// The enrichment item that's created.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddEnrichmentToAlbumResponse {
    /// An enrichment item.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub enrichment_item: Field<crate::model::EnrichmentItem>,
}

impl AddEnrichmentToAlbumResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enrichment_item][crate::model::AddEnrichmentToAlbumResponse::enrichment_item].
    pub fn set_enrichment_item<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EnrichmentItem>,
    {
        self.enrichment_item = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [enrichment_item][crate::model::AddEnrichmentToAlbumResponse::enrichment_item].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_enrichment_item<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::EnrichmentItem>,
    {
        self.enrichment_item = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.enrichment_item.update(other.enrichment_item);
    }
}

/// Representation of an album in Google Photos. Albums are containers
/// for media items. If an album has been shared by the application, it
/// contains an extra `shareInfo` property.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Album {
    /// [Output only] A URL to the cover photo's bytes. This shouldn't be
    /// used as is. Parameters should be appended to this URL before use. See
    /// the [developer
    /// documentation](https://developers.google.com/photos/library/guides/access-media-items#base-urls)
    /// for a complete list of supported parameters. For example,
    /// `'=w2048-h1024'` sets the dimensions of the cover photo to have a
    /// width of 2048 px and height of 1024 px.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub cover_photo_base_url: Field<std::string::String>,

    /// [Output only] Identifier for the media item associated with the cover
    /// photo.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub cover_photo_media_item_id: Field<std::string::String>,

    /// [Ouput only] Identifier for the album. This is a persistent
    /// identifier that can be used between sessions to identify this album.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub id: Field<std::string::String>,

    /// [Output only] True if you can create media items in this album. This
    /// field is based on the scopes granted and permissions of the album. If
    /// the scopes are changed or permissions of the album are changed, this
    /// field is updated.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub is_writeable: Field<bool>,

    /// [Output only] The number of media items in the album.
    #[serde(skip_serializing_if = "Field::is_absent")]
    #[serde_as(as = "Field<gax::field::I64>")]
    pub media_items_count: Field<i64>,

    /// [Output only] Google Photos URL for the album. The user needs to be
    /// signed in to their Google Photos account to access this link.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub product_url: Field<std::string::String>,

    /// Information about albums that are shared. This information is only
    /// included if you created the album, it is shared and you have the
    /// sharing scope.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub share_info: Field<crate::model::ShareInfo>,

    /// Name of the album displayed to the user in their Google Photos
    /// account. This string shouldn't be more than 500 characters.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub title: Field<std::string::String>,
}

impl Album {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cover_photo_base_url][crate::model::Album::cover_photo_base_url].
    pub fn set_cover_photo_base_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cover_photo_base_url = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [cover_photo_base_url][crate::model::Album::cover_photo_base_url].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_cover_photo_base_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cover_photo_base_url = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [cover_photo_media_item_id][crate::model::Album::cover_photo_media_item_id].
    pub fn set_cover_photo_media_item_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cover_photo_media_item_id = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [cover_photo_media_item_id][crate::model::Album::cover_photo_media_item_id].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_cover_photo_media_item_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cover_photo_media_item_id = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [id][crate::model::Album::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Album::id].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of `is_writeable`.
    pub fn set_is_writeable<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_writeable = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of `is_writeable`.
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_is_writeable<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_writeable = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Returns the value of `is_writeable`, `false` when absent or null.
    pub fn is_writeable(&self) -> bool {
        self.is_writeable.value().copied().unwrap_or_default()
    }

    /// Sets the value of [media_items_count][crate::model::Album::media_items_count].
    pub fn set_media_items_count<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.media_items_count = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [media_items_count][crate::model::Album::media_items_count].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_media_items_count<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.media_items_count = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [product_url][crate::model::Album::product_url].
    pub fn set_product_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.product_url = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [product_url][crate::model::Album::product_url].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_product_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.product_url = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [share_info][crate::model::Album::share_info].
    pub fn set_share_info<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ShareInfo>,
    {
        self.share_info = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [share_info][crate::model::Album::share_info].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_share_info<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ShareInfo>,
    {
        self.share_info = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [title][crate::model::Album::title].
    pub fn set_title<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.title = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [title][crate::model::Album::title].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_title<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.title = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.cover_photo_base_url.update(other.cover_photo_base_url);
        self.cover_photo_media_item_id.update(other.cover_photo_media_item_id);
        self.id.update(other.id);
        self.is_writeable.update(other.is_writeable);
        self.media_items_count.update(other.media_items_count);
        self.product_url.update(other.product_url);
        self.share_info.update(other.share_info);
        self.title.update(other.title);
    }
}

/// Specifies a position in an album.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AlbumPosition {
    /// Type of position, for a media or enrichment item.
    ///
    /// See
    /// [album_position::position][crate::model::album_position::position]
    /// for well-known values.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub position: Field<std::string::String>,

    /// The enrichment item to which the position is relative to. Only used
    /// when position type is AFTER_ENRICHMENT_ITEM.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub relative_enrichment_item_id: Field<std::string::String>,

    /// The media item to which the position is relative to. Only used when
    /// position type is AFTER_MEDIA_ITEM.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub relative_media_item_id: Field<std::string::String>,
}

impl AlbumPosition {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [position][crate::model::AlbumPosition::position].
    pub fn set_position<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.position = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [position][crate::model::AlbumPosition::position].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_position<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.position = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [relative_enrichment_item_id][crate::model::AlbumPosition::relative_enrichment_item_id].
    pub fn set_relative_enrichment_item_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.relative_enrichment_item_id = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [relative_enrichment_item_id][crate::model::AlbumPosition::relative_enrichment_item_id].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_relative_enrichment_item_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.relative_enrichment_item_id = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [relative_media_item_id][crate::model::AlbumPosition::relative_media_item_id].
    pub fn set_relative_media_item_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.relative_media_item_id = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [relative_media_item_id][crate::model::AlbumPosition::relative_media_item_id].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_relative_media_item_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.relative_media_item_id = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.position.update(other.position);
        self.relative_enrichment_item_id.update(other.relative_enrichment_item_id);
        self.relative_media_item_id.update(other.relative_media_item_id);
    }
}

/// Defines additional types related to [AlbumPosition].
pub mod album_position {
    /// Well-known values for [position][crate::model::AlbumPosition::position].
    pub mod position {
        pub const POSITION_TYPE_UNSPECIFIED: &str = "POSITION_TYPE_UNSPECIFIED";
        pub const FIRST_IN_ALBUM: &str = "FIRST_IN_ALBUM";
        pub const LAST_IN_ALBUM: &str = "LAST_IN_ALBUM";
        pub const AFTER_MEDIA_ITEM: &str = "AFTER_MEDIA_ITEM";
        pub const AFTER_ENRICHMENT_ITEM: &str = "AFTER_ENRICHMENT_ITEM";
    }
}

/// Request to add media items to an album.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchAddMediaItemsToAlbumRequest {
    /// Identifiers of the MediaItems to be added. The maximum number of
    /// media items that can be added in one call is 50.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub media_item_ids: Field<std::vec::Vec<std::string::String>>,
}

impl BatchAddMediaItemsToAlbumRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [media_item_ids][crate::model::BatchAddMediaItemsToAlbumRequest::media_item_ids].
    pub fn set_media_item_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.media_item_ids = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.media_item_ids.update(other.media_item_ids);
    }
}

/// Response for adding media items to an album.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchAddMediaItemsToAlbumResponse {}

impl BatchAddMediaItemsToAlbumResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Overwrites the fields present in `other`.
    pub fn update(&mut self, _other: Self) {}
}

/// Request to create one or more media items in a user's Google Photos
/// library. If an `albumid` is specified, the media items are also added
/// to that album. `albumPosition` is optional and can only be specified
/// if an `albumId` is set.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchCreateMediaItemsRequest {
    /// Identifier of the album where the media items are added. The media
    /// items are also added to the user's library. This is an optional
    /// field.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub album_id: Field<std::string::String>,

    /// Specifies a position in an album.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub album_position: Field<crate::model::AlbumPosition>,

    /// List of media items to be created.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub new_media_items: Field<std::vec::Vec<crate::model::NewMediaItem>>,
}

impl BatchCreateMediaItemsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [album_id][crate::model::BatchCreateMediaItemsRequest::album_id].
    pub fn set_album_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.album_id = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [album_id][crate::model::BatchCreateMediaItemsRequest::album_id].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_album_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.album_id = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [album_position][crate::model::BatchCreateMediaItemsRequest::album_position].
    pub fn set_album_position<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AlbumPosition>,
    {
        self.album_position = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [album_position][crate::model::BatchCreateMediaItemsRequest::album_position].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_album_position<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AlbumPosition>,
    {
        self.album_position = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [new_media_items][crate::model::BatchCreateMediaItemsRequest::new_media_items].
    pub fn set_new_media_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NewMediaItem>,
    {
        self.new_media_items = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.album_id.update(other.album_id);
        self.album_position.update(other.album_position);
        self.new_media_items.update(other.new_media_items);
    }
}

/// List of media items created.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchCreateMediaItemsResponse {
    /// Output only. List of media items created.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub new_media_item_results: Field<std::vec::Vec<crate::model::NewMediaItemResult>>,
}

impl BatchCreateMediaItemsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [new_media_item_results][crate::model::BatchCreateMediaItemsResponse::new_media_item_results].
    pub fn set_new_media_item_results<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NewMediaItemResult>,
    {
        self.new_media_item_results = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.new_media_item_results.update(other.new_media_item_results);
    }
}

/// Response to retrieve a list of media items.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchGetMediaItemsResponse {
    /// Output only. List of media items retrieved. Note that even if the
    /// call to BatchGetMediaItems succeeds, there may have been failures for
    /// some media items in the batch. These failures are indicated in each
    /// MediaItemResult.status.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub media_item_results: Field<std::vec::Vec<crate::model::MediaItemResult>>,
}

impl BatchGetMediaItemsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [media_item_results][crate::model::BatchGetMediaItemsResponse::media_item_results].
    pub fn set_media_item_results<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::MediaItemResult>,
    {
        self.media_item_results = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.media_item_results.update(other.media_item_results);
    }
}

/// Request to remove a list of media items from an album.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchRemoveMediaItemsFromAlbumRequest {
    /// Identifiers of the MediaItems to be removed. Must not contain
    /// repeated identifiers and cannot be empty. The maximum number of media
    /// items that can be removed in one call is 50.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub media_item_ids: Field<std::vec::Vec<std::string::String>>,
}

impl BatchRemoveMediaItemsFromAlbumRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [media_item_ids][crate::model::BatchRemoveMediaItemsFromAlbumRequest::media_item_ids].
    pub fn set_media_item_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.media_item_ids = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.media_item_ids.update(other.media_item_ids);
    }
}

/// Response for successfully removing all specified media items from the
/// album.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchRemoveMediaItemsFromAlbumResponse {}

impl BatchRemoveMediaItemsFromAlbumResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Overwrites the fields present in `other`.
    pub fn update(&mut self, _other: Self) {}
}

/// This filter allows you to return media items based on the content
/// type. It's possible to specify a list of categories to include,
/// and/or a list of categories to exclude. Within each list, the
/// categories are combined with an OR. <p> The content filter
/// `includedContentCategories`: [c1, c2, c3] would get media items that
/// contain (c1 OR c2 OR c3). <p> The content filter
/// `excludedContentCategories`: [c1, c2, c3] would NOT get media items
/// that contain (c1 OR c2 OR c3). <p> You can also include some
/// categories while excluding others, as in this example:
/// `includedContentCategories`: [c1, c2], `excludedContentCategories`:
/// [c3, c4] <p> The previous example would get media items that contain
/// (c1 OR c2) AND NOT (c3 OR c4). A category that appears in
/// `includedContentategories` must not appear in
/// `excludedContentCategories`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContentFilter {
    /// The set of categories which are not to be included in the media item
    /// search results. The items in the set are ORed. There's a maximum of
    /// 10 `excludedContentCategories` per request.
    ///
    /// See
    /// [content_filter::excluded_content_categories][crate::model::content_filter::excluded_content_categories]
    /// for well-known values.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub excluded_content_categories: Field<std::vec::Vec<std::string::String>>,

    /// The set of categories to be included in the media item search
    /// results. The items in the set are ORed. There's a maximum of 10
    /// `includedContentCategories` per request.
    ///
    /// See
    /// [content_filter::included_content_categories][crate::model::content_filter::included_content_categories]
    /// for well-known values.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub included_content_categories: Field<std::vec::Vec<std::string::String>>,
}

impl ContentFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [excluded_content_categories][crate::model::ContentFilter::excluded_content_categories].
    pub fn set_excluded_content_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.excluded_content_categories = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [included_content_categories][crate::model::ContentFilter::included_content_categories].
    pub fn set_included_content_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.included_content_categories = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.excluded_content_categories.update(other.excluded_content_categories);
        self.included_content_categories.update(other.included_content_categories);
    }
}

/// Defines additional types related to [ContentFilter].
pub mod content_filter {
    /// Well-known values for [excluded_content_categories][crate::model::ContentFilter::excluded_content_categories].
    pub mod excluded_content_categories {
        pub const NONE: &str = "NONE";
        pub const LANDSCAPES: &str = "LANDSCAPES";
        pub const RECEIPTS: &str = "RECEIPTS";
        pub const CITYSCAPES: &str = "CITYSCAPES";
        pub const LANDMARKS: &str = "LANDMARKS";
        pub const SELFIES: &str = "SELFIES";
        pub const PEOPLE: &str = "PEOPLE";
        pub const PETS: &str = "PETS";
        pub const WEDDINGS: &str = "WEDDINGS";
        pub const BIRTHDAYS: &str = "BIRTHDAYS";
        pub const DOCUMENTS: &str = "DOCUMENTS";
        pub const TRAVEL: &str = "TRAVEL";
        pub const ANIMALS: &str = "ANIMALS";
        pub const FOOD: &str = "FOOD";
        pub const SPORT: &str = "SPORT";
        pub const NIGHT: &str = "NIGHT";
        pub const PERFORMANCES: &str = "PERFORMANCES";
        pub const WHITEBOARDS: &str = "WHITEBOARDS";
        pub const SCREENSHOTS: &str = "SCREENSHOTS";
        pub const UTILITY: &str = "UTILITY";
        pub const ARTS: &str = "ARTS";
        pub const CRAFTS: &str = "CRAFTS";
        pub const FASHION: &str = "FASHION";
        pub const HOUSES: &str = "HOUSES";
        pub const GARDENS: &str = "GARDENS";
        pub const FLOWERS: &str = "FLOWERS";
        pub const HOLIDAYS: &str = "HOLIDAYS";
    }

    /// Well-known values for [included_content_categories][crate::model::ContentFilter::included_content_categories].
    pub mod included_content_categories {
        pub const NONE: &str = "NONE";
        pub const LANDSCAPES: &str = "LANDSCAPES";
        pub const RECEIPTS: &str = "RECEIPTS";
        pub const CITYSCAPES: &str = "CITYSCAPES";
        pub const LANDMARKS: &str = "LANDMARKS";
        pub const SELFIES: &str = "SELFIES";
        pub const PEOPLE: &str = "PEOPLE";
        pub const PETS: &str = "PETS";
        pub const WEDDINGS: &str = "WEDDINGS";
        pub const BIRTHDAYS: &str = "BIRTHDAYS";
        pub const DOCUMENTS: &str = "DOCUMENTS";
        pub const TRAVEL: &str = "TRAVEL";
        pub const ANIMALS: &str = "ANIMALS";
        pub const FOOD: &str = "FOOD";
        pub const SPORT: &str = "SPORT";
        pub const NIGHT: &str = "NIGHT";
        pub const PERFORMANCES: &str = "PERFORMANCES";
        pub const WHITEBOARDS: &str = "WHITEBOARDS";
        pub const SCREENSHOTS: &str = "SCREENSHOTS";
        pub const UTILITY: &str = "UTILITY";
        pub const ARTS: &str = "ARTS";
        pub const CRAFTS: &str = "CRAFTS";
        pub const FASHION: &str = "FASHION";
        pub const HOUSES: &str = "HOUSES";
        pub const GARDENS: &str = "GARDENS";
        pub const FLOWERS: &str = "FLOWERS";
        pub const HOLIDAYS: &str = "HOLIDAYS";
    }
}

/// Information about the user who added the media item. Note that this
/// information is included only if the media item is within a shared
/// album created by your app and you have the sharing scope.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContributorInfo {
    /// Display name of the contributor.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub display_name: Field<std::string::String>,

    /// URL to the profile picture of the contributor.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub profile_picture_base_url: Field<std::string::String>,
}

impl ContributorInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::ContributorInfo::display_name].
    pub fn set_display_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_name = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [display_name][crate::model::ContributorInfo::display_name].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_display_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.display_name = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [profile_picture_base_url][crate::model::ContributorInfo::profile_picture_base_url].
    pub fn set_profile_picture_base_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.profile_picture_base_url = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [profile_picture_base_url][crate::model::ContributorInfo::profile_picture_base_url].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_profile_picture_base_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.profile_picture_base_url = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.display_name.update(other.display_name);
        self.profile_picture_base_url.update(other.profile_picture_base_url);
    }
}

/// Request to create an album in Google Photos.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateAlbumRequest {
    /// Representation of an album in Google Photos. Albums are containers
    /// for media items. If an album has been shared by the application, it
    /// contains an extra `shareInfo` property.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub album: Field<crate::model::Album>,
}

impl CreateAlbumRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [album][crate::model::CreateAlbumRequest::album].
    pub fn set_album<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Album>,
    {
        self.album = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [album][crate::model::CreateAlbumRequest::album].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_album<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Album>,
    {
        self.album = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.album.update(other.album);
    }
}

/// Represents a whole calendar date. Set `day` to 0 when only the month
/// and year are significant, for example, all of December 2018. Set
/// `day` and `month` to 0 if only the year is significant, for example,
/// the entire of 2018. Set `year` to 0 when only the day and month are
/// significant, for example, an anniversary or birthday. Unsupported:
/// Setting all values to 0, only `month` to 0, or both `day` and ` year`
/// to 0 at the same time.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Date {
    /// Day of month. Must be from 1 to 31 and valid for the year and month,
    /// or 0 if specifying a year/month where the day isn't significant.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub day: Field<i32>,

    /// Month of year. Must be from 1 to 12, or 0 if specifying a year
    /// without a month and day.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub month: Field<i32>,

    /// Year of date. Must be from 1 to 9999, or 0 if specifying a date
    /// without a year.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub year: Field<i32>,
}

impl Date {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [day][crate::model::Date::day].
    pub fn set_day<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.day = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [day][crate::model::Date::day].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_day<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.day = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [month][crate::model::Date::month].
    pub fn set_month<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.month = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [month][crate::model::Date::month].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_month<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.month = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [year][crate::model::Date::year].
    pub fn set_year<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.year = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [year][crate::model::Date::year].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_year<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.year = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.day.update(other.day);
        self.month.update(other.month);
        self.year.update(other.year);
    }
}

/// This filter defines the allowed dates or date ranges for the media
/// returned. It's possible to pick a set of specific dates and a set of
/// date ranges.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DateFilter {
    /// List of dates that match the media items' creation date. A maximum of
    /// 5 dates can be included per request.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub dates: Field<std::vec::Vec<crate::model::Date>>,

    /// List of dates ranges that match the media items' creation date. A
    /// maximum of 5 dates ranges can be included per request.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub ranges: Field<std::vec::Vec<crate::model::DateRange>>,
}

impl DateFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dates][crate::model::DateFilter::dates].
    pub fn set_dates<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Date>,
    {
        self.dates = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [ranges][crate::model::DateFilter::ranges].
    pub fn set_ranges<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::DateRange>,
    {
        self.ranges = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.dates.update(other.dates);
        self.ranges.update(other.ranges);
    }
}

/// Defines a range of dates. Both dates must be of the same format. For
/// more information, see Date.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DateRange {
    /// Represents a whole calendar date. Set `day` to 0 when only the month
    /// and year are significant, for example, all of December 2018. Set
    /// `day` and `month` to 0 if only the year is significant, for example,
    /// the entire of 2018. Set `year` to 0 when only the day and month are
    /// significant, for example, an anniversary or birthday. Unsupported:
    /// Setting all values to 0, only `month` to 0, or both `day` and ` year`
    /// to 0 at the same time.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub end_date: Field<crate::model::Date>,

    /// Represents a whole calendar date. Set `day` to 0 when only the month
    /// and year are significant, for example, all of December 2018. Set
    /// `day` and `month` to 0 if only the year is significant, for example,
    /// the entire of 2018. Set `year` to 0 when only the day and month are
    /// significant, for example, an anniversary or birthday. Unsupported:
    /// Setting all values to 0, only `month` to 0, or both `day` and ` year`
    /// to 0 at the same time.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<crate::model::Date>,
}

impl DateRange {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [end_date][crate::model::DateRange::end_date].
    pub fn set_end_date<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Date>,
    {
        self.end_date = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [end_date][crate::model::DateRange::end_date].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_end_date<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Date>,
    {
        self.end_date = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [start_date][crate::model::DateRange::start_date].
    pub fn set_start_date<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Date>,
    {
        self.start_date = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [start_date][crate::model::DateRange::start_date].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_start_date<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Date>,
    {
        self.start_date = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.end_date.update(other.end_date);
        self.start_date.update(other.start_date);
    }
}

/// An enrichment item.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EnrichmentItem {
    /// Identifier of the enrichment item.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub id: Field<std::string::String>,
}

impl EnrichmentItem {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::EnrichmentItem::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::EnrichmentItem::id].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.id.update(other.id);
    }
}

/// This filter defines the features that the media items should have.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FeatureFilter {
    /// The set of features to be included in the media item search results.
    /// The items in the set are ORed and may match any of the specified
    /// features.
    ///
    /// See
    /// [feature_filter::included_features][crate::model::feature_filter::included_features]
    /// for well-known values.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub included_features: Field<std::vec::Vec<std::string::String>>,
}

impl FeatureFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [included_features][crate::model::FeatureFilter::included_features].
    pub fn set_included_features<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.included_features = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.included_features.update(other.included_features);
    }
}

/// Defines additional types related to [FeatureFilter].
pub mod feature_filter {
    /// Well-known values for [included_features][crate::model::FeatureFilter::included_features].
    pub mod included_features {
        pub const NONE: &str = "NONE";
        pub const FAVORITES: &str = "FAVORITES";
    }
}

/// Filters that can be applied to a media item search. If multiple
/// filter options are specified, they're treated as AND with each other.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Filters {
    /// This filter allows you to return media items based on the content
    /// type. It's possible to specify a list of categories to include,
    /// and/or a list of categories to exclude. Within each list, the
    /// categories are combined with an OR. <p> The content filter
    /// `includedContentCategories`: [c1, c2, c3] would get media items that
    /// contain (c1 OR c2 OR c3). <p> The content filter
    /// `excludedContentCategories`: [c1, c2, c3] would NOT get media items
    /// that contain (c1 OR c2 OR c3). <p> You can also include some
    /// categories while excluding others, as in this example:
    /// `includedContentCategories`: [c1, c2], `excludedContentCategories`:
    /// [c3, c4] <p> The previous example would get media items that contain
    /// (c1 OR c2) AND NOT (c3 OR c4). A category that appears in
    /// `includedContentategories` must not appear in
    /// `excludedContentCategories`.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub content_filter: Field<crate::model::ContentFilter>,

    /// This filter defines the allowed dates or date ranges for the media
    /// returned. It's possible to pick a set of specific dates and a set of
    /// date ranges.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub date_filter: Field<crate::model::DateFilter>,

    /// If set, the results exclude media items that were not created by this
    /// app. Defaults to false (all media items are returned). This field is
    /// ignored if the photoslibrary.readonly.appcreateddata scope is used.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub exclude_non_app_created_data: Field<bool>,

    /// This filter defines the features that the media items should have.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub feature_filter: Field<crate::model::FeatureFilter>,

    /// If set, the results include media items that the user has archived.
    /// Defaults to false (archived media items aren't included).
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub include_archived_media: Field<bool>,

    /// This filter defines the type of media items to be returned, for
    /// example, videos or photos. All the specified media types are treated
    /// as an OR when used together.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub media_type_filter: Field<crate::model::MediaTypeFilter>,
}

impl Filters {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [content_filter][crate::model::Filters::content_filter].
    pub fn set_content_filter<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ContentFilter>,
    {
        self.content_filter = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [content_filter][crate::model::Filters::content_filter].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_content_filter<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ContentFilter>,
    {
        self.content_filter = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [date_filter][crate::model::Filters::date_filter].
    pub fn set_date_filter<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DateFilter>,
    {
        self.date_filter = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [date_filter][crate::model::Filters::date_filter].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_date_filter<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DateFilter>,
    {
        self.date_filter = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of `exclude_non_app_created_data`.
    pub fn set_exclude_non_app_created_data<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.exclude_non_app_created_data = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of `exclude_non_app_created_data`.
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_exclude_non_app_created_data<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.exclude_non_app_created_data = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Returns the value of `exclude_non_app_created_data`, `false` when absent or null.
    pub fn exclude_non_app_created_data(&self) -> bool {
        self.exclude_non_app_created_data.value().copied().unwrap_or_default()
    }

    /// Sets the value of [feature_filter][crate::model::Filters::feature_filter].
    pub fn set_feature_filter<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::FeatureFilter>,
    {
        self.feature_filter = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [feature_filter][crate::model::Filters::feature_filter].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_feature_filter<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::FeatureFilter>,
    {
        self.feature_filter = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of `include_archived_media`.
    pub fn set_include_archived_media<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.include_archived_media = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of `include_archived_media`.
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_include_archived_media<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.include_archived_media = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Returns the value of `include_archived_media`, `false` when absent or null.
    pub fn include_archived_media(&self) -> bool {
        self.include_archived_media.value().copied().unwrap_or_default()
    }

    /// Sets the value of [media_type_filter][crate::model::Filters::media_type_filter].
    pub fn set_media_type_filter<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MediaTypeFilter>,
    {
        self.media_type_filter = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [media_type_filter][crate::model::Filters::media_type_filter].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_media_type_filter<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MediaTypeFilter>,
    {
        self.media_type_filter = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.content_filter.update(other.content_filter);
        self.date_filter.update(other.date_filter);
        self.exclude_non_app_created_data.update(other.exclude_non_app_created_data);
        self.feature_filter.update(other.feature_filter);
        self.include_archived_media.update(other.include_archived_media);
        self.media_type_filter.update(other.media_type_filter);
    }
}

/// Request to join a shared album on behalf of the user. This uses a
/// shareToken which can be acquired via the shareAlbum or
/// listSharedAlbums calls.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct JoinSharedAlbumRequest {
    /// Token to join the shared album on behalf of the user.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub share_token: Field<std::string::String>,
}

impl JoinSharedAlbumRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [share_token][crate::model::JoinSharedAlbumRequest::share_token].
    pub fn set_share_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.share_token = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [share_token][crate::model::JoinSharedAlbumRequest::share_token].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_share_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.share_token = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.share_token.update(other.share_token);
    }
}

/// Response to successfully joining the shared album on behalf of the
/// user.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct JoinSharedAlbumResponse {
    /// Representation of an album in Google Photos. Albums are containers
    /// for media items. If an album has been shared by the application, it
    /// contains an extra `shareInfo` property.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub album: Field<crate::model::Album>,
}

impl JoinSharedAlbumResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [album][crate::model::JoinSharedAlbumResponse::album].
    pub fn set_album<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Album>,
    {
        self.album = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [album][crate::model::JoinSharedAlbumResponse::album].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_album<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Album>,
    {
        self.album = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.album.update(other.album);
    }
}

/// An object representing a latitude/longitude pair. This is expressed
/// as a pair of doubles representing degrees latitude and degrees
/// longitude. Unless specified otherwise, this must conform to the <a
/// href="http://www.unoosa.org/pdf/icg/2012/template/WGS_84.pdf">WGS84
/// standard</a>. Values must be within normalized ranges.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LatLng {
    /// The latitude in degrees. It must be in the range [-90.0, +90.0].
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub latitude: Field<f64>,

    /// The longitude in degrees. It must be in the range [-180.0, +180.0].
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub longitude: Field<f64>,
}

impl LatLng {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [latitude][crate::model::LatLng::latitude].
    pub fn set_latitude<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.latitude = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [latitude][crate::model::LatLng::latitude].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_latitude<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.latitude = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [longitude][crate::model::LatLng::longitude].
    pub fn set_longitude<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.longitude = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [longitude][crate::model::LatLng::longitude].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_longitude<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.longitude = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.latitude.update(other.latitude);
        self.longitude.update(other.longitude);
    }
}

/// Request to leave a shared album on behalf of the user. This uses a
/// shareToken which can be acquired via the or listSharedAlbums or
/// getAlbum calls.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LeaveSharedAlbumRequest {
    /// Token to leave the shared album on behalf of the user.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub share_token: Field<std::string::String>,
}

impl LeaveSharedAlbumRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [share_token][crate::model::LeaveSharedAlbumRequest::share_token].
    pub fn set_share_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.share_token = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [share_token][crate::model::LeaveSharedAlbumRequest::share_token].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_share_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.share_token = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.share_token.update(other.share_token);
    }
}

/// Response to successfully leaving the shared album on behalf of the
/// user.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LeaveSharedAlbumResponse {}

impl LeaveSharedAlbumResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Overwrites the fields present in `other`.
    pub fn update(&mut self, _other: Self) {}
}

/// List of albums requested.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAlbumsResponse {
    /// Output only. List of albums shown in the Albums tab of the user's
    /// Google Photos app.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub albums: Field<std::vec::Vec<crate::model::Album>>,

    /// Output only. Token to use to get the next set of albums. Populated if
    /// there are more albums to retrieve for this request.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub next_page_token: Field<std::string::String>,
}

impl ListAlbumsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [albums][crate::model::ListAlbumsResponse::albums].
    pub fn set_albums<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Album>,
    {
        self.albums = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListAlbumsResponse::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListAlbumsResponse::next_page_token].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.albums.update(other.albums);
        self.next_page_token.update(other.next_page_token);
    }
}

impl gax::paginator::PageableResponse for ListAlbumsResponse {
    fn next_page_token(&self) -> std::string::String {
        self.next_page_token.value().cloned().unwrap_or_default()
    }
}

/// List of all media items from the user's Google Photos library.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListMediaItemsResponse {
    /// Output only. List of media items in the user's library.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub media_items: Field<std::vec::Vec<crate::model::MediaItem>>,

    /// Output only. Token to use to get the next set of media items. Its
    /// presence is the only reliable indicator of more media items being
    /// available in the next request.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub next_page_token: Field<std::string::String>,
}

impl ListMediaItemsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [media_items][crate::model::ListMediaItemsResponse::media_items].
    pub fn set_media_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::MediaItem>,
    {
        self.media_items = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListMediaItemsResponse::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListMediaItemsResponse::next_page_token].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.media_items.update(other.media_items);
        self.next_page_token.update(other.next_page_token);
    }
}

impl gax::paginator::PageableResponse for ListMediaItemsResponse {
    fn next_page_token(&self) -> std::string::String {
        self.next_page_token.value().cloned().unwrap_or_default()
    }
}

/// List of shared albums requested.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSharedAlbumsResponse {
    /// Output only. Token to use to get the next set of shared albums.
    /// Populated if there are more shared albums to retrieve for this
    /// request.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub next_page_token: Field<std::string::String>,

    /// Output only. List of shared albums.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub shared_albums: Field<std::vec::Vec<crate::model::Album>>,
}

impl ListSharedAlbumsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [next_page_token][crate::model::ListSharedAlbumsResponse::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListSharedAlbumsResponse::next_page_token].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [shared_albums][crate::model::ListSharedAlbumsResponse::shared_albums].
    pub fn set_shared_albums<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Album>,
    {
        self.shared_albums = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.next_page_token.update(other.next_page_token);
        self.shared_albums.update(other.shared_albums);
    }
}

impl gax::paginator::PageableResponse for ListSharedAlbumsResponse {
    fn next_page_token(&self) -> std::string::String {
        self.next_page_token.value().cloned().unwrap_or_default()
    }
}

/// Represents a physical location.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Location {
    /// An object representing a latitude/longitude pair. This is expressed
    /// as a pair of doubles representing degrees latitude and degrees
    /// longitude. Unless specified otherwise, this must conform to the <a
    /// href="http://www.unoosa.org/pdf/icg/2012/template/WGS_84.pdf">WGS84
    /// standard</a>. Values must be within normalized ranges.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub latlng: Field<crate::model::LatLng>,

    /// Name of the location to be displayed.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub location_name: Field<std::string::String>,
}

impl Location {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [latlng][crate::model::Location::latlng].
    pub fn set_latlng<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LatLng>,
    {
        self.latlng = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [latlng][crate::model::Location::latlng].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_latlng<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::LatLng>,
    {
        self.latlng = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [location_name][crate::model::Location::location_name].
    pub fn set_location_name<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_name = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [location_name][crate::model::Location::location_name].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_location_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.location_name = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.latlng.update(other.latlng);
        self.location_name.update(other.location_name);
    }
}

/// An enrichment containing a single location.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LocationEnrichment {
    /// Represents a physical location.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub location: Field<crate::model::Location>,
}

impl LocationEnrichment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [location][crate::model::LocationEnrichment::location].
    pub fn set_location<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Location>,
    {
        self.location = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [location][crate::model::LocationEnrichment::location].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_location<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Location>,
    {
        self.location = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.location.update(other.location);
    }
}

/// An enrichment containing a map, showing origin and destination
/// locations.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MapEnrichment {
    /// Represents a physical location.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub destination: Field<crate::model::Location>,

    /// Represents a physical location.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub origin: Field<crate::model::Location>,
}

impl MapEnrichment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [destination][crate::model::MapEnrichment::destination].
    pub fn set_destination<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Location>,
    {
        self.destination = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [destination][crate::model::MapEnrichment::destination].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_destination<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Location>,
    {
        self.destination = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [origin][crate::model::MapEnrichment::origin].
    pub fn set_origin<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Location>,
    {
        self.origin = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [origin][crate::model::MapEnrichment::origin].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_origin<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Location>,
    {
        self.origin = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.destination.update(other.destination);
        self.origin.update(other.origin);
    }
}

/// Representation of a media item (such as a photo or video) in Google
/// Photos.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MediaItem {
    /// A URL to the media item's bytes. This shouldn't be used as is.
    /// Parameters should be appended to this URL before use. See the
    /// [developer
    /// documentation](https://developers.google.com/photos/library/guides/access-media-items#base-urls)
    /// for a complete list of supported parameters. For example,
    /// `'=w2048-h1024'` will set the dimensions of a media item of type
    /// photo to have a width of 2048 px and height of 1024 px.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub base_url: Field<std::string::String>,

    /// Information about the user who added the media item. Note that this
    /// information is included only if the media item is within a shared
    /// album created by your app and you have the sharing scope.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub contributor_info: Field<crate::model::ContributorInfo>,

    /// Description of the media item. This is shown to the user in the
    /// item's info section in the Google Photos app.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub description: Field<std::string::String>,

    /// Filename of the media item. This is shown to the user in the item's
    /// info section in the Google Photos app.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub filename: Field<std::string::String>,

    /// Identifier for the media item. This is a persistent identifier that
    /// can be used between sessions to identify this media item.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub id: Field<std::string::String>,

    /// Metadata for a media item.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub media_metadata: Field<crate::model::MediaMetadata>,

    /// MIME type of the media item. For example, `image/jpeg`.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub mime_type: Field<std::string::String>,

    /// Google Photos URL for the media item. This link is available to the
    /// user only if they're signed in.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub product_url: Field<std::string::String>,
}

impl MediaItem {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [base_url][crate::model::MediaItem::base_url].
    pub fn set_base_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.base_url = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [base_url][crate::model::MediaItem::base_url].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_base_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.base_url = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [contributor_info][crate::model::MediaItem::contributor_info].
    pub fn set_contributor_info<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ContributorInfo>,
    {
        self.contributor_info = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [contributor_info][crate::model::MediaItem::contributor_info].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_contributor_info<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ContributorInfo>,
    {
        self.contributor_info = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [description][crate::model::MediaItem::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::MediaItem::description].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [filename][crate::model::MediaItem::filename].
    pub fn set_filename<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.filename = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [filename][crate::model::MediaItem::filename].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_filename<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.filename = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [id][crate::model::MediaItem::id].
    pub fn set_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::MediaItem::id].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [media_metadata][crate::model::MediaItem::media_metadata].
    pub fn set_media_metadata<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MediaMetadata>,
    {
        self.media_metadata = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [media_metadata][crate::model::MediaItem::media_metadata].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_media_metadata<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MediaMetadata>,
    {
        self.media_metadata = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [mime_type][crate::model::MediaItem::mime_type].
    pub fn set_mime_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.mime_type = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [mime_type][crate::model::MediaItem::mime_type].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_mime_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.mime_type = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [product_url][crate::model::MediaItem::product_url].
    pub fn set_product_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.product_url = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [product_url][crate::model::MediaItem::product_url].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_product_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.product_url = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.base_url.update(other.base_url);
        self.contributor_info.update(other.contributor_info);
        self.description.update(other.description);
        self.filename.update(other.filename);
        self.id.update(other.id);
        self.media_metadata.update(other.media_metadata);
        self.mime_type.update(other.mime_type);
        self.product_url.update(other.product_url);
    }
}

/// Result of retrieving a media item.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MediaItemResult {
    /// Representation of a media item (such as a photo or video) in Google
    /// Photos.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub media_item: Field<crate::model::MediaItem>,

    /// The `Status` type defines a logical error model that is suitable for
    /// different programming environments, including REST APIs and RPC APIs.
    /// It is used by [gRPC](https://github.com/grpc). Each `Status` message
    /// contains three pieces of data: error code, error message, and error
    /// details. You can find out more about this error model and how to work
    /// with it in the [API Design
    /// Guide](https://cloud.google.com/apis/design/errors).
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub status: Field<crate::model::Status>,
}

impl MediaItemResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [media_item][crate::model::MediaItemResult::media_item].
    pub fn set_media_item<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MediaItem>,
    {
        self.media_item = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [media_item][crate::model::MediaItemResult::media_item].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_media_item<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MediaItem>,
    {
        self.media_item = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [status][crate::model::MediaItemResult::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Status>,
    {
        self.status = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::MediaItemResult::status].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Status>,
    {
        self.status = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.media_item.update(other.media_item);
        self.status.update(other.status);
    }
}

/// Metadata for a media item.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MediaMetadata {
    /// Time when the media item was first created (not when it was uploaded
    /// to Google Photos).
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub creation_time: Field<std::string::String>,

    /// Original height (in pixels) of the media item.
    #[serde(skip_serializing_if = "Field::is_absent")]
    #[serde_as(as = "Field<gax::field::I64>")]
    pub height: Field<i64>,

    /// Metadata that is specific to a photo, such as, ISO, focal length and
    /// exposure time. Some of these fields may be null or not included.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub photo: Field<crate::model::Photo>,

    /// Metadata that is specific to a video, for example, fps and processing
    /// status. Some of these fields may be null or not included.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub video: Field<crate::model::Video>,

    /// Original width (in pixels) of the media item.
    #[serde(skip_serializing_if = "Field::is_absent")]
    #[serde_as(as = "Field<gax::field::I64>")]
    pub width: Field<i64>,
}

impl MediaMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [creation_time][crate::model::MediaMetadata::creation_time].
    pub fn set_creation_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_time = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [creation_time][crate::model::MediaMetadata::creation_time].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_creation_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.creation_time = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [height][crate::model::MediaMetadata::height].
    pub fn set_height<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.height = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [height][crate::model::MediaMetadata::height].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_height<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.height = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [photo][crate::model::MediaMetadata::photo].
    pub fn set_photo<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Photo>,
    {
        self.photo = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [photo][crate::model::MediaMetadata::photo].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_photo<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Photo>,
    {
        self.photo = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [video][crate::model::MediaMetadata::video].
    pub fn set_video<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Video>,
    {
        self.video = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [video][crate::model::MediaMetadata::video].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_video<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Video>,
    {
        self.video = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [width][crate::model::MediaMetadata::width].
    pub fn set_width<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.width = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [width][crate::model::MediaMetadata::width].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_width<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.width = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.creation_time.update(other.creation_time);
        self.height.update(other.height);
        self.photo.update(other.photo);
        self.video.update(other.video);
        self.width.update(other.width);
    }
}

/// This filter defines the type of media items to be returned, for
/// example, videos or photos. All the specified media types are treated
/// as an OR when used together.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MediaTypeFilter {
    /// The types of media items to be included. This field should be
    /// populated with only one media type. If you specify multiple media
    /// types, it results in an error.
    ///
    /// See
    /// [media_type_filter::media_types][crate::model::media_type_filter::media_types]
    /// for well-known values.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub media_types: Field<std::vec::Vec<std::string::String>>,
}

impl MediaTypeFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [media_types][crate::model::MediaTypeFilter::media_types].
    pub fn set_media_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.media_types = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.media_types.update(other.media_types);
    }
}

/// Defines additional types related to [MediaTypeFilter].
pub mod media_type_filter {
    /// Well-known values for [media_types][crate::model::MediaTypeFilter::media_types].
    pub mod media_types {
        pub const ALL_MEDIA: &str = "ALL_MEDIA";
        pub const VIDEO: &str = "VIDEO";
        pub const PHOTO: &str = "PHOTO";
    }
}

/// A new enrichment item to be added to an album, used by the
/// `albums.addEnrichment` call.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewEnrichmentItem {
    /// An enrichment containing a single location.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub location_enrichment: Field<crate::model::LocationEnrichment>,

    /// An enrichment containing a map, showing origin and destination
    /// locations.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub map_enrichment: Field<crate::model::MapEnrichment>,

    /// An enrichment containing text.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub text_enrichment: Field<crate::model::TextEnrichment>,
}

impl NewEnrichmentItem {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [location_enrichment][crate::model::NewEnrichmentItem::location_enrichment].
    pub fn set_location_enrichment<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LocationEnrichment>,
    {
        self.location_enrichment = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [location_enrichment][crate::model::NewEnrichmentItem::location_enrichment].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_location_enrichment<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::LocationEnrichment>,
    {
        self.location_enrichment = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [map_enrichment][crate::model::NewEnrichmentItem::map_enrichment].
    pub fn set_map_enrichment<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MapEnrichment>,
    {
        self.map_enrichment = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [map_enrichment][crate::model::NewEnrichmentItem::map_enrichment].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_map_enrichment<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MapEnrichment>,
    {
        self.map_enrichment = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [text_enrichment][crate::model::NewEnrichmentItem::text_enrichment].
    pub fn set_text_enrichment<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TextEnrichment>,
    {
        self.text_enrichment = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [text_enrichment][crate::model::NewEnrichmentItem::text_enrichment].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_text_enrichment<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TextEnrichment>,
    {
        self.text_enrichment = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.location_enrichment.update(other.location_enrichment);
        self.map_enrichment.update(other.map_enrichment);
        self.text_enrichment.update(other.text_enrichment);
    }
}

/// New media item that's created in a user's Google Photos account.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewMediaItem {
    /// Description of the media item. This will be shown to the user in the
    /// item's info section in the Google Photos app. This string shouldn't
    /// be more than 1000 characters.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub description: Field<std::string::String>,

    /// A simple media item to be created in Google Photos via an upload
    /// token.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub simple_media_item: Field<crate::model::SimpleMediaItem>,
}

impl NewMediaItem {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [description][crate::model::NewMediaItem::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::NewMediaItem::description].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.description = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [simple_media_item][crate::model::NewMediaItem::simple_media_item].
    pub fn set_simple_media_item<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SimpleMediaItem>,
    {
        self.simple_media_item = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [simple_media_item][crate::model::NewMediaItem::simple_media_item].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_simple_media_item<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SimpleMediaItem>,
    {
        self.simple_media_item = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.description.update(other.description);
        self.simple_media_item.update(other.simple_media_item);
    }
}

/// Result of creating a new media item.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NewMediaItemResult {
    /// Representation of a media item (such as a photo or video) in Google
    /// Photos.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub media_item: Field<crate::model::MediaItem>,

    /// The `Status` type defines a logical error model that is suitable for
    /// different programming environments, including REST APIs and RPC APIs.
    /// It is used by [gRPC](https://github.com/grpc). Each `Status` message
    /// contains three pieces of data: error code, error message, and error
    /// details. You can find out more about this error model and how to work
    /// with it in the [API Design
    /// Guide](https://cloud.google.com/apis/design/errors).
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub status: Field<crate::model::Status>,

    /// The upload token used to create this new media item.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub upload_token: Field<std::string::String>,
}

impl NewMediaItemResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [media_item][crate::model::NewMediaItemResult::media_item].
    pub fn set_media_item<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MediaItem>,
    {
        self.media_item = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [media_item][crate::model::NewMediaItemResult::media_item].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_media_item<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MediaItem>,
    {
        self.media_item = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [status][crate::model::NewMediaItemResult::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Status>,
    {
        self.status = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::NewMediaItemResult::status].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Status>,
    {
        self.status = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [upload_token][crate::model::NewMediaItemResult::upload_token].
    pub fn set_upload_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.upload_token = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [upload_token][crate::model::NewMediaItemResult::upload_token].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_upload_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.upload_token = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.media_item.update(other.media_item);
        self.status.update(other.status);
        self.upload_token.update(other.upload_token);
    }
}

/// Metadata that is specific to a photo, such as, ISO, focal length and
/// exposure time. Some of these fields may be null or not included.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Photo {
    /// Aperture f number of the camera lens with which the photo was taken.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub aperture_f_number: Field<f64>,

    /// Brand of the camera with which the photo was taken.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub camera_make: Field<std::string::String>,

    /// Model of the camera with which the photo was taken.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub camera_model: Field<std::string::String>,

    /// Exposure time of the camera aperture when the photo was taken.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub exposure_time: Field<std::string::String>,

    /// Focal length of the camera lens with which the photo was taken.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub focal_length: Field<f64>,

    /// ISO of the camera with which the photo was taken.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub iso_equivalent: Field<i32>,
}

impl Photo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [aperture_f_number][crate::model::Photo::aperture_f_number].
    pub fn set_aperture_f_number<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.aperture_f_number = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [aperture_f_number][crate::model::Photo::aperture_f_number].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_aperture_f_number<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.aperture_f_number = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [camera_make][crate::model::Photo::camera_make].
    pub fn set_camera_make<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.camera_make = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [camera_make][crate::model::Photo::camera_make].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_camera_make<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.camera_make = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [camera_model][crate::model::Photo::camera_model].
    pub fn set_camera_model<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.camera_model = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [camera_model][crate::model::Photo::camera_model].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_camera_model<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.camera_model = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [exposure_time][crate::model::Photo::exposure_time].
    pub fn set_exposure_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.exposure_time = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [exposure_time][crate::model::Photo::exposure_time].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_exposure_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.exposure_time = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [focal_length][crate::model::Photo::focal_length].
    pub fn set_focal_length<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.focal_length = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [focal_length][crate::model::Photo::focal_length].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_focal_length<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.focal_length = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [iso_equivalent][crate::model::Photo::iso_equivalent].
    pub fn set_iso_equivalent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.iso_equivalent = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [iso_equivalent][crate::model::Photo::iso_equivalent].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_iso_equivalent<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.iso_equivalent = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.aperture_f_number.update(other.aperture_f_number);
        self.camera_make.update(other.camera_make);
        self.camera_model.update(other.camera_model);
        self.exposure_time.update(other.exposure_time);
        self.focal_length.update(other.focal_length);
        self.iso_equivalent.update(other.iso_equivalent);
    }
}

/// Request to search for media items in a user's library. If the album
/// id is specified, this call will return the list of media items in the
/// album. If neither filters nor album id are specified, this call will
/// return all media items in a user's Google Photos library. If filters
/// are specified, this call will return all media items in the user's
/// library that fulfill the filter criteria. Filters and album id must
/// not both be set, as this will result in an invalid request.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchMediaItemsRequest {
    /// Identifier of an album. If populated, lists all media items in
    /// specified album. Can't set in conjunction with any filters.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub album_id: Field<std::string::String>,

    /// Filters that can be applied to a media item search. If multiple
    /// filter options are specified, they're treated as AND with each other.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub filters: Field<crate::model::Filters>,

    /// Maximum number of media items to return in the response. Fewer media
    /// items might be returned than the specified number. The default
    /// `pageSize` is 25, the maximum is 100.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub page_size: Field<i32>,

    /// A continuation token to get the next page of the results. Adding this
    /// to the request returns the rows after the `pageToken`. The
    /// `pageToken` should be the value returned in the `nextPageToken`
    /// parameter in the response to the `searchMediaItems` request.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub page_token: Field<std::string::String>,
}

impl SearchMediaItemsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [album_id][crate::model::SearchMediaItemsRequest::album_id].
    pub fn set_album_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.album_id = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [album_id][crate::model::SearchMediaItemsRequest::album_id].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_album_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.album_id = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [filters][crate::model::SearchMediaItemsRequest::filters].
    pub fn set_filters<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Filters>,
    {
        self.filters = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [filters][crate::model::SearchMediaItemsRequest::filters].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_filters<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Filters>,
    {
        self.filters = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [page_size][crate::model::SearchMediaItemsRequest::page_size].
    pub fn set_page_size<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page_size = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [page_size][crate::model::SearchMediaItemsRequest::page_size].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_page_size<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.page_size = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [page_token][crate::model::SearchMediaItemsRequest::page_token].
    pub fn set_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page_token = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [page_token][crate::model::SearchMediaItemsRequest::page_token].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.page_token = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.album_id.update(other.album_id);
        self.filters.update(other.filters);
        self.page_size.update(other.page_size);
        self.page_token.update(other.page_token);
    }
}

/// List of media items that match the search parameters.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchMediaItemsResponse {
    /// Output only. List of media items that match the search parameters.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub media_items: Field<std::vec::Vec<crate::model::MediaItem>>,

    /// Output only. Use this token to get the next set of media items. Its
    /// presence is the only reliable indicator of more media items being
    /// available in the next request.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub next_page_token: Field<std::string::String>,
}

impl SearchMediaItemsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [media_items][crate::model::SearchMediaItemsResponse::media_items].
    pub fn set_media_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::MediaItem>,
    {
        self.media_items = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::SearchMediaItemsResponse::next_page_token].
    pub fn set_next_page_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::SearchMediaItemsResponse::next_page_token].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_next_page_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.next_page_token = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.media_items.update(other.media_items);
        self.next_page_token.update(other.next_page_token);
    }
}

impl gax::paginator::PageableResponse for SearchMediaItemsResponse {
    fn next_page_token(&self) -> std::string::String {
        self.next_page_token.value().cloned().unwrap_or_default()
    }
}

/// Request to make an album shared in Google Photos.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ShareAlbumRequest {
    /// Options that control the sharing of an album.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub shared_album_options: Field<crate::model::SharedAlbumOptions>,
}

impl ShareAlbumRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [shared_album_options][crate::model::ShareAlbumRequest::shared_album_options].
    pub fn set_shared_album_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SharedAlbumOptions>,
    {
        self.shared_album_options = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [shared_album_options][crate::model::ShareAlbumRequest::shared_album_options].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_shared_album_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SharedAlbumOptions>,
    {
        self.shared_album_options = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.shared_album_options.update(other.shared_album_options);
    }
}

/// Response to successfully sharing an album.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ShareAlbumResponse {
    /// Information about albums that are shared. This information is only
    /// included if you created the album, it is shared and you have the
    /// sharing scope.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub share_info: Field<crate::model::ShareInfo>,
}

impl ShareAlbumResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [share_info][crate::model::ShareAlbumResponse::share_info].
    pub fn set_share_info<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ShareInfo>,
    {
        self.share_info = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [share_info][crate::model::ShareAlbumResponse::share_info].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_share_info<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ShareInfo>,
    {
        self.share_info = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.share_info.update(other.share_info);
    }
}

/// Information about albums that are shared. This information is only
/// included if you created the album, it is shared and you have the
/// sharing scope.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ShareInfo {
    /// True if the user has joined the album. This is always true for the
    /// owner of the shared album.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub is_joined: Field<bool>,

    /// True if the user owns the album.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub is_owned: Field<bool>,

    /// A token that can be used by other users to join this shared album via
    /// the API.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub share_token: Field<std::string::String>,

    /// A link to the album that's now shared on the Google Photos website
    /// and app. Anyone with the link can access this shared album and see
    /// all of the items present in the album.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub shareable_url: Field<std::string::String>,

    /// Options that control the sharing of an album.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub shared_album_options: Field<crate::model::SharedAlbumOptions>,
}

impl ShareInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of `is_joined`.
    pub fn set_is_joined<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_joined = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of `is_joined`.
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_is_joined<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_joined = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Returns the value of `is_joined`, `false` when absent or null.
    pub fn is_joined(&self) -> bool {
        self.is_joined.value().copied().unwrap_or_default()
    }

    /// Sets the value of `is_owned`.
    pub fn set_is_owned<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_owned = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of `is_owned`.
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_is_owned<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_owned = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Returns the value of `is_owned`, `false` when absent or null.
    pub fn is_owned(&self) -> bool {
        self.is_owned.value().copied().unwrap_or_default()
    }

    /// Sets the value of [share_token][crate::model::ShareInfo::share_token].
    pub fn set_share_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.share_token = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [share_token][crate::model::ShareInfo::share_token].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_share_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.share_token = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [shareable_url][crate::model::ShareInfo::shareable_url].
    pub fn set_shareable_url<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.shareable_url = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [shareable_url][crate::model::ShareInfo::shareable_url].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_shareable_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.shareable_url = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [shared_album_options][crate::model::ShareInfo::shared_album_options].
    pub fn set_shared_album_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SharedAlbumOptions>,
    {
        self.shared_album_options = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [shared_album_options][crate::model::ShareInfo::shared_album_options].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_shared_album_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SharedAlbumOptions>,
    {
        self.shared_album_options = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.is_joined.update(other.is_joined);
        self.is_owned.update(other.is_owned);
        self.share_token.update(other.share_token);
        self.shareable_url.update(other.shareable_url);
        self.shared_album_options.update(other.shared_album_options);
    }
}

/// Options that control the sharing of an album.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SharedAlbumOptions {
    /// True if the shared album allows collaborators (users who have joined
    /// the album) to add media items to it. Defaults to false.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub is_collaborative: Field<bool>,

    /// True if the shared album allows the owner and the collaborators
    /// (users who have joined the album) to add comments to the album.
    /// Defaults to false.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub is_commentable: Field<bool>,
}

impl SharedAlbumOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of `is_collaborative`.
    pub fn set_is_collaborative<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_collaborative = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of `is_collaborative`.
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_is_collaborative<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_collaborative = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Returns the value of `is_collaborative`, `false` when absent or null.
    pub fn is_collaborative(&self) -> bool {
        self.is_collaborative.value().copied().unwrap_or_default()
    }

    /// Sets the value of `is_commentable`.
    pub fn set_is_commentable<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_commentable = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of `is_commentable`.
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_is_commentable<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.is_commentable = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Returns the value of `is_commentable`, `false` when absent or null.
    pub fn is_commentable(&self) -> bool {
        self.is_commentable.value().copied().unwrap_or_default()
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.is_collaborative.update(other.is_collaborative);
        self.is_commentable.update(other.is_commentable);
    }
}

/// A simple media item to be created in Google Photos via an upload
/// token.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SimpleMediaItem {
    /// Token identifying the media bytes that have been uploaded to Google.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub upload_token: Field<std::string::String>,
}

impl SimpleMediaItem {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [upload_token][crate::model::SimpleMediaItem::upload_token].
    pub fn set_upload_token<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.upload_token = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [upload_token][crate::model::SimpleMediaItem::upload_token].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_upload_token<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.upload_token = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.upload_token.update(other.upload_token);
    }
}

/// The `Status` type defines a logical error model that is suitable for
/// different programming environments, including REST APIs and RPC APIs.
/// It is used by [gRPC](https://github.com/grpc). Each `Status` message
/// contains three pieces of data: error code, error message, and error
/// details. You can find out more about this error model and how to work
/// with it in the [API Design
/// Guide](https://cloud.google.com/apis/design/errors).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code, which should be an enum value of google.rpc.Code.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub code: Field<i32>,

    /// A list of messages that carry the error details.  There is a common
    /// set of message types for APIs to use.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub details: Field<std::vec::Vec<serde_json::Map<std::string::String, serde_json::Value>>>,

    /// A developer-facing error message, which should be in English. Any
    /// user-facing error message should be localized and sent in the
    /// google.rpc.Status.details field, or localized by the client.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub message: Field<std::string::String>,
}

impl Status {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [code][crate::model::Status::code].
    pub fn set_code<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.code = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [code][crate::model::Status::code].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.code = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [details][crate::model::Status::details].
    pub fn set_details<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Map<std::string::String, serde_json::Value>>,
    {
        self.details = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [message][crate::model::Status::message].
    pub fn set_message<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.message = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [message][crate::model::Status::message].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_message<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.message = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.code.update(other.code);
        self.details.update(other.details);
        self.message.update(other.message);
    }
}

/// An enrichment containing text.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextEnrichment {
    /// Text for this enrichment item.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub text: Field<std::string::String>,
}

impl TextEnrichment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [text][crate::model::TextEnrichment::text].
    pub fn set_text<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.text = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [text][crate::model::TextEnrichment::text].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_text<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.text = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.text.update(other.text);
    }
}

/// Request to unshare a shared album in Google Photos.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UnshareAlbumRequest {}

impl UnshareAlbumRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Overwrites the fields present in `other`.
    pub fn update(&mut self, _other: Self) {}
}

/// Response of a successful unshare of a shared album.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UnshareAlbumResponse {}

impl UnshareAlbumResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Overwrites the fields present in `other`.
    pub fn update(&mut self, _other: Self) {}
}

/// Metadata that is specific to a video, for example, fps and processing
/// status. Some of these fields may be null or not included.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Video {
    /// Brand of the camera with which the video was taken.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub camera_make: Field<std::string::String>,

    /// Model of the camera with which the video was taken.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub camera_model: Field<std::string::String>,

    /// Frame rate of the video.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub fps: Field<f64>,

    /// Processing status of the video.
    ///
    /// See [video::status][crate::model::video::status] for well-known
    /// values.
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub status: Field<std::string::String>,
}

impl Video {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [camera_make][crate::model::Video::camera_make].
    pub fn set_camera_make<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.camera_make = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [camera_make][crate::model::Video::camera_make].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_camera_make<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.camera_make = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [camera_model][crate::model::Video::camera_model].
    pub fn set_camera_model<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.camera_model = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [camera_model][crate::model::Video::camera_model].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_camera_model<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.camera_model = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [fps][crate::model::Video::fps].
    pub fn set_fps<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.fps = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [fps][crate::model::Video::fps].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_fps<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.fps = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Sets the value of [status][crate::model::Video::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = Field::Value(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Video::status].
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.status = Field::from_option(v.map(|x| x.into()));
        self
    }

    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
        self.camera_make.update(other.camera_make);
        self.camera_model.update(other.camera_model);
        self.fps.update(other.fps);
        self.status.update(other.status);
    }
}

/// Defines additional types related to [Video].
pub mod video {
    /// Well-known values for [status][crate::model::Video::status].
    pub mod status {
        pub const UNSPECIFIED: &str = "UNSPECIFIED";
        pub const PROCESSING: &str = "PROCESSING";
        pub const READY: &str = "READY";
        pub const FAILED: &str = "FAILED";
    }
}
