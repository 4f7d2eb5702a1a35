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

/// Implements a client for the Photos Library API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
/// let client = PhotosLibrary::builder().build().await?;
/// // use `client` to make requests to the Photos Library API.
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Manage photos, videos, and albums in Google Photos
///
/// # Configuration
///
/// To configure `PhotosLibrary` use the `with_*` methods in the type returned
/// by [builder()][PhotosLibrary::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default
///   endpoint (`https://photoslibrary.googleapis.com/`).
///   Applications running in restricted networks, or tests using a local
///   fake, may want to override this default.
/// * [with_access_token()]: by default this client sends no credentials.
///   Most operations require an OAuth 2.0 access token.
/// * [with_api_key()] and [with_quota_user()]: set the `key` and `quotaUser`
///   query parameters for every request.
///
/// [with_endpoint()]: super::builder::photos_library::ClientBuilder::with_endpoint
/// [with_access_token()]: super::builder::photos_library::ClientBuilder::with_access_token
/// [with_api_key()]: super::builder::photos_library::ClientBuilder::with_api_key
/// [with_quota_user()]: super::builder::photos_library::ClientBuilder::with_quota_user
///
/// # Pooling and Cloning
///
/// `PhotosLibrary` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `PhotosLibrary` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct PhotosLibrary {
    stub: std::sync::Arc<dyn gax::command::Execute>,
    config: std::sync::Arc<gaxi::options::ClientConfig>,
}

impl PhotosLibrary {
    /// Returns a builder for [PhotosLibrary].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// let client = PhotosLibrary::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::photos_library::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::photos_library::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior. The client uses the default configuration.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: gax::command::Execute + 'static,
    {
        Self {
            stub: std::sync::Arc::new(stub),
            config: std::sync::Arc::new(gaxi::options::ClientConfig::default()),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let stub = gaxi::http::ReqwestClient::new(config.clone(), crate::DEFAULT_HOST)
            .await?
            .with_api_client(&crate::info::X_GOOG_API_CLIENT)
            .with_instrumentation(&crate::info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self {
            stub: std::sync::Arc::new(stub),
            config: std::sync::Arc::new(config),
        })
    }

    /// The API key sent with every request, if any.
    pub fn api_key(&self) -> std::option::Option<&str> {
        self.config.api_key.as_deref()
    }

    /// The quota user sent with every request, unless the request overrides it.
    pub fn quota_user(&self) -> std::option::Option<&str> {
        self.config.quota_user.as_deref()
    }

    /// The endpoint override, if any.
    ///
    /// When `None` the client uses `https://photoslibrary.googleapis.com/`.
    pub fn endpoint(&self) -> std::option::Option<&str> {
        self.config.endpoint.as_deref()
    }

    fn request_builder(&self) -> super::builder::photos_library::RequestBuilder {
        super::builder::photos_library::RequestBuilder::new(self.stub.clone(), self.config.clone())
    }

    /// Adds an enrichment at a specified position in a defined album.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .add_enrichment_to_album("my-album-id")
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn add_enrichment_to_album(
        &self,
        album_id: impl std::convert::Into<std::string::String>,
    ) -> super::builder::photos_library::AddEnrichmentToAlbum {
        super::builder::photos_library::AddEnrichmentToAlbum::new(self.request_builder())
            .set_album_id(album_id)
    }

    /// Adds one or more media items in a user's Google Photos library to an
    /// album. The media items and albums must have been created by the
    /// developer via the API. Media items are added to the end of the album.
    /// If multiple media items are given, they are added in the order
    /// specified in this call. Each album can contain up to 20,000 media
    /// items. Only media items that are in the user's library can be added
    /// to an album. For albums that are shared, the album must either be
    /// owned by the user or the user must have joined the album as a
    /// collaborator. Partial success is not supported. The entire request
    /// will fail if an invalid media item or album is specified.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .batch_add_media_items_to_album("my-album-id")
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn batch_add_media_items_to_album(
        &self,
        album_id: impl std::convert::Into<std::string::String>,
    ) -> super::builder::photos_library::BatchAddMediaItemsToAlbum {
        super::builder::photos_library::BatchAddMediaItemsToAlbum::new(self.request_builder())
            .set_album_id(album_id)
    }

    /// Removes one or more media items from a specified album. The media
    /// items and the album must have been created by the developer via the
    /// API. For albums that are shared, this action is only supported for
    /// media items that were added to the album by this user, or for all
    /// media items if the album was created by this user. Partial success is
    /// not supported. The entire request will fail and no action will be
    /// performed on the album if an invalid media item or album is
    /// specified.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .batch_remove_media_items_from_album("my-album-id")
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn batch_remove_media_items_from_album(
        &self,
        album_id: impl std::convert::Into<std::string::String>,
    ) -> super::builder::photos_library::BatchRemoveMediaItemsFromAlbum {
        super::builder::photos_library::BatchRemoveMediaItemsFromAlbum::new(self.request_builder())
            .set_album_id(album_id)
    }

    /// Creates an album in a user's Google Photos library.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .create_album()
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn create_album(&self) -> super::builder::photos_library::CreateAlbum {
        super::builder::photos_library::CreateAlbum::new(self.request_builder())
    }

    /// Returns the album based on the specified `albumId`. The `albumId`
    /// must be the ID of an album owned by the user or a shared album that
    /// the user has joined.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .get_album("my-album-id")
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn get_album(
        &self,
        album_id: impl std::convert::Into<std::string::String>,
    ) -> super::builder::photos_library::GetAlbum {
        super::builder::photos_library::GetAlbum::new(self.request_builder())
            .set_album_id(album_id)
    }

    /// Lists all albums shown to a user in the Albums tab of the Google
    /// Photos app.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .list_albums()
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn list_albums(&self) -> super::builder::photos_library::ListAlbums {
        super::builder::photos_library::ListAlbums::new(self.request_builder())
    }

    /// Marks an album as shared and accessible to other users. This action
    /// can only be performed on albums which were created by the developer
    /// via the API.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .share_album("my-album-id")
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn share_album(
        &self,
        album_id: impl std::convert::Into<std::string::String>,
    ) -> super::builder::photos_library::ShareAlbum {
        super::builder::photos_library::ShareAlbum::new(self.request_builder())
            .set_album_id(album_id)
    }

    /// Marks a previously shared album as private. This means that the album
    /// is no longer shared and all the non-owners will lose access to the
    /// album. All non-owner content will be removed from the album. If a
    /// non-owner has previously added the album to their library, they will
    /// retain all photos in their library. This action can only be performed
    /// on albums which were created by the developer via the API.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .unshare_album("my-album-id")
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn unshare_album(
        &self,
        album_id: impl std::convert::Into<std::string::String>,
    ) -> super::builder::photos_library::UnshareAlbum {
        super::builder::photos_library::UnshareAlbum::new(self.request_builder())
            .set_album_id(album_id)
    }

    /// Creates one or more media items in a user's Google Photos library.
    /// This is the second step for creating a media item. For details
    /// regarding Step 1, uploading the raw bytes to a Google Server, see <a
    /// href="/photos/library/guides/upload-media">Uploading media</a>. This
    /// call adds the media item to the library. If an album `id` is
    /// specified, the call adds the media item to the album too. Each album
    /// can contain up to 20,000 media items. By default, the media item will
    /// be added to the end of the library or album. If an album `id` and
    /// position are both defined, the media item is added to the album at
    /// the specified position. If the call contains multiple media items,
    /// they're added at the specified position. If you are creating a media
    /// item in a shared album where you are not the owner, you are not
    /// allowed to position the media item. Doing so will result in a `BAD
    /// REQUEST` error.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .batch_create_media_items()
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn batch_create_media_items(&self) -> super::builder::photos_library::BatchCreateMediaItems {
        super::builder::photos_library::BatchCreateMediaItems::new(self.request_builder())
    }

    /// Returns the list of media items for the specified media item
    /// identifiers. Items are returned in the same order as the supplied
    /// identifiers.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .batch_get_media_items()
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn batch_get_media_items(&self) -> super::builder::photos_library::BatchGetMediaItems {
        super::builder::photos_library::BatchGetMediaItems::new(self.request_builder())
    }

    /// Returns the media item for the specified media item identifier.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .get_media_item("my-media-item-id")
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn get_media_item(
        &self,
        media_item_id: impl std::convert::Into<std::string::String>,
    ) -> super::builder::photos_library::GetMediaItem {
        super::builder::photos_library::GetMediaItem::new(self.request_builder())
            .set_media_item_id(media_item_id)
    }

    /// List all media items from a user's Google Photos library.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .list_media_items()
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn list_media_items(&self) -> super::builder::photos_library::ListMediaItems {
        super::builder::photos_library::ListMediaItems::new(self.request_builder())
    }

    /// Searches for media items in a user's Google Photos library. If no
    /// filters are set, then all media items in the user's library are
    /// returned. If an album is set, all media items in the specified album
    /// are returned. If filters are specified, media items that match the
    /// filters from the user's library are listed. If you set both the album
    /// and the filters, the request results in an error.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .search_media_items()
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn search_media_items(&self) -> super::builder::photos_library::SearchMediaItems {
        super::builder::photos_library::SearchMediaItems::new(self.request_builder())
    }

    /// Returns the album based on the specified `shareToken`.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .get_shared_album("my-share-token")
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn get_shared_album(
        &self,
        share_token: impl std::convert::Into<std::string::String>,
    ) -> super::builder::photos_library::GetSharedAlbum {
        super::builder::photos_library::GetSharedAlbum::new(self.request_builder())
            .set_share_token(share_token)
    }

    /// Joins a shared album on behalf of the Google Photos user.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .join_shared_album()
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn join_shared_album(&self) -> super::builder::photos_library::JoinSharedAlbum {
        super::builder::photos_library::JoinSharedAlbum::new(self.request_builder())
    }

    /// Leaves a previously-joined shared album on behalf of the Google
    /// Photos user. The user must not own this album.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .leave_shared_album()
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn leave_shared_album(&self) -> super::builder::photos_library::LeaveSharedAlbum {
        super::builder::photos_library::LeaveSharedAlbum::new(self.request_builder())
    }

    /// Lists all shared albums available in the Sharing tab of the user's
    /// Google Photos app.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::client::PhotosLibrary;
    /// # async fn sample(client: &PhotosLibrary) -> anyhow::Result<()> {
    /// let response = client
    ///     .list_shared_albums()
    ///     .send()
    ///     .await?;
    /// println!("response {response:?}");
    /// # Ok(()) }
    /// ```
    pub fn list_shared_albums(&self) -> super::builder::photos_library::ListSharedAlbums {
        super::builder::photos_library::ListSharedAlbums::new(self.request_builder())
    }
}
