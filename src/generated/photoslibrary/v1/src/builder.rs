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

pub mod photos_library {
    use crate::Result;
    use gaxi::query_parameter::QueryParameter;
    use std::sync::Arc;

    /// A builder for [PhotosLibrary][crate::client::PhotosLibrary].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_apis_photoslibrary_v1::*;
    /// # use builder::photos_library::ClientBuilder;
    /// # use client::PhotosLibrary;
    /// let builder : ClientBuilder = PhotosLibrary::builder();
    /// let client = builder
    ///     .with_endpoint("https://photoslibrary.googleapis.com/")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use crate::client::PhotosLibrary;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = PhotosLibrary;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::PhotosLibrary] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder {
        stub: Arc<dyn gax::command::Execute>,
        config: Arc<gaxi::options::ClientConfig>,
        options: gax::options::RequestOptions,
    }

    impl RequestBuilder {
        pub(crate) fn new(
            stub: Arc<dyn gax::command::Execute>,
            config: Arc<gaxi::options::ClientConfig>,
        ) -> Self {
            Self {
                stub,
                config,
                options: gax::options::RequestOptions::default(),
            }
        }

        async fn execute<T>(self, command: gax::command::Command) -> Result<T>
        where
            T: serde::de::DeserializeOwned,
        {
            let command = command
                .set_response_type::<T>()
                .apply_defaults(&self.config)
                .apply_options(&self.options);
            tracing::debug!(method = %command.method, path = %command.path, "executing command");
            let response = self.stub.execute(command, self.options).await?;
            serde_json::from_value(response.into_body()).map_err(gax::error::Error::deser)
        }
    }

    fn encode<T: serde::Serialize>(body: Option<T>) -> Result<Option<serde_json::Value>> {
        body.map(serde_json::to_value)
            .transpose()
            .map_err(gax::error::Error::ser)
    }

    /// The request builder for [PhotosLibrary::add_enrichment_to_album][crate::client::PhotosLibrary::add_enrichment_to_album] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::AddEnrichmentToAlbum;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> AddEnrichmentToAlbum {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AddEnrichmentToAlbum {
        inner: RequestBuilder,
        album_id: std::string::String,
        body: std::option::Option<crate::model::AddEnrichmentToAlbumRequest>,
    }

    impl AddEnrichmentToAlbum {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                album_id: std::string::String::new(),
                body: None,
            }
        }

        /// Identifier of the album where the enrichment is to be added.
        pub fn set_album_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.album_id = v.into();
            self
        }

        /// Sets the request body.
        pub fn set_body<T>(mut self, v: T) -> Self
        where
            T: Into<crate::model::AddEnrichmentToAlbumRequest>,
        {
            self.body = Some(v.into());
            self
        }

        /// Sets or clears the request body.
        ///
        /// Without a body the request is sent with no content.
        pub fn set_or_clear_body<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<crate::model::AddEnrichmentToAlbumRequest>,
        {
            self.body = v.map(|x| x.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AddEnrichmentToAlbumResponse> {
            const TEMPLATE: &str = "v1/albums/{+albumId}:addEnrichment";
            let path = gaxi::path_template::expand(
                TEMPLATE,
                &[
                    ("albumId", Some(self.album_id.as_str())),
                ],
            )?;
            let body = encode(self.body)?;
            let command = gax::command::Command::new(http::Method::POST, TEMPLATE, path)
                .set_body(body);
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::AddEnrichmentToAlbumResponse>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for AddEnrichmentToAlbum {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::batch_add_media_items_to_album][crate::client::PhotosLibrary::batch_add_media_items_to_album] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::BatchAddMediaItemsToAlbum;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> BatchAddMediaItemsToAlbum {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct BatchAddMediaItemsToAlbum {
        inner: RequestBuilder,
        album_id: std::string::String,
        body: std::option::Option<crate::model::BatchAddMediaItemsToAlbumRequest>,
    }

    impl BatchAddMediaItemsToAlbum {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                album_id: std::string::String::new(),
                body: None,
            }
        }

        /// Identifier of the Album that the media items are added to.
        pub fn set_album_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.album_id = v.into();
            self
        }

        /// Sets the request body.
        pub fn set_body<T>(mut self, v: T) -> Self
        where
            T: Into<crate::model::BatchAddMediaItemsToAlbumRequest>,
        {
            self.body = Some(v.into());
            self
        }

        /// Sets or clears the request body.
        ///
        /// Without a body the request is sent with no content.
        pub fn set_or_clear_body<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<crate::model::BatchAddMediaItemsToAlbumRequest>,
        {
            self.body = v.map(|x| x.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BatchAddMediaItemsToAlbumResponse> {
            const TEMPLATE: &str = "v1/albums/{+albumId}:batchAddMediaItems";
            let path = gaxi::path_template::expand(
                TEMPLATE,
                &[
                    ("albumId", Some(self.album_id.as_str())),
                ],
            )?;
            let body = encode(self.body)?;
            let command = gax::command::Command::new(http::Method::POST, TEMPLATE, path)
                .set_body(body);
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::BatchAddMediaItemsToAlbumResponse>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for BatchAddMediaItemsToAlbum {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::batch_remove_media_items_from_album][crate::client::PhotosLibrary::batch_remove_media_items_from_album] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::BatchRemoveMediaItemsFromAlbum;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> BatchRemoveMediaItemsFromAlbum {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct BatchRemoveMediaItemsFromAlbum {
        inner: RequestBuilder,
        album_id: std::string::String,
        body: std::option::Option<crate::model::BatchRemoveMediaItemsFromAlbumRequest>,
    }

    impl BatchRemoveMediaItemsFromAlbum {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                album_id: std::string::String::new(),
                body: None,
            }
        }

        /// Identifier of the Album that the media items are to be removed from.
        pub fn set_album_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.album_id = v.into();
            self
        }

        /// Sets the request body.
        pub fn set_body<T>(mut self, v: T) -> Self
        where
            T: Into<crate::model::BatchRemoveMediaItemsFromAlbumRequest>,
        {
            self.body = Some(v.into());
            self
        }

        /// Sets or clears the request body.
        ///
        /// Without a body the request is sent with no content.
        pub fn set_or_clear_body<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<crate::model::BatchRemoveMediaItemsFromAlbumRequest>,
        {
            self.body = v.map(|x| x.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BatchRemoveMediaItemsFromAlbumResponse> {
            const TEMPLATE: &str = "v1/albums/{+albumId}:batchRemoveMediaItems";
            let path = gaxi::path_template::expand(
                TEMPLATE,
                &[
                    ("albumId", Some(self.album_id.as_str())),
                ],
            )?;
            let body = encode(self.body)?;
            let command = gax::command::Command::new(http::Method::POST, TEMPLATE, path)
                .set_body(body);
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::BatchRemoveMediaItemsFromAlbumResponse>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for BatchRemoveMediaItemsFromAlbum {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::create_album][crate::client::PhotosLibrary::create_album] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::CreateAlbum;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> CreateAlbum {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateAlbum {
        inner: RequestBuilder,
        body: std::option::Option<crate::model::CreateAlbumRequest>,
    }

    impl CreateAlbum {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                body: None,
            }
        }

        /// Sets the request body.
        pub fn set_body<T>(mut self, v: T) -> Self
        where
            T: Into<crate::model::CreateAlbumRequest>,
        {
            self.body = Some(v.into());
            self
        }

        /// Sets or clears the request body.
        ///
        /// Without a body the request is sent with no content.
        pub fn set_or_clear_body<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<crate::model::CreateAlbumRequest>,
        {
            self.body = v.map(|x| x.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Album> {
            const TEMPLATE: &str = "v1/albums";
            let path = gaxi::path_template::expand(TEMPLATE, &[])?;
            let body = encode(self.body)?;
            let command = gax::command::Command::new(http::Method::POST, TEMPLATE, path)
                .set_body(body);
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::Album>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for CreateAlbum {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::get_album][crate::client::PhotosLibrary::get_album] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::GetAlbum;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetAlbum {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetAlbum {
        inner: RequestBuilder,
        album_id: std::string::String,
    }

    impl GetAlbum {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                album_id: std::string::String::new(),
            }
        }

        /// Identifier of the album to be requested.
        pub fn set_album_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.album_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Album> {
            const TEMPLATE: &str = "v1/albums/{+albumId}";
            let path = gaxi::path_template::expand(
                TEMPLATE,
                &[
                    ("albumId", Some(self.album_id.as_str())),
                ],
            )?;
            let command = gax::command::Command::new(http::Method::GET, TEMPLATE, path);
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::Album>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for GetAlbum {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::list_albums][crate::client::PhotosLibrary::list_albums] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::ListAlbums;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListAlbums {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListAlbums {
        inner: RequestBuilder,
        exclude_non_app_created_data: std::option::Option<bool>,
        page_size: std::option::Option<i32>,
        page_token: std::option::Option<std::string::String>,
    }

    impl ListAlbums {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                exclude_non_app_created_data: None,
                page_size: None,
                page_token: None,
            }
        }

        /// If set, the results exclude media items that were not created by this
        /// app. Defaults to false (all albums are returned). This field is
        /// ignored if the photoslibrary.readonly.appcreateddata scope is used.
        pub fn set_exclude_non_app_created_data<T: Into<bool>>(mut self, v: T) -> Self {
            self.exclude_non_app_created_data = Some(v.into());
            self
        }

        /// Sets or clears the value of `excludeNonAppCreatedData`.
        pub fn set_or_clear_exclude_non_app_created_data<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<bool>,
        {
            self.exclude_non_app_created_data = v.map(|x| x.into());
            self
        }

        /// Maximum number of albums to return in the response. Fewer albums
        /// might be returned than the specified number. The default `pageSize`
        /// is 20, the maximum is 50.
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.page_size = Some(v.into());
            self
        }

        /// Sets or clears the value of `pageSize`.
        pub fn set_or_clear_page_size<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<i32>,
        {
            self.page_size = v.map(|x| x.into());
            self
        }

        /// A continuation token to get the next page of the results. Adding this
        /// to the request returns the rows after the `pageToken`. The
        /// `pageToken` should be the value returned in the `nextPageToken`
        /// parameter in the response to the `listAlbums` request.
        pub fn set_page_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.page_token = Some(v.into());
            self
        }

        /// Sets or clears the value of `pageToken`.
        pub fn set_or_clear_page_token<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListAlbumsResponse> {
            const TEMPLATE: &str = "v1/albums";
            let path = gaxi::path_template::expand(TEMPLATE, &[])?;
            let command = gax::command::Command::new(http::Method::GET, TEMPLATE, path)
                .set_query("excludeNonAppCreatedData", self.exclude_non_app_created_data.format())
                .set_query("pageSize", self.page_size.format())
                .set_query("pageToken", self.page_token.format());
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::ListAlbumsResponse>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for ListAlbums {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::share_album][crate::client::PhotosLibrary::share_album] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::ShareAlbum;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ShareAlbum {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ShareAlbum {
        inner: RequestBuilder,
        album_id: std::string::String,
        body: std::option::Option<crate::model::ShareAlbumRequest>,
    }

    impl ShareAlbum {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                album_id: std::string::String::new(),
                body: None,
            }
        }

        /// Identifier of the album to be shared. This `albumId` must belong to
        /// an album created by the developer.
        pub fn set_album_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.album_id = v.into();
            self
        }

        /// Sets the request body.
        pub fn set_body<T>(mut self, v: T) -> Self
        where
            T: Into<crate::model::ShareAlbumRequest>,
        {
            self.body = Some(v.into());
            self
        }

        /// Sets or clears the request body.
        ///
        /// Without a body the request is sent with no content.
        pub fn set_or_clear_body<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<crate::model::ShareAlbumRequest>,
        {
            self.body = v.map(|x| x.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ShareAlbumResponse> {
            const TEMPLATE: &str = "v1/albums/{+albumId}:share";
            let path = gaxi::path_template::expand(
                TEMPLATE,
                &[
                    ("albumId", Some(self.album_id.as_str())),
                ],
            )?;
            let body = encode(self.body)?;
            let command = gax::command::Command::new(http::Method::POST, TEMPLATE, path)
                .set_body(body);
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::ShareAlbumResponse>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for ShareAlbum {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::unshare_album][crate::client::PhotosLibrary::unshare_album] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::UnshareAlbum;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UnshareAlbum {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UnshareAlbum {
        inner: RequestBuilder,
        album_id: std::string::String,
        body: std::option::Option<crate::model::UnshareAlbumRequest>,
    }

    impl UnshareAlbum {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                album_id: std::string::String::new(),
                body: None,
            }
        }

        /// Identifier of the album to be unshared. This album id must belong to
        /// an album created by the developer.
        pub fn set_album_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.album_id = v.into();
            self
        }

        /// Sets the request body.
        pub fn set_body<T>(mut self, v: T) -> Self
        where
            T: Into<crate::model::UnshareAlbumRequest>,
        {
            self.body = Some(v.into());
            self
        }

        /// Sets or clears the request body.
        ///
        /// Without a body the request is sent with no content.
        pub fn set_or_clear_body<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<crate::model::UnshareAlbumRequest>,
        {
            self.body = v.map(|x| x.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UnshareAlbumResponse> {
            const TEMPLATE: &str = "v1/albums/{+albumId}:unshare";
            let path = gaxi::path_template::expand(
                TEMPLATE,
                &[
                    ("albumId", Some(self.album_id.as_str())),
                ],
            )?;
            let body = encode(self.body)?;
            let command = gax::command::Command::new(http::Method::POST, TEMPLATE, path)
                .set_body(body);
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::UnshareAlbumResponse>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for UnshareAlbum {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::batch_create_media_items][crate::client::PhotosLibrary::batch_create_media_items] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::BatchCreateMediaItems;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> BatchCreateMediaItems {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct BatchCreateMediaItems {
        inner: RequestBuilder,
        body: std::option::Option<crate::model::BatchCreateMediaItemsRequest>,
    }

    impl BatchCreateMediaItems {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                body: None,
            }
        }

        /// Sets the request body.
        pub fn set_body<T>(mut self, v: T) -> Self
        where
            T: Into<crate::model::BatchCreateMediaItemsRequest>,
        {
            self.body = Some(v.into());
            self
        }

        /// Sets or clears the request body.
        ///
        /// Without a body the request is sent with no content.
        pub fn set_or_clear_body<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<crate::model::BatchCreateMediaItemsRequest>,
        {
            self.body = v.map(|x| x.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BatchCreateMediaItemsResponse> {
            const TEMPLATE: &str = "v1/mediaItems:batchCreate";
            let path = gaxi::path_template::expand(TEMPLATE, &[])?;
            let body = encode(self.body)?;
            let command = gax::command::Command::new(http::Method::POST, TEMPLATE, path)
                .set_body(body);
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::BatchCreateMediaItemsResponse>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for BatchCreateMediaItems {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::batch_get_media_items][crate::client::PhotosLibrary::batch_get_media_items] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::BatchGetMediaItems;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> BatchGetMediaItems {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct BatchGetMediaItems {
        inner: RequestBuilder,
        media_item_ids: std::vec::Vec<std::string::String>,
    }

    impl BatchGetMediaItems {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                media_item_ids: std::vec::Vec::new(),
            }
        }

        /// Identifiers of the media items to be requested. Must not contain
        /// repeated identifiers and cannot be empty. The maximum number of media
        /// items that can be retrieved in one call is 50.
        pub fn set_media_item_ids<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            self.media_item_ids = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BatchGetMediaItemsResponse> {
            const TEMPLATE: &str = "v1/mediaItems:batchGet";
            let path = gaxi::path_template::expand(TEMPLATE, &[])?;
            let command = gax::command::Command::new(http::Method::GET, TEMPLATE, path)
                .set_query("mediaItemIds", self.media_item_ids.format());
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::BatchGetMediaItemsResponse>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for BatchGetMediaItems {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::get_media_item][crate::client::PhotosLibrary::get_media_item] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::GetMediaItem;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetMediaItem {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetMediaItem {
        inner: RequestBuilder,
        media_item_id: std::string::String,
    }

    impl GetMediaItem {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                media_item_id: std::string::String::new(),
            }
        }

        /// Identifier of the media item to be requested.
        pub fn set_media_item_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.media_item_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::MediaItem> {
            const TEMPLATE: &str = "v1/mediaItems/{+mediaItemId}";
            let path = gaxi::path_template::expand(
                TEMPLATE,
                &[
                    ("mediaItemId", Some(self.media_item_id.as_str())),
                ],
            )?;
            let command = gax::command::Command::new(http::Method::GET, TEMPLATE, path);
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::MediaItem>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for GetMediaItem {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::list_media_items][crate::client::PhotosLibrary::list_media_items] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::ListMediaItems;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListMediaItems {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListMediaItems {
        inner: RequestBuilder,
        page_size: std::option::Option<i32>,
        page_token: std::option::Option<std::string::String>,
    }

    impl ListMediaItems {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                page_size: None,
                page_token: None,
            }
        }

        /// Maximum number of media items to return in the response. Fewer media
        /// items might be returned than the specified number. The default
        /// `pageSize` is 25, the maximum is 100.
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.page_size = Some(v.into());
            self
        }

        /// Sets or clears the value of `pageSize`.
        pub fn set_or_clear_page_size<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<i32>,
        {
            self.page_size = v.map(|x| x.into());
            self
        }

        /// A continuation token to get the next page of the results. Adding this
        /// to the request returns the rows after the `pageToken`. The
        /// `pageToken` should be the value returned in the `nextPageToken`
        /// parameter in the response to the `listMediaItems` request.
        pub fn set_page_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.page_token = Some(v.into());
            self
        }

        /// Sets or clears the value of `pageToken`.
        pub fn set_or_clear_page_token<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListMediaItemsResponse> {
            const TEMPLATE: &str = "v1/mediaItems";
            let path = gaxi::path_template::expand(TEMPLATE, &[])?;
            let command = gax::command::Command::new(http::Method::GET, TEMPLATE, path)
                .set_query("pageSize", self.page_size.format())
                .set_query("pageToken", self.page_token.format());
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::ListMediaItemsResponse>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for ListMediaItems {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::search_media_items][crate::client::PhotosLibrary::search_media_items] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::SearchMediaItems;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> SearchMediaItems {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct SearchMediaItems {
        inner: RequestBuilder,
        body: std::option::Option<crate::model::SearchMediaItemsRequest>,
    }

    impl SearchMediaItems {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                body: None,
            }
        }

        /// Sets the request body.
        pub fn set_body<T>(mut self, v: T) -> Self
        where
            T: Into<crate::model::SearchMediaItemsRequest>,
        {
            self.body = Some(v.into());
            self
        }

        /// Sets or clears the request body.
        ///
        /// Without a body the request is sent with no content.
        pub fn set_or_clear_body<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<crate::model::SearchMediaItemsRequest>,
        {
            self.body = v.map(|x| x.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::SearchMediaItemsResponse> {
            const TEMPLATE: &str = "v1/mediaItems:search";
            let path = gaxi::path_template::expand(TEMPLATE, &[])?;
            let body = encode(self.body)?;
            let command = gax::command::Command::new(http::Method::POST, TEMPLATE, path)
                .set_body(body);
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::SearchMediaItemsResponse>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for SearchMediaItems {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::get_shared_album][crate::client::PhotosLibrary::get_shared_album] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::GetSharedAlbum;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetSharedAlbum {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetSharedAlbum {
        inner: RequestBuilder,
        share_token: std::string::String,
    }

    impl GetSharedAlbum {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                share_token: std::string::String::new(),
            }
        }

        /// Share token of the album to be requested.
        pub fn set_share_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.share_token = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Album> {
            const TEMPLATE: &str = "v1/sharedAlbums/{+shareToken}";
            let path = gaxi::path_template::expand(
                TEMPLATE,
                &[
                    ("shareToken", Some(self.share_token.as_str())),
                ],
            )?;
            let command = gax::command::Command::new(http::Method::GET, TEMPLATE, path);
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::Album>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for GetSharedAlbum {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::join_shared_album][crate::client::PhotosLibrary::join_shared_album] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::JoinSharedAlbum;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> JoinSharedAlbum {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct JoinSharedAlbum {
        inner: RequestBuilder,
        body: std::option::Option<crate::model::JoinSharedAlbumRequest>,
    }

    impl JoinSharedAlbum {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                body: None,
            }
        }

        /// Sets the request body.
        pub fn set_body<T>(mut self, v: T) -> Self
        where
            T: Into<crate::model::JoinSharedAlbumRequest>,
        {
            self.body = Some(v.into());
            self
        }

        /// Sets or clears the request body.
        ///
        /// Without a body the request is sent with no content.
        pub fn set_or_clear_body<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<crate::model::JoinSharedAlbumRequest>,
        {
            self.body = v.map(|x| x.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::JoinSharedAlbumResponse> {
            const TEMPLATE: &str = "v1/sharedAlbums:join";
            let path = gaxi::path_template::expand(TEMPLATE, &[])?;
            let body = encode(self.body)?;
            let command = gax::command::Command::new(http::Method::POST, TEMPLATE, path)
                .set_body(body);
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::JoinSharedAlbumResponse>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for JoinSharedAlbum {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::leave_shared_album][crate::client::PhotosLibrary::leave_shared_album] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::LeaveSharedAlbum;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> LeaveSharedAlbum {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct LeaveSharedAlbum {
        inner: RequestBuilder,
        body: std::option::Option<crate::model::LeaveSharedAlbumRequest>,
    }

    impl LeaveSharedAlbum {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                body: None,
            }
        }

        /// Sets the request body.
        pub fn set_body<T>(mut self, v: T) -> Self
        where
            T: Into<crate::model::LeaveSharedAlbumRequest>,
        {
            self.body = Some(v.into());
            self
        }

        /// Sets or clears the request body.
        ///
        /// Without a body the request is sent with no content.
        pub fn set_or_clear_body<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<crate::model::LeaveSharedAlbumRequest>,
        {
            self.body = v.map(|x| x.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::LeaveSharedAlbumResponse> {
            const TEMPLATE: &str = "v1/sharedAlbums:leave";
            let path = gaxi::path_template::expand(TEMPLATE, &[])?;
            let body = encode(self.body)?;
            let command = gax::command::Command::new(http::Method::POST, TEMPLATE, path)
                .set_body(body);
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::LeaveSharedAlbumResponse>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for LeaveSharedAlbum {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [PhotosLibrary::list_shared_albums][crate::client::PhotosLibrary::list_shared_albums] calls.
    ///
    /// # Example
    /// ```
    /// # use google_apis_photoslibrary_v1::builder::photos_library::ListSharedAlbums;
    /// # async fn sample() -> google_apis_photoslibrary_v1::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListSharedAlbums {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListSharedAlbums {
        inner: RequestBuilder,
        exclude_non_app_created_data: std::option::Option<bool>,
        page_size: std::option::Option<i32>,
        page_token: std::option::Option<std::string::String>,
    }

    impl ListSharedAlbums {
        pub(crate) fn new(inner: RequestBuilder) -> Self {
            Self {
                inner,
                exclude_non_app_created_data: None,
                page_size: None,
                page_token: None,
            }
        }

        /// If set, the results exclude media items that were not created by this
        /// app. Defaults to false (all albums are returned). This field is
        /// ignored if the photoslibrary.readonly.appcreateddata scope is used.
        pub fn set_exclude_non_app_created_data<T: Into<bool>>(mut self, v: T) -> Self {
            self.exclude_non_app_created_data = Some(v.into());
            self
        }

        /// Sets or clears the value of `excludeNonAppCreatedData`.
        pub fn set_or_clear_exclude_non_app_created_data<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<bool>,
        {
            self.exclude_non_app_created_data = v.map(|x| x.into());
            self
        }

        /// Maximum number of albums to return in the response. Fewer albums
        /// might be returned than the specified number. The default `pageSize`
        /// is 20, the maximum is 50.
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.page_size = Some(v.into());
            self
        }

        /// Sets or clears the value of `pageSize`.
        pub fn set_or_clear_page_size<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<i32>,
        {
            self.page_size = v.map(|x| x.into());
            self
        }

        /// A continuation token to get the next page of the results. Adding this
        /// to the request returns the rows after the `pageToken`. The
        /// `pageToken` should be the value returned in the `nextPageToken`
        /// parameter in the response to the `listSharedAlbums` request.
        pub fn set_page_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.page_token = Some(v.into());
            self
        }

        /// Sets or clears the value of `pageToken`.
        pub fn set_or_clear_page_token<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<std::string::String>,
        {
            self.page_token = v.map(|x| x.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListSharedAlbumsResponse> {
            const TEMPLATE: &str = "v1/sharedAlbums";
            let path = gaxi::path_template::expand(TEMPLATE, &[])?;
            let command = gax::command::Command::new(http::Method::GET, TEMPLATE, path)
                .set_query("excludeNonAppCreatedData", self.exclude_non_app_created_data.format())
                .set_query("pageSize", self.page_size.format())
                .set_query("pageToken", self.page_token.format());
            self.inner.execute(command).await
        }

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<crate::model::ListSharedAlbumsResponse>) + Send + 'static,
        {
            tokio::spawn(async move { callback(self.send().await) })
        }
    }

    impl gax::options::internal::RequestBuilder for ListSharedAlbums {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.inner.options
        }
    }
}
