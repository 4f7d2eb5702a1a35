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

//! This module generates the client and the request builders.

use anyhow::{Result, anyhow};
use std::fmt::Write as FmtWrite;

use super::model::*;
use super::util::*;

/// One operation in the generated client.
#[derive(Debug)]
pub struct Operation<'a> {
    /// The Discovery method, e.g. `albums.get`.
    pub method: &'a Method,
    /// The name of the client method, e.g. `get_album`.
    pub fn_name: String,
    /// The name of the request builder, e.g. `GetAlbum`.
    pub builder_name: String,
}

impl Operation<'_> {
    /// The path parameters, in the order they appear in the client method.
    pub fn path_params(&self) -> Vec<&str> {
        self.method
            .parameter_order
            .iter()
            .filter(|p| {
                self.method
                    .parameters
                    .get(p.as_str())
                    .is_some_and(|p| p.location == "path")
            })
            .map(String::as_str)
            .collect()
    }

    /// The query parameters, sorted by name.
    pub fn query_params(&self) -> Vec<(&str, &Parameter)> {
        self.method
            .parameters
            .iter()
            .filter(|(_, p)| p.location == "query")
            .map(|(k, p)| (k.as_str(), p))
            .collect()
    }

    fn request(&self) -> Option<&str> {
        self.method
            .request
            .as_ref()
            .and_then(|s| s.schema_ref.as_deref())
    }

    fn response_type(&self) -> String {
        match self.method.response.as_ref().and_then(|s| s.schema_ref.as_ref()) {
            Some(r) => format!("crate::model::{r}"),
            None => "serde_json::Value".to_string(),
        }
    }

    fn http_method(&self) -> Result<&'static str> {
        let verb = match self.method.http_method.as_str() {
            "GET" => "GET",
            "POST" => "POST",
            "PUT" => "PUT",
            "PATCH" => "PATCH",
            "DELETE" => "DELETE",
            m => return Err(anyhow!("unsupported HTTP method {m}")),
        };
        Ok(verb)
    }
}

/// Returns all the operations in the document, sorted by resource and
/// method name.
pub fn operations(d: &Document) -> Vec<Operation<'_>> {
    let mut ops = Vec::new();
    collect_operations(&d.resources, &mut ops);
    ops
}

fn collect_operations<'a>(
    resources: &'a std::collections::BTreeMap<String, Resource>,
    ops: &mut Vec<Operation<'a>>,
) {
    for (resource_name, resource) in resources {
        for (method_name, method) in &resource.methods {
            let fn_name = operation_name(resource_name, method_name, method);
            ops.push(Operation {
                method,
                builder_name: snake_to_pascal(&fn_name),
                fn_name,
            });
        }
        collect_operations(&resource.resources, ops);
    }
}

/// Names the client method after the response or request type.
///
/// The response and request names are more descriptive than the Discovery
/// method names, e.g. `albums.batchAddMediaItems` returns a
/// `BatchAddMediaItemsToAlbumResponse`. Methods without either use the
/// method and (singular) resource names.
pub fn operation_name(resource: &str, name: &str, method: &Method) -> String {
    let schema_name = |s: &Option<Schema>, suffix: &str| {
        s.as_ref()
            .and_then(|s| s.schema_ref.as_deref())
            .and_then(|r| r.strip_suffix(suffix))
            .map(camel_to_snake)
    };
    if let Some(n) = schema_name(&method.response, "Response") {
        return n;
    }
    if let Some(n) = schema_name(&method.request, "Request") {
        return n;
    }
    let singular = resource.strip_suffix('s').unwrap_or(resource);
    format!("{}_{}", camel_to_snake(name), camel_to_snake(singular))
}

fn query_type(p: &Parameter) -> Result<&'static str> {
    let t = match (p.schema.schema_type.as_deref(), p.schema.format.as_deref()) {
        (Some("string"), Some("int64")) => "i64",
        (Some("string"), _) => "std::string::String",
        (Some("boolean"), _) => "bool",
        (Some("integer"), Some("uint32")) => "u32",
        (Some("integer"), _) => "i32",
        (t, f) => return Err(anyhow!("unsupported query parameter type {t:?} with format {f:?}")),
    };
    Ok(t)
}

fn module_name(d: &Document) -> String {
    camel_to_snake(&d.client_name())
}

/// Generates `client.rs`.
pub fn gen_client(d: &Document) -> Result<String> {
    let cn = d.client_name();
    let module = module_name(d);
    let krate = d.crate_name();
    let title = &d.title;
    let root = d.default_host();
    let ops = operations(d);
    let mut b = String::new();
    write!(
        &mut b,
        "
/// Implements a client for the {title}.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {{
/// # use {krate}::client::{cn};
/// let client = {cn}::builder().build().await?;
/// // use `client` to make requests to the {title}.
/// # gax::client_builder::Result::<()>::Ok(()) }});
/// ```
"
    )?;
    if let Some(description) = &d.description {
        b.push_str("///\n/// # Service Description\n///\n");
        b.push_str(&as_comment("", description, false)?);
    }
    write!(
        &mut b,
        "///
/// # Configuration
///
/// To configure `{cn}` use the `with_*` methods in the type returned
/// by [builder()][{cn}::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default
///   endpoint (`{root}`).
///   Applications running in restricted networks, or tests using a local
///   fake, may want to override this default.
/// * [with_access_token()]: by default this client sends no credentials.
///   Most operations require an OAuth 2.0 access token.
/// * [with_api_key()] and [with_quota_user()]: set the `key` and `quotaUser`
///   query parameters for every request.
///
/// [with_endpoint()]: super::builder::{module}::ClientBuilder::with_endpoint
/// [with_access_token()]: super::builder::{module}::ClientBuilder::with_access_token
/// [with_api_key()]: super::builder::{module}::ClientBuilder::with_api_key
/// [with_quota_user()]: super::builder::{module}::ClientBuilder::with_quota_user
///
/// # Pooling and Cloning
///
/// `{cn}` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `{cn}` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct {cn} {{
"
    )?;
    if ops.is_empty() {
        b.push_str("    #[allow(dead_code)]\n");
    }
    write!(
        &mut b,
        "    stub: std::sync::Arc<dyn gax::command::Execute>,
    config: std::sync::Arc<gaxi::options::ClientConfig>,
}}

impl {cn} {{
    /// Returns a builder for [{cn}].
    ///
    /// ```
    /// # tokio_test::block_on(async {{
    /// # use {krate}::client::{cn};
    /// let client = {cn}::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) }});
    /// ```
    pub fn builder() -> super::builder::{module}::ClientBuilder {{
        gax::client_builder::internal::new_builder(super::builder::{module}::client::Factory)
    }}

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior. The client uses the default configuration.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: gax::command::Execute + 'static,
    {{
        Self {{
            stub: std::sync::Arc::new(stub),
            config: std::sync::Arc::new(gaxi::options::ClientConfig::default()),
        }}
    }}

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {{
        let stub = gaxi::http::ReqwestClient::new(config.clone(), crate::DEFAULT_HOST)
            .await?
            .with_api_client(&crate::info::X_GOOG_API_CLIENT)
            .with_instrumentation(&crate::info::INSTRUMENTATION_CLIENT_INFO);
        Ok(Self {{
            stub: std::sync::Arc::new(stub),
            config: std::sync::Arc::new(config),
        }})
    }}

    /// The API key sent with every request, if any.
    pub fn api_key(&self) -> std::option::Option<&str> {{
        self.config.api_key.as_deref()
    }}

    /// The quota user sent with every request, unless the request overrides it.
    pub fn quota_user(&self) -> std::option::Option<&str> {{
        self.config.quota_user.as_deref()
    }}

    /// The endpoint override, if any.
    ///
    /// When `None` the client uses `{root}`.
    pub fn endpoint(&self) -> std::option::Option<&str> {{
        self.config.endpoint.as_deref()
    }}
"
    )?;
    if !ops.is_empty() {
        write!(
            &mut b,
            "
    fn request_builder(&self) -> super::builder::{module}::RequestBuilder {{
        super::builder::{module}::RequestBuilder::new(self.stub.clone(), self.config.clone())
    }}
"
        )?;
    }
    for op in &ops {
        let fn_name = &op.fn_name;
        let bn = &op.builder_name;
        let path_params = op.path_params();
        b.push('\n');
        b.push_str(&as_comment(
            "    ",
            op.method.description.as_deref().unwrap_or_default(),
            false,
        )?);
        let args = path_params
            .iter()
            .map(|p| format!("\"my-{}\"", camel_to_snake(p).replace('_', "-")))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            &mut b,
            "    ///
    /// # Example
    /// ```
    /// # use {krate}::client::{cn};
    /// # async fn sample(client: &{cn}) -> anyhow::Result<()> {{
    /// let response = client
    ///     .{fn_name}({args})
    ///     .send()
    ///     .await?;
    /// println!(\"response {{response:?}}\");
    /// # Ok(()) }}
    /// ```
"
        )?;
        let params: String = path_params
            .iter()
            .map(|p| {
                format!(
                    "\n        {}: impl std::convert::Into<std::string::String>,",
                    field_name(p)
                )
            })
            .collect();
        let signature = if params.is_empty() {
            "&self".to_string()
        } else {
            format!("\n        &self,{params}\n    ")
        };
        let setters: String = path_params
            .iter()
            .map(|p| format!("\n            .set_{0}({0})", field_name(p)))
            .collect();
        write!(
            &mut b,
            "    pub fn {fn_name}({signature}) -> super::builder::{module}::{bn} {{
        super::builder::{module}::{bn}::new(self.request_builder()){setters}
    }}
"
        )?;
    }
    b.push_str("}\n");
    Ok(b)
}

/// Generates `builder.rs`.
pub fn gen_builder(d: &Document) -> Result<String> {
    let cn = d.client_name();
    let module = module_name(d);
    let krate = d.crate_name();
    let ops = operations(d);
    let mut b = String::new();
    write!(&mut b, "\npub mod {module} {{\n")?;
    if !ops.is_empty() {
        b.push_str("    use crate::Result;\n");
        if ops.iter().any(|op| !op.query_params().is_empty()) {
            b.push_str("    use gaxi::query_parameter::QueryParameter;\n");
        }
        b.push_str("    use std::sync::Arc;\n\n");
    }
    write!(
        &mut b,
        "    /// A builder for [{cn}][crate::client::{cn}].
    ///
    /// ```
    /// # tokio_test::block_on(async {{
    /// # use {krate}::*;
    /// # use builder::{module}::ClientBuilder;
    /// # use client::{cn};
    /// let builder : ClientBuilder = {cn}::builder();
    /// let client = builder
    ///     .with_endpoint(\"{root}\")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) }});
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {{
        use crate::client::{cn};
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {{
            type Client = {cn};
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {{
                Self::Client::new(config).await
            }}
        }}
    }}
",
        root = d.default_host()
    )?;
    if ops.is_empty() {
        b.push_str("}\n");
        return Ok(b);
    }
    write!(
        &mut b,
        "
    /// Common implementation for [crate::client::{cn}] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder {{
        stub: Arc<dyn gax::command::Execute>,
        config: Arc<gaxi::options::ClientConfig>,
        options: gax::options::RequestOptions,
    }}

    impl RequestBuilder {{
        pub(crate) fn new(
            stub: Arc<dyn gax::command::Execute>,
            config: Arc<gaxi::options::ClientConfig>,
        ) -> Self {{
            Self {{
                stub,
                config,
                options: gax::options::RequestOptions::default(),
            }}
        }}

        async fn execute<T>(self, command: gax::command::Command) -> Result<T>
        where
            T: serde::de::DeserializeOwned,
        {{
            let command = command
                .set_response_type::<T>()
                .apply_defaults(&self.config)
                .apply_options(&self.options);
            tracing::debug!(method = %command.method, path = %command.path, \"executing command\");
            let response = self.stub.execute(command, self.options).await?;
            serde_json::from_value(response.into_body()).map_err(gax::error::Error::deser)
        }}
    }}

    fn encode<T: serde::Serialize>(body: Option<T>) -> Result<Option<serde_json::Value>> {{
        body.map(serde_json::to_value)
            .transpose()
            .map_err(gax::error::Error::ser)
    }}
"
    )?;
    for op in &ops {
        gen_request_builder(&mut b, d, op)?;
    }
    b.push_str("}\n");
    Ok(b)
}

fn gen_request_builder(b: &mut String, d: &Document, op: &Operation) -> Result<()> {
    let cn = d.client_name();
    let module = module_name(d);
    let krate = d.crate_name();
    let fn_name = &op.fn_name;
    let bn = &op.builder_name;
    let path_params = op.path_params();
    let query_params = op.query_params();
    let request = op.request();
    let response = op.response_type();
    write!(
        b,
        "
    /// The request builder for [{cn}::{fn_name}][crate::client::{cn}::{fn_name}] calls.
    ///
    /// # Example
    /// ```
    /// # use {krate}::builder::{module}::{bn};
    /// # async fn sample() -> {krate}::Result<()> {{
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }}
    ///
    /// fn prepare_request_builder() -> {bn} {{
    ///   # panic!();
    ///   // ... details omitted ...
    /// }}
    /// ```
    #[derive(Clone, Debug)]
    pub struct {bn} {{
        inner: RequestBuilder,
"
    )?;
    for p in &path_params {
        writeln!(b, "        {}: std::string::String,", field_name(p))?;
    }
    for (name, p) in &query_params {
        let t = query_type(p)?;
        if p.repeated.unwrap_or(false) {
            writeln!(b, "        {}: std::vec::Vec<{t}>,", field_name(name))?;
        } else {
            writeln!(b, "        {}: std::option::Option<{t}>,", field_name(name))?;
        }
    }
    if let Some(request) = request {
        writeln!(b, "        body: std::option::Option<crate::model::{request}>,")?;
    }
    write!(
        b,
        "    }}

    impl {bn} {{
        pub(crate) fn new(inner: RequestBuilder) -> Self {{
            Self {{
                inner,
"
    )?;
    for p in &path_params {
        writeln!(b, "                {}: std::string::String::new(),", field_name(p))?;
    }
    for (name, p) in &query_params {
        if p.repeated.unwrap_or(false) {
            writeln!(b, "                {}: std::vec::Vec::new(),", field_name(name))?;
        } else {
            writeln!(b, "                {}: None,", field_name(name))?;
        }
    }
    if request.is_some() {
        b.push_str("                body: None,\n");
    }
    b.push_str("            }\n        }\n");

    for p in &path_params {
        let name = field_name(p);
        let doc = op
            .method
            .parameters
            .get(*p)
            .and_then(|p| p.schema.description.clone())
            .unwrap_or_else(|| format!("Sets the value of the `{p}` path parameter."));
        b.push('\n');
        b.push_str(&as_comment("        ", &doc, false)?);
        write!(
            b,
            "        pub fn set_{name}<T: Into<std::string::String>>(mut self, v: T) -> Self {{
            self.{name} = v.into();
            self
        }}
"
        )?;
    }
    for (wire, p) in &query_params {
        let name = field_name(wire);
        let t = query_type(p)?;
        let doc = p
            .schema
            .description
            .clone()
            .unwrap_or_else(|| format!("Sets the value of the `{wire}` query parameter."));
        b.push('\n');
        b.push_str(&as_comment("        ", &doc, false)?);
        if p.repeated.unwrap_or(false) {
            write!(
                b,
                "        pub fn set_{name}<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<{t}>,
        {{
            self.{name} = v.into_iter().map(|i| i.into()).collect();
            self
        }}
"
            )?;
        } else {
            write!(
                b,
                "        pub fn set_{name}<T: Into<{t}>>(mut self, v: T) -> Self {{
            self.{name} = Some(v.into());
            self
        }}

        /// Sets or clears the value of `{wire}`.
        pub fn set_or_clear_{name}<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<{t}>,
        {{
            self.{name} = v.map(|x| x.into());
            self
        }}
"
            )?;
        }
    }
    if let Some(request) = request {
        write!(
            b,
            "
        /// Sets the request body.
        pub fn set_body<T>(mut self, v: T) -> Self
        where
            T: Into<crate::model::{request}>,
        {{
            self.body = Some(v.into());
            self
        }}

        /// Sets or clears the request body.
        ///
        /// Without a body the request is sent with no content.
        pub fn set_or_clear_body<T>(mut self, v: Option<T>) -> Self
        where
            T: Into<crate::model::{request}>,
        {{
            self.body = v.map(|x| x.into());
            self
        }}
"
        )?;
    }

    write!(
        b,
        "
        /// Sends the request.
        pub async fn send(self) -> Result<{response}> {{
            const TEMPLATE: &str = \"{}\";
",
        op.method.path
    )?;
    if path_params.is_empty() {
        b.push_str("            let path = gaxi::path_template::expand(TEMPLATE, &[])?;\n");
    } else {
        b.push_str("            let path = gaxi::path_template::expand(\n                TEMPLATE,\n                &[\n");
        for p in &path_params {
            writeln!(
                b,
                "                    (\"{p}\", Some(self.{}.as_str())),",
                field_name(p)
            )?;
        }
        b.push_str("                ],\n            )?;\n");
    }
    if request.is_some() {
        b.push_str("            let body = encode(self.body)?;\n");
    }
    write!(
        b,
        "            let command = gax::command::Command::new(http::Method::{}, TEMPLATE, path)",
        op.http_method()?
    )?;
    for (wire, _) in &query_params {
        write!(
            b,
            "\n                .set_query(\"{wire}\", self.{}.format())",
            field_name(wire)
        )?;
    }
    if request.is_some() {
        b.push_str("\n                .set_body(body)");
    }
    write!(
        b,
        ";
            self.inner.execute(command).await
        }}

        /// Sends the request in a new Tokio task and delivers the result to `callback`.
        ///
        /// The callback runs exactly once. This function must be called from
        /// within a Tokio runtime.
        pub fn send_with<F>(self, callback: F) -> tokio::task::JoinHandle<()>
        where
            F: FnOnce(Result<{response}>) + Send + 'static,
        {{
            tokio::spawn(async move {{ callback(self.send().await) }})
        }}
    }}

    impl gax::options::internal::RequestBuilder for {bn} {{
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {{
            &mut self.inner.options
        }}
    }}
"
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::load;
    use pretty_assertions::assert_eq;

    #[test]
    fn operation_names() -> Result<()> {
        let d = load("photoslibrary-v1.json")?;
        let got = operations(&d)
            .iter()
            .map(|op| op.fn_name.clone())
            .collect::<Vec<_>>();
        let want = vec![
            "add_enrichment_to_album",
            "batch_add_media_items_to_album",
            "batch_remove_media_items_from_album",
            "create_album",
            "get_album",
            "list_albums",
            "share_album",
            "unshare_album",
            "batch_create_media_items",
            "batch_get_media_items",
            "get_media_item",
            "list_media_items",
            "search_media_items",
            "get_shared_album",
            "join_shared_album",
            "leave_shared_album",
            "list_shared_albums",
        ];
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn parameters() -> Result<()> {
        let d = load("photoslibrary-v1.json")?;
        let ops = operations(&d);
        let get = ops
            .iter()
            .find(|op| op.fn_name == "get_album")
            .ok_or_else(|| anyhow!("missing get_album"))?;
        assert_eq!(get.path_params(), vec!["albumId"]);
        assert!(get.query_params().is_empty());

        let batch = ops
            .iter()
            .find(|op| op.fn_name == "batch_get_media_items")
            .ok_or_else(|| anyhow!("missing batch_get_media_items"))?;
        let query = batch.query_params();
        assert_eq!(query.len(), 1);
        assert_eq!(query[0].0, "mediaItemIds");
        assert_eq!(query[0].1.repeated, Some(true));
        Ok(())
    }

    #[test]
    fn fallback_name() -> Result<()> {
        let method: Method = serde_json::from_value(serde_json::json!({
            "path": "v1/widgets/{+name}",
            "httpMethod": "DELETE",
        }))?;
        assert_eq!(operation_name("widgets", "delete", &method), "delete_widget");
        Ok(())
    }

    #[test]
    fn client() -> Result<()> {
        let d = load("photoslibrary-v1.json")?;
        let got = gen_client(&d)?;
        assert!(got.contains("pub struct PhotosLibrary {"), "{got}");
        assert!(got.contains(
            "    pub fn get_album(
        &self,
        album_id: impl std::convert::Into<std::string::String>,
    ) -> super::builder::photos_library::GetAlbum {"
        ));
        assert!(got.contains(
            "    pub fn list_albums(&self) -> super::builder::photos_library::ListAlbums {"
        ));
        Ok(())
    }

    #[test]
    fn builder() -> Result<()> {
        let d = load("photoslibrary-v1.json")?;
        let got = gen_builder(&d)?;
        assert!(got.contains("pub struct BatchGetMediaItems {"), "{got}");
        assert!(got.contains("media_item_ids: std::vec::Vec<std::string::String>,"));
        assert!(got.contains(".set_query(\"pageSize\", self.page_size.format())"));
        assert!(got.contains("const TEMPLATE: &str = \"v1/albums/{+albumId}:share\";"));
        assert!(got.contains("use gaxi::query_parameter::QueryParameter;"));
        Ok(())
    }

    #[test]
    fn no_operations() -> Result<()> {
        let d = load("monitoring-v1.json")?;
        assert!(operations(&d).is_empty());
        let client = gen_client(&d)?;
        assert!(client.contains("pub struct Monitoring {"), "{client}");
        assert!(!client.contains("fn request_builder"), "{client}");
        let builder = gen_builder(&d)?;
        assert!(!builder.contains("RequestBuilder"), "{builder}");
        assert!(builder.contains("pub type ClientBuilder"), "{builder}");
        Ok(())
    }
}
