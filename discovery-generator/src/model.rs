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

//! This module contains the mappings for a JSON Discovery document.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub version: String,
    pub title: String,
    pub canonical_name: Option<String>,
    pub description: Option<String>,
    pub root_url: String,
    #[serde(default)]
    pub service_path: String,
    pub batch_path: Option<String>,
    pub documentation_link: Option<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, Parameter>,
    #[serde(default)]
    pub schemas: BTreeMap<String, Schema>,
    #[serde(default)]
    pub resources: BTreeMap<String, Resource>,
}

impl Document {
    /// The name of the client type, e.g. `PhotosLibrary`.
    ///
    /// Derived from the canonical name when present, as it carries the word
    /// boundaries lost in `name`.
    pub fn client_name(&self) -> String {
        match &self.canonical_name {
            Some(c) => c.split_whitespace().collect(),
            None => crate::util::snake_to_pascal(&self.name),
        }
    }

    /// The name of the generated crate, as used in `use` statements.
    pub fn crate_name(&self) -> String {
        format!("google_apis_{}_{}", self.name, self.version)
    }

    /// The base URL for all requests, without a trailing path.
    pub fn default_host(&self) -> String {
        format!("{}{}", self.root_url, self.service_path)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub path: String,
    pub http_method: String,
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: BTreeMap<String, Parameter>,
    #[serde(default)]
    pub parameter_order: Vec<String>,
    pub request: Option<Schema>,
    pub response: Option<Schema>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(flatten)]
    pub schema: Schema,
    pub repeated: Option<bool>,
    pub location: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
    pub format: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, Schema>,
    pub items: Option<Box<Schema>>,
    pub additional_properties: Option<Box<Schema>>,
    #[serde(rename = "$ref")]
    pub schema_ref: Option<String>,
    #[serde(default, rename = "enum")]
    pub schema_enum: Vec<String>,
    #[serde(default, rename = "enumDescriptions")]
    pub schema_enum_desc: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(default)]
    pub methods: BTreeMap<String, Method>,
    #[serde(default)]
    pub resources: BTreeMap<String, Resource>,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;

    pub(crate) fn load(name: &str) -> anyhow::Result<Document> {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("resources/test");
        path.push(name);
        let contents = std::fs::read(path)?;
        Ok(serde_json::from_slice(&contents)?)
    }

    #[test]
    fn photoslibrary() -> anyhow::Result<()> {
        let d = load("photoslibrary-v1.json")?;
        assert_eq!(d.client_name(), "PhotosLibrary");
        assert_eq!(d.crate_name(), "google_apis_photoslibrary_v1");
        assert_eq!(d.default_host(), "https://photoslibrary.googleapis.com/");
        assert_eq!(d.batch_path.as_deref(), Some("batch"));
        assert_eq!(d.schemas.len(), 51);
        let albums = d.resources.get("albums").map(|r| r.methods.len());
        assert_eq!(albums, Some(8));
        assert!(d.parameters.contains_key("quotaUser"), "{:?}", d.parameters);
        Ok(())
    }

    #[test]
    fn monitoring() -> anyhow::Result<()> {
        let d = load("monitoring-v1.json")?;
        assert_eq!(d.client_name(), "Monitoring");
        assert_eq!(d.default_host(), "https://monitoring.googleapis.com/");
        assert!(d.schemas.is_empty());
        assert!(d.resources.is_empty());
        Ok(())
    }
}
