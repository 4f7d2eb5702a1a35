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

//! This module maps the Discovery schemas to the structs in `model.rs`.

use anyhow::{Result, anyhow};
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

use super::model::*;
use super::util::*;

/// The broad category of a field type, it determines the accessors
/// generated for the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Kind {
    Scalar,
    String,
    Bool,
    Message,
    Array,
}

/// The Rust type for a Discovery schema.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldType {
    pub rust: String,
    /// The `serde_with` adapter, if the JSON representation differs from
    /// the natural one for `rust`.
    pub adapter: Option<String>,
    pub kind: Kind,
    /// The element type, for arrays.
    pub element: Option<Box<FieldType>>,
}

impl FieldType {
    fn new<T: Into<String>>(rust: T, kind: Kind) -> Self {
        Self {
            rust: rust.into(),
            adapter: None,
            kind,
            element: None,
        }
    }

    fn with_adapter<T: Into<String>>(mut self, adapter: T) -> Self {
        self.adapter = Some(adapter.into());
        self
    }
}

/// Represents the fields of a request/response struct.
#[derive(Clone, Debug)]
pub struct StructField {
    pub name: String,
    pub wire_name: String,
    pub field_type: FieldType,
    pub doc: Option<String>,
    pub enum_values: Vec<(String, String)>,
}

/// Represents a request/response struct and all of its fields.
#[derive(Debug, Default)]
pub struct StructSchema {
    pub doc: Option<String>,
    pub fields: Vec<StructField>,
}

/// Represents a mapping of all required request/response objects needed to interact
/// with the API.
#[derive(Debug, Default)]
pub struct StructSchemas {
    pub schemas: BTreeMap<String, StructSchema>,
}

impl StructSchemas {
    /// Adds a field to a Schema struct.
    fn push_field(&mut self, schema: &str, field: StructField) -> Result<()> {
        let struct_schema = self
            .schemas
            .get_mut(schema)
            .ok_or_else(|| anyhow!("unable to find key `{}`", schema))?;
        struct_schema.fields.push(field);
        Ok(())
    }

    /// Initializes a new schema if needed.
    fn init_struct(&mut self, schema: &str, doc: Option<String>) {
        self.schemas
            .entry(schema.to_string())
            .or_insert_with(|| StructSchema {
                doc,
                ..Default::default()
            });
    }
}

/// Processes all schemas to build up a mapping of the structs that will need
/// to be generated to represent them.
///
/// Inline object properties become their own struct, named after the
/// containing struct and the property.
pub fn schema_structs(schemas: &BTreeMap<String, Schema>) -> Result<StructSchemas> {
    let mut structs = StructSchemas::default();
    for (name, schema) in schemas {
        flat_schema_struct(name, schema, &mut structs)?;
    }
    for schema in structs.schemas.values_mut() {
        schema.fields.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Ok(structs)
}

fn flat_schema_struct(name: &str, schema: &Schema, structs: &mut StructSchemas) -> Result<()> {
    structs.init_struct(name, schema.description.clone());
    for (prop_name, prop_schema) in &schema.properties {
        let field_type = field_type(name, prop_name, prop_schema, structs)?;
        let values = match &prop_schema.items {
            Some(items) if prop_schema.schema_type.as_deref() == Some("array") => items,
            _ => prop_schema,
        };
        let enum_values = values
            .schema_enum
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let desc = values.schema_enum_desc.get(i).cloned().unwrap_or_default();
                (v.clone(), desc)
            })
            .collect();
        structs.push_field(
            name,
            StructField {
                name: field_name(prop_name),
                wire_name: prop_name.clone(),
                field_type,
                doc: prop_schema.description.clone(),
                enum_values,
            },
        )?;
    }
    Ok(())
}

/// Maps the schema for a property, including arrays, to its Rust type.
fn field_type(
    struct_name: &str,
    prop_name: &str,
    schema: &Schema,
    structs: &mut StructSchemas,
) -> Result<FieldType> {
    if schema.schema_type.as_deref() == Some("array") {
        let items = schema
            .items
            .as_ref()
            .ok_or_else(|| anyhow!("no items found for schema: {:?}", schema))?;
        let element = scalar_type(struct_name, prop_name, items, structs)?;
        let mut field = FieldType::new(format!("std::vec::Vec<{}>", element.rust), Kind::Array);
        if let Some(adapter) = &element.adapter {
            field.adapter = Some(format!("std::vec::Vec<{adapter}>"));
        }
        field.element = Some(Box::new(element));
        return Ok(field);
    }
    scalar_type(struct_name, prop_name, schema, structs)
}

/// Maps a non-array schema to its Rust type.
fn scalar_type(
    struct_name: &str,
    prop_name: &str,
    schema: &Schema,
    structs: &mut StructSchemas,
) -> Result<FieldType> {
    if let Some(r) = &schema.schema_ref {
        return Ok(FieldType::new(format!("crate::model::{r}"), Kind::Message));
    }
    let schema_type = schema
        .schema_type
        .as_deref()
        .ok_or_else(|| anyhow!("no schema_type provided for {:?}", schema))?;
    let format = schema.format.as_deref();
    let field = match (schema_type, format) {
        ("string", Some("int64")) => FieldType::new("i64", Kind::Scalar).with_adapter("gax::field::I64"),
        ("string", Some("uint64")) => {
            FieldType::new("u64", Kind::Scalar).with_adapter("serde_with::DisplayFromStr")
        }
        ("string", _) => FieldType::new("std::string::String", Kind::String),
        ("integer", Some("uint32")) => FieldType::new("u32", Kind::Scalar),
        ("integer", _) => FieldType::new("i32", Kind::Scalar),
        // `float` and `double` both keep f64 precision.
        ("number", _) => FieldType::new("f64", Kind::Scalar),
        ("boolean", _) => FieldType::new("bool", Kind::Bool),
        ("any", _) => FieldType::new("serde_json::Value", Kind::Message),
        ("object", _) => object_type(struct_name, prop_name, schema, structs)?,
        (t, f) => return Err(anyhow!("unknown type: {t} with format {f:?}")),
    };
    Ok(field)
}

fn object_type(
    struct_name: &str,
    prop_name: &str,
    schema: &Schema,
    structs: &mut StructSchemas,
) -> Result<FieldType> {
    if let Some(additional) = &schema.additional_properties {
        if additional.schema_type.as_deref() == Some("any") {
            return Ok(FieldType::new(
                "serde_json::Map<std::string::String, serde_json::Value>",
                Kind::Message,
            ));
        }
        let value = scalar_type(struct_name, prop_name, additional, structs)?;
        let mut field = FieldType::new(
            format!("std::collections::HashMap<std::string::String, {}>", value.rust),
            Kind::Message,
        );
        if let Some(adapter) = &value.adapter {
            field.adapter = Some(format!(
                "std::collections::HashMap<serde_with::Same, {adapter}>"
            ));
        }
        return Ok(field);
    }
    let type_name = format!("{struct_name}{}", snake_to_pascal(&camel_to_snake(prop_name)));
    flat_schema_struct(&type_name, schema, structs)?;
    Ok(FieldType::new(format!("crate::model::{type_name}"), Kind::Message))
}

/// Generates `model.rs`.
pub fn gen_models(d: &Document) -> Result<String> {
    let structs = schema_structs(&d.schemas)?;
    let mut b = String::new();
    if structs.schemas.is_empty() {
        return Ok(b);
    }
    b.push_str("\nuse gax::field::Field;\n");
    for (name, schema) in &structs.schemas {
        gen_struct(&mut b, name, schema)?;
    }
    Ok(b)
}

fn gen_struct(b: &mut String, name: &str, schema: &StructSchema) -> Result<()> {
    b.push('\n');
    b.push_str(&as_comment("", schema.doc.as_deref().unwrap_or_default(), false)?);
    if schema.fields.iter().any(|f| f.field_type.adapter.is_some()) {
        b.push_str("#[serde_with::serde_as]\n");
    }
    b.push_str(
        "#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = \"camelCase\")]
#[non_exhaustive]
",
    );
    if schema.fields.is_empty() {
        writeln!(b, "pub struct {name} {{}}")?;
    } else {
        writeln!(b, "pub struct {name} {{")?;
        for (i, f) in schema.fields.iter().enumerate() {
            if i != 0 {
                b.push('\n');
            }
            let mut doc = f.doc.clone().unwrap_or_default();
            if !f.enum_values.is_empty() {
                let module = format!("{}::{}", camel_to_snake(name), camel_to_snake(&f.wire_name));
                if !doc.is_empty() {
                    doc.push_str("\n\n");
                }
                write!(
                    &mut doc,
                    "See [{module}][crate::model::{module}] for well-known values."
                )?;
            }
            b.push_str(&as_comment("    ", &doc, false)?);
            b.push_str("    #[serde(skip_serializing_if = \"Field::is_absent\")]\n");
            if snake_to_camel(f.name.trim_end_matches('_')) != f.wire_name || f.name.ends_with('_') {
                writeln!(b, "    #[serde(rename = \"{}\")]", f.wire_name)?;
            }
            if let Some(adapter) = &f.field_type.adapter {
                writeln!(b, "    #[serde_as(as = \"Field<{adapter}>\")]")?;
            }
            writeln!(b, "    pub {}: Field<{}>,", f.name, f.field_type.rust)?;
        }
        b.push_str("}\n");
    }
    gen_impl(b, name, schema)?;
    gen_pageable(b, name, schema)?;
    gen_enums(b, name, schema)?;
    Ok(())
}

fn field_link(name: &str, field: &StructField) -> String {
    // Boolean fields have a method with the same name, a link would be ambiguous.
    if field.field_type.kind == Kind::Bool {
        return format!("`{}`", field.name);
    }
    format!("[{0}][crate::model::{name}::{0}]", field.name)
}

fn gen_impl(b: &mut String, name: &str, schema: &StructSchema) -> Result<()> {
    write!(
        b,
        "
impl {name} {{
    pub fn new() -> Self {{
        std::default::Default::default()
    }}
"
    )?;
    for f in &schema.fields {
        let link = field_link(name, f);
        let fname = &f.name;
        let rust = &f.field_type.rust;
        match &f.field_type.element {
            Some(element) => write!(
                b,
                "
    /// Sets the value of {link}.
    pub fn set_{fname}<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<{}>,
    {{
        self.{fname} = Field::Value(v.into_iter().map(|i| i.into()).collect());
        self
    }}
",
                element.rust
            )?,
            None => write!(
                b,
                "
    /// Sets the value of {link}.
    pub fn set_{fname}<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<{rust}>,
    {{
        self.{fname} = Field::Value(v.into());
        self
    }}

    /// Sets or clears the value of {link}.
    ///
    /// `None` leaves the field absent, it is not sent to the service.
    pub fn set_or_clear_{fname}<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<{rust}>,
    {{
        self.{fname} = Field::from_option(v.map(|x| x.into()));
        self
    }}
"
            )?,
        }
        if f.field_type.kind == Kind::Bool {
            write!(
                b,
                "
    /// Returns the value of `{fname}`, `false` when absent or null.
    pub fn {fname}(&self) -> bool {{
        self.{fname}.value().copied().unwrap_or_default()
    }}
"
            )?;
        }
    }
    if schema.fields.is_empty() {
        b.push_str(
            "
    /// Overwrites the fields present in `other`.
    pub fn update(&mut self, _other: Self) {}
",
        );
    } else {
        b.push_str(
            "
    /// Overwrites the fields present in `other`.
    ///
    /// Fields absent in `other` keep their current value.
    pub fn update(&mut self, other: Self) {
",
        );
        for f in &schema.fields {
            writeln!(b, "        self.{0}.update(other.{0});", f.name)?;
        }
        b.push_str("    }\n");
    }
    b.push_str("}\n");
    Ok(())
}

/// List responses carry a continuation token in `nextPageToken`.
fn gen_pageable(b: &mut String, name: &str, schema: &StructSchema) -> Result<()> {
    let pageable = schema
        .fields
        .iter()
        .any(|f| f.wire_name == "nextPageToken" && f.field_type.kind == Kind::String);
    if pageable {
        write!(
            b,
            "
impl gax::paginator::PageableResponse for {name} {{
    fn next_page_token(&self) -> std::string::String {{
        self.next_page_token.value().cloned().unwrap_or_default()
    }}
}}
"
        )?;
    }
    Ok(())
}

/// Discovery enums are strings, the well-known values become constants.
fn gen_enums(b: &mut String, name: &str, schema: &StructSchema) -> Result<()> {
    let enums = schema
        .fields
        .iter()
        .filter(|f| !f.enum_values.is_empty())
        .collect::<Vec<_>>();
    if enums.is_empty() {
        return Ok(());
    }
    write!(
        b,
        "
/// Defines additional types related to [{name}].
pub mod {} {{
",
        camel_to_snake(name)
    )?;
    for (i, f) in enums.iter().enumerate() {
        if i != 0 {
            b.push('\n');
        }
        write!(
            b,
            "    /// Well-known values for [{0}][crate::model::{name}::{0}].
    pub mod {1} {{
",
            f.name,
            camel_to_snake(&f.wire_name)
        )?;
        for (value, desc) in &f.enum_values {
            b.push_str(&as_comment("        ", desc, false)?);
            writeln!(
                b,
                "        pub const {}: &str = \"{value}\";",
                safe_name(value).to_uppercase()
            )?;
        }
        b.push_str("    }\n");
    }
    b.push_str("}\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::load;
    use pretty_assertions::assert_eq;

    fn find<'a>(structs: &'a StructSchemas, name: &str, field: &str) -> Option<&'a StructField> {
        structs
            .schemas
            .get(name)
            .and_then(|s| s.fields.iter().find(|f| f.name == field))
    }

    #[test]
    fn field_types() -> Result<()> {
        let d = load("photoslibrary-v1.json")?;
        let structs = schema_structs(&d.schemas)?;
        let count = find(&structs, "Album", "media_items_count").map(|f| f.field_type.clone());
        assert_eq!(
            count,
            Some(FieldType::new("i64", Kind::Scalar).with_adapter("gax::field::I64"))
        );
        let albums = find(&structs, "ListAlbumsResponse", "albums").map(|f| f.field_type.kind);
        assert_eq!(albums, Some(Kind::Array));
        let writeable = find(&structs, "Album", "is_writeable").map(|f| f.field_type.kind);
        assert_eq!(writeable, Some(Kind::Bool));
        let details = find(&structs, "Status", "details").map(|f| f.field_type.rust.clone());
        assert_eq!(
            details.as_deref(),
            Some("std::vec::Vec<serde_json::Map<std::string::String, serde_json::Value>>")
        );
        Ok(())
    }

    #[test]
    fn float_fields_use_f64() -> Result<()> {
        let d = load("photoslibrary-v1.json")?;
        let structs = schema_structs(&d.schemas)?;
        for field in ["aperture_f_number", "focal_length"] {
            let got = find(&structs, "Photo", field).map(|f| f.field_type.clone());
            assert_eq!(got, Some(FieldType::new("f64", Kind::Scalar)), "{field}");
        }
        Ok(())
    }

    #[test]
    fn enum_values() -> Result<()> {
        let d = load("photoslibrary-v1.json")?;
        let structs = schema_structs(&d.schemas)?;
        let position = find(&structs, "AlbumPosition", "position")
            .map(|f| f.enum_values.iter().map(|(v, _)| v.as_str()).collect::<Vec<_>>());
        assert_eq!(
            position,
            Some(vec![
                "POSITION_TYPE_UNSPECIFIED",
                "FIRST_IN_ALBUM",
                "LAST_IN_ALBUM",
                "AFTER_MEDIA_ITEM",
                "AFTER_ENRICHMENT_ITEM"
            ])
        );
        Ok(())
    }

    #[test]
    fn nested_objects() -> Result<()> {
        let schemas: BTreeMap<String, Schema> = serde_json::from_value(serde_json::json!({
            "Outer": {
                "type": "object",
                "properties": {
                    "inner": {
                        "type": "object",
                        "properties": { "value": { "type": "string" } }
                    },
                    "labels": {
                        "type": "object",
                        "additionalProperties": { "type": "string" }
                    }
                }
            }
        }))?;
        let structs = schema_structs(&schemas)?;
        let inner = find(&structs, "Outer", "inner").map(|f| f.field_type.rust.clone());
        assert_eq!(inner.as_deref(), Some("crate::model::OuterInner"));
        assert!(find(&structs, "OuterInner", "value").is_some());
        let labels = find(&structs, "Outer", "labels").map(|f| f.field_type.rust.clone());
        assert_eq!(
            labels.as_deref(),
            Some("std::collections::HashMap<std::string::String, std::string::String>")
        );
        Ok(())
    }

    #[test]
    fn generated_struct() -> Result<()> {
        let d = load("photoslibrary-v1.json")?;
        let got = gen_models(&d)?;
        assert!(got.contains("pub struct Album {"), "{got}");
        assert!(got.contains("#[serde_as(as = \"Field<gax::field::I64>\")]\n    pub media_items_count: Field<i64>,"));
        assert!(got.contains("pub fn is_writeable(&self) -> bool {"));
        assert!(got.contains("impl gax::paginator::PageableResponse for ListAlbumsResponse {"));
        assert!(got.contains("pub const FIRST_IN_ALBUM: &str = \"FIRST_IN_ALBUM\";"));
        assert!(got.contains("pub struct UnshareAlbumRequest {}"));
        Ok(())
    }

    #[test]
    fn empty() -> Result<()> {
        let d = load("monitoring-v1.json")?;
        assert_eq!(gen_models(&d)?, "");
        Ok(())
    }
}
