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

//! Generates a client library from a Discovery document.
//!
//! The generator writes `lib.rs`, `model.rs`, `client.rs` and `builder.rs`
//! into the output directory. The `Cargo.toml` file for the generated crate
//! is maintained by hand.

use anyhow::Result;
use clap::Parser;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

mod model;
mod schema;
mod service;
mod util;
use model::*;
use util::*;

const LICENSE: &str = "// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the \"License\");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an \"AS IS\" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// Code generated by discogen. DO NOT EDIT.
";

/// The document-level parameters supported by the generated clients.
///
/// `key` and `quotaUser` are set in the client configuration, `fields` and
/// `quotaUser` in the request options.
const STANDARD_PARAMETERS: &[&str] = &["fields", "key", "quotaUser"];

/// Generates a Rust client library from a Discovery document.
#[derive(Clone, Debug, Parser)]
#[command(name = "discogen", version, about)]
struct Opt {
    /// Input discovery document file to generate sources from.
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory which contains generated sources, stdout if not present
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .init();
    let opt = Opt::parse();
    generate_api(&opt.input, opt.output.as_deref())
}

/// Entry point for generating a discovery based client from the passed in `input`
/// that is written to `output`.
fn generate_api(input: &Path, output: Option<&Path>) -> Result<()> {
    let contents = fs::read(input)?;
    let d: Document = serde_json::from_slice(&contents)?;
    tracing::info!(id = %d.id, "generating client for {}", d.title);
    for name in d.parameters.keys().filter(|k| !STANDARD_PARAMETERS.contains(&k.as_str())) {
        tracing::warn!("standard parameter `{name}` is not supported, ignored");
    }
    let files = generate_files(&d)?;
    match output {
        Some(out) => {
            fs::create_dir_all(out)?;
            for (name, contents) in files {
                let path = out.join(name);
                fs::write(&path, contents)?;
                tracing::info!("wrote {}", path.display());
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            for (_, contents) in files {
                stdout.write_all(contents.as_bytes())?;
            }
        }
    }
    Ok(())
}

/// Returns the name and contents of each generated file.
fn generate_files(d: &Document) -> Result<Vec<(&'static str, String)>> {
    let generators: [(&'static str, fn(&Document) -> Result<String>); 4] = [
        ("lib.rs", gen_lib),
        ("model.rs", schema::gen_models),
        ("client.rs", service::gen_client),
        ("builder.rs", service::gen_builder),
    ];
    generators
        .into_iter()
        .map(|(name, generator)| Ok((name, format!("{LICENSE}{}", generator(d)?))))
        .collect()
}

/// Generates `lib.rs`.
fn gen_lib(d: &Document) -> Result<String> {
    let cn = d.client_name();
    let name = &d.name;
    let title = &d.title;
    let root = &d.root_url;
    let service_path = &d.service_path;
    let batch_path = d.batch_path.as_deref().unwrap_or("batch");
    let mut b = String::from(
        "
#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]
#![allow(rustdoc::invalid_html_tags)]

",
    );
    write!(
        &mut b,
        "//! Google APIs Client Libraries for Rust - {title}
//!
//! This crate contains the generated bindings for the {title}.
"
    )?;
    if let Some(description) = &d.description {
        b.push_str("//!\n");
        b.push_str(&as_comment("", description, false)?.replace("///", "//!"));
    }
    write!(
        &mut b,
        "//!
//! Start with [client::{cn}]. Create a client with
//! [{cn}::builder()][client::{cn}::builder], and use the
//! methods of the client to make requests.
"
    )?;
    if let Some(link) = &d.documentation_link {
        write!(
            &mut b,
            "//!
//! More information about the service at <{link}>.
"
        )?;
    }
    write!(
        &mut b,
        "
pub use gax::Result;
pub use gax::error::Error;

/// The request and response types used by the {title}.
pub mod model;

/// The client for the {title}.
pub mod client;

/// Request builders for the {title}.
pub mod builder;

/// Traits to mock the clients in this library.
///
/// Application developers may need to implement these traits to mock the
/// clients. In other use-cases, application developers only use the clients
/// and need not be concerned with these traits or their implementations.
pub mod stub {{
    pub use gax::command::{{Command, Execute}};
}}

/// The root URL for the service.
pub const ROOT_URL: &str = \"{root}\";

/// The service path, relative to [ROOT_URL].
pub const SERVICE_PATH: &str = \"{service_path}\";

/// The path for batch requests, relative to [ROOT_URL].
pub const BATCH_PATH: &str = \"{batch_path}\";

const DEFAULT_HOST: &str = \"{root}{service_path}\";

pub(crate) mod info {{
    const NAME: &str = env!(\"CARGO_PKG_NAME\");
    const VERSION: &str = env!(\"CARGO_PKG_VERSION\");
    pub(crate) static X_GOOG_API_CLIENT: gaxi::api_header::XGoogApiClient =
        gaxi::api_header::XGoogApiClient {{
            name: NAME,
            version: VERSION,
            library_type: gaxi::api_header::APIARY,
        }};
    pub(crate) static INSTRUMENTATION_CLIENT_INFO: gaxi::options::InstrumentationClientInfo =
        gaxi::options::InstrumentationClientInfo {{
            service_name: \"{name}\",
            client_version: VERSION,
            client_artifact: NAME,
            default_host: \"{name}\",
        }};
}}
"
    )?;
    Ok(b)
}
