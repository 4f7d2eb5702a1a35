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

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{Subscriber, field, span};
use tracing_subscriber::{Layer, layer::Context, prelude::*, registry::LookupSpan};

/// Represents a captured tracing span with its attributes.
#[derive(Debug, Clone)]
pub struct CapturedSpan {
    /// The unique ID of the span.
    pub id: span::Id,
    /// The name of the span.
    pub name: String,
    /// A map of attribute keys to their string representations.
    pub attributes: HashMap<String, String>,
}

/// A `tracing::field::Visit` implementation to extract attribute key-value pairs.
///
/// Converts the field types used by the client libraries into strings.
struct TestVisitor<'a>(&'a mut HashMap<String, String>);

impl field::Visit for TestVisitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

/// The spans captured by one [TestLayer].
#[derive(Clone, Debug, Default)]
pub struct CapturedSpans(Arc<Mutex<Vec<CapturedSpan>>>);

impl CapturedSpans {
    /// Retrieves and removes all the captured spans.
    pub fn take(&self) -> Vec<CapturedSpan> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }

    fn push(&self, span: CapturedSpan) {
        self.0.lock().unwrap().push(span);
    }

    fn record(&self, id: &span::Id, values: &span::Record<'_>) {
        let mut spans = self.0.lock().unwrap();
        if let Some(span) = spans.iter_mut().rev().find(|s| &s.id == id) {
            values.record(&mut TestVisitor(&mut span.attributes));
        }
    }
}

/// A tracing layer for capturing and inspecting spans within tests.
///
/// The layer is installed as the default subscriber for the current thread,
/// so tests running in parallel do not see each other's spans. Use it with
/// single threaded runtimes, `#[tokio::test]` is the default flavor.
///
/// # Example
///
/// ```rust
/// use google_apis_test_utils::test_layer::TestLayer;
/// use tracing::info_span;
///
/// let (_guard, spans) = TestLayer::initialize();
/// info_span!("my_operation", foo = "bar").in_scope(|| {
///     tracing::info!("Doing something important");
/// });
///
/// let captured = spans.take();
/// assert_eq!(captured.len(), 1);
/// let span = &captured[0];
/// assert_eq!(span.name, "my_operation");
/// assert_eq!(span.attributes.get("foo"), Some(&"bar".to_string()));
/// ```
#[derive(Clone, Default)]
pub struct TestLayer {
    spans: CapturedSpans,
}

impl TestLayer {
    /// Installs a new layer as the default subscriber for this thread.
    ///
    /// The layer captures spans while the returned guard is in scope.
    pub fn initialize() -> (tracing::subscriber::DefaultGuard, CapturedSpans) {
        let layer = TestLayer::default();
        let spans = layer.spans.clone();
        let subscriber = tracing_subscriber::registry().with(layer);
        (tracing::subscriber::set_default(subscriber), spans)
    }
}

impl<S> Layer<S> for TestLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, _ctx: Context<'_, S>) {
        let mut attributes = HashMap::new();
        attrs.record(&mut TestVisitor(&mut attributes));
        self.spans.push(CapturedSpan {
            id: id.clone(),
            name: attrs.metadata().name().to_string(),
            attributes,
        });
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, _ctx: Context<'_, S>) {
        self.spans.record(id, values);
    }
}
