//! Endpoint templates and per-call request assembly.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::error::CoreError;
use crate::vocabulary::HttpMethod;

/// Positional placeholder inside a URI template.
pub const PLACEHOLDER: &str = "()";

/// An HTTP method paired with a URI template such as `/anime/()/my_list_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    method: HttpMethod,
    uri: &'static str,
}

impl Route {
    pub const fn new(method: HttpMethod, uri: &'static str) -> Self {
        Self { method, uri }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn uri(&self) -> &'static str {
        self.uri
    }

    /// Number of `()` placeholders in the template.
    pub fn placeholders(&self) -> usize {
        self.uri.matches(PLACEHOLDER).count()
    }

    /// Start a request, filling placeholders left to right with `args`.
    ///
    /// The argument count must equal the placeholder count; a mismatch is a
    /// [`CoreError::RouteArity`] so an unfilled `()` never reaches the wire.
    pub fn generate(&self, args: &[&dyn Display]) -> Result<RequestBuilder, CoreError> {
        let placeholders = self.placeholders();
        if args.len() != placeholders {
            return Err(CoreError::RouteArity {
                uri: self.uri,
                placeholders,
                supplied: args.len(),
            });
        }

        // Splitting first keeps an argument that itself contains `()` from
        // being substituted into.
        let mut uri = String::with_capacity(self.uri.len());
        let mut segments = self.uri.split(PLACEHOLDER);
        if let Some(head) = segments.next() {
            uri.push_str(head);
        }
        for (arg, segment) in args.iter().zip(segments) {
            uri.push_str(&arg.to_string());
            uri.push_str(segment);
        }

        Ok(RequestBuilder {
            method: self.method,
            uri,
            query: BTreeMap::new(),
            body: BTreeMap::new(),
        })
    }
}

/// Request descriptor accumulated for a single call.
///
/// Built by chaining `route.generate(..)?.with_query(..).with_body(..)`; the
/// query and body accumulators are disjoint, so call order does not matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuilder {
    method: HttpMethod,
    uri: String,
    query: BTreeMap<String, String>,
    body: BTreeMap<String, String>,
}

impl RequestBuilder {
    /// Merge query parameters. Later values win for keys already present.
    pub fn with_query<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        merge(&mut self.query, params);
        self
    }

    /// Merge body fields. Later values win for keys already present.
    pub fn with_body<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        merge(&mut self.body, fields);
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    pub fn body(&self) -> &BTreeMap<String, String> {
        &self.body
    }
}

fn merge<I, K, V>(target: &mut BTreeMap<String, String>, entries: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: ToString,
{
    for (key, value) in entries {
        target.insert(key.into(), value.to_string());
    }
}
