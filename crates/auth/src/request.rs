//! Transport-agnostic view of an inbound request.

use std::collections::HashMap;

use oauthgate_core::{AuthError, AuthResult};

/// Where a request field was found.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldSource {
    Form,
    Query,
}

impl FieldSource {
    /// Lookup order shared by every extractor: form body, then query string.
    pub const PRECEDENCE: [FieldSource; 2] = [FieldSource::Form, FieldSource::Query];
}

/// The raw material the pipeline validates.
///
/// Built by the transport layer from the `Authorization` header, the decoded
/// form body and the decoded query string. Nothing here is trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRequest {
    authorization: Option<String>,
    form: HashMap<String, String>,
    query: HashMap<String, String>,
}

impl RawRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        authorization: Option<String>,
        form: HashMap<String, String>,
        query: HashMap<String, String>,
    ) -> Self {
        Self {
            authorization,
            form,
            query,
        }
    }

    pub fn with_authorization(mut self, value: impl Into<String>) -> Self {
        self.authorization = Some(value.into());
        self
    }

    pub fn with_form(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.insert(name.into(), value.into());
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Raw `Authorization` header value, if any.
    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    /// Value of `name` in one specific source.
    pub fn field_in(&self, source: FieldSource, name: &str) -> Option<&str> {
        let map = match source {
            FieldSource::Form => &self.form,
            FieldSource::Query => &self.query,
        };
        map.get(name).map(String::as_str)
    }

    /// Field lookup with form-then-query fallback.
    pub fn fields(&self) -> RequestFields<'_> {
        RequestFields { request: self }
    }
}

/// A field value together with the source it came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    pub value: &'a str,
    pub source: FieldSource,
}

/// The one place the form-then-query precedence rule is implemented.
#[derive(Debug, Copy, Clone)]
pub struct RequestFields<'a> {
    request: &'a RawRequest,
}

impl<'a> RequestFields<'a> {
    /// First source containing `name`. Presence is what counts: an empty
    /// value in the form still shadows the query.
    pub fn lookup(&self, name: &str) -> Option<Field<'a>> {
        FieldSource::PRECEDENCE.into_iter().find_map(|source| {
            self.request
                .field_in(source, name)
                .map(|value| Field { value, source })
        })
    }

    pub fn optional(&self, name: &str) -> Option<&'a str> {
        self.lookup(name).map(|field| field.value)
    }

    /// Like [`optional`](Self::optional) but absent maps to `missing`.
    pub fn require(&self, name: &str, missing: AuthError) -> AuthResult<&'a str> {
        self.optional(name).ok_or(missing)
    }

    /// First source that carries *both* fields with non-empty values.
    ///
    /// Sources are never merged: `first` from the form and `second` from the
    /// query is not a match.
    pub fn pair(&self, first: &str, second: &str) -> Option<(&'a str, &'a str, FieldSource)> {
        FieldSource::PRECEDENCE.into_iter().find_map(|source| {
            let a = self.request.field_in(source, first).filter(|v| !v.is_empty())?;
            let b = self.request.field_in(source, second).filter(|v| !v.is_empty())?;
            Some((a, b, source))
        })
    }
}
