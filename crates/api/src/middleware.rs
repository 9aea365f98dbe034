use std::collections::HashMap;

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::Response,
};
use url::form_urlencoded;

use oauthgate_auth::RawRequest;

use crate::app::{errors, services::AppServices};

/// Largest form body the pipeline will read.
pub const MAX_FORM_BYTES: usize = 64 * 1024;

/// Run the validation pipeline before the guarded handler.
///
/// On success the [`oauthgate_auth::AuthContext`] is inserted as a request
/// extension and the buffered body is handed on unchanged. On failure the
/// handler never runs.
pub async fn validate_request(
    State(services): State<AppServices>,
    req: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = req.into_parts();
    let body = match axum::body::to_bytes(body, MAX_FORM_BYTES).await {
        Ok(body) => body,
        Err(_) => {
            return errors::json_error(
                StatusCode::PAYLOAD_TOO_LARGE,
                "invalid_request",
                "request body is too large",
            );
        }
    };

    let raw = raw_request(&parts.headers, parts.uri.query(), &body);
    let pipeline = services.pipeline.clone();
    let outcome = tokio::task::spawn_blocking(move || pipeline.run(&raw)).await;

    match outcome {
        Ok(Ok(ctx)) => {
            parts.extensions.insert(ctx);
            next.run(Request::from_parts(parts, Body::from(body))).await
        }
        Ok(Err(err)) => errors::auth_error_to_response(&err),
        Err(err) => {
            tracing::error!(error = %err, "validation task failed");
            errors::internal_error()
        }
    }
}

/// Assemble the pipeline's view of an HTTP request.
///
/// The body is read as form fields only when it is declared as
/// `application/x-www-form-urlencoded`. Repeated keys keep their first value.
pub fn raw_request(headers: &HeaderMap, query: Option<&str>, body: &Bytes) -> RawRequest {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    let form = if is_form(headers) {
        parse_pairs(body)
    } else {
        HashMap::new()
    };
    let query = query.map(|q| parse_pairs(q.as_bytes())).unwrap_or_default();

    RawRequest::from_parts(authorization, form, query)
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

fn parse_pairs(input: &[u8]) -> HashMap<String, String> {
    let mut pairs = HashMap::new();
    for (name, value) in form_urlencoded::parse(input) {
        pairs
            .entry(name.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use oauthgate_auth::FieldSource;

    fn form_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=utf-8"),
        );
        headers
    }

    #[test]
    fn form_and_query_are_kept_apart() {
        let body = Bytes::from_static(b"username=a%40example.com&password=p+w");
        let raw = raw_request(&form_headers(), Some("username=q@example.com&scope=read"), &body);

        assert_eq!(raw.field_in(FieldSource::Form, "username"), Some("a@example.com"));
        assert_eq!(raw.field_in(FieldSource::Form, "password"), Some("p w"));
        assert_eq!(raw.field_in(FieldSource::Query, "username"), Some("q@example.com"));
        assert_eq!(raw.field_in(FieldSource::Query, "scope"), Some("read"));
        assert_eq!(raw.authorization(), None);
    }

    #[test]
    fn body_without_form_content_type_is_ignored() {
        let body = Bytes::from_static(b"username=a@example.com");
        let raw = raw_request(&HeaderMap::new(), None, &body);
        assert_eq!(raw.field_in(FieldSource::Form, "username"), None);
    }

    #[test]
    fn first_value_of_repeated_key_wins() {
        let raw = raw_request(&HeaderMap::new(), Some("scope=read&scope=write"), &Bytes::new());
        assert_eq!(raw.field_in(FieldSource::Query, "scope"), Some("read"));
    }

    #[test]
    fn authorization_header_is_passed_through() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic YzE6czE="));
        let raw = raw_request(&headers, None, &Bytes::new());
        assert_eq!(raw.authorization(), Some("Basic YzE6czE="));
    }
}
