#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod engine;
pub mod error;
pub mod types;

use std::num::FpCategory;

use reqwest::{Method, Request, StatusCode};
use serde_json::Value;

use crate::error::Error;
use crate::types::JsonObject;

pub type Result<T> = std::result::Result<T, Error>;

/// Key under which a successful but non-object response body is returned.
pub const RAW_BODY_KEY: &str = "raw";

/// Joins `host` and `path`, dropping one trailing `/` from `host` so exactly one slash separates
/// them. `path` is expected to start with `/`.
pub(crate) fn join_url(host: &str, path: &str) -> String {
    let host = host.strip_suffix('/').unwrap_or(host);
    format!("{host}{path}")
}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request(client: &reqwest::Client, request: Request) -> Result<JsonObject> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if is_failure(status_code) {
        let body = response.text().await.ok();
        let err = status_error(status_code, method, path, body);

        #[cfg(feature = "tracing")]
        {
            if let Some(status) = err.downcast_ref::<error::Status>() {
                tracing::warn!(
                    status = %status.status_code,
                    method = %status.method,
                    path = %status.path,
                    message = %status.message,
                    "API request failed"
                );
            }
        }

        return Err(err);
    }

    let body = response.text().await?;
    Ok(object_or_raw(body))
}

fn is_failure(status_code: StatusCode) -> bool {
    status_code.as_u16() >= 400
}

/// Builds the [`error::Status`] error for a failed response.
///
/// The message is the body's `error` field when the body is JSON and that field is truthy
/// (not `null`, `false`, `0`, `""`, `[]` or `{}`), otherwise the reason phrase of `status_code`.
fn status_error(
    status_code: StatusCode,
    method: Method,
    path: String,
    body: Option<String>,
) -> Error {
    let message = body
        .as_deref()
        .and_then(error_message)
        .unwrap_or_else(|| {
            status_code
                .canonical_reason()
                .map_or_else(|| status_code.as_str().to_owned(), ToOwned::to_owned)
        });

    Error::status(status_code, method, path, message, body)
}

fn error_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero) => None,
        Value::String(message) if message.is_empty() => None,
        Value::Array(values) if values.is_empty() => None,
        Value::Object(fields) if fields.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

/// Returns the body as a JSON object, or `{"raw": body}` when it isn't one.
fn object_or_raw(body: String) -> JsonObject {
    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(&body) {
        return object;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(len = body.len(), "response body is not a JSON object, returning raw text");

    let mut object = JsonObject::new();
    object.insert(RAW_BODY_KEY.to_owned(), Value::String(body));
    object
}
