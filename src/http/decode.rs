//! Explicit response envelope decoding.
//!
//! The remote API wraps payloads inconsistently: list items arrive
//! under `data.<key>`, under `data`, or as a bare array; single
//! entities under `data` or bare. Each accepted shape is enumerated
//! here and anything else is a [`DecodeError`], instead of ad hoc
//! property probing at every call site.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors produced when a response payload does not match any accepted
/// shape.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response payload has no recognizable {expected} shape")]
    UnexpectedShape { expected: &'static str },

    #[error("failed to decode {context}: {source}")]
    Entity {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Pagination fields reported by list-class endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pagination {
    #[serde(rename = "currentPage")]
    pub current_page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// A decoded list payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

/// Decode a list payload.
///
/// Accepted shapes, in order: bare `[...]`, `{data: [...]}`, and
/// `{data: {<key>: [...], ..pagination fields}}` when the entity's
/// routes name an envelope key. Pagination is extracted only from the
/// keyed shape, where the counters sit beside the item array.
pub fn decode_list<T: DeserializeOwned>(
    payload: &Value,
    list_key: Option<&str>,
) -> Result<ListPage<T>, DecodeError> {
    if let Some(values) = payload.as_array() {
        return Ok(ListPage {
            items: decode_entries(values)?,
            pagination: None,
        });
    }

    let data = payload
        .get("data")
        .ok_or(DecodeError::UnexpectedShape { expected: "list" })?;

    if let Some(values) = data.as_array() {
        return Ok(ListPage {
            items: decode_entries(values)?,
            pagination: None,
        });
    }

    if let Some(values) = list_key
        .and_then(|key| data.get(key))
        .and_then(Value::as_array)
    {
        return Ok(ListPage {
            items: decode_entries(values)?,
            pagination: Pagination::deserialize(data).ok(),
        });
    }

    Err(DecodeError::UnexpectedShape { expected: "list" })
}

fn decode_entries<T: DeserializeOwned>(values: &[Value]) -> Result<Vec<T>, DecodeError> {
    values
        .iter()
        .map(|value| {
            T::deserialize(value).map_err(|source| DecodeError::Entity {
                context: "list item",
                source,
            })
        })
        .collect()
}

/// Decode a single-entity payload: `{data: {...}}` or a bare object.
pub fn decode_item<T: DeserializeOwned>(payload: &Value) -> Result<T, DecodeError> {
    let candidate = match payload.get("data") {
        Some(data) if data.is_object() => data,
        _ if payload.is_object() => payload,
        _ => return Err(DecodeError::UnexpectedShape { expected: "entity" }),
    };

    T::deserialize(candidate).map_err(|source| DecodeError::Entity {
        context: "entity",
        source,
    })
}

/// Extract the bearer token from a login/signup payload
/// (`data.token` or `token`).
pub fn decode_token(payload: &Value) -> Result<String, DecodeError> {
    payload
        .pointer("/data/token")
        .or_else(|| payload.get("token"))
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(DecodeError::UnexpectedShape { expected: "token" })
}

/// Extract hosted asset URLs from an upload payload
/// (`data.urls`, `urls`, or a bare array).
pub fn decode_urls(payload: &Value) -> Result<Vec<String>, DecodeError> {
    let values = payload
        .pointer("/data/urls")
        .or_else(|| payload.get("urls"))
        .and_then(Value::as_array)
        .or_else(|| payload.as_array())
        .ok_or(DecodeError::UnexpectedShape {
            expected: "url list",
        })?;

    values
        .iter()
        .map(|value| {
            value
                .as_str()
                .map(str::to_string)
                .ok_or(DecodeError::UnexpectedShape {
                    expected: "url list",
                })
        })
        .collect()
}
