//! Single-entry lookup over any listing call

use std::future::Future;

use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Fetch a list and return the first entry satisfying `predicate`.
pub async fn find_first<T, F, Fut, P>(fetch: F, predicate: P) -> Result<Option<T>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
    P: FnMut(&T) -> bool,
{
    Ok(fetch().await?.into_iter().find(predicate))
}

/// Fetch a list and return the first entry whose `search_key` field equals
/// `search_value`.
///
/// With `return_key`, only that field of the entry is returned; if the entry
/// has no such field the whole entry is returned instead. No match is a
/// `LookupExhausted` error.
///
/// ```ignore
/// let id = find_one_by("Branch 12", "name", || session.list_networks(), Some("id")).await?;
/// ```
pub async fn find_one_by<T, F, Fut>(
    search_value: impl Into<Value>,
    search_key: &str,
    fetch: F,
    return_key: Option<&str>,
) -> Result<Value>
where
    T: Serialize,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let search_value = search_value.into();

    let entries = fetch()
        .await?
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let entry = entries
        .into_iter()
        .find(|entry| {
            entry
                .get(search_key)
                .is_some_and(|field| same_value(field, &search_value))
        })
        .ok_or_else(|| ApiError::LookupExhausted {
            key: search_key.to_string(),
            value: search_value.to_string(),
        })?;

    match return_key {
        Some(key) if entry.get(key).is_some() => Ok(entry[key].clone()),
        _ => Ok(entry),
    }
}

/// JSON equality, except that numbers and strings compare by their text so
/// `123` finds an id that serializes as `"123"`.
fn same_value(field: &Value, search: &Value) -> bool {
    match (scalar_text(field), scalar_text(search)) {
        (Some(field), Some(search)) => field == search,
        _ => field == search,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
