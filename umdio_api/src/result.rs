//! The value every resource operation returns.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Error;

/// Decoded JSON from the API, or `Empty` when there is nothing to return.
///
/// `Empty` covers both "no data" and "the request failed"; use
/// [`Client::request`](crate::Client::request) to tell them apart.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ApiResult {
    #[default]
    Empty,
    Data(Value),
}

impl ApiResult {
    pub fn is_empty(&self) -> bool {
        matches!(self, ApiResult::Empty)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ApiResult::Empty => None,
            ApiResult::Data(value) => Some(value),
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            ApiResult::Empty => None,
            ApiResult::Data(value) => Some(value),
        }
    }

    /// Deserializes the payload into one of the [`types`](crate::types)
    /// records (or any other shape). Returns `None` when empty or when the
    /// payload does not fit `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Option<T> {
        let value = self.as_value()?;
        T::deserialize(value)
            .map_err(|e| {
                tracing::debug!("Payload does not match requested type: {}", e);
            })
            .ok()
    }
}

impl From<Result<Value, Error>> for ApiResult {
    fn from(result: Result<Value, Error>) -> Self {
        match result {
            Ok(value) => ApiResult::Data(value),
            Err(_) => ApiResult::Empty,
        }
    }
}
