//! Response decoding
//!
//! Turns raw response bytes into a structured value.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::client::Response;
use crate::error::Result;

/// Converts a [`Response`] into a structured value
pub trait Decoder {
    type Output;

    fn decode(&self, response: &Response) -> Result<Self::Output>;
}

/// Decodes the response body as a single JSON document
///
/// Defaults to an untyped [`serde_json::Value`]; any `DeserializeOwned`
/// type can be used instead. An empty response is not valid JSON and fails.
pub struct JsonDecoder<T = serde_json::Value> {
    _output: PhantomData<fn() -> T>,
}

impl<T> JsonDecoder<T> {
    pub fn new() -> Self {
        Self {
            _output: PhantomData,
        }
    }
}

impl<T> Default for JsonDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Decoder for JsonDecoder<T> {
    type Output = T;

    fn decode(&self, response: &Response) -> Result<T> {
        Ok(serde_json::from_slice(response.as_bytes())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_decode_object() {
        let response = Response::from(br#"{"hello": "world"}"#.to_vec());
        let value = JsonDecoder::<serde_json::Value>::new().decode(&response).unwrap();
        assert_eq!(value, json!({"hello": "world"}));
    }

    #[test]
    fn test_decode_into_typed_struct() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Entry {
            hello: String,
        }

        let response = Response::from(br#"{"hello": "world"}"#.to_vec());
        let entry = JsonDecoder::<Entry>::new().decode(&response).unwrap();
        assert_eq!(entry, Entry { hello: "world".to_string() });
    }

    #[test]
    fn test_decode_empty_response_fails() {
        let result = JsonDecoder::<serde_json::Value>::new().decode(&Response::default());
        assert!(matches!(result, Err(FetchError::DecodeFailed(_))));
    }

    #[test]
    fn test_decode_trailing_garbage_fails() {
        let response = Response::from(b"{\"a\": 1}\0".to_vec());
        let result = JsonDecoder::<serde_json::Value>::new().decode(&response);
        assert!(matches!(result, Err(FetchError::DecodeFailed(_))));
    }
}
