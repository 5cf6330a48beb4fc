//! Error types shared by the lookup, storage and sampling layers.

/// Failure of a single Pokémon lookup.
#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("Please enter a Pokémon name or number")]
    EmptyQuery,

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Pokémon not found: {0}")]
    NotFound(String),

    #[error("Unexpected response status {status} for '{query}'")]
    Status { status: u16, query: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure while reading or writing persisted data.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("Persistent storage is unavailable")]
    Unavailable,

    #[error("Storage operation failed: {0}")]
    Js(String),

    #[error("Failed to serialize history: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<wasm_bindgen::JsValue> for StorageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        StorageError::Js(format!("{:?}", value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SampleError {
    #[error("Cannot draw {count} distinct ids from a universe of {universe}")]
    CountExceedsUniverse { count: usize, universe: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_query() {
        let err = LookupError::NotFound("missingno".to_string());
        assert_eq!(err.to_string(), "Pokémon not found: missingno");
    }

    #[test]
    fn status_message_includes_code() {
        let err = LookupError::Status { status: 500, query: "25".to_string() };
        assert_eq!(err.to_string(), "Unexpected response status 500 for '25'");
    }

    #[test]
    fn sample_error_display() {
        let err = SampleError::CountExceedsUniverse { count: 6, universe: 5 };
        assert_eq!(err.to_string(), "Cannot draw 6 distinct ids from a universe of 5");
    }

    #[test]
    fn decode_error_converts_from_serde() {
        let serde_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: LookupError = serde_err.into();
        assert!(matches!(err, LookupError::Decode(_)));
    }
}
