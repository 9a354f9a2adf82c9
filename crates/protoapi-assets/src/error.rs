//! Error types for asset lookups.

use protoapi_core::GenerateError;
use thiserror::Error;

/// Errors that can occur while resolving an asset.
///
/// Cloneable so a memoized decode failure can be handed to every caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// No asset stored under this key.
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Compressed payload could not be decoded to UTF-8 text.
    #[error("Failed to decode asset {key}: {message}")]
    Decode { key: String, message: String },

    /// Reading an override file failed.
    #[error("Failed to read asset {key}: {message}")]
    Io { key: String, message: String },
}

impl From<AssetError> for GenerateError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::NotFound(key) => GenerateError::AssetNotFound(key),
            AssetError::Decode { key, message } | AssetError::Io { key, message } => {
                GenerateError::AssetDecode { key, message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn AssetError___not_found___displays_key() {
        let err = AssetError::NotFound("ts/missing.j2".to_string());

        assert_eq!(err.to_string(), "Asset not found: ts/missing.j2");
    }

    #[test]
    fn AssetError___not_found___converts_to_asset_not_found() {
        let err: GenerateError = AssetError::NotFound("php/client.php.j2".to_string()).into();

        assert_eq!(err, GenerateError::AssetNotFound("php/client.php.j2".to_string()));
    }

    #[test]
    fn AssetError___decode___converts_to_asset_decode() {
        let err: GenerateError = AssetError::Decode {
            key: "a".to_string(),
            message: "corrupt deflate stream".to_string(),
        }
        .into();

        assert!(matches!(err, GenerateError::AssetDecode { .. }));
    }

    #[test]
    fn AssetError___io___converts_to_asset_decode() {
        let err: GenerateError = AssetError::Io {
            key: "a".to_string(),
            message: "permission denied".to_string(),
        }
        .into();

        assert!(matches!(err, GenerateError::AssetDecode { ref key, .. } if key == "a"));
    }
}
