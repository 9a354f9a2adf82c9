//! Build-time embedded, lazily decoded template assets.

use crate::{AssetError, AssetResult};
use flate2::read::GzDecoder;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::sync::Arc;

/// One embedded asset: its original size and gzip payload.
///
/// The payload is decoded on first access and memoized. `OnceCell` blocks
/// concurrent first callers until the single decode finishes.
pub(crate) struct EmbeddedAsset {
    key: &'static str,
    size: usize,
    compressed: &'static [u8],
    decoded: OnceCell<AssetResult<Arc<str>>>,
}

impl EmbeddedAsset {
    pub(crate) const fn new(key: &'static str, size: usize, compressed: &'static [u8]) -> Self {
        Self {
            key,
            size,
            compressed,
            decoded: OnceCell::new(),
        }
    }

    pub(crate) fn key(&self) -> &'static str {
        self.key
    }

    /// Decoded text, decoding on first call.
    pub(crate) fn text(&self) -> AssetResult<Arc<str>> {
        self.decoded
            .get_or_init(|| {
                tracing::debug!(key = self.key, size = self.size, "decoding embedded asset");
                decode(self.key, self.size, self.compressed)
            })
            .clone()
    }
}

fn decode(key: &str, size: usize, compressed: &[u8]) -> AssetResult<Arc<str>> {
    if size == 0 {
        return Ok(Arc::from(""));
    }

    let mut text = String::with_capacity(size);
    GzDecoder::new(compressed)
        .read_to_string(&mut text)
        .map_err(|e| AssetError::Decode {
            key: key.to_string(),
            message: e.to_string(),
        })?;

    Ok(Arc::from(text))
}

include!(concat!(env!("OUT_DIR"), "/embedded_assets.rs"));

/// Look up an embedded asset by normalized key.
pub(crate) fn find(key: &str) -> Option<&'static EmbeddedAsset> {
    EMBEDDED.iter().find(|asset| asset.key == key)
}

/// All embedded keys, sorted.
pub(crate) fn keys() -> impl Iterator<Item = &'static str> {
    EMBEDDED.iter().map(EmbeddedAsset::key)
}
