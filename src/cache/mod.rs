//! Codec for the persisted names cache.
//!
//! The cache is a JSON array of `{ "name": ..., "order": 0.0 }` records kept
//! in the [`CACHED_NAMES_SLOT`] slot. Only names are meaningful; `order` is
//! always written as zero and ignored on read.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Slot holding the names cache. Once published, do not rename.
pub const CACHED_NAMES_SLOT: &str = "cachedNames";

/// Errors from encoding or decoding the names cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Names cache is empty")]
    Empty,

    #[error("Failed to decode names cache: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode names cache: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Persisted projection of a participant. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedParticipant {
    pub name: String,
    #[serde(default)]
    pub order: f64,
}

impl CachedParticipant {
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            order: 0.0,
        }
    }
}

/// Encode names as cache bytes, forcing every `order` to zero.
pub fn encode_names<'a, I>(names: I) -> Result<Vec<u8>, CacheError>
where
    I: IntoIterator<Item = &'a str>,
{
    let records: Vec<CachedParticipant> =
        names.into_iter().map(CachedParticipant::from_name).collect();
    serde_json::to_vec(&records).map_err(CacheError::Encode)
}

/// Decode cache bytes back into the list of names, in stored order.
pub fn decode_names(bytes: &[u8]) -> Result<Vec<String>, CacheError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(CacheError::Empty);
    }
    let records: Vec<CachedParticipant> =
        serde_json::from_slice(bytes).map_err(CacheError::Decode)?;
    Ok(records.into_iter().map(|record| record.name).collect())
}
