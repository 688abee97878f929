mod media_id;
mod rapidapi;
mod youtube;

use serde::{Deserialize, Serialize};
use std::ops::Deref;

pub use media_id::*;
pub use rapidapi::*;
pub use youtube::*;

/// Provider-specific key of a single video, e.g. `dQw4w9WgXcQ`.
#[derive(Eq, PartialEq, Clone, Hash, Debug, Serialize, Deserialize)]
pub struct MediaId(pub(crate) String);

impl MediaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Deref for MediaId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Audio track as reported by the conversion provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderTrack {
    pub title: String,
    pub link: String,
    pub duration: Option<String>,
    pub filesize: Option<u64>,
}
