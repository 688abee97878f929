mod conversion;
pub use conversion::*;

pub use media_providers::{MediaId, ProviderTrack};

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use uuid::Uuid;

// FileId
#[derive(Eq, PartialEq, Clone, Hash, Debug, Serialize, Deserialize)]
pub struct FileId(pub(crate) String);

impl FileId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Deref for FileId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for FileId {
    fn from(value: String) -> Self {
        FileId(value)
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
