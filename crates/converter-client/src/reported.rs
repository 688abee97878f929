use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Metadata the backend may or may not know. Absent and `null` values both
/// become [`Reported::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reported<T> {
    Value(T),
    Unknown,
}

impl<T> Default for Reported<T> {
    fn default() -> Self {
        Reported::Unknown
    }
}

impl<T> Reported<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Reported::Value(value) => Some(value),
            Reported::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Reported::Value(_))
    }
}

impl<T> From<Option<T>> for Reported<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Reported::Value(value),
            None => Reported::Unknown,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Reported<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Reported::from)
    }
}

impl<T: Serialize> Serialize for Reported<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}
