//! Car records as served by the showroom backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;

/// Backend-assigned car identifier.
///
/// The backend may use numeric or string ids. Both forms compare by their
/// textual rendering, so an id typed on the command line (`2`) matches a
/// record whose id arrived as either `2` or `"2"`. Ids read off the wire are
/// kept verbatim; the request path percent-encodes them.
#[derive(Debug, Clone)]
pub struct CarId {
    text: String,
    numeric: bool,
}

impl CarId {
    /// Parse an id typed by a user. Surrounding whitespace is dropped.
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidCarId(raw.to_string()));
        }
        let numeric = trimmed.parse::<u64>().is_ok();
        Ok(Self { text: trimmed.to_string(), numeric })
    }

    fn from_wire(text: String) -> Self {
        Self { text, numeric: false }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<u64> for CarId {
    fn from(value: u64) -> Self {
        Self { text: value.to_string(), numeric: true }
    }
}

impl FromStr for CarId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CarId::new(s)
    }
}

impl PartialEq for CarId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for CarId {}

impl std::hash::Hash for CarId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for CarId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.text.parse::<u64>() {
            Ok(number) if self.numeric => serializer.serialize_u64(number),
            _ => serializer.serialize_str(&self.text),
        }
    }
}

impl<'de> Deserialize<'de> for CarId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(number) => Ok(CarId::from(number)),
            RawId::Text(text) => Ok(CarId::from_wire(text)),
        }
    }
}

/// A catalog record. The backend owns the authoritative copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: CarId,
    pub make: String,
    pub engine: String,
    #[serde(rename = "type")]
    pub body_type: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub liked: bool,
}
