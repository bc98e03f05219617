//! A structured value paired with its serialized-text twin.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A structured field whose JSON text form is authoritative for storage.
///
/// `Raw` holds text that has not been parsed (or is empty); `Decoded` holds
/// both the text and the value parsed from it. The two forms of a `Decoded`
/// are always in sync because they are only ever built together.
#[derive(Debug, Clone, PartialEq)]
pub enum Encoded<T> {
    Raw(String),
    Decoded { text: String, value: T },
}

impl<T> Default for Encoded<T> {
    fn default() -> Self {
        Encoded::Raw(String::new())
    }
}

impl<T> Encoded<T> {
    /// Wrap serialized text without parsing it.
    pub fn raw(text: impl Into<String>) -> Self {
        Encoded::Raw(text.into())
    }

    /// The serialized text form.
    pub fn text(&self) -> &str {
        match self {
            Encoded::Raw(text) | Encoded::Decoded { text, .. } => text,
        }
    }

    /// The structured form, if it has been decoded.
    pub fn value(&self) -> Option<&T> {
        match self {
            Encoded::Raw(_) => None,
            Encoded::Decoded { value, .. } => Some(value),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Encoded::Raw(text) | Encoded::Decoded { text, .. } => text,
        }
    }

    /// Drop the structured form, keeping only the text.
    pub fn to_raw(&self) -> Self {
        Encoded::Raw(self.text().to_string())
    }
}

impl<T: Serialize + DeserializeOwned> Encoded<T> {
    /// Serialize `value` and keep both forms.
    pub fn encode(value: T) -> serde_json::Result<Self> {
        let text = serde_json::to_string(&value)?;
        Ok(Encoded::Decoded { text, value })
    }

    /// Parse the text form. Empty text has nothing to parse and stays `Raw`.
    pub fn decode(self) -> serde_json::Result<Self> {
        match self {
            Encoded::Raw(text) if text.is_empty() => Ok(Encoded::Raw(text)),
            Encoded::Raw(text) => {
                let value = serde_json::from_str(&text)?;
                Ok(Encoded::Decoded { text, value })
            }
            decoded => Ok(decoded),
        }
    }
}
