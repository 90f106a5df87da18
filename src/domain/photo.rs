use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PhotoError {
    #[error("Photo file is empty")]
    Empty,
    #[error("Unrecognised photo format")]
    UnknownFormat,
    #[error("Only image files are allowed, got {0}")]
    NotAnImage(String),
    #[error("Photo is not a base64 data URI")]
    Malformed,
}

/// An employee photo as a `data:<mime>;base64,<payload>` string.
///
/// The payload is produced once from the uploaded bytes and from then on is
/// carried as text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDataUri(String);

impl PhotoDataUri {
    /// Encodes an uploaded image. The mime type is sniffed from the content,
    /// never taken from a file name.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PhotoError> {
        if bytes.is_empty() {
            return Err(PhotoError::Empty);
        }
        let kind = infer::get(bytes).ok_or(PhotoError::UnknownFormat)?;
        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(PhotoError::NotAnImage(kind.mime_type().to_string()));
        }
        Ok(Self(format!(
            "data:{};base64,{}",
            kind.mime_type(),
            STANDARD.encode(bytes)
        )))
    }

    /// Accepts an existing data URI, checking only its shape.
    pub fn parse(raw: &str) -> Result<Self, PhotoError> {
        let rest = raw.strip_prefix("data:").ok_or(PhotoError::Malformed)?;
        let (mime, payload) = rest.split_once(";base64,").ok_or(PhotoError::Malformed)?;
        if !mime.starts_with("image/") {
            return Err(PhotoError::NotAnImage(mime.to_string()));
        }
        if payload.is_empty() {
            return Err(PhotoError::Malformed);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn mime_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(';'))
            .map(|(mime, _)| mime)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoDataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serde adapter for `Option<PhotoDataUri>` as it travels on the wire: a data
/// URI, or an empty string when there is no photo.
pub mod wire {
    use super::*;

    pub fn serialize<S: Serializer>(
        photo: &Option<PhotoDataUri>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        photo
            .as_ref()
            .map(PhotoDataUri::as_str)
            .unwrap_or_default()
            .serialize(serializer)
    }

    /// Empty, null and malformed values all read as "no photo".
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<PhotoDataUri>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .filter(|s| !s.is_empty())
            .and_then(|s| PhotoDataUri::parse(&s).ok()))
    }
}
