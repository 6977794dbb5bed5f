use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Identifies one caller session (one user interaction sequence).
/// Used to correlate log lines of the same session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a random SessionId for callers that did not supply one.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ImagePayloadError {
    #[error("image.empty")]
    Empty,
    #[error("image.invalid_base64")]
    InvalidBase64,
}

/// Encoded image bytes (PNG, JPEG, ...) as uploaded by a caller.
///
/// The payload is not decoded here; adapters that need pixels decode it
/// themselves and treat unreadable data as their own failure case.
#[derive(Clone, PartialEq)]
pub struct ImagePayload(Vec<u8>);

impl ImagePayload {
    pub fn new(bytes: Vec<u8>) -> Result<Self, ImagePayloadError> {
        if bytes.is_empty() {
            return Err(ImagePayloadError::Empty);
        }
        Ok(Self(bytes))
    }

    /// Builds a payload from base64 text, accepting an optional
    /// `data:image/<fmt>;base64,` prefix and embedded whitespace.
    pub fn from_base64(raw: &str) -> Result<Self, ImagePayloadError> {
        let clean: String = strip_data_url_prefix(raw.trim())
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if clean.is_empty() {
            return Err(ImagePayloadError::Empty);
        }

        let bytes = STANDARD
            .decode(clean.as_bytes())
            .map_err(|_| ImagePayloadError::InvalidBase64)?;

        Self::new(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First 12 hex chars of the SHA-256 of the payload, for log lines.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(&self.0);
        digest
            .iter()
            .take(6)
            .map(|b| format!("{:02x}", b))
            .collect()
    }
}

/// Drops a leading `data:image/<fmt>;base64,`. Other data URLs are left
/// untouched and then fail base64 decoding.
fn strip_data_url_prefix(raw: &str) -> &str {
    raw.strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .filter(|(media_type, _)| media_type.starts_with("image/"))
        .map_or(raw, |(_, data)| data)
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("len", &self.0.len())
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_session_id_from_str() {
        let session_id = SessionId::new("session-456");
        assert_eq!(session_id.as_str(), "session-456");
    }

    #[test]
    fn should_display_session_id() {
        let session_id = SessionId::new("test-session");
        assert_eq!(format!("{}", session_id), "test-session");
    }

    #[test]
    fn should_generate_distinct_session_ids() {
        let first = SessionId::generate();
        let second = SessionId::generate();

        assert_ne!(first, second);
        assert!(!first.as_str().is_empty());
    }

    #[test]
    fn should_convert_from_string() {
        let session_id: SessionId = "from-string".to_string().into();
        assert_eq!(session_id.as_str(), "from-string");
    }

    #[test]
    fn should_decode_plain_base64_payload() {
        let payload = ImagePayload::from_base64("aGVsbG8=").unwrap();
        assert_eq!(payload.as_bytes(), b"hello");
    }

    #[test]
    fn should_strip_data_url_prefix_and_whitespace() {
        let payload = ImagePayload::from_base64("data:image/png;base64,aGVs\n bG8=").unwrap();
        assert_eq!(payload.as_bytes(), b"hello");
    }

    #[test]
    fn should_strip_prefix_for_any_image_media_type() {
        for raw in [
            "data:image/jpeg;base64,aGVsbG8=",
            "data:image/svg+xml;base64,aGVsbG8=",
            "data:image/png;base64,aGVsbG8=",
        ] {
            assert_eq!(ImagePayload::from_base64(raw).unwrap().as_bytes(), b"hello");
        }
    }

    #[test]
    fn should_reject_data_url_of_non_image_media_type() {
        assert_eq!(
            ImagePayload::from_base64("data:text/plain;base64,aGVsbG8=").unwrap_err(),
            ImagePayloadError::InvalidBase64
        );
    }

    #[test]
    fn should_reject_data_url_prefix_without_content() {
        assert_eq!(
            ImagePayload::from_base64("data:image/png;base64,").unwrap_err(),
            ImagePayloadError::Empty
        );
    }

    #[test]
    fn should_reject_empty_payload() {
        assert_eq!(
            ImagePayload::from_base64("   ").unwrap_err(),
            ImagePayloadError::Empty
        );
        assert_eq!(
            ImagePayload::new(Vec::new()).unwrap_err(),
            ImagePayloadError::Empty
        );
    }

    #[test]
    fn should_reject_invalid_base64() {
        assert_eq!(
            ImagePayload::from_base64("not base64 at all!!").unwrap_err(),
            ImagePayloadError::InvalidBase64
        );
    }

    #[test]
    fn should_produce_stable_short_fingerprint() {
        let payload = ImagePayload::new(b"hello".to_vec()).unwrap();
        // sha256("hello") = 2cf24dba5fb0a30e...
        assert_eq!(payload.fingerprint(), "2cf24dba5fb0");
    }
}
