use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::authenticity::model::{AuthenticityLabel, AuthenticityVerdict};

pub const PLACEHOLDER_NOTICE: &str =
    "Placeholder verdict from an untrained classifier; do not rely on it.";

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum AuthenticityLabelDto {
    #[oai(rename = "authentic")]
    Authentic,
    #[oai(rename = "counterfeit")]
    Counterfeit,
}

impl From<AuthenticityLabel> for AuthenticityLabelDto {
    fn from(label: AuthenticityLabel) -> Self {
        match label {
            AuthenticityLabel::Authentic => AuthenticityLabelDto::Authentic,
            AuthenticityLabel::Counterfeit => AuthenticityLabelDto::Counterfeit,
        }
    }
}

/// Request to classify a product photo.
#[derive(Debug, Clone, Object)]
pub struct ClassifyImageRequest {
    /// Base64-encoded image data (PNG or JPEG), optionally as a data URL
    pub image_base64: String,
}

/// Authenticity verdict for a product photo.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AuthenticityVerdictResponse {
    pub label: AuthenticityLabelDto,
    /// Confidence in [0, 1]
    pub confidence: f64,
    /// False when the verdict comes from the placeholder classifier
    pub authoritative: bool,
    /// Set for non-authoritative verdicts
    #[oai(skip_serializing_if_is_none)]
    pub notice: Option<String>,
}

impl From<AuthenticityVerdict> for AuthenticityVerdictResponse {
    fn from(verdict: AuthenticityVerdict) -> Self {
        Self {
            label: verdict.label.into(),
            confidence: verdict.confidence,
            authoritative: verdict.authoritative,
            notice: (!verdict.authoritative).then(|| PLACEHOLDER_NOTICE.to_string()),
        }
    }
}
