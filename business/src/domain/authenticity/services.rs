use crate::domain::shared::value_objects::ImagePayload;

use super::errors::AuthenticityError;
use super::model::AuthenticityVerdict;

/// Service port for judging whether a product photo shows a genuine item.
pub trait AuthenticityOracle: Send + Sync {
    fn classify(&self, image: &ImagePayload) -> Result<AuthenticityVerdict, AuthenticityError>;
}
