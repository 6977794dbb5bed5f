use super::errors::AuthenticityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticityLabel {
    Authentic,
    Counterfeit,
}

impl std::fmt::Display for AuthenticityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthenticityLabel::Authentic => write!(f, "authentic"),
            AuthenticityLabel::Counterfeit => write!(f, "counterfeit"),
        }
    }
}

/// Outcome of classifying a product photo.
///
/// `authoritative` is false when the verdict comes from a placeholder
/// classifier; consumers must label such verdicts accordingly.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticityVerdict {
    pub label: AuthenticityLabel,
    pub confidence: f64,
    pub authoritative: bool,
}

impl AuthenticityVerdict {
    pub fn new(
        label: AuthenticityLabel,
        confidence: f64,
        authoritative: bool,
    ) -> Result<Self, AuthenticityError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(AuthenticityError::ConfidenceOutOfRange);
        }
        Ok(Self {
            label,
            confidence,
            authoritative,
        })
    }
}
