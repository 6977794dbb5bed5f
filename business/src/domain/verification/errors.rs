#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("verification.code_empty")]
    CodeEmpty,
    #[error("verification.timeout")]
    Timeout,
    #[error("verification.network_error")]
    Network(String),
    #[error("verification.unexpected_status")]
    Status { status: u16, detail: String },
    #[error("verification.invalid_response")]
    InvalidResponse(String),
}

impl VerificationError {
    /// Raw detail reported by the transport or the remote service.
    pub fn detail(&self) -> Option<&str> {
        match self {
            VerificationError::Network(detail) | VerificationError::InvalidResponse(detail) => {
                Some(detail)
            }
            VerificationError::Status { detail, .. } => Some(detail),
            _ => None,
        }
    }
}
