/// Registry errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("registry.not_found")]
    ResourceNotFound,
    #[error("registry.unreadable")]
    Unreadable(String),
    #[error("registry.parse_error")]
    ParseError(String),
    #[error("registry.duplicate_gtin")]
    DuplicateGtin {
        gtin: String,
        first: String,
        second: String,
    },
}

impl RegistryError {
    pub fn resource_not_found() -> Self {
        RegistryError::ResourceNotFound
    }
    pub fn unreadable(detail: impl Into<String>) -> Self {
        RegistryError::Unreadable(detail.into())
    }
    pub fn parse_error(detail: impl Into<String>) -> Self {
        RegistryError::ParseError(detail.into())
    }

    /// Raw detail behind the code-style message, when there is one.
    pub fn detail(&self) -> Option<String> {
        match self {
            RegistryError::ResourceNotFound => None,
            RegistryError::Unreadable(detail) | RegistryError::ParseError(detail) => {
                Some(detail.clone())
            }
            RegistryError::DuplicateGtin {
                gtin,
                first,
                second,
            } => Some(format!(
                "gtin '{}' is used by both '{}' and '{}'",
                gtin, first, second
            )),
        }
    }
}
