#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.code_empty")]
    CodeEmpty,
    #[error("product.code_not_found")]
    CodeNotFound,
    #[error("product.registry_unavailable")]
    RegistryUnavailable,
}
