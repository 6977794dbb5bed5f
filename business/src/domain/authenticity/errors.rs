#[derive(Debug, thiserror::Error)]
pub enum AuthenticityError {
    #[error("authenticity.unreadable_image")]
    UnreadableImage,
    #[error("authenticity.confidence_out_of_range")]
    ConfidenceOutOfRange,
}
