/// Logging port for use cases. Messages are plain text; callers prefix them
/// with the session id when one is known.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
