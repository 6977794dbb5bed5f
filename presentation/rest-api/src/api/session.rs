use business::domain::session::model::{InputMethod, SessionContext};
use business::domain::shared::value_objects::SessionId;

/// Opens the context of one request. Callers that send a session id get it
/// echoed back so they can correlate log lines; others get a fresh one.
pub fn open_session(session_id: Option<String>, input_method: InputMethod) -> SessionContext {
    let id = session_id
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(SessionId::new)
        .unwrap_or_else(SessionId::generate);
    SessionContext::new(id, input_method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_caller_session_id() {
        let session = open_session(Some(" kiosk-7 ".to_string()), InputMethod::Manual);

        assert_eq!(session.id.as_str(), "kiosk-7");
        assert_eq!(session.input_method, InputMethod::Manual);
        assert!(session.last_decoded.is_none());
    }

    #[test]
    fn should_generate_session_id_when_missing_or_blank() {
        let first = open_session(None, InputMethod::ScanImage);
        let second = open_session(Some("  ".to_string()), InputMethod::ScanImage);

        assert!(!first.id.as_str().is_empty());
        assert!(!second.id.as_str().is_empty());
        assert_ne!(first.id, second.id);
    }
}
