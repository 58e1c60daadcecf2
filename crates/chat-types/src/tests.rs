#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::session::*;
    use crate::wire::*;
    use crate::config::*;
    use crate::error::*;
    use uuid::Uuid;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_constructors() {
        assert_eq!(Message::user("hi").role, Role::User);
        assert_eq!(Message::assistant("hello").role, Role::Assistant);
        assert_eq!(Message::system("").role, Role::System);
        assert_eq!(Message::user("hi").content, "hi");
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), r#""assistant""#);
        let role: Role = serde_json::from_str(r#""system""#).unwrap();
        assert_eq!(role, Role::System);
    }

    #[test]
    fn test_role_unknown_is_preserved() {
        let role: Role = serde_json::from_str(r#""tool""#).unwrap();
        assert_eq!(role, Role::Other("tool".to_string()));
        assert_eq!(role.to_string(), "tool");
        assert_eq!(serde_json::to_string(&role).unwrap(), r#""tool""#);
    }

    #[test]
    fn test_transcript_ignores_extra_fields() {
        let json = r#"[
            {"role": "system", "content": ""},
            {"role": "user", "content": "hello", "timestamp": "2025-01-01T00:00:00"},
            {"role": "assistant", "content": "hi there"}
        ]"#;
        let messages: Vec<Message> = serde_json::from_str(json).unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1], Message::user("hello"));
        assert_eq!(messages[2], Message::assistant("hi there"));
    }

    #[test]
    fn test_message_visibility() {
        assert!(!Message::system("").is_visible());
        assert!(!Message::system("  ").is_visible());
        assert!(Message::system("be nice").is_visible());
        assert!(Message::user("").is_visible());
    }

    // ─── SessionId Tests ─────────────────────────────────────

    #[test]
    fn test_session_id_is_transparent() {
        let id = SessionId::new("s1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""s1""#);
        let ids: Vec<SessionId> = serde_json::from_str(r#"["s1","s2"]"#).unwrap();
        assert_eq!(ids, vec![SessionId::from("s1"), SessionId::from("s2")]);
    }

    #[test]
    fn test_session_id_from_parts() {
        let nonce = Uuid::parse_str("0123abcd-0000-4000-8000-000000000000").unwrap();
        let id = SessionId::from_parts("session-", 1700000000000, nonce);
        assert_eq!(id.as_str(), "session-1700000000000-0123abcd");
    }

    #[test]
    fn test_session_id_generate_is_unique() {
        let a = SessionId::generate("session-");
        let b = SessionId::generate("session-");
        assert!(a.as_str().starts_with("session-"));
        assert_ne!(a, b);
    }

    // ─── Wire Tests ──────────────────────────────────────────

    #[test]
    fn test_chat_request_body() {
        let req = ChatRequest {
            session_id: SessionId::from("s1"),
            prompt: "hello".to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, serde_json::json!({"session_id": "s1", "prompt": "hello"}));
    }

    #[test]
    fn test_rename_request_body() {
        let req = RenameRequest {
            old_id: SessionId::from("a"),
            new_id: SessionId::from("b"),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, serde_json::json!({"old_id": "a", "new_id": "b"}));
    }

    #[test]
    fn test_rename_response_success() {
        let resp: RenameResponse = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(resp.is_success());
    }

    #[test]
    fn test_rename_response_error_without_status() {
        let resp: RenameResponse =
            serde_json::from_str(r#"{"error": "Old session not found"}"#).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.error_text(), "Old session not found");
    }

    #[test]
    fn test_rename_response_error_with_status() {
        let resp: RenameResponse =
            serde_json::from_str(r#"{"status": "error", "error": "name taken"}"#).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.error_text(), "name taken");
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "API request failed", "details": "quota"}"#).unwrap();
        assert_eq!(body.message(), "API request failed: quota");

        let body: ErrorBody = serde_json::from_str(r#"{"error": "Session not found"}"#).unwrap();
        assert_eq!(body.message(), "Session not found");
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.api_base.is_empty());
        assert_eq!(config.session_prefix, "session-");
        assert_eq!(config.endpoint("/sessions"), "/sessions");
    }

    #[test]
    fn test_config_endpoint_join() {
        let config = ClientConfig::with_api_base("http://127.0.0.1:8080/").unwrap();
        assert_eq!(config.api_base, "http://127.0.0.1:8080");
        assert_eq!(config.endpoint("/chat"), "http://127.0.0.1:8080/chat");
        assert_eq!(config.endpoint("sessions"), "http://127.0.0.1:8080/sessions");
    }

    #[test]
    fn test_config_rejects_bad_base() {
        let err = ClientConfig::with_api_base("ftp://nope").unwrap_err();
        assert!(matches!(err, ChatError::Config(_)));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = ChatError::RenameRejected("name taken".to_string());
        assert_eq!(err.to_string(), "Rename failed: name taken");

        let err = ChatError::Http {
            status: 404,
            message: "Session not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Session not found");

        let err = ChatError::Network("offline".to_string());
        assert_eq!(err.to_string(), "Network error: offline");

        let err = ChatError::JsInterop("no element with id 'chat_canvas'".to_string());
        assert_eq!(err.to_string(), "JS interop error: no element with id 'chat_canvas'");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: ChatError = serde_err.into();
        assert!(matches!(err, ChatError::Serialization(_)));
    }
}
