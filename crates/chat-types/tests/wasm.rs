//! WASM-target tests for chat-types.
//!
//! Runs the wire-format checks under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use chat_types::message::*;
use chat_types::session::*;
use chat_types::wire::*;
use chat_types::event::*;
use chat_types::config::*;
use chat_types::error::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn transcript_parses_backend_shape() {
    let json = r#"[{"role":"user","content":"q"},{"role":"assistant","content":"a"}]"#;
    let messages: Vec<Message> = serde_json::from_str(json).unwrap();
    assert_eq!(messages, vec![Message::user("q"), Message::assistant("a")]);
}

#[wasm_bindgen_test]
fn unknown_role_survives() {
    let msg: Message = serde_json::from_str(r#"{"role":"tool","content":"x"}"#).unwrap();
    assert_eq!(msg.role, Role::Other("tool".to_string()));
}

// ─── SessionId Tests ─────────────────────────────────────

#[wasm_bindgen_test]
fn generated_ids_use_prefix_and_differ() {
    // chrono's wasmbind clock and uuid's js RNG must both work in the browser
    let a = SessionId::generate("session-");
    let b = SessionId::generate("session-");
    assert!(a.as_str().starts_with("session-"));
    assert_ne!(a, b);
}

// ─── Wire Tests ──────────────────────────────────────────

#[wasm_bindgen_test]
fn rename_response_variants() {
    let ok: RenameResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
    assert!(ok.is_success());
    let bad: RenameResponse = serde_json::from_str(r#"{"error":"Missing old_id or new_id"}"#).unwrap();
    assert!(!bad.is_success());
    assert_eq!(bad.error_text(), "Missing old_id or new_id");
}

#[wasm_bindgen_test]
fn new_session_body() {
    let body = NewSessionRequest {
        session_id: SessionId::from("session-1"),
    };
    assert_eq!(
        serde_json::to_string(&body).unwrap(),
        r#"{"session_id":"session-1"}"#
    );
}

// ─── Event Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn controller_event_serializes() {
    let event = ControllerEvent::RenameRejected {
        message: "Rename failed: name taken".to_string(),
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("RenameRejected"));
    assert!(json.contains("name taken"));
}

// ─── Config / Error Tests ────────────────────────────────

#[wasm_bindgen_test]
fn config_endpoint() {
    let config = ClientConfig::default();
    assert_eq!(config.endpoint("/rename-session"), "/rename-session");
}

#[wasm_bindgen_test]
fn rename_error_display() {
    let err = ChatError::RenameRejected("name taken".to_string());
    assert_eq!(err.to_string(), "Rename failed: name taken");
}
