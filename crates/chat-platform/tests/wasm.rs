//! WASM-target tests for chat-platform.
//!
//! Runs the browser-facing pieces under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use chat_core::controller::SessionController;
use chat_core::event_bus::EventBus;
use chat_core::ports::BackendPort;
use chat_platform::backend::{HttpBackend, MemoryBackend};
use chat_platform::encode::{encode_path_segment, percent_encode};
use chat_types::config::ClientConfig;
use chat_types::message::Message;
use chat_types::session::SessionId;

use std::rc::Rc;

// ─── Encoding Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn js_encoder_agrees_with_rust_encoder() {
    for sample in ["plain", "with space", "a/b?c=d&e", "naïve ☕"] {
        assert_eq!(encode_path_segment(sample), percent_encode(sample), "{}", sample);
    }
}

#[wasm_bindgen_test]
fn js_encoder_keeps_sub_delims_but_decodes_the_same() {
    let sample = "it's (fine)!";
    assert_eq!(encode_path_segment(sample), "it's%20(fine)!");
    assert_eq!(urlencoding::decode(&encode_path_segment(sample)).ok().as_deref(), Some(sample));
    assert_eq!(urlencoding::decode(&percent_encode(sample)).ok().as_deref(), Some(sample));
}

#[wasm_bindgen_test]
fn http_backend_encodes_ids() {
    let backend = HttpBackend::new(ClientConfig::default());
    assert_eq!(backend.session_url(&SessionId::from("x y")), "/session/x%20y");
    assert_eq!(backend.backend_name(), "http");
}

// ─── MemoryBackend Tests ─────────────────────────────────

#[wasm_bindgen_test]
async fn memory_backend_chat_roundtrip() {
    let backend = MemoryBackend::with_responder(|_| "fixed".to_string());
    backend.insert("s", vec![]);
    let reply = backend
        .send_chat(&chat_types::wire::ChatRequest {
            session_id: SessionId::from("s"),
            prompt: "q".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(reply.response, "fixed");
}

// ─── Controller Scenarios ────────────────────────────────

#[wasm_bindgen_test]
async fn two_sessions_initial_load() {
    let backend = Rc::new(MemoryBackend::new());
    backend.insert("s1", vec![Message::user("a"), Message::assistant("b")]);
    backend.insert("s2", vec![]);
    let controller = SessionController::new(backend, ClientConfig::default(), EventBus::new());

    controller.list_sessions().await.unwrap();

    assert_eq!(controller.sessions().len(), 2);
    assert_eq!(controller.active(), Some(SessionId::from("s1")));
    assert_eq!(
        controller.transcript(),
        vec![Message::user("a"), Message::assistant("b")]
    );
}

#[wasm_bindgen_test]
async fn delete_active_falls_back() {
    let backend = Rc::new(MemoryBackend::new());
    backend.insert("s1", vec![]);
    backend.insert("s2", vec![]);
    let controller = SessionController::new(backend, ClientConfig::default(), EventBus::new());
    controller.list_sessions().await.unwrap();

    controller.delete_session(&SessionId::from("s1")).await.unwrap();

    assert_eq!(controller.sessions(), vec![SessionId::from("s2")]);
    assert_eq!(controller.active(), Some(SessionId::from("s2")));
}
