//! Path-segment encoding for session identifiers.
//!
//! In the browser this is JavaScript's `encodeURIComponent`. Elsewhere
//! `urlencoding` is used, which also escapes `! * ' ( )`; the server
//! decodes both forms to the same id.

/// Encode one URL path segment.
#[cfg(target_arch = "wasm32")]
pub fn encode_path_segment(segment: &str) -> String {
    js_sys::encode_uri_component(segment).into()
}

/// Encode one URL path segment.
#[cfg(not(target_arch = "wasm32"))]
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment)
}

/// RFC 3986 encoding: everything but `A-Z a-z 0-9 - _ . ~` is escaped.
pub fn percent_encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

