//! Blocking browser dialogs and page metadata.

/// `window.prompt(message, default)`. `None` when the user cancels.
pub fn prompt(message: &str, default: &str) -> Option<String> {
    match gloo_utils::window().prompt_with_message_and_default(message, default) {
        Ok(answer) => answer,
        Err(e) => {
            log::warn!("prompt() failed: {:?}", e);
            None
        }
    }
}

/// `window.alert(message)`
pub fn alert(message: &str) {
    if let Err(e) = gloo_utils::window().alert_with_message(message) {
        log::warn!("alert() failed: {:?}", e);
    }
}

/// Content of `<meta name="{name}" content="...">` in the host page.
pub fn meta_content(name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    gloo_utils::document()
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
