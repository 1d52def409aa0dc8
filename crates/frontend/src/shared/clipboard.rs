//! Clipboard utilities for copying text to the system clipboard
//!
//! Thin wrapper over the Web Clipboard API (`navigator.clipboard.writeText`)
//! that reports the outcome instead of swallowing it.

use thiserror::Error;
use wasm_bindgen_futures::{spawn_local, JsFuture};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write text to the system clipboard.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::Rejected(format!("{:?}", err)))
}

/// Copy text in the background and hand the outcome to `on_done`.
///
/// # Example
/// ```rust,ignore
/// copy_to_clipboard_with_result(&address, move |res| match res {
///     Ok(()) => log::info!("copied"),
///     Err(e) => log::warn!("{e}"),
/// });
/// ```
pub fn copy_to_clipboard_with_result<F>(text: &str, on_done: F)
where
    F: FnOnce(Result<(), ClipboardError>) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        on_done(write_text(&text).await);
    });
}
