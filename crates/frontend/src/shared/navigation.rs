//! Outbound navigation helpers.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("popup blocked or failed to open: {0}")]
    Blocked(String),
}

/// Open `url` in a new browsing context (`target="_blank"`).
pub fn open_in_new_tab(url: &str) -> Result<(), NavigationError> {
    let window = web_sys::window().ok_or(NavigationError::NoWindow)?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(NavigationError::Blocked(url.to_string())),
        Err(err) => Err(NavigationError::Blocked(format!("{:?}", err))),
    }
}
