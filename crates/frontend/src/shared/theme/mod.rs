//! Theme management for the dashboard.
//!
//! Light and dark themes, switched by a header toggle. The choice lives in a
//! signal for the page's lifetime and is mirrored to `data-theme` on `<body>`
//! and to the Thaw theme. Every reload starts light.

use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name used for the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn thaw_theme(&self) -> thaw::Theme {
        match self {
            Theme::Light => thaw::Theme::light(),
            Theme::Dark => thaw::Theme::dark(),
        }
    }
}

fn apply_theme_attribute(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    /// Thaw's own theme, kept in sync for `ConfigProvider`.
    pub thaw_theme: RwSignal<thaw::Theme>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: Theme) {
        log::debug!("theme -> {}", theme.as_str());
        self.theme.set(theme);
        self.thaw_theme.set(theme.thaw_theme());
        apply_theme_attribute(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides [`ThemeContext`] to children, starting from the light theme.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = Theme::default();
    apply_theme_attribute(initial);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial),
        thaw_theme: RwSignal::new(initial.thaw_theme()),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Header button switching between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let theme = ctx.theme;

    view! {
        <button
            class="top-header__icon-btn"
            title=move || match theme.get() {
                Theme::Light => "Switch to dark theme",
                Theme::Dark => "Switch to light theme",
            }
            on:click=move |_| ctx.toggle()
        >
            {move || match theme.get() {
                Theme::Light => icon("moon"),
                Theme::Dark => icon("sun"),
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_falls_back_to_light() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("forest"), Theme::Light);
    }

    #[test]
    fn test_page_starts_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::default().as_str(), "light");
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
