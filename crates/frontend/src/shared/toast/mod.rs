//! Transient notifications ("toasts").
//!
//! [`ToastService`] is provided through context by the app root; any component
//! can `push` a toast. Toasts auto-dismiss after the configured duration and
//! can be dismissed by the user at any time.

use crate::shared::icons::icon;
use contracts::shared::config::DashboardConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    fn css_class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast",
            ToastVariant::Destructive => "toast toast--destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Ordered list of visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, title: &str, description: &str, variant: ToastVariant) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Toast {
            id,
            title: title.to_string(),
            description: description.to_string(),
            variant,
        });
        id
    }

    /// Removes the toast; returns false if it was already gone.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration_ms: config.toast_duration_ms,
        }
    }

    /// Show a toast and schedule its auto-dismiss.
    pub fn push(&self, title: &str, description: &str, variant: ToastVariant) -> Uuid {
        let mut id = Uuid::nil();
        self.queue.update(|q| id = q.push(title, description, variant));

        let queue = self.queue;
        let duration_ms = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            let _ = queue.try_update(|q| q.dismiss(id));
        });
        id
    }

    pub fn error(&self, title: &str, description: &str) -> Uuid {
        self.push(title, description, ToastVariant::Destructive)
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack in the bottom-right corner.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.variant.css_class() role="status">
                            <div class="toast__body">
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__description">{toast.description}</div>
                            </div>
                            <button
                                class="button button--icon toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut q = ToastQueue::default();
        q.push("first", "", ToastVariant::Default);
        q.push("second", "details", ToastVariant::Destructive);

        let titles: Vec<&str> = q.items().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(q.items()[1].variant, ToastVariant::Destructive);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut q = ToastQueue::default();
        let a = q.push("a", "", ToastVariant::Default);
        let b = q.push("b", "", ToastVariant::Default);

        assert!(q.dismiss(a));
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].id, b);
    }

    #[test]
    fn test_dismiss_twice_is_noop() {
        let mut q = ToastQueue::default();
        let a = q.push("a", "", ToastVariant::Default);

        assert!(q.dismiss(a));
        assert!(!q.dismiss(a));
        assert!(q.items().is_empty());
    }
}
