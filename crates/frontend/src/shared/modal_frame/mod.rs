use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal frame container (overlay + positioned surface).
///
/// Closes on Escape and on a click that both starts and ends on the overlay.
/// Content renders its own header, usually via [`ModalHeader`].
#[component]
pub fn ModalFrame(
    /// Called when the modal should close.
    on_close: Callback<()>,
    /// Extra class for the modal surface (`div.modal`), e.g. a width modifier.
    #[prop(optional, into)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let escape_listener = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Text selection that ends outside the surface must not close the modal.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Next tick: the overlay is removed during its own click dispatch otherwise.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            role="presentation"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}

/// Dialog title row with an icon and a close button.
#[component]
pub fn ModalHeader(
    #[prop(into)] title: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-header">
            <h2 class="modal-title">
                <span class="modal-title__icon">{icon(&icon_name)}</span>
                {title}
            </h2>
            <button
                class="button button--icon modal__close"
                title="Close"
                on:click=move |_| on_close.run(())
            >
                {icon("x")}
            </button>
        </div>
    }
}
