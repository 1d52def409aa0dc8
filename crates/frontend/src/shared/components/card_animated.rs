//! CardAnimated: Thaw `Card` with an appear animation.
//!
//! The keyframes live in `style/main.css` (`@keyframes card-appear`).
//! Pass increasing `delay_ms` to neighbouring cards for a stagger effect.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS class for the card.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
