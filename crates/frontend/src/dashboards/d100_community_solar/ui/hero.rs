use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn HeroBanner() -> impl IntoView {
    view! {
        <section class="hero" aria-label="Community Solar Installation">
            <div class="hero__overlay">
                <h2 class="hero__title">"Powering Communities Together"</h2>
                <p class="hero__subtitle">"Transparent, blockchain-verified solar energy sharing"</p>
                <div class="hero__actions">
                    <Button appearance=ButtonAppearance::Primary>
                        {icon("leaf")}
                        "View Impact"
                    </Button>
                    <Button appearance=ButtonAppearance::Transparent>"Learn More"</Button>
                </div>
            </div>
        </section>
    }
}
