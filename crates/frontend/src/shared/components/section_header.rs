use leptos::prelude::*;

/// Title block of a dashboard section, with optional actions on the right.
#[component]
pub fn SectionHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action controls (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <div class="section-header__text">
                <h3 class="section-header__title">{title}</h3>
                {move || subtitle.get().map(|s| view! {
                    <p class="section-header__subtitle">{s}</p>
                })}
            </div>
            <div class="section-header__actions">
                {children()}
            </div>
        </div>
    }
}
