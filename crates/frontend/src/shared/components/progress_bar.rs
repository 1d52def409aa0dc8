use leptos::prelude::*;

/// Horizontal progress bar, `value` in percent (clamped to 0..=100).
#[component]
pub fn ProgressBar(value: u8) -> impl IntoView {
    let width = format!("width: {}%;", value.min(100));

    view! {
        <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=value.min(100).to_string()>
            <div class="progress__fill" style=width></div>
        </div>
    }
}
