pub mod footer;
pub mod left;
pub mod top_header;

use footer::Footer;
use leptos::prelude::*;
use left::sidebar::Sidebar;
use top_header::TopHeader;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// |               Footer                     |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(
    /// Truncated wallet address for the header badge
    #[prop(into)]
    wallet_label: String,
    on_wallet_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout sky-gradient">
            <TopHeader wallet_label=wallet_label on_wallet_click=on_wallet_click />

            <div class="app-body">
                <Sidebar />
                <main data-zone="center" class="app-main">
                    {children()}
                </main>
            </div>

            <Footer />
        </div>
    }
}
