use crate::dashboards::d100_community_solar::state::{CopyFeedback, CopyNotice};
use crate::shared::clipboard::copy_to_clipboard_with_result;
use crate::shared::icons::icon;
use crate::shared::modal_frame::{ModalFrame, ModalHeader};
use crate::shared::navigation::open_in_new_tab;
use crate::shared::toast::use_toasts;
use contracts::dashboards::d100_community_solar::sample::wallet_info;
use contracts::shared::config::DashboardConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, ButtonSize};
use wasm_bindgen_futures::spawn_local;

/// Connected wallet details with copy and explorer actions.
#[component]
pub fn WalletDialog(on_close: Callback<()>) -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let toasts = use_toasts();
    let wallet = wallet_info();
    let feedback = RwSignal::new(CopyFeedback::default());

    let address = StoredValue::new(wallet.address.clone());
    let explorer_url = config.explorer_url(&wallet.address);
    let copy_feedback_ms = config.copy_feedback_ms;

    let copy_address = move |_: ev::MouseEvent| {
        copy_to_clipboard_with_result(&address.get_value(), move |result| {
            match &result {
                Ok(()) => log::info!("wallet address copied"),
                Err(err) => log::warn!("copy failed: {}", err),
            }

            let notice = CopyNotice::for_result(&result);
            toasts.push(notice.title, notice.description, notice.variant);

            // None when the write failed or the dialog is already gone.
            let ticket = feedback.try_update(|f| f.on_copy_result(&result)).flatten();
            if let Some(ticket) = ticket {
                // Not cancelled on close; try_update is a no-op once the dialog is gone.
                spawn_local(async move {
                    TimeoutFuture::new(copy_feedback_ms).await;
                    let _ = feedback.try_update(|f| f.expire(ticket));
                });
            }
        });
    };

    let open_explorer = move |_: ev::MouseEvent| {
        log::info!("opening explorer: {}", explorer_url);
        if let Err(err) = open_in_new_tab(&explorer_url) {
            log::error!("{}", err);
            toasts.error("Could not open explorer", &err.to_string());
        }
    };

    let copied = move || feedback.with(|f| f.is_copied());

    view! {
        <ModalFrame on_close=on_close modal_class="modal--narrow">
            <ModalHeader title="Wallet Details" icon_name="wallet" on_close=on_close />
            <div class="modal-body wallet-dialog">
                <div class="glass-card wallet-dialog__address">
                    <div class="wallet-dialog__row">
                        <span class="wallet-dialog__label">"Address"</span>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                            <span class="badge-content">
                                {icon("check-circle")}
                                "Connected"
                            </span>
                        </Badge>
                    </div>
                    <div class="wallet-dialog__value mono">{wallet.address}</div>
                    <div class="wallet-dialog__actions">
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Secondary
                            on_click=copy_address
                        >
                            {move || if copied() { icon("check-circle") } else { icon("copy") }}
                            {move || if copied() { "Copied!" } else { "Copy" }}
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Secondary
                            on_click=open_explorer
                        >
                            {icon("external-link")}
                            "Explorer"
                        </Button>
                    </div>
                </div>

                <div class="wallet-dialog__balances">
                    <div class="glass-card">
                        <div class="wallet-dialog__label">"AVAX Balance"</div>
                        <div class="wallet-dialog__amount">{wallet.balance}</div>
                    </div>
                    <div class="glass-card">
                        <div class="wallet-dialog__label">"SOLAR Tokens"</div>
                        <div class="wallet-dialog__amount">{wallet.tokens}</div>
                    </div>
                </div>

                <div class="wallet-dialog__footer">
                    <Button appearance=ButtonAppearance::Primary>
                        "View Transaction History"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Close"
                    </Button>
                </div>
            </div>
        </ModalFrame>
    }
}
