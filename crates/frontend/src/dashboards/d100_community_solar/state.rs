//! Local UI state of the community solar dashboard.
//!
//! Plain structs, no signals: components wrap them in `RwSignal`s.

use crate::shared::toast::ToastVariant;
use contracts::dashboards::d100_community_solar::{MetricKind, Timeframe};

/// Which dialog is on top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveOverlay {
    None,
    Metric(MetricKind),
    Wallet,
}

/// State owned by the dashboard shell.
///
/// At most one overlay is open: opening one closes the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub timeframe: Timeframe,
    /// Timeframe toggle of the metric dialog, kept across opens.
    pub detail_timeframe: Timeframe,
    pub metric_overlay: Option<MetricKind>,
    pub wallet_open: bool,
}

impl DashboardState {
    pub fn open_metric(&mut self, kind: MetricKind) {
        self.metric_overlay = Some(kind);
        self.wallet_open = false;
    }

    pub fn open_wallet(&mut self) {
        self.wallet_open = true;
        self.metric_overlay = None;
    }

    pub fn close_overlays(&mut self) {
        self.metric_overlay = None;
        self.wallet_open = false;
    }

    pub fn select_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }

    pub fn select_detail_timeframe(&mut self, timeframe: Timeframe) {
        self.detail_timeframe = timeframe;
    }

    pub fn active_overlay(&self) -> ActiveOverlay {
        match (self.metric_overlay, self.wallet_open) {
            (Some(kind), _) => ActiveOverlay::Metric(kind),
            (None, true) => ActiveOverlay::Wallet,
            (None, false) => ActiveOverlay::None,
        }
    }
}

/// "Copied!" flag of the wallet dialog.
///
/// Every copy hands out a new ticket; the revert timer may only clear the flag
/// with the ticket of the most recent copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn mark_copied(&mut self) -> u64 {
        self.generation += 1;
        self.copied = true;
        self.generation
    }

    /// Clears the flag unless a newer copy superseded `ticket`.
    pub fn expire(&mut self, ticket: u64) {
        if ticket == self.generation {
            self.copied = false;
        }
    }

    /// Applies the outcome of a clipboard write.
    ///
    /// Only a successful write sets the flag and returns a revert ticket; a
    /// failed one leaves the flag as it was.
    pub fn on_copy_result<E>(&mut self, result: &Result<(), E>) -> Option<u64> {
        match result {
            Ok(()) => Some(self.mark_copied()),
            Err(_) => None,
        }
    }
}

/// Toast shown after a clipboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyNotice {
    pub variant: ToastVariant,
    pub title: &'static str,
    pub description: &'static str,
}

impl CopyNotice {
    pub fn for_result<E>(result: &Result<(), E>) -> Self {
        match result {
            Ok(()) => CopyNotice {
                variant: ToastVariant::Default,
                title: "Address copied!",
                description: "Wallet address has been copied to clipboard.",
            },
            Err(_) => CopyNotice {
                variant: ToastVariant::Destructive,
                title: "Failed to copy",
                description: "Could not copy address to clipboard.",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_has_no_overlay() {
        let state = DashboardState::default();
        assert_eq!(state.active_overlay(), ActiveOverlay::None);
        assert_eq!(state.timeframe, Timeframe::ThirtyDays);
    }

    #[test]
    fn test_each_metric_card_opens_its_overlay_only() {
        for kind in MetricKind::all() {
            let mut state = DashboardState::default();
            state.open_metric(kind);
            assert_eq!(state.active_overlay(), ActiveOverlay::Metric(kind));
            assert!(!state.wallet_open);
        }
    }

    #[test]
    fn test_opening_one_overlay_closes_the_other() {
        let mut state = DashboardState::default();
        state.open_wallet();
        state.open_metric(MetricKind::Revenue);
        assert!(!state.wallet_open);

        state.open_wallet();
        assert_eq!(state.metric_overlay, None);
        assert_eq!(state.active_overlay(), ActiveOverlay::Wallet);
    }

    #[test]
    fn test_close_returns_to_no_overlay() {
        let mut state = DashboardState::default();
        state.open_metric(MetricKind::Tokens);
        state.close_overlays();
        assert_eq!(state.active_overlay(), ActiveOverlay::None);

        state.open_wallet();
        state.close_overlays();
        assert_eq!(state.active_overlay(), ActiveOverlay::None);
    }

    #[test]
    fn test_detail_timeframe_survives_reopen() {
        let mut state = DashboardState::default();
        assert_eq!(state.detail_timeframe, Timeframe::ThirtyDays);

        state.open_metric(MetricKind::Energy);
        state.select_detail_timeframe(Timeframe::SevenDays);
        state.close_overlays();
        state.open_metric(MetricKind::Revenue);

        assert_eq!(state.detail_timeframe, Timeframe::SevenDays);
        assert_eq!(state.timeframe, Timeframe::ThirtyDays);
    }

    #[test]
    fn test_timeframe_touches_nothing_else() {
        let mut state = DashboardState::default();
        state.open_metric(MetricKind::Energy);
        let before = state;

        state.select_timeframe(Timeframe::OneYear);
        assert_eq!(state.timeframe, Timeframe::OneYear);
        assert_eq!(state.metric_overlay, before.metric_overlay);
        assert_eq!(state.wallet_open, before.wallet_open);
    }

    #[test]
    fn test_copy_feedback_expires() {
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.is_copied());

        let ticket = feedback.mark_copied();
        assert!(feedback.is_copied());

        feedback.expire(ticket);
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_stale_timer_does_not_clear_newer_copy() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.mark_copied();
        let second = feedback.mark_copied();

        feedback.expire(first);
        assert!(feedback.is_copied());

        feedback.expire(second);
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_failed_copy_never_shows_copied() {
        let mut feedback = CopyFeedback::default();
        let result: Result<(), &str> = Err("denied");

        assert_eq!(feedback.on_copy_result(&result), None);
        assert!(!feedback.is_copied());

        let notice = CopyNotice::for_result(&result);
        assert_eq!(notice.variant, ToastVariant::Destructive);
        assert_eq!(notice.title, "Failed to copy");
    }

    #[test]
    fn test_successful_copy_sets_flag_and_confirms() {
        let mut feedback = CopyFeedback::default();
        let result: Result<(), &str> = Ok(());

        let ticket = feedback.on_copy_result(&result);
        assert!(feedback.is_copied());

        let notice = CopyNotice::for_result(&result);
        assert_eq!(notice.variant, ToastVariant::Default);
        assert_eq!(notice.title, "Address copied!");

        feedback.expire(ticket.unwrap());
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_failed_copy_keeps_earlier_copied_flag() {
        let mut feedback = CopyFeedback::default();
        let ticket = feedback.mark_copied();

        assert_eq!(feedback.on_copy_result(&Err::<(), _>("denied")), None);
        assert!(feedback.is_copied());

        feedback.expire(ticket);
        assert!(!feedback.is_copied());
    }
}
