pub mod card_animated;
pub mod progress_bar;
pub mod section_header;
pub mod stat_card;
pub mod timeframe_selector;
