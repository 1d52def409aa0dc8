pub mod dashboard;
pub mod energy_card;
pub mod hero;
pub mod members_table;
pub mod metric_cards;
pub mod metric_detail;
pub mod wallet_dialog;

pub use dashboard::SolarDashboard;
