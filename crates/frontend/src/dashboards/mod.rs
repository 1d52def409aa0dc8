pub mod d100_community_solar;

pub use d100_community_solar::ui::SolarDashboard;
