pub mod d100_community_solar;
