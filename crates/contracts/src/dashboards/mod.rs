pub mod d100_analytics;
