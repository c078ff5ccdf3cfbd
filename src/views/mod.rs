pub mod chart;
pub mod detail;
pub mod listing;
pub mod wallet;
