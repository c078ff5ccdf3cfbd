pub mod api;
pub mod auction;
pub mod auth;
pub mod bidding;
pub mod cli;
pub mod config;
pub mod scheduler;
pub mod session;
pub mod stats;
pub mod views;
