pub mod actions;
pub mod alerts;
pub mod config;
