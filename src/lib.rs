pub mod analytics;
pub mod app;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod extract;
pub mod seed;
pub mod state;
pub mod store;
pub mod transactions;
pub mod validation;

#[cfg(test)]
mod fixtures;
