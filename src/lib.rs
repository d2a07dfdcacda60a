pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod fetch;
pub mod filter;
pub mod loader;
pub mod model;
pub mod output;
