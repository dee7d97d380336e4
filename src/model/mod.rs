pub mod binding;
pub mod config;
pub mod dispatcher;
pub mod filter;
pub mod provider;
pub mod server;
pub mod store;
