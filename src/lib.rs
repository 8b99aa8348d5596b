pub mod config;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod identifier;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod password;
pub mod rate_limit;
pub mod recovery;
pub mod routes;
pub mod state;
pub mod username;
