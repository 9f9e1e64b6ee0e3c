pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod response;
pub mod router;
pub mod state;
