//! Session orchestration and configuration

pub mod config;
pub mod session;

pub use config::ManagerConfig;
pub use session::Session;
