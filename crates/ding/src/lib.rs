pub mod commands;
pub mod error;
pub mod handlers;
pub mod notify;
pub mod paths;
pub mod spawner;
pub mod telemetry;
