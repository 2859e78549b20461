//! Host side of the dashboard: CLI, configuration, effect execution and the
//! terminal surface the controller renders into.
mod app;
mod cli;
mod config;
mod effects;
mod ui;

pub use app::run_app;
