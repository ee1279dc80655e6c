/*
[INPUT]:  Public API exports for the todo-tui crate
[OUTPUT]: Module declarations for config, logging and the terminal UI
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod logging;
pub mod tui;

pub use config::TuiConfig;
pub use tui::run_tui;
