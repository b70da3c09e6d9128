pub mod clipboard;
pub mod config;
pub mod loader;
pub mod logging;
pub mod quotes;
pub mod share;
pub mod shutdown;
pub mod ui;
