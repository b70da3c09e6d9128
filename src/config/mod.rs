mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{default_source_url, Config, SourceConfig, ThemeConfig};
