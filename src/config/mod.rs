//! Configuration: TOML file under the user config directory, with defaults
//! for every section.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, InvalidationConfig, LayoutConfig, NormalizeConfig, RouteConfig};
