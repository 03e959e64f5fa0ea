pub mod config;
pub mod loader;
pub mod validate;

pub use config::{Config, CoreConfig, FilesConfig, WordsConfig};
pub use loader::{load_config, save_config};
pub use validate::validate_config;
