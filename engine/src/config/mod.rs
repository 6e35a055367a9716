mod settings_source;
mod settings_store;
mod validate;
mod yaml;

pub use settings_source::{FileSettingsSource, SettingsSource};
pub use settings_store::SettingsStore;
pub use validate::Validate;
pub use yaml::{from_yaml, to_yaml};
