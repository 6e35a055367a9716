use serde::{Deserialize, Serialize};

pub fn to_yaml<T: Serialize>(settings: &T) -> Result<String, String> {
    serde_yaml_ng::to_string(settings).map_err(|e| format!("Failed to serialize settings: {}", e))
}

pub fn from_yaml<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T, String> {
    serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to parse settings: {}", e))
}
