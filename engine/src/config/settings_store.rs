use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use super::{FileSettingsSource, SettingsSource, Validate, from_yaml, to_yaml};

/// YAML settings behind a [`SettingsSource`], validated on the way in and on
/// the way out. A missing source yields `TSettings::default()` without caching
/// it, so a later `save` or an external write is still picked up.
pub struct SettingsStore<TSource, TSettings>
where
    TSource: SettingsSource,
    TSettings: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    source: TSource,
    cached: Mutex<Option<TSettings>>,
}

impl<TSettings> SettingsStore<FileSettingsSource, TSettings>
where
    TSettings: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileSettingsSource::new(path))
    }
}

impl<TSource, TSettings> SettingsStore<TSource, TSettings>
where
    TSource: SettingsSource,
    TSettings: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(source: TSource) -> Self {
        Self {
            source,
            cached: Mutex::new(None),
        }
    }

    pub fn load(&self) -> Result<TSettings, String> {
        let mut cached = self.lock_cache()?;
        if let Some(settings) = cached.as_ref() {
            return Ok(settings.clone());
        }

        match self.source.read()? {
            Some(content) => {
                let settings: TSettings = from_yaml(&content)?;
                check(&settings)?;
                *cached = Some(settings.clone());
                Ok(settings)
            }
            None => Ok(TSettings::default()),
        }
    }

    pub fn save(&self, settings: &TSettings) -> Result<(), String> {
        check(settings)?;
        self.source.write(&to_yaml(settings)?)?;

        *self.lock_cache()? = Some(settings.clone());
        Ok(())
    }

    fn lock_cache(&self) -> Result<MutexGuard<'_, Option<TSettings>>, String> {
        self.cached
            .lock()
            .map_err(|_| "Settings cache lock poisoned".to_string())
    }
}

fn check<TSettings: Validate>(settings: &TSettings) -> Result<(), String> {
    settings
        .validate()
        .map_err(|e| format!("Settings validation error: {}", e))
}
