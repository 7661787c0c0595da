use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;

/// Environment variable that overrides the settings file location.
pub const SETTINGS_ENV: &str = "PSYCH_MASTER_SETTINGS";

const APP_DIR: &str = "com.psychmaster.app";
const FILE_NAME: &str = "settings.json";

/// String key/value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        (**self).set(key, value)
    }
}

/// Resolve the settings file: explicit path, then [`SETTINGS_ENV`], then the
/// platform config directory.
pub fn settings_path(explicit: Option<&Path>) -> Result<PathBuf, SettingsError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(SETTINGS_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
    Ok(base.join(APP_DIR).join(FILE_NAME))
}

/// The file store at a resolved path. Without one, preferences are kept in
/// memory for this process only.
pub fn open_store(path: Result<PathBuf, SettingsError>) -> Box<dyn PreferenceStore> {
    match path {
        Ok(path) => Box::new(FileStore::open(path)),
        Err(e) => {
            tracing::warn!(error = %e, "settings will not be saved this session");
            Box::new(MemoryStore::new())
        }
    }
}

/// Preferences kept as a flat JSON object in a single file.
///
/// The file is read once on open. A missing file is an empty store; an
/// unreadable or malformed one is logged and treated as empty too. Entries
/// this store does not write are kept as they are, and a key whose value is
/// not a string reads as absent. Every `set` rewrites the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: serde_json::Map<String, serde_json::Value>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings file");
                    serde_json::Map::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file yet");
                serde_json::Map::new()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read settings file");
                serde_json::Map::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), SettingsError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(&self.values)?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&tmp_path, &self.path)?;

        tracing::info!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let value = self.values.get(key)?;
        match value.as_str() {
            Some(s) => Some(s.to_string()),
            None => {
                tracing::warn!(key, %value, "ignoring non-string setting");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values
            .insert(key.to_string(), serde_json::Value::String(value.to_string()));
        self.flush()
    }
}

/// In-process store. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
