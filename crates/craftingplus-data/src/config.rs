//! Loader configuration, read from `config.toml` in the plugin data folder.

use serde::Deserialize;
use std::path::Path;

use crate::loader::LoadError;

/// File name of the configuration inside the data folder.
pub const CONFIG_FILE: &str = "config.toml";

/// How the `name` and `enchantments` modifiers of a shaped output combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    /// Each modifier starts again from the unmodified outputs, so only the
    /// last one applied is visible: a rename is dropped as soon as any
    /// enchantment pair is present, and of several enchantments only the
    /// last survives.
    #[default]
    LastWins,
    /// Modifiers accumulate: renamed and carrying every resolved enchantment.
    Compound,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    pub transform_mode: TransformMode,
    /// Overwrite recipe files already present in the data folder with the
    /// bundled copies.
    pub replace_resources: bool,
}

impl LoaderConfig {
    pub fn from_toml_str(content: &str, file: &Path) -> Result<Self, LoadError> {
        toml::from_str(content).map_err(|e| LoadError::Config {
            file: file.to_path_buf(),
            detail: e.to_string(),
        })
    }

    /// Read the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}
