//! Plugin lifecycle: on enable, copy each bundled recipe file into the data
//! folder, read it back and register its recipes.
//!
//! Enabling happens once per plugin instance. There is no disable step;
//! the crafting registry owns the recipes from then on.

use craftingplus_core::crafting::CraftingRegistry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{CONFIG_FILE, LoaderConfig};
use crate::loader::{LoadError, detect_format};
use crate::recipe_loader::{HostServices, LoadReport, RecipeLoader};
use crate::resources::{ResourceProvider, save_resource};

#[derive(Debug)]
pub struct CraftingPlus {
    data_folder: PathBuf,
    config: LoaderConfig,
    enabled: bool,
}

impl CraftingPlus {
    pub fn new(data_folder: impl Into<PathBuf>, config: LoaderConfig) -> Self {
        Self {
            data_folder: data_folder.into(),
            config,
            enabled: false,
        }
    }

    /// Use the `config.toml` in `data_folder`, or the defaults if absent.
    pub fn from_data_folder(data_folder: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let data_folder = data_folder.into();
        let config = LoaderConfig::load(&data_folder.join(CONFIG_FILE))?;
        Ok(Self::new(data_folder, config))
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Register the recipes of every resource, in provider order.
    ///
    /// Marks the plugin enabled before loading, so a failed enable is not
    /// retried on top of the recipes it already registered.
    pub fn on_enable(
        &mut self,
        provider: &dyn ResourceProvider,
        services: HostServices<'_>,
        registry: &mut dyn CraftingRegistry,
    ) -> Result<LoadReport, LoadError> {
        if self.enabled {
            return Err(LoadError::AlreadyEnabled);
        }
        self.enabled = true;

        let loader = RecipeLoader::new(services).with_transform_mode(self.config.transform_mode);
        let mut report = LoadReport::default();

        for resource in provider.resources()? {
            let path = save_resource(&self.data_folder, &resource, self.config.replace_resources)?;
            let format = detect_format(&path)?;
            let document = fs::read(&path)?;

            let file_report =
                loader.load_with_format(&document, format, &resource.filename, registry)?;
            info!(
                file = %resource.filename,
                registered = file_report.registered(),
                skipped = file_report.skipped.len(),
                "loaded recipes"
            );
            report.merge(file_report);
        }

        Ok(report)
    }
}
