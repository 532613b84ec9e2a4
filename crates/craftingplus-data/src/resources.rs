//! Recipe files shipped with the plugin, and copying them into the data
//! folder where server owners can edit them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::loader::LoadError;

/// A bundled file: its name and verbatim content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Supplies the bundled recipe files, read once at startup.
pub trait ResourceProvider {
    fn resources(&self) -> Result<Vec<Resource>, LoadError>;
}

/// Every regular file in a directory, sorted by name.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    dir: PathBuf,
}

impl DirectoryResources {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ResourceProvider for DirectoryResources {
    fn resources(&self) -> Result<Vec<Resource>, LoadError> {
        let mut resources = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let filename = entry.file_name().to_string_lossy().into_owned();
            resources.push(Resource {
                filename,
                bytes: fs::read(entry.path())?,
            });
        }
        resources.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(resources)
    }
}

/// Resources compiled into the binary, in the order given.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    entries: Vec<(&'static str, &'static [u8])>,
}

impl EmbeddedResources {
    pub fn new(entries: Vec<(&'static str, &'static [u8])>) -> Self {
        Self { entries }
    }

    /// The default recipe set shipped with the plugin.
    pub fn bundled() -> Self {
        let recipes: &'static [u8] = include_bytes!("../resources/recipes.json");
        Self::new(vec![("recipes.json", recipes)])
    }
}

impl ResourceProvider for EmbeddedResources {
    fn resources(&self) -> Result<Vec<Resource>, LoadError> {
        Ok(self
            .entries
            .iter()
            .map(|(name, bytes)| Resource {
                filename: name.to_string(),
                bytes: bytes.to_vec(),
            })
            .collect())
    }
}

/// Copy a resource verbatim into `data_folder`. An existing file is kept
/// unless `replace` is set. Returns the path of the file in the data folder.
pub fn save_resource(
    data_folder: &Path,
    resource: &Resource,
    replace: bool,
) -> Result<PathBuf, LoadError> {
    let name = Path::new(&resource.filename);
    if name.file_name() != Some(name.as_os_str()) {
        return Err(LoadError::InvalidResource {
            name: resource.filename.clone(),
        });
    }

    fs::create_dir_all(data_folder)?;
    let path = data_folder.join(name);
    if replace || !path.exists() {
        fs::write(&path, &resource.bytes)?;
    }
    Ok(path)
}
