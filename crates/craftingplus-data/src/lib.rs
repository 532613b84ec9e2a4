//! Loading of recipe definition files into a host crafting registry.
//!
//! A recipe document is a map with up to three categories (`shapeless`,
//! `shaped`, `smelting`), each a list of entries naming the station that
//! crafts it. [`RecipeLoader`] validates each entry against the host's item
//! registry and registers it; [`CraftingPlus`] drives the plugin lifecycle
//! of copying bundled files into the data folder and loading them.

pub mod config;
pub mod loader;
pub mod plugin;
pub mod recipe_loader;
pub mod resources;
pub mod schema;

pub use config::{LoaderConfig, TransformMode};
pub use loader::{Format, LoadError, ValidationError};
pub use plugin::CraftingPlus;
pub use recipe_loader::{HostServices, LoadReport, RecipeLoader, SkipReason, SkippedEntry};
pub use resources::{DirectoryResources, EmbeddedResources, Resource, ResourceProvider};
