pub mod loader;
pub mod manifest;

pub use loader::{CatalogPlugin, GameAssets};
pub use manifest::{Catalog, CatalogFile, CATALOG_SIZE};
