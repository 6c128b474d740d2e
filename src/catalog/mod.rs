//! Catalog providers: where the engine's candidate names come from.

pub mod memory;
pub mod provider;

pub use memory::InMemCatalog;
pub use provider::CatalogProvider;
