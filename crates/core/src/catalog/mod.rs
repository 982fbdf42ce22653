//! Accessory catalog - static reference data consumed by the pricing engine.

mod catalog_model;
mod catalog_service;
mod catalog_traits;

pub use catalog_model::Accessory;
pub use catalog_service::StaticAccessoryCatalog;
pub use catalog_traits::AccessoryCatalogTrait;
