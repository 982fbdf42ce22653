//! Pricing engine - deterministic quotation of parametric items and orders.
//!
//! Pure computation: no I/O, no failures. Malformed numeric input is clamped
//! to zero so a partially filled configuration always prices to something
//! displayable; rejecting incomplete orders is the negotiation layer's job.

mod pricing_model;
mod pricing_service;

#[cfg(test)]
mod pricing_model_tests;
#[cfg(test)]
mod pricing_service_tests;

pub use pricing_model::{
    ItemColor, Material, ParametricItem, PriceMode, ProductType, Subtype,
};
pub use pricing_service::PricingService;
