//! Capability contracts implemented by pricing models.

pub mod pricing_model;

pub use pricing_model::PricingModel;
