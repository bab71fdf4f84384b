//! Catalog domain module.
//!
//! This crate contains business rules for products, categories and their
//! dynamic fields, implemented purely as deterministic domain logic (no IO,
//! no HTTP, no storage).

pub mod category;
pub mod dynamic_field;
pub mod event;
pub mod money;
pub mod product;
pub mod template;
pub mod tree;

pub use category::{Category, CategoryId};
pub use dynamic_field::{DynamicField, DynamicFieldSet};
pub use event::ProductUpdatedEvent;
pub use money::Money;
pub use product::{CategoryRef, Product, ProductId, ProductSnapshot};
pub use template::{DynamicFieldTemplate, DynamicFieldTemplateId, TemplateDetails, TemplateTarget};
pub use tree::CategoryTree;
