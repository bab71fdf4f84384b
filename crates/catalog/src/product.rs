use serde::{Deserialize, Serialize};

use erp_core::{AggregateRoot, DomainResult, Entity, ensure_not_blank, impl_entity_eq};
use erp_events::PendingEvents;

use crate::category::{Category, CategoryId};
use crate::dynamic_field::{DynamicField, DynamicFieldSet};
use crate::event::ProductUpdatedEvent;
use crate::money::Money;

erp_core::typed_id! {
    /// Product identifier.
    pub struct ProductId;
}

/// The product's view of its category: identifier plus the name it had when
/// assigned. The name is not kept in sync with later renames; calling
/// [`Product::change_category`] with the current category refreshes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: String,
}

impl From<&Category> for CategoryRef {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id_typed(),
            name: category.name().to_string(),
        }
    }
}

/// Product-level fields captured around a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSnapshot {
    pub name: String,
    pub code: String,
    pub description: String,
    pub price: Money,
    pub category_id: CategoryId,
}

/// Aggregate root: Product.
///
/// `update_details` and `change_category` append a [`ProductUpdatedEvent`];
/// nothing inside the aggregate ever removes one. The caller drains the queue
/// with [`Product::clear_domain_events`] (or [`Product::take_domain_events`])
/// after forwarding the events.
#[derive(Debug, Clone)]
pub struct Product {
    id: ProductId,
    name: String,
    code: String,
    sku: String,
    description: String,
    price: Money,
    is_active: bool,
    category: CategoryRef,
    dynamic_fields: DynamicFieldSet,
    pending_events: PendingEvents<ProductUpdatedEvent>,
}

impl Product {
    pub fn new(
        name: &str,
        code: &str,
        description: &str,
        price: Money,
        sku: &str,
        category: &Category,
    ) -> DomainResult<Self> {
        Self::with_id(ProductId::new(), name, code, description, price, sku, category)
    }

    /// Build with a known identifier (rehydration).
    pub fn with_id(
        id: ProductId,
        name: &str,
        code: &str,
        description: &str,
        price: Money,
        sku: &str,
        category: &Category,
    ) -> DomainResult<Self> {
        ensure_not_blank(name, "product name")?;
        ensure_not_blank(code, "product code")?;
        ensure_not_blank(sku, "SKU")?;

        Ok(Self {
            id,
            name: name.to_string(),
            code: code.to_string(),
            sku: sku.to_string(),
            description: description.to_string(),
            price,
            is_active: true,
            category: CategoryRef::from(category),
            dynamic_fields: DynamicFieldSet::new(),
            pending_events: PendingEvents::new(),
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn category(&self) -> &CategoryRef {
        &self.category
    }

    /// Always mirrors `category().id`.
    pub fn category_id(&self) -> CategoryId {
        self.category.id
    }

    pub fn dynamic_fields(&self) -> &DynamicFieldSet {
        &self.dynamic_fields
    }

    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            name: self.name.clone(),
            code: self.code.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            category_id: self.category.id,
        }
    }

    pub fn update_details(
        &mut self,
        name: &str,
        code: &str,
        description: &str,
        price: Money,
    ) -> DomainResult<()> {
        ensure_not_blank(name, "product name")?;
        ensure_not_blank(code, "product code")?;

        let before = self.snapshot();
        self.name = name.to_string();
        self.code = code.to_string();
        self.description = description.to_string();
        self.price = price;

        self.record_update(before);
        Ok(())
    }

    pub fn change_category(&mut self, new_category: &Category) {
        let before = self.snapshot();
        self.category = CategoryRef::from(new_category);

        self.record_update(before);
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn add_dynamic_field(&mut self, field: DynamicField) -> DomainResult<()> {
        self.dynamic_fields.add(field)
    }

    pub fn update_dynamic_field(&mut self, key: &str, value: Option<&str>) -> DomainResult<()> {
        self.dynamic_fields.update(key, value)
    }

    pub fn remove_dynamic_field(&mut self, key: &str) -> DomainResult<()> {
        self.dynamic_fields.remove(key).map(|_| ())
    }

    pub fn get_dynamic_field(&self, key: &str) -> Option<&DynamicField> {
        self.dynamic_fields.get(key)
    }

    pub fn pending_events(&self) -> &[ProductUpdatedEvent] {
        self.pending_events.as_slice()
    }

    pub fn clear_domain_events(&mut self) {
        self.take_domain_events();
    }

    /// Drain pending events, handing them to the caller.
    pub fn take_domain_events(&mut self) -> Vec<ProductUpdatedEvent> {
        tracing::debug!(
            product_id = %self.id,
            drained = self.pending_events.len(),
            "product events drained"
        );
        self.pending_events.take()
    }

    fn record_update(&mut self, before: ProductSnapshot) {
        let event = ProductUpdatedEvent::capture(self, before);
        tracing::debug!(
            product_id = %self.id,
            name_changed = event.has_name_changed(),
            price_changed = event.has_price_changed(),
            category_changed = event.has_category_changed(),
            "product update recorded"
        );
        self.pending_events.record(event);
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Product {
    type Event = ProductUpdatedEvent;

    fn pending_events(&self) -> &[Self::Event] {
        Product::pending_events(self)
    }

    fn clear_domain_events(&mut self) {
        Product::clear_domain_events(self)
    }
}

impl_entity_eq!(Product);
