use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use erp_events::Event;

use crate::category::CategoryId;
use crate::money::Money;
use crate::product::{Product, ProductId, ProductSnapshot};

/// Event: ProductUpdated.
///
/// Before/after values of one product mutation. `product_name` is the name the
/// product carried when the event was recorded (i.e. the new name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdatedEvent {
    pub product_id: ProductId,
    pub product_name: String,
    pub old_name: String,
    pub new_name: String,
    pub old_code: String,
    pub new_code: String,
    pub old_description: String,
    pub new_description: String,
    pub old_price: Money,
    pub new_price: Money,
    pub old_category_id: Option<CategoryId>,
    pub new_category_id: Option<CategoryId>,
    pub occurred_on: DateTime<Utc>,
}

impl ProductUpdatedEvent {
    /// Capture `before` against the product's current state.
    pub(crate) fn capture(product: &Product, before: ProductSnapshot) -> Self {
        let after = product.snapshot();
        Self {
            product_id: product.id_typed(),
            product_name: product.name().to_string(),
            old_name: before.name,
            new_name: after.name,
            old_code: before.code,
            new_code: after.code,
            old_description: before.description,
            new_description: after.description,
            old_price: before.price,
            new_price: after.price,
            old_category_id: Some(before.category_id),
            new_category_id: Some(after.category_id),
            occurred_on: Utc::now(),
        }
    }

    pub fn has_name_changed(&self) -> bool {
        self.old_name != self.new_name
    }

    pub fn has_code_changed(&self) -> bool {
        self.old_code != self.new_code
    }

    pub fn has_description_changed(&self) -> bool {
        self.old_description != self.new_description
    }

    pub fn has_price_changed(&self) -> bool {
        self.old_price != self.new_price
    }

    pub fn has_category_changed(&self) -> bool {
        self.old_category_id != self.new_category_id
    }

    pub fn has_changes(&self) -> bool {
        self.has_name_changed()
            || self.has_code_changed()
            || self.has_description_changed()
            || self.has_price_changed()
            || self.has_category_changed()
    }
}

impl Event for ProductUpdatedEvent {
    fn event_type(&self) -> &'static str {
        "catalog.product.updated"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_on
    }
}
