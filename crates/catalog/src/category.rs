use core::convert::Infallible;

use erp_core::{AggregateRoot, DomainError, DomainResult, Entity, ensure_not_blank, impl_entity_eq};

use crate::dynamic_field::{DynamicField, DynamicFieldSet};

erp_core::typed_id! {
    /// Category identifier.
    pub struct CategoryId;
}

/// Aggregate root: Category.
///
/// Parent and sub-categories are held as identifier links only; a
/// [`CategoryTree`](crate::CategoryTree) resolves them. The only structural
/// rule enforced here is that a category never references itself directly.
/// Indirect cycles (A -> B -> A) and repeated sub-category entries are not
/// detected.
#[derive(Debug, Clone)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    parent_category_id: Option<CategoryId>,
    sub_category_ids: Vec<CategoryId>,
    dynamic_fields: DynamicFieldSet,
}

impl Category {
    pub fn new(name: &str, description: &str, parent: Option<&Category>) -> DomainResult<Self> {
        Self::with_id(CategoryId::new(), name, description, parent)
    }

    /// Build with a known identifier (rehydration).
    pub fn with_id(
        id: CategoryId,
        name: &str,
        description: &str,
        parent: Option<&Category>,
    ) -> DomainResult<Self> {
        ensure_not_blank(name, "category name")?;

        Ok(Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            is_active: true,
            parent_category_id: parent.map(|p| p.id),
            sub_category_ids: Vec::new(),
            dynamic_fields: DynamicFieldSet::new(),
        })
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn parent_category_id(&self) -> Option<CategoryId> {
        self.parent_category_id
    }

    pub fn sub_category_ids(&self) -> &[CategoryId] {
        &self.sub_category_ids
    }

    pub fn dynamic_fields(&self) -> &DynamicFieldSet {
        &self.dynamic_fields
    }

    pub fn update_details(&mut self, name: &str, description: &str) -> DomainResult<()> {
        ensure_not_blank(name, "category name")?;
        self.name = name.to_string();
        self.description = description.to_string();
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn add_sub_category(&mut self, sub_category: &Category) -> DomainResult<()> {
        self.add_sub_category_id(sub_category.id)
    }

    /// No-op when `sub_category` is not listed.
    pub fn remove_sub_category(&mut self, sub_category: &Category) {
        self.remove_sub_category_id(sub_category.id);
    }

    /// `None` detaches the category from its parent.
    pub fn change_parent_category(&mut self, new_parent: Option<&Category>) -> DomainResult<()> {
        self.set_parent_id(new_parent.map(|p| p.id))
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

    pub(crate) fn add_sub_category_id(&mut self, sub_id: CategoryId) -> DomainResult<()> {
        if sub_id == self.id {
            return Err(DomainError::invalid_operation(
                "a category cannot be a subcategory of itself",
            ));
        }
        self.sub_category_ids.push(sub_id);
        Ok(())
    }

    pub(crate) fn remove_sub_category_id(&mut self, sub_id: CategoryId) {
        if let Some(idx) = self.sub_category_ids.iter().position(|id| *id == sub_id) {
            self.sub_category_ids.remove(idx);
        }
    }

    pub(crate) fn set_parent_id(&mut self, parent_id: Option<CategoryId>) -> DomainResult<()> {
        if parent_id == Some(self.id) {
            return Err(DomainError::invalid_operation("a category cannot be its own parent"));
        }

        tracing::debug!(
            category_id = %self.id,
            old_parent = ?self.parent_category_id,
            new_parent = ?parent_id,
            "category parent changed"
        );
        self.parent_category_id = parent_id;
        Ok(())
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Category {
    /// Categories raise no change notifications.
    type Event = Infallible;
}

impl_entity_eq!(Category);
