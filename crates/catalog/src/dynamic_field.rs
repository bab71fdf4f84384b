//! Dynamic fields: ad-hoc typed attributes attached to products and categories.
//!
//! A [`DynamicField`] is an immutable value. Changing a field's value builds a
//! new field via [`DynamicField::with_value`] and the owning
//! [`DynamicFieldSet`] swaps it in place of the old one, so a field is never
//! shared between two aggregates.

use serde::{Deserialize, Serialize};

use erp_core::{DomainError, DomainResult, ValueObject, ensure_not_blank};

use crate::category::CategoryId;
use crate::template::{DynamicFieldTemplate, TemplateTarget};

/// Named, typed attribute value. Compared structurally over all attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DynamicFieldRecord")]
pub struct DynamicField {
    key: String,
    value: Option<String>,
    data_type: String,
    is_required: bool,
    display_name: String,
    display_order: i32,
}

#[derive(Deserialize)]
struct DynamicFieldRecord {
    key: String,
    value: Option<String>,
    data_type: String,
    is_required: bool,
    display_name: String,
    display_order: i32,
}

impl TryFrom<DynamicFieldRecord> for DynamicField {
    type Error = DomainError;

    fn try_from(r: DynamicFieldRecord) -> Result<Self, Self::Error> {
        DynamicField::new(
            &r.key,
            r.value.as_deref(),
            &r.data_type,
            r.is_required,
            &r.display_name,
            r.display_order,
        )
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

impl DynamicField {
    pub fn new(
        key: &str,
        value: Option<&str>,
        data_type: &str,
        is_required: bool,
        display_name: &str,
        display_order: i32,
    ) -> DomainResult<Self> {
        ensure_not_blank(key, "key")?;
        ensure_not_blank(data_type, "data type")?;
        ensure_not_blank(display_name, "display name")?;

        Ok(Self {
            key: key.to_string(),
            value: value.map(str::to_string),
            data_type: data_type.to_string(),
            is_required,
            display_name: display_name.to_string(),
            display_order,
        })
    }

    /// Copy of this field carrying `new_value`.
    ///
    /// Required fields reject a missing or whitespace-only value.
    pub fn with_value(&self, new_value: Option<&str>) -> DomainResult<Self> {
        if self.is_required && is_blank(new_value) {
            return Err(DomainError::invalid_argument(format!(
                "value cannot be empty for required field '{}'",
                self.key
            )));
        }

        Ok(Self {
            value: new_value.map(str::to_string),
            ..self.clone()
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn display_order(&self) -> i32 {
        self.display_order
    }

    /// Value absent or whitespace-only.
    pub fn is_blank(&self) -> bool {
        is_blank(self.value())
    }
}

impl ValueObject for DynamicField {}

/// Insertion-ordered dynamic fields, unique by key (exact match).
///
/// Failed operations leave the set untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicFieldSet {
    fields: Vec<DynamicField>,
}

impl DynamicFieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: DynamicField) -> DomainResult<()> {
        if self.position(field.key()).is_some() {
            return Err(DomainError::invalid_operation(format!(
                "dynamic field with key '{}' already exists",
                field.key()
            )));
        }
        self.fields.push(field);
        Ok(())
    }

    /// Replace the value of the field stored under `key`.
    pub fn update(&mut self, key: &str, value: Option<&str>) -> DomainResult<()> {
        let idx = self.require(key)?;
        let updated = self.fields[idx].with_value(value)?;
        self.fields[idx] = updated;
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> DomainResult<DynamicField> {
        let idx = self.require(key)?;
        Ok(self.fields.remove(idx))
    }

    pub fn get(&self, key: &str) -> Option<&DynamicField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, DynamicField> {
        self.fields.iter()
    }

    pub fn as_slice(&self) -> &[DynamicField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keys of required templates (active, applicable to `target` within
    /// `category_id`) that have no field here or only a blank one.
    pub fn missing_required<'t>(
        &self,
        templates: impl IntoIterator<Item = &'t DynamicFieldTemplate>,
        target: TemplateTarget,
        category_id: Option<CategoryId>,
    ) -> Vec<String> {
        templates
            .into_iter()
            .filter(|t| t.is_required() && t.applies_to(target, category_id))
            .filter(|t| self.get(t.key()).is_none_or(DynamicField::is_blank))
            .map(|t| t.key().to_string())
            .collect()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    fn require(&self, key: &str) -> DomainResult<usize> {
        self.position(key).ok_or_else(|| {
            DomainError::invalid_operation(format!("dynamic field with key '{key}' not found"))
        })
    }
}

impl<'a> IntoIterator for &'a DynamicFieldSet {
    type Item = &'a DynamicField;
    type IntoIter = core::slice::Iter<'a, DynamicField>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
