//! Dynamic field templates: which fields a product or category is expected to carry.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use erp_core::{DomainError, DomainResult, Entity, ensure_not_blank, impl_entity_eq};

use crate::category::CategoryId;
use crate::dynamic_field::DynamicField;

erp_core::typed_id! {
    /// Dynamic field template identifier.
    pub struct DynamicFieldTemplateId;
}

/// Entity kind a template describes fields for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateTarget {
    Product,
    Category,
}

impl TemplateTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateTarget::Product => "Product",
            TemplateTarget::Category => "Category",
        }
    }
}

impl FromStr for TemplateTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ensure_not_blank(s, "entity type")?;
        match s {
            "Product" => Ok(TemplateTarget::Product),
            "Category" => Ok(TemplateTarget::Category),
            other => Err(DomainError::invalid_argument(format!(
                "unknown entity type '{other}'"
            ))),
        }
    }
}

impl core::fmt::Display for TemplateTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable descriptor of a template (everything except key, target and scope).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDetails {
    pub data_type: String,
    pub is_required: bool,
    pub display_name: String,
    pub display_order: i32,
    pub default_value: Option<String>,
    pub validation_rules: Option<String>,
}

impl TemplateDetails {
    fn validate(&self) -> DomainResult<()> {
        ensure_not_blank(&self.data_type, "data type")?;
        ensure_not_blank(&self.display_name, "display name")
    }
}

/// Schema entry for a dynamic field.
///
/// `category_id = None` applies the template to every category of its target;
/// otherwise only to that one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DynamicFieldTemplateRecord")]
pub struct DynamicFieldTemplate {
    id: DynamicFieldTemplateId,
    key: String,
    details: TemplateDetails,
    is_active: bool,
    entity_type: TemplateTarget,
    category_id: Option<CategoryId>,
}

#[derive(Deserialize)]
struct DynamicFieldTemplateRecord {
    id: DynamicFieldTemplateId,
    key: String,
    details: TemplateDetails,
    is_active: bool,
    entity_type: TemplateTarget,
    category_id: Option<CategoryId>,
}

impl TryFrom<DynamicFieldTemplateRecord> for DynamicFieldTemplate {
    type Error = DomainError;

    fn try_from(r: DynamicFieldTemplateRecord) -> Result<Self, Self::Error> {
        let mut template = DynamicFieldTemplate::new(&r.key, r.details, r.entity_type, r.category_id)?;
        template.id = r.id;
        template.is_active = r.is_active;
        Ok(template)
    }
}

impl DynamicFieldTemplate {
    pub fn new(
        key: &str,
        details: TemplateDetails,
        entity_type: TemplateTarget,
        category_id: Option<CategoryId>,
    ) -> DomainResult<Self> {
        ensure_not_blank(key, "key")?;
        details.validate()?;

        Ok(Self {
            id: DynamicFieldTemplateId::new(),
            key: key.to_string(),
            details,
            is_active: true,
            entity_type,
            category_id,
        })
    }

    pub fn update_details(&mut self, details: TemplateDetails) -> DomainResult<()> {
        details.validate()?;
        self.details = details;
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn change_category(&mut self, category_id: Option<CategoryId>) {
        self.category_id = category_id;
    }

    /// Active, same target, and either global or scoped to `category_id`.
    pub fn applies_to(&self, target: TemplateTarget, category_id: Option<CategoryId>) -> bool {
        self.is_active
            && self.entity_type == target
            && self.category_id.is_none_or(|scoped| Some(scoped) == category_id)
    }

    /// Build a field from this template, falling back to the default value.
    pub fn instantiate(&self, value: Option<&str>) -> DomainResult<DynamicField> {
        let value = value.or(self.details.default_value.as_deref());
        DynamicField::new(
            &self.key,
            None,
            &self.details.data_type,
            self.details.is_required,
            &self.details.display_name,
            self.details.display_order,
        )?
        .with_value(value)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn details(&self) -> &TemplateDetails {
        &self.details
    }

    pub fn data_type(&self) -> &str {
        &self.details.data_type
    }

    pub fn is_required(&self) -> bool {
        self.details.is_required
    }

    pub fn display_name(&self) -> &str {
        &self.details.display_name
    }

    pub fn display_order(&self) -> i32 {
        self.details.display_order
    }

    pub fn default_value(&self) -> Option<&str> {
        self.details.default_value.as_deref()
    }

    pub fn validation_rules(&self) -> Option<&str> {
        self.details.validation_rules.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn entity_type(&self) -> TemplateTarget {
        self.entity_type
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }
}

impl Entity for DynamicFieldTemplate {
    type Id = DynamicFieldTemplateId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl_entity_eq!(DynamicFieldTemplate);
