//! Flat category table resolving parent/child identifier links.

use std::collections::{HashMap, HashSet};

use erp_core::{DomainError, DomainResult};

use crate::category::{Category, CategoryId};

/// Categories keyed by identifier.
///
/// Hierarchy is expressed only through the identifier links stored on each
/// [`Category`]; nothing here owns a nested structure. Links pointing at
/// categories not present in the table are skipped on lookup.
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    categories: HashMap<CategoryId, Category>,
}

impl CategoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace, returning the previous entry.
    pub fn insert(&mut self, category: Category) -> Option<Category> {
        self.categories.insert(category.id_typed(), category)
    }

    pub fn remove(&mut self, id: CategoryId) -> Option<Category> {
        self.categories.remove(&id)
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    pub fn get_mut(&mut self, id: CategoryId) -> Option<&mut Category> {
        self.categories.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn parent_of(&self, id: CategoryId) -> Option<&Category> {
        let parent_id = self.get(id)?.parent_category_id()?;
        self.get(parent_id)
    }

    /// Sub-categories in the order they were added.
    pub fn children_of(&self, id: CategoryId) -> Vec<&Category> {
        self.get(id)
            .map(|c| c.sub_category_ids().iter().filter_map(|sub| self.get(*sub)).collect())
            .unwrap_or_default()
    }

    /// Categories without a parent.
    pub fn roots(&self) -> Vec<&Category> {
        let mut roots: Vec<&Category> = self
            .categories
            .values()
            .filter(|c| c.parent_category_id().is_none())
            .collect();
        roots.sort_by_key(|c| c.id_typed());
        roots
    }

    /// Parent chain, nearest first.
    ///
    /// Parent links may form a cycle; the walk stops at the first category
    /// already visited.
    pub fn ancestors(&self, id: CategoryId) -> Vec<&Category> {
        let mut seen = HashSet::from([id]);
        let mut chain = Vec::new();
        let mut cursor = self.parent_of(id);

        while let Some(parent) = cursor {
            if !seen.insert(parent.id_typed()) {
                break;
            }
            chain.push(parent);
            cursor = self.parent_of(parent.id_typed());
        }
        chain
    }

    /// Move `child` under `parent`, updating both sides of the link and
    /// dropping the child from its previous parent's sub-category list.
    pub fn attach(&mut self, parent: CategoryId, child: CategoryId) -> DomainResult<()> {
        if parent == child {
            return Err(DomainError::invalid_operation("a category cannot be its own parent"));
        }
        let previous = self
            .get(child)
            .ok_or_else(|| DomainError::invalid_operation(format!("category {child} not found")))?
            .parent_category_id();
        if !self.categories.contains_key(&parent) {
            return Err(DomainError::invalid_operation(format!("category {parent} not found")));
        }

        if let Some(old) = previous.and_then(|p| self.get_mut(p)) {
            old.remove_sub_category_id(child);
        }
        if let Some(p) = self.get_mut(parent) {
            p.add_sub_category_id(child)?;
        }
        if let Some(c) = self.get_mut(child) {
            c.set_parent_id(Some(parent))?;
        }
        Ok(())
    }

    /// Make `child` a root category.
    pub fn detach(&mut self, child: CategoryId) -> DomainResult<()> {
        let previous = self
            .get(child)
            .ok_or_else(|| DomainError::invalid_operation(format!("category {child} not found")))?
            .parent_category_id();

        if let Some(old) = previous.and_then(|p| self.get_mut(p)) {
            old.remove_sub_category_id(child);
        }
        if let Some(c) = self.get_mut(child) {
            c.set_parent_id(None)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(names: &[&str]) -> (CategoryTree, Vec<CategoryId>) {
        let mut tree = CategoryTree::new();
        let ids = names
            .iter()
            .map(|n| {
                let c = Category::new(n, "", None).unwrap();
                let id = c.id_typed();
                tree.insert(c);
                id
            })
            .collect();
        (tree, ids)
    }

    #[test]
    fn attach_links_both_sides() {
        let (mut tree, ids) = tree_with(&["Root", "Apparel", "Shirts"]);
        tree.attach(ids[0], ids[1]).unwrap();
        tree.attach(ids[1], ids[2]).unwrap();

        assert_eq!(tree.parent_of(ids[2]).map(|c| c.name()), Some("Apparel"));
        let children: Vec<_> = tree.children_of(ids[0]).iter().map(|c| c.name()).collect();
        assert_eq!(children, vec!["Apparel"]);

        let chain: Vec<_> = tree.ancestors(ids[2]).iter().map(|c| c.name()).collect();
        assert_eq!(chain, vec!["Apparel", "Root"]);
        assert_eq!(tree.roots().len(), 1);
    }

    #[test]
    fn attach_moves_child_between_parents() {
        let (mut tree, ids) = tree_with(&["A", "B", "Child"]);
        tree.attach(ids[0], ids[2]).unwrap();
        tree.attach(ids[1], ids[2]).unwrap();

        assert!(tree.children_of(ids[0]).is_empty());
        assert_eq!(tree.children_of(ids[1]).len(), 1);
        assert_eq!(tree.get(ids[2]).unwrap().parent_category_id(), Some(ids[1]));
    }

    #[test]
    fn attach_rejects_self_and_unknown_ids() {
        let (mut tree, ids) = tree_with(&["A"]);
        assert!(matches!(tree.attach(ids[0], ids[0]), Err(DomainError::InvalidOperation(_))));
        assert!(matches!(tree.attach(CategoryId::new(), ids[0]), Err(DomainError::InvalidOperation(_))));
        assert!(matches!(tree.attach(ids[0], CategoryId::new()), Err(DomainError::InvalidOperation(_))));
        assert!(tree.get(ids[0]).unwrap().parent_category_id().is_none());
    }

    #[test]
    fn detach_makes_root() {
        let (mut tree, ids) = tree_with(&["A", "B"]);
        tree.attach(ids[0], ids[1]).unwrap();
        tree.detach(ids[1]).unwrap();

        assert!(tree.parent_of(ids[1]).is_none());
        assert!(tree.children_of(ids[0]).is_empty());
        assert_eq!(tree.roots().len(), 2);
    }

    #[test]
    fn removed_category_leaves_links_that_lookups_skip() {
        let (mut tree, ids) = tree_with(&["Root", "Apparel", "Shirts"]);
        tree.attach(ids[0], ids[1]).unwrap();
        tree.attach(ids[1], ids[2]).unwrap();

        let removed = tree.remove(ids[1]).unwrap();
        assert_eq!(removed.name(), "Apparel");
        assert!(tree.remove(ids[1]).is_none());
        assert_eq!(tree.len(), 2);

        assert_eq!(tree.get(ids[0]).unwrap().sub_category_ids(), &[ids[1]]);
        assert_eq!(tree.get(ids[2]).unwrap().parent_category_id(), Some(ids[1]));
        assert!(tree.children_of(ids[0]).is_empty());
        assert!(tree.parent_of(ids[2]).is_none());
        assert!(tree.ancestors(ids[2]).is_empty());
    }

    #[test]
    fn ancestors_terminates_on_cycle() {
        let (mut tree, ids) = tree_with(&["A", "B"]);
        tree.attach(ids[0], ids[1]).unwrap();
        tree.attach(ids[1], ids[0]).unwrap();

        let chain: Vec<_> = tree.ancestors(ids[0]).iter().map(|c| c.name()).collect();
        assert_eq!(chain, vec!["B"]);
    }
}
