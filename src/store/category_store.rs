//! Category store
//!
//! Owns the category tree shape. Creation and re-parenting both require the
//! named parent to already exist, which is what keeps the parent graph
//! acyclic without a separate cycle check. Deleting here removes exactly one
//! record; cascading over a subtree is the consistency engine's job.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, CategoryDraft, CategoryId, CategoryPatch, ParentPatch};

#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    items: BTreeMap<CategoryId, Category>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.items.contains_key(&id)
    }

    /// Create a category, rejecting duplicate ids and unknown parents
    pub fn create(&mut self, draft: CategoryDraft) -> CatalogResult<&Category> {
        if self.items.contains_key(&draft.id) {
            return Err(CatalogError::DuplicateCategory { id: draft.id });
        }
        if let Some(parent_id) = draft.parent_id {
            if !self.items.contains_key(&parent_id) {
                return Err(CatalogError::InvalidParent { parent_id });
            }
        }

        let now = Utc::now();
        let category = Category {
            id: draft.id,
            name: draft.name,
            parent_id: draft.parent_id,
            created_at: now,
            updated_at: now,
        };
        Ok(self.items.entry(category.id).or_insert(category))
    }

    /// Apply a partial update atomically: either every supplied field lands
    /// or none does
    pub fn update(&mut self, id: CategoryId, patch: CategoryPatch) -> CatalogResult<&Category> {
        if !self.items.contains_key(&id) {
            return Err(CatalogError::CategoryNotFound { id });
        }
        if let Some(ParentPatch::Set(parent_id)) = patch.parent {
            // A category cannot parent itself, and the new parent must exist.
            if parent_id == id || !self.items.contains_key(&parent_id) {
                return Err(CatalogError::InvalidParent { parent_id });
            }
        }

        let category = self
            .items
            .get_mut(&id)
            .ok_or(CatalogError::CategoryNotFound { id })?;
        if let Some(name) = patch.name {
            category.name = name;
        }
        match patch.parent {
            Some(ParentPatch::Set(parent_id)) => category.parent_id = Some(parent_id),
            Some(ParentPatch::Clear) => category.parent_id = None,
            None => {}
        }
        category.updated_at = Utc::now();
        Ok(category)
    }

    /// Remove a single record and return it; does not cascade
    pub fn delete(&mut self, id: CategoryId) -> CatalogResult<Category> {
        self.items
            .remove(&id)
            .ok_or(CatalogError::CategoryNotFound { id })
    }

    pub fn list(&self) -> impl Iterator<Item = &Category> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert a record bypassing parent validation. Test-only backdoor used
    /// to manufacture malformed trees for the traversal guards.
    #[cfg(test)]
    pub(crate) fn insert_raw(&mut self, category: Category) {
        self.items.insert(category.id, category);
    }
}
