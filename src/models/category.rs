//! Category records
//!
//! Categories form a tree: each category names at most one parent, and a
//! parent must already exist when it is assigned. Root categories have no
//! parent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category primary key
pub type CategoryId = u32;

/// A category record as owned by the category store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Parent category, `None` for roots
    pub parent_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Fields supplied when creating a category; timestamps are store-assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
}

/// Parent change within a partial update
///
/// `Clear` is the typed form of the wire sentinel (`parent_id: -1`) that
/// detaches a category from its parent; `Set` re-parents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParentPatch {
    Set(CategoryId),
    Clear,
}

/// Partial update for a category; supplied fields fully replace stored ones
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub parent: Option<ParentPatch>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.parent.is_none()
    }
}
