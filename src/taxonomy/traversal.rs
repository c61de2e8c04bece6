//! Tree traversal engine
//!
//! Children are a linear scan over the store; descendants are the transitive
//! closure of that scan, expanded breadth-first with an explicit worklist.
//! The visited set makes traversal terminate even if the parent graph has
//! been corrupted into a cycle — the store's creation rules forbid that, but
//! the traversal does not rely on it.

use std::collections::{BTreeSet, VecDeque};

use crate::models::CategoryId;
use crate::store::CategoryStore;

/// Ids of all categories whose parent is `parent`; `None` lists the roots.
///
/// Ascending-id order, inherited from store iteration.
pub fn children(categories: &CategoryStore, parent: Option<CategoryId>) -> Vec<CategoryId> {
    categories
        .list()
        .filter(|c| c.parent_id == parent)
        .map(|c| c.id)
        .collect()
}

/// All descendants of `root` in BFS order, never including `root` itself
pub fn descendants(categories: &CategoryStore, root: CategoryId) -> Vec<CategoryId> {
    let mut visited: BTreeSet<CategoryId> = BTreeSet::new();
    visited.insert(root);

    let mut order = Vec::new();
    let mut queue: VecDeque<CategoryId> = VecDeque::from(children(categories, Some(root)));
    while let Some(id) = queue.pop_front() {
        if !visited.insert(id) {
            continue;
        }
        order.push(id);
        queue.extend(children(categories, Some(id)));
    }
    order
}
