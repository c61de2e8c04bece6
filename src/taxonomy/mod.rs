//! Category tree operations
//!
//! The traversal engine computes child and descendant sets over the category
//! store; the cascade module builds on it to delete a whole subtree together
//! with every product assigned to it. Both treat the store as the single
//! source of tree shape and never keep state of their own.

pub mod cascade;
pub mod traversal;

pub use cascade::{cascade_delete, CascadeOutcome};
pub use traversal::{children, descendants};
