//! Mutation audit log
//!
//! Every successful mutation on the catalog appends one entry here; failed
//! operations append nothing. In-memory only, like the stores it observes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOperation {
    Create,
    Update,
    Delete,
    CascadeDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Category,
    Product,
}

/// One recorded mutation
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub at: DateTime<Utc>,
    pub operation: AuditOperation,
    pub entity: EntityKind,
    /// Category id or SKU, as text
    pub entity_id: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        operation: AuditOperation,
        entity: EntityKind,
        entity_id: impl Into<String>,
        summary: impl Into<String>,
    ) {
        self.entries.push(AuditEntry {
            id: Uuid::new_v4(),
            at: Utc::now(),
            operation,
            entity,
            entity_id: entity_id.into(),
            summary: summary.into(),
        });
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_in_order() {
        let mut log = AuditLog::new();
        assert!(log.is_empty());

        log.record(
            AuditOperation::Create,
            EntityKind::Category,
            "1",
            "create category Electronics (1)",
        );
        log.record(
            AuditOperation::CascadeDelete,
            EntityKind::Category,
            "1",
            "cascade delete category 1",
        );

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].operation, AuditOperation::Create);
        assert_eq!(log.entries()[1].operation, AuditOperation::CascadeDelete);
        assert_ne!(log.entries()[0].id, log.entries()[1].id);
    }
}
