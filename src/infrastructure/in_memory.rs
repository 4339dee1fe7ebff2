use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::ports::SalesOrderRepository;
use crate::domain::sales_order::{SalesOrderCommand, SalesOrderRecord};

/// Process-local store used when no database is configured, and by tests.
#[derive(Debug, Default)]
pub struct InMemorySalesOrderRepository {
    records: Mutex<Vec<SalesOrderRecord>>,
}

impl InMemorySalesOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: i64) -> Option<SalesOrderRecord> {
        self.records().iter().find(|r| r.id == id).cloned()
    }

    // Records are only ever pushed whole, so a poisoned lock still guards a
    // consistent vector.
    fn records(&self) -> MutexGuard<'_, Vec<SalesOrderRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SalesOrderRepository for InMemorySalesOrderRepository {
    async fn execute(&self, order: SalesOrderCommand) -> Result<SalesOrderRecord, DomainError> {
        let mut records = self.records();

        // Ids start at 1, like a BIGSERIAL column.
        let record = SalesOrderRecord {
            id: records.len() as i64 + 1,
            order,
        };
        records.push(record.clone());
        Ok(record)
    }
}
