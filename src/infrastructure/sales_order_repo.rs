use async_trait::async_trait;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::SalesOrderRepository;
use crate::domain::sales_order::{SalesOrderCommand, SalesOrderRecord};
use crate::schema::sales_orders;

use super::models::{NewSalesOrderRow, SalesOrderRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselSalesOrderRepository {
    pool: DbPool,
}

impl DieselSalesOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn insert(pool: &DbPool, order: &SalesOrderCommand) -> Result<SalesOrderRecord, DomainError> {
        let mut conn = pool.get()?;

        let row = diesel::insert_into(sales_orders::table)
            .values(NewSalesOrderRow::from(order))
            .returning(SalesOrderRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }
}

#[async_trait]
impl SalesOrderRepository for DieselSalesOrderRepository {
    async fn execute(&self, order: SalesOrderCommand) -> Result<SalesOrderRecord, DomainError> {
        let pool = self.pool.clone();

        // Diesel is synchronous; keep it off the async workers.
        tokio::task::spawn_blocking(move || Self::insert(&pool, &order))
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))?
            .inspect_err(|e| log::error!("Failed to store sales order: {}", e))
    }
}
