use async_trait::async_trait;

use super::errors::DomainError;
use super::sales_order::{SalesOrderCommand, SalesOrderRecord};

/// Persists a validated sales order and returns what was stored, including
/// the generated id.
#[async_trait]
pub trait SalesOrderRepository: Send + Sync + 'static {
    async fn execute(&self, order: SalesOrderCommand) -> Result<SalesOrderRecord, DomainError>;
}
