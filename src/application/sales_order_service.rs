use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::ports::SalesOrderRepository;
use crate::domain::sales_order::{SalesOrder, UnvalidatedSalesOrder};
use crate::domain::validation;

#[derive(Clone)]
pub struct SalesOrderService {
    repo: Arc<dyn SalesOrderRepository>,
}

impl SalesOrderService {
    pub fn new<R: SalesOrderRepository>(repo: R) -> Self {
        Self::from_arc(Arc::new(repo))
    }

    pub fn from_arc(repo: Arc<dyn SalesOrderRepository>) -> Self {
        Self { repo }
    }

    /// Validate the payload, store it through the repository exactly once and
    /// reshape the stored record into the nested order view.
    pub async fn create_sales_order(
        &self,
        input: UnvalidatedSalesOrder,
    ) -> Result<SalesOrder, DomainError> {
        let command = validation::validate(input).inspect_err(|e| {
            log::debug!("Rejected sales order: {}", e);
        })?;

        let record = self.repo.execute(command).await?;
        Ok(SalesOrder::from(record))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;
    use crate::domain::sales_order::{SalesOrderCommand, SalesOrderRecord};
    use crate::domain::validation::ValidationError;
    use crate::infrastructure::in_memory::InMemorySalesOrderRepository;

    struct FailingRepository {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SalesOrderRepository for FailingRepository {
        async fn execute(
            &self,
            _order: SalesOrderCommand,
        ) -> Result<SalesOrderRecord, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(DomainError::Internal("connection refused".to_string()))
        }
    }

    fn input(overrides: serde_json::Value) -> UnvalidatedSalesOrder {
        let mut payload = json!({
            "salesDate": "2023-08-01",
            "invoiceDate": "2023-08-03",
            "userId": 10,
            "userName": "any_user",
            "userEmail": "any_email",
            "userGetFirstPriceRange": true,
            "managerName": "any_manager",
            "managerEmail": "any_manager_email",
            "customerId": 20,
            "customerName": "any_customer",
            "customerCity": "any_city",
            "customerState": "any_state",
            "customerPaymentTerm": "any_term",
            "shipBase": "any_base",
            "shipmentType": "any_type",
            "shippingCompanyName": "any_company",
            "mapsLink": "https://maps.example/z",
            "addressHasUnpavedRoad": true,
            "unpavedRoadSize": 4,
            "status": "pending"
        });
        if let (Some(base), Some(extra)) = (payload.as_object_mut(), overrides.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        serde_json::from_value(payload).expect("valid payload")
    }

    #[tokio::test]
    async fn creates_order_through_repository() {
        let repo = Arc::new(InMemorySalesOrderRepository::new());
        let service = SalesOrderService::from_arc(repo.clone());

        let order = service
            .create_sales_order(input(json!({})))
            .await
            .expect("create failed");

        assert_eq!(order.id, 1);
        assert_eq!(order.sales_date, NaiveDate::from_ymd_opt(2023, 8, 1).unwrap());
        assert_eq!(order.user.id, 10);
        assert!(order.user.get_first_price_range);
        assert_eq!(order.customer.id, 20);
        assert_eq!(order.customer.address.maps_link.as_deref(), Some("https://maps.example/z"));
        assert_eq!(order.ship.shipping_company_name.as_deref(), Some("any_company"));
        assert_eq!(order.status, "pending");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn rejected_order_never_reaches_repository() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service = SalesOrderService::new(FailingRepository {
            calls: calls.clone(),
        });

        let err = service
            .create_sales_order(input(json!({ "unpavedRoadSize": null })))
            .await
            .expect_err("should be rejected");

        assert!(matches!(
            err,
            DomainError::InvalidInput(ValidationError::MissingUnpavedRoadSize)
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn repository_failure_is_internal_and_called_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service = SalesOrderService::new(FailingRepository {
            calls: calls.clone(),
        });

        let err = service
            .create_sales_order(input(json!({})))
            .await
            .expect_err("should fail");

        assert!(matches!(err, DomainError::Internal(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn same_invalid_input_is_rejected_the_same_way_twice() {
        let service = SalesOrderService::new(InMemorySalesOrderRepository::new());
        let bad = json!({ "salesDate": "2023-08-10", "invoiceDate": "2023-08-05" });

        let first = service.create_sales_order(input(bad.clone())).await.unwrap_err();
        let second = service.create_sales_order(input(bad)).await.unwrap_err();

        assert_eq!(first.to_string(), second.to_string());
        assert_eq!(
            first.to_string(),
            "Data de faturamento não pode ser menor que data da solicitação."
        );
    }
}
