use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ── Intake ───────────────────────────────────────────────────────────────────

/// Raw "create sales order" payload as received from the caller.
///
/// Every field is optional at this stage so that a missing or `null` value
/// can be reported by name instead of failing deserialization. Empty strings
/// are kept as-is.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnvalidatedSalesOrder {
    /// Order date, `YYYY-MM-DD` or RFC 3339.
    pub sales_date: Option<String>,
    /// Invoice date, `YYYY-MM-DD` or RFC 3339.
    pub invoice_date: Option<String>,
    pub user_id: Option<i64>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_get_first_price_range: Option<bool>,
    pub manager_name: Option<String>,
    pub manager_email: Option<String>,
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    pub customer_city: Option<String>,
    pub customer_state: Option<String>,
    pub customer_payment_term: Option<String>,
    pub ship_base: Option<String>,
    pub shipment_type: Option<String>,
    pub shipping_company_name: Option<String>,
    pub shipping_company_contact: Option<String>,
    pub shipping_company_phone: Option<String>,
    pub shipping_company_email: Option<String>,
    pub maps_link: Option<String>,
    pub address_has_unpaved_road: Option<bool>,
    /// Kilometres of unpaved road to the delivery address, kept as the
    /// exact decimal that was written in the JSON.
    #[serde(default, with = "bigdecimal::serde::json_num_option")]
    #[schema(value_type = Option<f64>)]
    pub unpaved_road_size: Option<BigDecimal>,
    pub shipping_note: Option<String>,
    pub status: Option<String>,
}

/// A sales order that passed validation and may be handed to persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesOrderCommand {
    pub sales_date: NaiveDate,
    pub invoice_date: NaiveDate,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub user_get_first_price_range: bool,
    pub manager_name: String,
    pub manager_email: String,
    pub customer_id: i64,
    pub customer_name: String,
    pub customer_city: String,
    pub customer_state: String,
    pub customer_payment_term: String,
    pub ship_base: String,
    pub shipment_type: String,
    pub shipping_company_name: Option<String>,
    pub shipping_company_contact: Option<String>,
    pub shipping_company_phone: Option<String>,
    pub shipping_company_email: Option<String>,
    pub maps_link: Option<String>,
    pub address_has_unpaved_road: bool,
    pub unpaved_road_size: Option<BigDecimal>,
    pub shipping_note: Option<String>,
    pub status: String,
}

/// What a repository hands back after storing a command.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesOrderRecord {
    pub id: i64,
    pub order: SalesOrderCommand,
}

// ── Created order ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub get_first_price_range: bool,
    pub manager_name: String,
    pub manager_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAddress {
    pub city: String,
    pub state: String,
    pub maps_link: Option<String>,
    pub has_unpaved_road: bool,
    #[serde(with = "bigdecimal::serde::json_num_option")]
    #[schema(value_type = Option<f64>)]
    pub unpaved_road_size: Option<BigDecimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderCustomer {
    pub id: i64,
    pub name: String,
    pub address: CustomerAddress,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub base: String,
    #[serde(rename = "type")]
    pub shipment_type: String,
    pub shipping_company_name: Option<String>,
    pub shipping_company_contact: Option<String>,
    pub shipping_company_phone: Option<String>,
    pub shipping_company_email: Option<String>,
    pub note: Option<String>,
}

/// The order returned to the caller once persistence succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: i64,
    pub sales_date: NaiveDate,
    pub invoice_date: NaiveDate,
    pub user: SalesOrderUser,
    pub customer: SalesOrderCustomer,
    pub ship: Shipment,
    pub payment_term: String,
    pub status: String,
}

impl From<SalesOrderRecord> for SalesOrder {
    fn from(record: SalesOrderRecord) -> Self {
        let o = record.order;
        SalesOrder {
            id: record.id,
            sales_date: o.sales_date,
            invoice_date: o.invoice_date,
            user: SalesOrderUser {
                id: o.user_id,
                name: o.user_name,
                email: o.user_email,
                get_first_price_range: o.user_get_first_price_range,
                manager_name: o.manager_name,
                manager_email: o.manager_email,
            },
            customer: SalesOrderCustomer {
                id: o.customer_id,
                name: o.customer_name,
                address: CustomerAddress {
                    city: o.customer_city,
                    state: o.customer_state,
                    maps_link: o.maps_link,
                    has_unpaved_road: o.address_has_unpaved_road,
                    unpaved_road_size: o.unpaved_road_size,
                },
            },
            ship: Shipment {
                base: o.ship_base,
                shipment_type: o.shipment_type,
                shipping_company_name: o.shipping_company_name,
                shipping_company_contact: o.shipping_company_contact,
                shipping_company_phone: o.shipping_company_phone,
                shipping_company_email: o.shipping_company_email,
                note: o.shipping_note,
            },
            payment_term: o.customer_payment_term,
            status: o.status,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn command() -> SalesOrderCommand {
        SalesOrderCommand {
            sales_date: NaiveDate::from_ymd_opt(2023, 8, 1).expect("valid date"),
            invoice_date: NaiveDate::from_ymd_opt(2023, 8, 5).expect("valid date"),
            user_id: 1,
            user_name: "any_user".to_string(),
            user_email: "any_email".to_string(),
            user_get_first_price_range: true,
            manager_name: "any_manager".to_string(),
            manager_email: "manager_email".to_string(),
            customer_id: 7,
            customer_name: "any_customer".to_string(),
            customer_city: "any_city".to_string(),
            customer_state: "any_state".to_string(),
            customer_payment_term: "any_term".to_string(),
            ship_base: "any_base".to_string(),
            shipment_type: "any_type".to_string(),
            shipping_company_name: Some("any_company".to_string()),
            shipping_company_contact: None,
            shipping_company_phone: Some("555-0100".to_string()),
            shipping_company_email: None,
            maps_link: Some("https://maps.example/x".to_string()),
            address_has_unpaved_road: true,
            unpaved_road_size: Some(BigDecimal::from(3)),
            shipping_note: Some("leave at gate".to_string()),
            status: "pending".to_string(),
        }
    }
}
