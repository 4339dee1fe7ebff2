use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::domain::sales_order::{SalesOrderCommand, SalesOrderRecord};
use crate::schema::sales_orders;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = sales_orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SalesOrderRow {
    pub id: i64,
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
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = sales_orders)]
pub struct NewSalesOrderRow<'a> {
    pub sales_date: NaiveDate,
    pub invoice_date: NaiveDate,
    pub user_id: i64,
    pub user_name: &'a str,
    pub user_email: &'a str,
    pub user_get_first_price_range: bool,
    pub manager_name: &'a str,
    pub manager_email: &'a str,
    pub customer_id: i64,
    pub customer_name: &'a str,
    pub customer_city: &'a str,
    pub customer_state: &'a str,
    pub customer_payment_term: &'a str,
    pub ship_base: &'a str,
    pub shipment_type: &'a str,
    pub shipping_company_name: Option<&'a str>,
    pub shipping_company_contact: Option<&'a str>,
    pub shipping_company_phone: Option<&'a str>,
    pub shipping_company_email: Option<&'a str>,
    pub maps_link: Option<&'a str>,
    pub address_has_unpaved_road: bool,
    pub unpaved_road_size: Option<&'a BigDecimal>,
    pub shipping_note: Option<&'a str>,
    pub status: &'a str,
}

impl<'a> From<&'a SalesOrderCommand> for NewSalesOrderRow<'a> {
    fn from(o: &'a SalesOrderCommand) -> Self {
        NewSalesOrderRow {
            sales_date: o.sales_date,
            invoice_date: o.invoice_date,
            user_id: o.user_id,
            user_name: &o.user_name,
            user_email: &o.user_email,
            user_get_first_price_range: o.user_get_first_price_range,
            manager_name: &o.manager_name,
            manager_email: &o.manager_email,
            customer_id: o.customer_id,
            customer_name: &o.customer_name,
            customer_city: &o.customer_city,
            customer_state: &o.customer_state,
            customer_payment_term: &o.customer_payment_term,
            ship_base: &o.ship_base,
            shipment_type: &o.shipment_type,
            shipping_company_name: o.shipping_company_name.as_deref(),
            shipping_company_contact: o.shipping_company_contact.as_deref(),
            shipping_company_phone: o.shipping_company_phone.as_deref(),
            shipping_company_email: o.shipping_company_email.as_deref(),
            maps_link: o.maps_link.as_deref(),
            address_has_unpaved_road: o.address_has_unpaved_road,
            unpaved_road_size: o.unpaved_road_size.as_ref(),
            shipping_note: o.shipping_note.as_deref(),
            status: &o.status,
        }
    }
}

impl From<SalesOrderRow> for SalesOrderRecord {
    fn from(row: SalesOrderRow) -> Self {
        SalesOrderRecord {
            id: row.id,
            order: SalesOrderCommand {
                sales_date: row.sales_date,
                invoice_date: row.invoice_date,
                user_id: row.user_id,
                user_name: row.user_name,
                user_email: row.user_email,
                user_get_first_price_range: row.user_get_first_price_range,
                manager_name: row.manager_name,
                manager_email: row.manager_email,
                customer_id: row.customer_id,
                customer_name: row.customer_name,
                customer_city: row.customer_city,
                customer_state: row.customer_state,
                customer_payment_term: row.customer_payment_term,
                ship_base: row.ship_base,
                shipment_type: row.shipment_type,
                shipping_company_name: row.shipping_company_name,
                shipping_company_contact: row.shipping_company_contact,
                shipping_company_phone: row.shipping_company_phone,
                shipping_company_email: row.shipping_company_email,
                maps_link: row.maps_link,
                address_has_unpaved_road: row.address_has_unpaved_road,
                unpaved_road_size: row.unpaved_road_size,
                shipping_note: row.shipping_note,
                status: row.status,
            },
        }
    }
}
