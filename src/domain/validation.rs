//! Intake rules for new sales orders.
//!
//! Rules run in a fixed order and the first one that fails decides the
//! rejection message. Only `null`/missing values count as absent; an empty
//! string is a present value.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

use super::sales_order::{SalesOrderCommand, UnvalidatedSalesOrder};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("O campo {0} não pode ser nulo.")]
    MissingField(&'static str),
    #[error("O campo {0} não é uma data válida.")]
    InvalidDate(&'static str),
    #[error("Data de faturamento não pode ser menor que data da solicitação.")]
    InvoiceBeforeSale,
    #[error("Km de estrada de chão não pode ser nulo.")]
    MissingUnpavedRoadSize,
}

/// Required intake fields, declared in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SalesDate,
    InvoiceDate,
    UserId,
    UserName,
    UserEmail,
    UserGetFirstPriceRange,
    ManagerName,
    ManagerEmail,
    CustomerId,
    CustomerName,
    CustomerCity,
    CustomerState,
    CustomerPaymentTerm,
    ShipBase,
    ShipmentType,
    Status,
}

impl Field {
    pub fn rule(self) -> &'static FieldRule {
        &REQUIRED_FIELDS[self as usize]
    }
}

/// A required intake field: its wire name, the label shown to the user and
/// how to tell whether it was supplied.
pub struct FieldRule {
    pub field: Field,
    pub name: &'static str,
    pub label: &'static str,
    is_present: fn(&UnvalidatedSalesOrder) -> bool,
}

impl FieldRule {
    pub fn is_present(&self, input: &UnvalidatedSalesOrder) -> bool {
        (self.is_present)(input)
    }

    pub fn missing(&self) -> ValidationError {
        ValidationError::MissingField(self.label)
    }
}

/// Required fields in reporting order, indexed by [`Field`]. When several
/// are null the earliest entry wins.
pub static REQUIRED_FIELDS: [FieldRule; 16] = [
    FieldRule {
        field: Field::SalesDate,
        name: "salesDate",
        label: "Data do pedido",
        is_present: |o| o.sales_date.is_some(),
    },
    FieldRule {
        field: Field::InvoiceDate,
        name: "invoiceDate",
        label: "Data de faturamento",
        is_present: |o| o.invoice_date.is_some(),
    },
    FieldRule {
        field: Field::UserId,
        name: "userId",
        label: "Id do usuário",
        is_present: |o| o.user_id.is_some(),
    },
    FieldRule {
        field: Field::UserName,
        name: "userName",
        label: "Nome do usuário",
        is_present: |o| o.user_name.is_some(),
    },
    FieldRule {
        field: Field::UserEmail,
        name: "userEmail",
        label: "Email do usuário",
        is_present: |o| o.user_email.is_some(),
    },
    FieldRule {
        field: Field::UserGetFirstPriceRange,
        name: "userGetFirstPriceRange",
        label: "Usuário recebe primeira faixa de preço",
        is_present: |o| o.user_get_first_price_range.is_some(),
    },
    FieldRule {
        field: Field::ManagerName,
        name: "managerName",
        label: "Nome do Gerente",
        is_present: |o| o.manager_name.is_some(),
    },
    FieldRule {
        field: Field::ManagerEmail,
        name: "managerEmail",
        label: "Email do Gerente",
        is_present: |o| o.manager_email.is_some(),
    },
    FieldRule {
        field: Field::CustomerId,
        name: "customerId",
        label: "Id do cliente",
        is_present: |o| o.customer_id.is_some(),
    },
    FieldRule {
        field: Field::CustomerName,
        name: "customerName",
        label: "Nome do cliente",
        is_present: |o| o.customer_name.is_some(),
    },
    FieldRule {
        field: Field::CustomerCity,
        name: "customerCity",
        label: "Cidade do cliente",
        is_present: |o| o.customer_city.is_some(),
    },
    FieldRule {
        field: Field::CustomerState,
        name: "customerState",
        label: "Estado do cliente",
        is_present: |o| o.customer_state.is_some(),
    },
    FieldRule {
        field: Field::CustomerPaymentTerm,
        name: "customerPaymentTerm",
        label: "Prazo de pagamento",
        is_present: |o| o.customer_payment_term.is_some(),
    },
    FieldRule {
        field: Field::ShipBase,
        name: "shipBase",
        label: "Base de faturamento",
        is_present: |o| o.ship_base.is_some(),
    },
    FieldRule {
        field: Field::ShipmentType,
        name: "shipmentType",
        label: "Tipo de frete",
        is_present: |o| o.shipment_type.is_some(),
    },
    FieldRule {
        field: Field::Status,
        name: "status",
        label: "Status",
        is_present: |o| o.status.is_some(),
    },
];

/// Parses `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp into an
/// instant.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Check an intake payload and turn it into a command ready for persistence.
pub fn validate(input: UnvalidatedSalesOrder) -> Result<SalesOrderCommand, ValidationError> {
    if let Some(rule) = REQUIRED_FIELDS.iter().find(|r| !r.is_present(&input)) {
        return Err(rule.missing());
    }

    let sold_at = instant_field(input.sales_date.as_deref(), Field::SalesDate)?;
    let invoiced_at = instant_field(input.invoice_date.as_deref(), Field::InvoiceDate)?;
    if sold_at > invoiced_at {
        return Err(ValidationError::InvoiceBeforeSale);
    }

    let has_unpaved_road = input.address_has_unpaved_road.unwrap_or(false);
    if has_unpaved_road && input.unpaved_road_size.is_none() {
        return Err(ValidationError::MissingUnpavedRoadSize);
    }

    Ok(SalesOrderCommand {
        sales_date: sold_at.date_naive(),
        invoice_date: invoiced_at.date_naive(),
        user_id: required(input.user_id, Field::UserId)?,
        user_name: required(input.user_name, Field::UserName)?,
        user_email: required(input.user_email, Field::UserEmail)?,
        user_get_first_price_range: required(
            input.user_get_first_price_range,
            Field::UserGetFirstPriceRange,
        )?,
        manager_name: required(input.manager_name, Field::ManagerName)?,
        manager_email: required(input.manager_email, Field::ManagerEmail)?,
        customer_id: required(input.customer_id, Field::CustomerId)?,
        customer_name: required(input.customer_name, Field::CustomerName)?,
        customer_city: required(input.customer_city, Field::CustomerCity)?,
        customer_state: required(input.customer_state, Field::CustomerState)?,
        customer_payment_term: required(input.customer_payment_term, Field::CustomerPaymentTerm)?,
        ship_base: required(input.ship_base, Field::ShipBase)?,
        shipment_type: required(input.shipment_type, Field::ShipmentType)?,
        shipping_company_name: input.shipping_company_name,
        shipping_company_contact: input.shipping_company_contact,
        shipping_company_phone: input.shipping_company_phone,
        shipping_company_email: input.shipping_company_email,
        maps_link: input.maps_link,
        address_has_unpaved_road: has_unpaved_road,
        unpaved_road_size: input.unpaved_road_size,
        shipping_note: input.shipping_note,
        status: required(input.status, Field::Status)?,
    })
}

fn instant_field(raw: Option<&str>, field: Field) -> Result<DateTime<Utc>, ValidationError> {
    let rule = field.rule();
    let raw = raw.ok_or_else(|| rule.missing())?;
    parse_instant(raw).ok_or(ValidationError::InvalidDate(rule.label))
}

fn required<T>(value: Option<T>, field: Field) -> Result<T, ValidationError> {
    value.ok_or_else(|| field.rule().missing())
}
