use actix_web::{web, HttpResponse};

use crate::application::sales_order_service::SalesOrderService;
use crate::domain::sales_order::{SalesOrder, UnvalidatedSalesOrder};
use crate::errors::AppError;

/// POST /sales-orders
///
/// Validates the intake payload, stores it and answers with the nested
/// order. Rejections carry a single message naming the first rule that
/// failed; storage failures answer with a generic message.
#[utoipa::path(
    post,
    path = "/sales-orders",
    request_body = UnvalidatedSalesOrder,
    responses(
        (status = 201, description = "Sales order created", body = SalesOrder),
        (status = 400, description = "Rejected input, body is the reason", body = String),
        (status = 500, description = "Storage failure", body = String),
    ),
    tag = "sales-orders"
)]
pub async fn create_sales_order(
    service: web::Data<SalesOrderService>,
    body: web::Json<UnvalidatedSalesOrder>,
) -> Result<HttpResponse, AppError> {
    let order = service.create_sales_order(body.into_inner()).await?;

    log::info!("Created sales order {}", order.id);
    Ok(HttpResponse::Created().json(order))
}

/// Turns undecodable JSON bodies into a 400 carrying the decoder's message.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}
