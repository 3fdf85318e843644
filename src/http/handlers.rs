use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::Instrument;
use uuid::Uuid;

use crate::domain::customer::{CustomerId, CustomerService, ErrorKind, ResponseEnvelope, RestCustomer};

use super::error::ApiError;

// ============================================================================
// Customer HTTP Handlers
// ============================================================================
//
// Thin glue: decode the request, call the service, pick a status code from
// the envelope. Each request runs inside a span carrying a fresh request id.
//
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

fn request_span(route: &'static str) -> tracing::Span {
    tracing::info_span!("http_request", request_id = %Uuid::new_v4(), route)
}

/// An empty body or a JSON `null` is an absent payload
fn decode_candidate(body: &[u8]) -> Result<Option<RestCustomer>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice(body)?)
}

fn status_for(envelope: &ResponseEnvelope<RestCustomer>, success: StatusCode) -> StatusCode {
    if envelope.is_success() {
        return success;
    }
    match envelope.error_kind() {
        Some(ErrorKind::NotFound) => StatusCode::NOT_FOUND,
        Some(ErrorKind::Conflict) => StatusCode::CONFLICT,
        Some(ErrorKind::Validation) | None => StatusCode::BAD_REQUEST,
    }
}

fn respond(envelope: ResponseEnvelope<RestCustomer>, success: StatusCode) -> HttpResponse {
    HttpResponse::build(status_for(&envelope, success)).json(envelope)
}

pub async fn list_customers(service: web::Data<CustomerService>) -> Result<HttpResponse, ApiError> {
    let customers = service
        .list_customers()
        .instrument(request_span("list_customers"))
        .await?;
    Ok(HttpResponse::Ok().json(customers))
}

pub async fn get_customer_by_id(
    service: web::Data<CustomerService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = CustomerId::new(path.into_inner());
    let envelope = service
        .get_customer_by_id(id)
        .instrument(request_span("get_customer_by_id"))
        .await?;
    Ok(respond(envelope, StatusCode::OK))
}

pub async fn get_customer_by_email(
    service: web::Data<CustomerService>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, ApiError> {
    let email = query.into_inner().email.unwrap_or_default();
    let envelope = service
        .get_customer_by_email(&email)
        .instrument(request_span("get_customer_by_email"))
        .await?;
    Ok(respond(envelope, StatusCode::OK))
}

pub async fn create_customer(
    service: web::Data<CustomerService>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let candidate = decode_candidate(&body)?;
    let envelope = service
        .create_customer(candidate)
        .instrument(request_span("create_customer"))
        .await?;
    Ok(respond(envelope, StatusCode::CREATED))
}

pub async fn update_customer_by_id(
    service: web::Data<CustomerService>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let id = CustomerId::new(path.into_inner());
    let candidate = decode_candidate(&body)?;
    let envelope = service
        .update_customer_by_id(candidate, id)
        .instrument(request_span("update_customer_by_id"))
        .await?;
    Ok(respond(envelope, StatusCode::OK))
}

pub async fn update_customer_by_email(
    service: web::Data<CustomerService>,
    query: web::Query<EmailQuery>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let candidate = decode_candidate(&body)?;
    let identifier = query.into_inner().email;
    let envelope = service
        .update_customer(candidate, identifier.as_deref())
        .instrument(request_span("update_customer"))
        .await?;
    Ok(respond(envelope, StatusCode::OK))
}

pub async fn delete_customer(
    service: web::Data<CustomerService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = CustomerId::new(path.into_inner());
    let envelope = service
        .delete_customer(Some(id))
        .instrument(request_span("delete_customer"))
        .await?;
    Ok(respond(envelope, StatusCode::OK))
}

/// `DELETE /customer/delete` without an id
pub async fn delete_customer_without_id(
    service: web::Data<CustomerService>,
) -> Result<HttpResponse, ApiError> {
    let envelope = service
        .delete_customer(None)
        .instrument(request_span("delete_customer"))
        .await?;
    Ok(respond(envelope, StatusCode::OK))
}
