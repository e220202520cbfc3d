//! Customer endpoints under `/api/customer`.
//!
//! ```text
//! GET    /api/customer/email?email=ada@example.com
//! GET    /api/customer/id?customerId={uuid}
//! GET    /api/customer/purchases?customerId={uuid}
//! POST   /api/customer/Add      {"name":"Ada","email":"ada@example.com","birthDate":"1990-12-10"}
//! PATCH  /api/customer/update   {"id":"{uuid}","name":"Ada","email":"ada@example.com","birthDate":"1990-12-10"}
//! DELETE /api/customer/delete   {"id":"{uuid}"}
//! ```
//!
//! Every response body is an [`Envelope`]. Faults raised by the service are
//! reported as 400 on the read endpoints and as 404 on the mutation endpoints.

use crate::core::CommandOutcome;
use crate::models::{
    AddNewCustomerViewModel, CustomerIdQuery, EmailQuery, Envelope, RemoveCustomerViewModel, UpdateCustomerViewModel,
};
use crate::services::{CustomerService, ServiceError};
use actix_web::{web, HttpResponse};
use serde::Serialize;
use std::sync::Arc;
use validator::{Validate, ValidationErrors};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const CUSTOMER_ID_REQUIRED: &str = "Customer id is required";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CustomerService>,
}

impl AppState {
    pub fn new(customers: Arc<dyn CustomerService>) -> Self {
        Self { customers }
    }
}

/// Configure all customer routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/email", web::get().to(is_email_available))
        .route("/id", web::get().to(get_customer_by_id))
        .route("/purchases", web::get().to(get_purchase_history))
        .route("/Add", web::post().to(add_customer))
        .route("/add", web::post().to(add_customer))
        .route("/update", web::patch().to(update_customer))
        .route("/delete", web::delete().to(delete_customer));
}

/// GET /api/customer/email?email={email}
async fn is_email_available(state: web::Data<AppState>, query: web::Query<EmailQuery>) -> HttpResponse {
    let Some(email) = query.email() else {
        return HttpResponse::BadRequest().json(Envelope::failure(EMAIL_REQUIRED));
    };

    let result = state.customers.is_email_available(email).await;
    read_response("is_email_available", result)
}

/// GET /api/customer/id?customerId={uuid}
async fn get_customer_by_id(state: web::Data<AppState>, query: web::Query<CustomerIdQuery>) -> HttpResponse {
    let customer_id = query.customer_id();
    if customer_id.is_nil() {
        return HttpResponse::BadRequest().json(Envelope::failure(CUSTOMER_ID_REQUIRED));
    }

    let result = state.customers.get_customer_by_id(customer_id).await;
    read_response("get_customer_by_id", result)
}

/// GET /api/customer/purchases?customerId={uuid}
async fn get_purchase_history(state: web::Data<AppState>, query: web::Query<CustomerIdQuery>) -> HttpResponse {
    let customer_id = query.customer_id();
    if customer_id.is_nil() {
        return HttpResponse::BadRequest().json(Envelope::failure(CUSTOMER_ID_REQUIRED));
    }

    let result = state.customers.get_customer_purchase_history(customer_id).await;
    read_response("get_purchase_history", result)
}

/// POST /api/customer/Add
async fn add_customer(state: web::Data<AppState>, model: web::Json<AddNewCustomerViewModel>) -> HttpResponse {
    if let Err(errors) = model.validate() {
        return invalid_payload("add_customer", &errors);
    }

    let result = state.customers.add(model.into_inner()).await;
    command_response("add_customer", result)
}

/// PATCH /api/customer/update
async fn update_customer(state: web::Data<AppState>, model: web::Json<UpdateCustomerViewModel>) -> HttpResponse {
    if let Err(errors) = model.validate() {
        return invalid_payload("update_customer", &errors);
    }

    let result = state.customers.update(model.into_inner()).await;
    command_response("update_customer", result)
}

/// DELETE /api/customer/delete
async fn delete_customer(state: web::Data<AppState>, model: web::Json<RemoveCustomerViewModel>) -> HttpResponse {
    if let Err(errors) = model.validate() {
        return invalid_payload("delete_customer", &errors);
    }

    let result = state.customers.remove(model.into_inner()).await;
    command_response("delete_customer", result)
}

fn invalid_payload(operation: &str, errors: &ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed for {}: {}", operation, errors);
    HttpResponse::BadRequest().json(Envelope::failure(errors))
}

fn read_response<T: Serialize>(operation: &str, result: Result<T, ServiceError>) -> HttpResponse {
    match result {
        Ok(results) => HttpResponse::Ok().json(Envelope::ok(results)),
        Err(e) => {
            tracing::warn!("{} failed: {}", operation, e);
            HttpResponse::BadRequest().json(Envelope::failure(e.to_string()))
        }
    }
}

// Mutation faults map to 404, not 400.
fn command_response(operation: &str, result: Result<CommandOutcome, ServiceError>) -> HttpResponse {
    match result {
        Ok(outcome) => match outcome.errors() {
            Some(errors) => {
                tracing::info!("{} rejected: {:?}", operation, errors.messages());
                HttpResponse::BadRequest().json(Envelope::failure(errors))
            }
            None => HttpResponse::Ok().json(Envelope::success()),
        },
        Err(e) => {
            tracing::warn!("{} failed: {}", operation, e);
            HttpResponse::NotFound().json(Envelope::failure(e.to_string()))
        }
    }
}
