//! Customer API - HTTP endpoints for customer registration and lookup
//!
//! Handlers validate their input, call exactly one [`services::CustomerService`]
//! method and answer with the uniform [`models::Envelope`].

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CommandOutcome, DomainNotification, ErrorCollection};
pub use models::{AddNewCustomerViewModel, Customer, Envelope, ErrorPayload, Purchase, RemoveCustomerViewModel, UpdateCustomerViewModel};
pub use routes::{configure_routes, AppState};
pub use services::{CustomerService, InMemoryCustomerService, ServiceError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let envelope = Envelope::failure("Email is required");
        assert!(!envelope.is_success_status_code);
        assert_eq!(envelope.errors, Some(ErrorPayload::Message("Email is required".to_string())));
    }
}
