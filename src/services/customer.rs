//! Port through which the HTTP layer reaches customer business logic.

use crate::core::CommandOutcome;
use crate::models::{AddNewCustomerViewModel, Customer, Purchase, RemoveCustomerViewModel, UpdateCustomerViewModel};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Faults a customer service can raise
///
/// Business-rule violations are not faults; they come back as
/// [`CommandOutcome::Rejected`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Customer {0} was not found")]
    CustomerNotFound(Uuid),

    #[error("Customer service unavailable: {0}")]
    Unavailable(String),
}

/// Customer use cases consumed by the HTTP handlers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Whether no customer is registered under `email`.
    async fn is_email_available(&self, email: &str) -> Result<bool, ServiceError>;

    async fn get_customer_by_id(&self, id: Uuid) -> Result<Customer, ServiceError>;

    /// Purchases made by the customer, oldest first.
    async fn get_customer_purchase_history(&self, id: Uuid) -> Result<Vec<Purchase>, ServiceError>;

    async fn add(&self, model: AddNewCustomerViewModel) -> Result<CommandOutcome, ServiceError>;

    async fn update(&self, model: UpdateCustomerViewModel) -> Result<CommandOutcome, ServiceError>;

    async fn remove(&self, model: RemoveCustomerViewModel) -> Result<CommandOutcome, ServiceError>;
}
