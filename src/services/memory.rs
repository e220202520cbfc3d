use crate::core::{CommandOutcome, ErrorCollection};
use crate::models::{AddNewCustomerViewModel, Customer, Purchase, RemoveCustomerViewModel, UpdateCustomerViewModel};
use crate::services::customer::{CustomerService, ServiceError};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

const EMAIL_TAKEN: &str = "The customer e-mail has already been taken.";
const BIRTH_DATE_REQUIRED: &str = "The birth date is required";

#[derive(Debug, Default)]
struct Store {
    customers: HashMap<Uuid, Customer>,
    purchases: HashMap<Uuid, Vec<Purchase>>,
}

impl Store {
    /// Id of the customer registered under `email`, if any
    fn owner_of(&self, email: &str) -> Option<Uuid> {
        let wanted = normalize_email(email);
        self.customers
            .values()
            .find(|customer| normalize_email(&customer.email) == wanted)
            .map(|customer| customer.id)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Customer service that keeps everything in process memory
///
/// Enforces unique emails and rejects commands aimed at unknown customers.
/// Data does not survive a restart.
#[derive(Debug, Default)]
pub struct InMemoryCustomerService {
    store: RwLock<Store>,
}

impl InMemoryCustomerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a purchase to a customer's history
    pub async fn record_purchase(
        &self,
        customer_id: Uuid,
        product: impl Into<String>,
        quantity: u32,
        unit_price: f64,
    ) -> Result<Purchase, ServiceError> {
        let mut store = self.store.write().await;
        if !store.customers.contains_key(&customer_id) {
            return Err(ServiceError::CustomerNotFound(customer_id));
        }

        let purchase = Purchase {
            id: Uuid::new_v4(),
            customer_id,
            product: product.into(),
            quantity,
            unit_price,
            purchased_at: Utc::now(),
        };
        store.purchases.entry(customer_id).or_default().push(purchase.clone());

        tracing::debug!("Recorded purchase {} for customer {}", purchase.id, customer_id);
        Ok(purchase)
    }

    /// Customer registered under `email`, compared case-insensitively
    pub async fn find_by_email(&self, email: &str) -> Option<Customer> {
        let store = self.store.read().await;
        let id = store.owner_of(email)?;
        store.customers.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.customers.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.customers.is_empty()
    }
}

#[async_trait]
impl CustomerService for InMemoryCustomerService {
    async fn is_email_available(&self, email: &str) -> Result<bool, ServiceError> {
        Ok(self.store.read().await.owner_of(email).is_none())
    }

    async fn get_customer_by_id(&self, id: Uuid) -> Result<Customer, ServiceError> {
        self.store
            .read()
            .await
            .customers
            .get(&id)
            .cloned()
            .ok_or(ServiceError::CustomerNotFound(id))
    }

    async fn get_customer_purchase_history(&self, id: Uuid) -> Result<Vec<Purchase>, ServiceError> {
        let store = self.store.read().await;
        if !store.customers.contains_key(&id) {
            return Err(ServiceError::CustomerNotFound(id));
        }
        Ok(store.purchases.get(&id).cloned().unwrap_or_default())
    }

    async fn add(&self, model: AddNewCustomerViewModel) -> Result<CommandOutcome, ServiceError> {
        let mut errors = ErrorCollection::new();
        let mut store = self.store.write().await;

        if store.owner_of(&model.email).is_some() {
            errors.push("email", EMAIL_TAKEN);
        }
        let Some(birth_date) = model.birth_date else {
            errors.push("birthDate", BIRTH_DATE_REQUIRED);
            return Ok(errors.into());
        };
        if !errors.is_empty() {
            tracing::info!("Rejected new customer {}: {:?}", model.email, errors.messages());
            return Ok(errors.into());
        }

        let customer = Customer {
            id: Uuid::new_v4(),
            name: model.name.trim().to_string(),
            email: model.email.trim().to_string(),
            birth_date,
        };
        tracing::info!("Registered customer {} ({})", customer.id, customer.email);
        store.customers.insert(customer.id, customer);

        Ok(CommandOutcome::Applied)
    }

    async fn update(&self, model: UpdateCustomerViewModel) -> Result<CommandOutcome, ServiceError> {
        let mut errors = ErrorCollection::new();
        let mut store = self.store.write().await;

        if !store.customers.contains_key(&model.id) {
            return Err(ServiceError::CustomerNotFound(model.id));
        }
        if store.owner_of(&model.email).is_some_and(|owner| owner != model.id) {
            errors.push("email", EMAIL_TAKEN);
        }
        let Some(birth_date) = model.birth_date else {
            errors.push("birthDate", BIRTH_DATE_REQUIRED);
            return Ok(errors.into());
        };
        if !errors.is_empty() {
            tracing::info!("Rejected update of customer {}: {:?}", model.id, errors.messages());
            return Ok(errors.into());
        }

        let Some(customer) = store.customers.get_mut(&model.id) else {
            return Err(ServiceError::CustomerNotFound(model.id));
        };
        customer.name = model.name.trim().to_string();
        customer.email = model.email.trim().to_string();
        customer.birth_date = birth_date;
        tracing::info!("Updated customer {}", model.id);

        Ok(CommandOutcome::Applied)
    }

    async fn remove(&self, model: RemoveCustomerViewModel) -> Result<CommandOutcome, ServiceError> {
        let mut store = self.store.write().await;

        if store.customers.remove(&model.id).is_none() {
            return Err(ServiceError::CustomerNotFound(model.id));
        }
        let purchases = store.purchases.remove(&model.id).map_or(0, |p| p.len());
        tracing::info!("Removed customer {} and {} purchases", model.id, purchases);

        Ok(CommandOutcome::Applied)
    }
}
