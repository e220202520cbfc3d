// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Customer, Purchase};
pub use requests::{AddNewCustomerViewModel, CustomerIdQuery, EmailQuery, RemoveCustomerViewModel, UpdateCustomerViewModel};
pub use responses::{Envelope, ErrorPayload, HealthResponse};
