// Service exports
pub mod customer;
pub mod memory;

pub use customer::{CustomerService, ServiceError};
pub use memory::InMemoryCustomerService;

#[cfg(test)]
pub use customer::MockCustomerService;
