// Core exports
pub mod notifications;
pub mod outcome;

pub use notifications::{DomainNotification, ErrorCollection};
pub use outcome::CommandOutcome;
