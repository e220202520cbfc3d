use crate::core::notifications::{DomainNotification, ErrorCollection};

/// Result of a customer command that completed without a fault
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command was applied.
    Applied,
    /// The command broke one or more business rules and nothing was changed.
    Rejected(ErrorCollection),
}

impl CommandOutcome {
    pub fn rejected(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Rejected(DomainNotification::new(key, value).into())
    }

    /// Violations carried by the outcome; empty when applied
    pub fn errors(&self) -> Option<&ErrorCollection> {
        match self {
            Self::Rejected(errors) if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }
}

impl From<ErrorCollection> for CommandOutcome {
    fn from(errors: ErrorCollection) -> Self {
        if errors.is_empty() {
            Self::Applied
        } else {
            Self::Rejected(errors)
        }
    }
}
