use serde::{Serialize, Serializer};

/// A single business-rule violation raised while handling a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainNotification {
    pub key: String,
    pub value: String,
}

impl DomainNotification {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered collection of business-rule violations for one command
///
/// Serializes as the list of violation messages, in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorCollection {
    notifications: Vec<DomainNotification>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.notifications.push(DomainNotification::new(key, value));
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainNotification> {
        self.notifications.iter()
    }

    /// Violation messages, without their keys
    pub fn messages(&self) -> Vec<String> {
        self.notifications.iter().map(|n| n.value.clone()).collect()
    }
}

impl From<DomainNotification> for ErrorCollection {
    fn from(notification: DomainNotification) -> Self {
        Self {
            notifications: vec![notification],
        }
    }
}

impl FromIterator<DomainNotification> for ErrorCollection {
    fn from_iter<I: IntoIterator<Item = DomainNotification>>(iter: I) -> Self {
        Self {
            notifications: iter.into_iter().collect(),
        }
    }
}

impl Serialize for ErrorCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.notifications.iter().map(|n| &n.value))
    }
}
