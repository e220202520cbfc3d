use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer as returned by the customer service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

/// One entry of a customer's purchase history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub product: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub purchased_at: DateTime<Utc>,
}

impl Purchase {
    pub fn total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_serializes_camel_case() {
        let customer = Customer {
            id: Uuid::nil(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
        };

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["birthDate"], "1990-12-10");
        assert_eq!(json["email"], "ada@example.com");
    }

    #[test]
    fn test_purchase_total() {
        let purchase = Purchase {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            product: "Keyboard".to_string(),
            quantity: 3,
            unit_price: 2.5,
            purchased_at: Utc::now(),
        };

        assert_eq!(purchase.total(), 7.5);
    }
}
