use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Payload for `POST /api/customer/Add`
///
/// Missing fields bind to their empty value and are reported by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct AddNewCustomerViewModel {
    #[validate(length(min = 2, max = 100, message = "The Name must have between 2 and 100 characters"))]
    pub name: String,
    #[validate(email(message = "E-mail invalid"))]
    pub email: String,
    #[validate(required(message = "The birth date is required"))]
    pub birth_date: Option<NaiveDate>,
}

/// Payload for `PATCH /api/customer/update`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateCustomerViewModel {
    #[validate(custom(function = "validate_customer_id"))]
    pub id: Uuid,
    #[validate(length(min = 2, max = 100, message = "The Name must have between 2 and 100 characters"))]
    pub name: String,
    #[validate(email(message = "E-mail invalid"))]
    pub email: String,
    #[validate(required(message = "The birth date is required"))]
    pub birth_date: Option<NaiveDate>,
}

/// Payload for `DELETE /api/customer/delete`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoveCustomerViewModel {
    #[validate(custom(function = "validate_customer_id"))]
    pub id: Uuid,
}

fn validate_customer_id(id: &Uuid) -> Result<(), ValidationError> {
    if id.is_nil() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::from("The customer id is required"));
        return Err(error);
    }
    Ok(())
}

/// Query string of `GET /api/customer/email`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailQuery {
    #[serde(default)]
    pub email: Option<String>,
}

impl EmailQuery {
    /// The requested email, `None` when missing or empty
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}

/// Query string of `GET /api/customer/id` and `GET /api/customer/purchases`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerIdQuery {
    #[serde(default, alias = "customer_id", rename = "customerId")]
    pub customer_id: Option<String>,
}

impl CustomerIdQuery {
    /// The requested id; missing or unparsable values bind to the nil UUID
    pub fn customer_id(&self) -> Uuid {
        self.customer_id
            .as_deref()
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
            .unwrap_or_else(Uuid::nil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth_date() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(1985, 4, 2)
    }

    #[test]
    fn test_valid_add_model() {
        let model = AddNewCustomerViewModel {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            birth_date: birth_date(),
        };
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_bind_to_empty_values() {
        let model: AddNewCustomerViewModel = serde_json::from_str(r#"{"name":"Grace Hopper"}"#).unwrap();
        assert_eq!(model.email, "");
        assert!(model.birth_date.is_none());

        let errors = model.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("birth_date"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn test_remove_model_rejects_nil_id() {
        let model = RemoveCustomerViewModel { id: Uuid::nil() };
        let errors = model.validate().unwrap_err();
        let messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, errs)| errs.iter().filter_map(|e| e.message.as_ref().map(|m| m.to_string())))
            .collect();
        assert_eq!(messages, vec!["The customer id is required"]);
    }

    #[test]
    fn test_update_model_reads_camel_case() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"id":"{id}","name":"Ada","email":"ada@example.com","birthDate":"1990-01-31"}}"#);
        let model: UpdateCustomerViewModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model.id, id);
        assert_eq!(model.birth_date, NaiveDate::from_ymd_opt(1990, 1, 31));
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_customer_id_query_binding() {
        let id = Uuid::new_v4();
        let query = CustomerIdQuery { customer_id: Some(id.to_string()) };
        assert_eq!(query.customer_id(), id);

        let query = CustomerIdQuery { customer_id: Some("not-a-uuid".to_string()) };
        assert!(query.customer_id().is_nil());

        assert!(CustomerIdQuery::default().customer_id().is_nil());
    }

    #[test]
    fn test_email_query_treats_empty_as_missing() {
        assert_eq!(EmailQuery { email: Some(String::new()) }.email(), None);
        assert_eq!(EmailQuery::default().email(), None);
        assert_eq!(EmailQuery { email: Some("a@b.io".to_string()) }.email(), Some("a@b.io"));
    }
}
