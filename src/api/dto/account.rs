use crate::domain::models::account::{Account, AccountFields};
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    #[schema(examples(1))]
    id: i64,
    name: String,
    email: String,
    address: String,
    phone_number: String,
    #[schema(examples("2024-03-01"))]
    date_joined: NaiveDate,
}

/// Request body for create and update. Unknown keys, `id` included, are ignored.
#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct AccountPayloadDTO {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[schema(examples("Joe"))]
    pub name: String,

    #[validate(length(min = 1, message = "Email must not be empty"))]
    #[schema(examples("joe@example.com"))]
    pub email: String,

    #[validate(length(min = 1, message = "Address must not be empty"))]
    #[schema(examples("1 Main Road"))]
    pub address: String,

    #[validate(length(min = 1, message = "Phone number must not be empty"))]
    #[schema(examples("555-0100"))]
    pub phone_number: String,

    #[schema(examples("2024-03-01"))]
    pub date_joined: Option<NaiveDate>,
}

impl AccountPayloadDTO {
    /// `fallback` fills `date_joined` when the body leaves it out.
    pub fn into_fields(self, fallback: NaiveDate) -> AccountFields {
        AccountFields {
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            date_joined: self.date_joined.unwrap_or(fallback),
        }
    }
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
            address: val.address,
            phone_number: val.phone_number,
            date_joined: val.date_joined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_serializes_date_as_iso_string() {
        let account = Account {
            id: 3,
            name: "Joe".to_string(),
            email: "joe@x.com".to_string(),
            address: "1 Rd".to_string(),
            phone_number: "555-1".to_string(),
            date_joined: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };

        let value = serde_json::to_value(AccountDTO::from(account)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Joe",
                "email": "joe@x.com",
                "address": "1 Rd",
                "phone_number": "555-1",
                "date_joined": "2024-03-01"
            })
        );
    }

    #[test]
    fn test_payload_ignores_id_and_defaults_date() {
        let payload: AccountPayloadDTO = serde_json::from_value(json!({
            "id": 99,
            "name": "Joe",
            "email": "joe@x.com",
            "address": "1 Rd",
            "phone_number": "555-1"
        }))
        .unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let fields = payload.into_fields(today);

        assert_eq!(fields.name, "Joe");
        assert_eq!(fields.date_joined, today);
    }

    #[test]
    fn test_payload_rejects_non_string_field() {
        let result = serde_json::from_value::<AccountPayloadDTO>(json!({
            "name": "Joe",
            "email": 42,
            "address": "1 Rd",
            "phone_number": "555-1"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_payload_rejects_empty_field() {
        let payload: AccountPayloadDTO = serde_json::from_value(json!({
            "name": "Joe",
            "email": "joe@x.com",
            "address": "",
            "phone_number": "555-1"
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("address"));
    }
}
