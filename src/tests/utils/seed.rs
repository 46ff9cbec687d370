use crate::domain::models::account::Account;
use ::surrealdb::{Surreal, engine::remote::ws::Client};
use chrono::NaiveDate;

/// Inserts an account at a fixed key, bypassing the id sequence.
pub async fn seed_account(conn: &Surreal<Client>, id: i64) -> Account {
    let account = Account {
        id,
        name: "Test Account".to_string(),
        email: "test_account@email.com".to_string(),
        address: "12 Test Street".to_string(),
        phone_number: "555-0199".to_string(),
        date_joined: NaiveDate::from_ymd_opt(2023, 7, 14).unwrap(),
    };

    let query = format!(
        r#"
        CREATE type::thing('account', {}) CONTENT {{
            name: '{}',
            email: '{}',
            address: '{}',
            phone_number: '{}',
            date_joined: '{}'
        }};
        UPSERT sequence:account SET value = {};
        "#,
        account.id,
        account.name,
        account.email,
        account.address,
        account.phone_number,
        account.date_joined,
        account.id
    );

    conn.query(query).await.unwrap().check().unwrap();

    account
}
