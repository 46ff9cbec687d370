use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}

/// Every account field except the store-assigned `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFields {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}

impl Account {
    pub fn with_fields(id: i64, fields: AccountFields) -> Self {
        Account {
            id,
            name: fields.name,
            email: fields.email,
            address: fields.address,
            phone_number: fields.phone_number,
            date_joined: fields.date_joined,
        }
    }
}

impl From<Account> for AccountFields {
    fn from(account: Account) -> Self {
        AccountFields {
            name: account.name,
            email: account.email,
            address: account.address,
            phone_number: account.phone_number,
            date_joined: account.date_joined,
        }
    }
}
