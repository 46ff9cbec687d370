use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account::{Account, AccountFields};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountContent};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";

// The counter record lives at `sequence:<table>`; the UPSERT is atomic per row.
const CREATE_WITH_NEXT_ID: &str = r#"
    LET $id = (UPSERT ONLY type::thing('sequence', $table) SET value += 1 RETURN VALUE value);
    CREATE ONLY type::thing($table, $id) CONTENT $content;
"#;

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn create(&self, fields: AccountFields) -> RepositoryResult<Account> {
        let account: Option<SurrealAccount> = self
            .db
            .query(CREATE_WITH_NEXT_ID)
            .bind(("table", ACCOUNT))
            .bind(("content", SurrealAccountContent::from(fields)))
            .await?
            .take(1)?;

        match account {
            Some(account) => account.try_into(),
            None => Err(RepositoryError::NotCreated(ACCOUNT)),
        }
    }

    async fn find(&self, id: i64) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = self.db.select((ACCOUNT, id)).await?;

        account.map(Account::try_from).transpose()
    }

    async fn update(&self, account: Account) -> RepositoryResult<Option<Account>> {
        let id = account.id;

        let updated: Option<SurrealAccount> = self
            .db
            .update((ACCOUNT, id))
            .merge(SurrealAccountContent::from(AccountFields::from(account)))
            .await?;

        updated.map(Account::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let deleted: Option<SurrealAccount> = self.db.delete((ACCOUNT, id)).await?;

        Ok(deleted.is_some())
    }

    async fn list(&self) -> RepositoryResult<Vec<Account>> {
        let accounts: Vec<SurrealAccount> = self
            .db
            .query("SELECT * FROM type::table($table) ORDER BY id ASC")
            .bind(("table", ACCOUNT))
            .await?
            .take(0)?;

        accounts.into_iter().map(Account::try_from).collect()
    }
}
