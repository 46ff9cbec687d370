use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, AccountFields};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn list(&self) -> AppResult<Vec<Account>>;
    async fn create(&self, fields: AccountFields) -> AppResult<Account>;
    async fn find(&self, id: i64) -> AppResult<Account>;
    async fn update(&self, account: Account) -> AppResult<Account>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}
