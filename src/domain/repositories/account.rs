use async_trait::async_trait;

use crate::domain::models::account::{Account, AccountFields};

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, fields: AccountFields) -> RepositoryResult<Account>;
    async fn find(&self, id: i64) -> RepositoryResult<Option<Account>>;
    /// Replaces every field but `id`. `None` when no record has that id.
    async fn update(&self, account: Account) -> RepositoryResult<Option<Account>>;
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
    async fn list(&self) -> RepositoryResult<Vec<Account>>;
}
