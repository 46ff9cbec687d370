use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    models::account::{Account, AccountFields},
    repositories::account::AccountRepository,
    services::account::AccountService,
};

use async_trait::async_trait;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn list(&self) -> AppResult<Vec<Account>> {
        let accounts = self.repository.list().await?;

        tracing::debug!(count = accounts.len(), "listed accounts");

        Ok(accounts)
    }

    async fn create(&self, fields: AccountFields) -> AppResult<Account> {
        let account = self.repository.create(fields).await?;

        tracing::info!(id = account.id, "created account");

        Ok(account)
    }

    async fn find(&self, id: i64) -> AppResult<Account> {
        match self.repository.find(id).await? {
            Some(account) => Ok(account),
            None => {
                tracing::debug!(id, "account not found");
                Err(AppError::account_not_found(id))
            }
        }
    }

    async fn update(&self, account: Account) -> AppResult<Account> {
        let id = account.id;

        match self.repository.update(account).await? {
            Some(account) => {
                tracing::info!(id, "updated account");
                Ok(account)
            }
            None => Err(AppError::account_not_found(id)),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            tracing::debug!(id, "account not found");
            return Err(AppError::account_not_found(id));
        }

        tracing::info!(id, "deleted account");

        Ok(())
    }
}
