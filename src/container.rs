use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;

use crate::services::account::AccountServiceImpl;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
}

impl Container {
    pub fn new(conn: Surreal<Client>) -> Self {
        let db = Arc::new(conn);

        Container::with_repository(Arc::new(AccountRepositoryImpl::new(db)))
    }

    pub fn with_repository(account_repository: Arc<dyn AccountRepository>) -> Self {
        Container {
            account_service: Arc::new(AccountServiceImpl::new(account_repository)),
        }
    }
}
