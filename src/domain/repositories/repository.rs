use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
    #[error("record {0} does not have an integer key")]
    InvalidKey(String),
    #[error("no {0} record was returned after CREATE")]
    NotCreated(&'static str),
}
