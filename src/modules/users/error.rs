use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),
    #[error("Invalid user: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UserStoreError {
    pub fn is_duplicate_email(&self) -> bool {
        matches!(self, Self::DuplicateEmail(_))
    }
}
