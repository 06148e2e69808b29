use nt_db::{USER_EMAIL_UNIQUE, is_unique_violation, unique_violation_constraint};
use nt_models::{Email, NewUser, UpdateUser, User, UserId};
use sqlx::PgPool;
use tracing::{info, instrument};
use validator::Validate;

use super::error::UserStoreError;
use crate::metrics::track_user_created;

const USER_COLUMNS: &str = "id, name, email, created_at, updated_at";

pub struct UserService;

impl UserService {
    /// Inserts a user with a freshly minted time-ordered id.
    ///
    /// Fails with [`UserStoreError::DuplicateEmail`] when the email is taken.
    #[instrument(skip(db))]
    pub async fn create_user(db: &PgPool, dto: NewUser) -> Result<User, UserStoreError> {
        dto.validate()?;

        let id = UserId::new();
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO _user (id, name, email) VALUES ($1, $2, $3) RETURNING {}",
            USER_COLUMNS
        ))
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.email)
        .fetch_one(db)
        .await
        .map_err(|e| map_email_conflict(e, &dto.email))?;

        info!(user_id = %user.id, "User created");
        track_user_created();

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: UserId) -> Result<Option<User>, UserStoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM _user WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn find_by_email(db: &PgPool, email: &Email) -> Result<Option<User>, UserStoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM _user WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    /// All users, oldest first.
    #[instrument(skip(db))]
    pub async fn list_users(db: &PgPool) -> Result<Vec<User>, UserStoreError> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM _user ORDER BY id",
            USER_COLUMNS
        ))
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    /// Changes `name` and/or `email`. `updated_at` is left as it was; call
    /// [`touch`](Self::touch) when it should move.
    #[instrument(skip(db))]
    pub async fn update_user(
        db: &PgPool,
        id: UserId,
        dto: UpdateUser,
    ) -> Result<Option<User>, UserStoreError> {
        dto.validate()?;

        if dto.is_empty() {
            return Self::get_user(db, id).await;
        }

        let user = sqlx::query_as::<_, User>(&format!(
            r#"UPDATE _user
               SET name = COALESCE($2, name), email = COALESCE($3, email)
               WHERE id = $1
               RETURNING {}"#,
            USER_COLUMNS
        ))
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .map_err(|e| match &dto.email {
            Some(email) => map_email_conflict(e, email),
            None => e.into(),
        })?;

        Ok(user)
    }

    /// Sets `updated_at` to the current time.
    #[instrument(skip(db))]
    pub async fn touch(db: &PgPool, id: UserId) -> Result<Option<User>, UserStoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE _user SET updated_at = now() WHERE id = $1 RETURNING {}",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }
}

fn map_email_conflict(err: sqlx::Error, email: &Email) -> UserStoreError {
    let on_email = unique_violation_constraint(&err).is_none_or(|c| c == USER_EMAIL_UNIQUE);
    if is_unique_violation(&err) && on_email {
        return UserStoreError::DuplicateEmail(email.to_string());
    }
    UserStoreError::Database(err)
}
