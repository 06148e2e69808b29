//! User administration for the `nt-cli` binary.

use std::fmt::Write as _;

use anyhow::Context;
use nt_models::{Email, NewUser, User};
use sqlx::PgPool;

use crate::modules::users::UserService;

pub async fn create_user(db: &PgPool, name: &str, email: &str) -> anyhow::Result<User> {
    let email = Email::new(email.trim())?;
    let user = UserService::create_user(db, NewUser::new(name.trim(), email)).await?;
    Ok(user)
}

pub async fn list_users(db: &PgPool) -> anyhow::Result<Vec<User>> {
    UserService::list_users(db)
        .await
        .context("Failed to list users")
}

/// One line per user: id, email, name, creation time.
pub fn render_users(users: &[User]) -> String {
    let mut out = String::new();
    for user in users {
        let _ = writeln!(
            out,
            "{}  {:<32}  {:<24}  {}",
            user.id,
            user.email,
            user.name,
            user.created_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
    out
}
