use crate::models::{NewUser, User};
use crate::schema::users;
use diesel::prelude::*;
use thiserror::Error;

use super::crypto::digest_password;

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Database error: {0}")]
    Db(#[from] diesel::result::Error),
}

/// Login failures are deliberately distinct so the form can tell the user
/// which half was wrong. No rate limiting; this trades lookup secrecy for
/// usability.
#[derive(Error, Debug)]
pub enum AuthFailure {
    #[error("Username not found. Please register first.")]
    UsernameNotFound,

    #[error("Wrong password. Please try again.")]
    WrongPassword,

    #[error("Database error: {0}")]
    Db(diesel::result::Error),
}

/// Creates an account, storing a one-way digest of the password. The username
/// is trimmed first; uniqueness is case-sensitive exact match, enforced by the
/// unique index.
pub fn register(
    conn: &mut SqliteConnection,
    username: &str,
    password: &str,
) -> Result<User, RegisterError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(RegisterError::EmptyUsername);
    }

    let password_hash = digest_password(password);
    let new_user = NewUser {
        username,
        password_hash: &password_hash,
    };

    diesel::insert_into(users::table)
        .values(&new_user)
        .returning(User::as_returning())
        .get_result(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => RegisterError::DuplicateUsername,
            other => RegisterError::Db(other),
        })
}

/// Looks up the username exactly and compares password digests.
pub fn verify_credentials(
    conn: &mut SqliteConnection,
    username: &str,
    password: &str,
) -> Result<User, AuthFailure> {
    let user: User = users::table
        .filter(users::username.eq(username))
        .select(User::as_select())
        .first(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => AuthFailure::UsernameNotFound,
            other => AuthFailure::Db(other),
        })?;

    if user.password_hash != digest_password(password) {
        return Err(AuthFailure::WrongPassword);
    }

    Ok(user)
}

/// Fetches a user by id; None if the account no longer exists.
pub fn get_user(conn: &mut SqliteConnection, user_id: i32) -> Option<User> {
    users::table
        .find(user_id)
        .select(User::as_select())
        .first(conn)
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_conn;

    #[test]
    fn register_then_verify() {
        let mut conn = test_conn();
        let user = register(&mut conn, "alice", "secret").unwrap();
        let verified = verify_credentials(&mut conn, "alice", "secret").unwrap();
        assert_eq!(verified.id, user.id);
    }

    #[test]
    fn register_trims_username() {
        let mut conn = test_conn();
        let user = register(&mut conn, "  bob  ", "pw").unwrap();
        assert_eq!(user.username, "bob");
    }

    #[test]
    fn register_rejects_empty_username() {
        let mut conn = test_conn();
        assert!(matches!(
            register(&mut conn, "   ", "pw"),
            Err(RegisterError::EmptyUsername)
        ));
    }

    #[test]
    fn register_rejects_duplicate_username() {
        let mut conn = test_conn();
        register(&mut conn, "alice", "one").unwrap();
        assert!(matches!(
            register(&mut conn, "alice", "two"),
            Err(RegisterError::DuplicateUsername)
        ));
    }

    #[test]
    fn verify_distinguishes_failure_reasons() {
        let mut conn = test_conn();
        register(&mut conn, "alice", "secret").unwrap();

        assert!(matches!(
            verify_credentials(&mut conn, "alice", "wrong"),
            Err(AuthFailure::WrongPassword)
        ));
        assert!(matches!(
            verify_credentials(&mut conn, "nobody", "anything"),
            Err(AuthFailure::UsernameNotFound)
        ));
    }

    #[test]
    fn usernames_are_case_sensitive() {
        let mut conn = test_conn();
        register(&mut conn, "Alice", "secret").unwrap();
        assert!(matches!(
            verify_credentials(&mut conn, "alice", "secret"),
            Err(AuthFailure::UsernameNotFound)
        ));
    }

    #[test]
    fn get_user_roundtrip() {
        let mut conn = test_conn();
        let user = register(&mut conn, "alice", "secret").unwrap();
        assert_eq!(get_user(&mut conn, user.id).unwrap().username, "alice");
        assert!(get_user(&mut conn, user.id + 1).is_none());
    }
}
