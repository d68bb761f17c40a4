//! Pantry store: per-user ingredient rows.
//!
//! Items are added and deleted, never edited in place. Listing returns rows in
//! storage order; insertion order is not part of the contract.

use crate::models::{NewPantryItem, PantryItem};
use crate::schema::pantry;
use diesel::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeleteError {
    #[error("Item not found")]
    NotFound,

    #[error("Forbidden")]
    Forbidden,

    #[error("Database error: {0}")]
    Db(#[from] diesel::result::Error),
}

/// Adds an ingredient for the user. Whitespace is trimmed; an empty result is
/// a no-op rather than an error.
pub fn add(
    conn: &mut SqliteConnection,
    user_id: i32,
    ingredient: &str,
) -> Result<(), diesel::result::Error> {
    let ingredient = ingredient.trim();
    if ingredient.is_empty() {
        return Ok(());
    }

    diesel::insert_into(pantry::table)
        .values(&NewPantryItem {
            user_id,
            ingredient,
        })
        .execute(conn)?;
    Ok(())
}

/// Returns only the rows owned by the given user.
pub fn list(
    conn: &mut SqliteConnection,
    user_id: i32,
) -> Result<Vec<PantryItem>, diesel::result::Error> {
    pantry::table
        .filter(pantry::user_id.eq(user_id))
        .select(PantryItem::as_select())
        .load(conn)
}

/// Owner-checked delete. The ownership check precedes the delete: a missing
/// row is NotFound, a row owned by someone else is Forbidden and is left
/// intact. A repeat delete of the same id reports NotFound.
pub fn delete(conn: &mut SqliteConnection, user_id: i32, item_id: i32) -> Result<(), DeleteError> {
    let owner_id: i32 = pantry::table
        .find(item_id)
        .select(pantry::user_id)
        .first(conn)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => DeleteError::NotFound,
            other => DeleteError::Db(other),
        })?;

    if owner_id != user_id {
        return Err(DeleteError::Forbidden);
    }

    diesel::delete(pantry::table.find(item_id)).execute(conn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::register;
    use crate::db::test_conn;

    #[test]
    fn add_and_list_are_per_user() {
        let mut conn = test_conn();
        let alice = register(&mut conn, "alice", "pw").unwrap();
        let bob = register(&mut conn, "bob", "pw").unwrap();

        add(&mut conn, alice.id, "eggs").unwrap();
        add(&mut conn, alice.id, "  milk ").unwrap();
        add(&mut conn, bob.id, "flour").unwrap();

        let items = list(&mut conn, alice.id).unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.ingredient.as_str()).collect();
        assert_eq!(names, vec!["eggs", "milk"]);

        assert_eq!(list(&mut conn, bob.id).unwrap().len(), 1);
    }

    #[test]
    fn whitespace_only_add_is_a_noop() {
        let mut conn = test_conn();
        let alice = register(&mut conn, "alice", "pw").unwrap();

        add(&mut conn, alice.id, "  ").unwrap();
        assert!(list(&mut conn, alice.id).unwrap().is_empty());
    }

    #[test]
    fn delete_by_non_owner_is_forbidden_and_keeps_the_row() {
        let mut conn = test_conn();
        let alice = register(&mut conn, "alice", "pw").unwrap();
        let bob = register(&mut conn, "bob", "pw").unwrap();

        add(&mut conn, alice.id, "eggs").unwrap();
        let item_id = list(&mut conn, alice.id).unwrap()[0].id;

        assert!(matches!(
            delete(&mut conn, bob.id, item_id),
            Err(DeleteError::Forbidden)
        ));
        assert_eq!(list(&mut conn, alice.id).unwrap().len(), 1);
    }

    #[test]
    fn owner_delete_removes_exactly_that_row() {
        let mut conn = test_conn();
        let alice = register(&mut conn, "alice", "pw").unwrap();

        add(&mut conn, alice.id, "eggs").unwrap();
        add(&mut conn, alice.id, "milk").unwrap();
        let items = list(&mut conn, alice.id).unwrap();
        let target = items[0].id;

        delete(&mut conn, alice.id, target).unwrap();

        let remaining = list(&mut conn, alice.id).unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|i| i.id != target));

        // Deleting the same id again reports NotFound
        assert!(matches!(
            delete(&mut conn, alice.id, target),
            Err(DeleteError::NotFound)
        ));
    }

    #[test]
    fn delete_of_unknown_id_is_not_found() {
        let mut conn = test_conn();
        let alice = register(&mut conn, "alice", "pw").unwrap();
        assert!(matches!(
            delete(&mut conn, alice.id, 999),
            Err(DeleteError::NotFound)
        ));
    }
}
