//! Favorites store: saved recipe cards (title, link, image) per user.
//! Write and read only; there is no update or delete path.

use crate::models::{Favorite, NewFavorite};
use crate::schema::favorites;
use diesel::prelude::*;

pub fn save(
    conn: &mut SqliteConnection,
    user_id: i32,
    title: &str,
    link: &str,
    image: &str,
) -> Result<(), diesel::result::Error> {
    diesel::insert_into(favorites::table)
        .values(&NewFavorite {
            user_id,
            title,
            link,
            image,
        })
        .execute(conn)?;
    Ok(())
}

pub fn list(
    conn: &mut SqliteConnection,
    user_id: i32,
) -> Result<Vec<Favorite>, diesel::result::Error> {
    favorites::table
        .filter(favorites::user_id.eq(user_id))
        .select(Favorite::as_select())
        .load(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::register;
    use crate::db::test_conn;

    #[test]
    fn save_and_list_are_per_user() {
        let mut conn = test_conn();
        let alice = register(&mut conn, "alice", "pw").unwrap();
        let bob = register(&mut conn, "bob", "pw").unwrap();

        save(&mut conn, alice.id, "Eggy Bread", "#", "/static/images/default_food.jpg").unwrap();

        let saved = list(&mut conn, alice.id).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "Eggy Bread");

        assert!(list(&mut conn, bob.id).unwrap().is_empty());
    }
}
