use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::pantry)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PantryItem {
    pub id: i32,
    #[serde(skip)]
    pub user_id: i32,
    pub ingredient: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::pantry)]
pub struct NewPantryItem<'a> {
    pub user_id: i32,
    pub ingredient: &'a str,
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize, ToSchema)]
#[diesel(table_name = crate::schema::favorites)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Favorite {
    pub id: i32,
    #[serde(skip)]
    pub user_id: i32,
    pub title: String,
    pub link: String,
    pub image: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::favorites)]
pub struct NewFavorite<'a> {
    pub user_id: i32,
    pub title: &'a str,
    pub link: &'a str,
    pub image: &'a str,
}
