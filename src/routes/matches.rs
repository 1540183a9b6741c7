use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use sqlx::SqlitePool;

use crate::handlers::match_handler;
use crate::models::{ExtraTimeQuery, MatchUpdate, NewMatch};

/// List every stored match
#[get("")]
async fn list_matches(pool: web::Data<SqlitePool>) -> HttpResponse {
    match_handler::list_matches(pool).await
}

/// Fetch a single match by id
#[get("/{id}")]
async fn get_match(path: web::Path<i64>, pool: web::Data<SqlitePool>) -> HttpResponse {
    match_handler::get_match(path.into_inner(), pool).await
}

/// Create a new match record
#[post("")]
async fn create_match(
    new_match: web::Json<NewMatch>,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    match_handler::create_match(new_match, pool).await
}

/// Replace the descriptive fields of a match
#[put("/{id}")]
async fn update_match(
    path: web::Path<i64>,
    update: web::Json<MatchUpdate>,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    match_handler::update_match(path.into_inner(), update, pool).await
}

/// Remove a match record
#[delete("/{id}")]
async fn delete_match(path: web::Path<i64>, pool: web::Data<SqlitePool>) -> HttpResponse {
    match_handler::delete_match(path.into_inner(), pool).await
}

/// Register one goal and return the new count
#[patch("/{id}/goals")]
async fn register_goal(path: web::Path<i64>, pool: web::Data<SqlitePool>) -> HttpResponse {
    match_handler::register_goal(path.into_inner(), pool).await
}

/// Register one yellow card and return the new count
#[patch("/{id}/yellowcards")]
async fn register_yellow_card(
    path: web::Path<i64>,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    match_handler::register_yellow_card(path.into_inner(), pool).await
}

/// Register one red card and return the new count
#[patch("/{id}/redcards")]
async fn register_red_card(path: web::Path<i64>, pool: web::Data<SqlitePool>) -> HttpResponse {
    match_handler::register_red_card(path.into_inner(), pool).await
}

/// Set (not add) the extra-time minutes from the `minutes` query parameter
#[patch("/{id}/extratime")]
async fn set_extra_time(
    path: web::Path<i64>,
    query: web::Query<ExtraTimeQuery>,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    match_handler::set_extra_time(path.into_inner(), query.into_inner(), pool).await
}
