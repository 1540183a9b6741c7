use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db::{MatchStore, StoreError};
use crate::models::{ExtraTimeQuery, MatchUpdate, NewMatch};

/// Map a store failure onto the HTTP error surface: a missing id becomes a
/// structured 404, everything else is logged and hidden behind a generic 500.
fn store_error_response(operation: &str, e: StoreError) -> HttpResponse {
    match e {
        StoreError::NotFound => HttpResponse::NotFound().json(json!({
            "error": "Match not found"
        })),
        other => {
            tracing::error!("{} failed: {}", operation, other);
            HttpResponse::InternalServerError().json(json!({
                "error": "Something went wrong. Please try again later."
            }))
        }
    }
}

#[tracing::instrument(name = "List all matches", skip(pool))]
pub async fn list_matches(pool: web::Data<SqlitePool>) -> HttpResponse {
    let store = MatchStore::new(pool.get_ref().clone());
    match store.list_all().await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => store_error_response("List matches", e),
    }
}

#[tracing::instrument(name = "Get match by id", skip(pool), fields(match_id = %id))]
pub async fn get_match(id: i64, pool: web::Data<SqlitePool>) -> HttpResponse {
    let store = MatchStore::new(pool.get_ref().clone());
    match store.get_by_id(id).await {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => store_error_response("Get match", e),
    }
}

#[tracing::instrument(name = "Create match", skip(pool, new_match))]
pub async fn create_match(
    new_match: web::Json<NewMatch>,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    let store = MatchStore::new(pool.get_ref().clone());
    match store.create(&new_match).await {
        Ok(created) => HttpResponse::Created().json(created),
        Err(e) => store_error_response("Create match", e),
    }
}

#[tracing::instrument(name = "Update match", skip(pool, update), fields(match_id = %id))]
pub async fn update_match(
    id: i64,
    update: web::Json<MatchUpdate>,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    let store = MatchStore::new(pool.get_ref().clone());
    match store.replace_fields(id, &update).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => store_error_response("Update match", e),
    }
}

#[tracing::instrument(name = "Delete match", skip(pool), fields(match_id = %id))]
pub async fn delete_match(id: i64, pool: web::Data<SqlitePool>) -> HttpResponse {
    let store = MatchStore::new(pool.get_ref().clone());
    match store.delete(id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => store_error_response("Delete match", e),
    }
}

#[tracing::instrument(name = "Register goal", skip(pool), fields(match_id = %id))]
pub async fn register_goal(id: i64, pool: web::Data<SqlitePool>) -> HttpResponse {
    let store = MatchStore::new(pool.get_ref().clone());
    match store.increment_goals(id).await {
        Ok(goals) => HttpResponse::Ok().json(json!({
            "message": "Goal registered",
            "matchId": id,
            "currentGoals": goals,
        })),
        Err(e) => store_error_response("Register goal", e),
    }
}

#[tracing::instrument(name = "Register yellow card", skip(pool), fields(match_id = %id))]
pub async fn register_yellow_card(id: i64, pool: web::Data<SqlitePool>) -> HttpResponse {
    let store = MatchStore::new(pool.get_ref().clone());
    match store.increment_yellow_cards(id).await {
        Ok(yellow_cards) => HttpResponse::Ok().json(json!({
            "message": "Yellow card registered",
            "matchId": id,
            "currentYellowCards": yellow_cards,
        })),
        Err(e) => store_error_response("Register yellow card", e),
    }
}

#[tracing::instrument(name = "Register red card", skip(pool), fields(match_id = %id))]
pub async fn register_red_card(id: i64, pool: web::Data<SqlitePool>) -> HttpResponse {
    let store = MatchStore::new(pool.get_ref().clone());
    match store.increment_red_cards(id).await {
        Ok(red_cards) => HttpResponse::Ok().json(json!({
            "message": "Red card registered",
            "matchId": id,
            "currentRedCards": red_cards,
        })),
        Err(e) => store_error_response("Register red card", e),
    }
}

#[tracing::instrument(name = "Set extra time", skip(pool), fields(match_id = %id))]
pub async fn set_extra_time(
    id: i64,
    query: ExtraTimeQuery,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    let store = MatchStore::new(pool.get_ref().clone());
    match store.set_extra_time(id, query.minutes).await {
        Ok(minutes) => HttpResponse::Ok().json(json!({
            "message": format!("Extra time set to {} minutes", minutes),
            "matchId": id,
            "extraTimeMinutes": minutes,
        })),
        Err(e) => store_error_response("Set extra time", e),
    }
}
