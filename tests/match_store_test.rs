use laliga_tracker_backend::db::{seed_if_empty, MatchStore, StoreError};
use laliga_tracker_backend::models::{MatchUpdate, NewMatch};

mod common;
use common::utils::configure_db;

fn new_match(home: &str, away: &str, date: &str) -> NewMatch {
    NewMatch {
        home_team: home.into(),
        away_team: away.into(),
        match_date: date.into(),
        goals: 0,
        yellow_cards: 0,
        red_cards: 0,
        extra_time_minutes: 0,
    }
}

#[tokio::test]
async fn create_assigns_id_and_roundtrips() {
    let pool = configure_db().await;
    let store = MatchStore::new(pool);

    let created = store
        .create(&new_match("Atletico", "Cadiz", "2025-06-01"))
        .await
        .unwrap();
    assert!(created.id > 0);

    let fetched = store.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched.home_team, "Atletico");
    assert_eq!(fetched.away_team, "Cadiz");
    assert_eq!(fetched.match_date, "2025-06-01");
    assert_eq!(fetched.goals, 0);
}

#[tokio::test]
async fn increments_are_per_record() {
    let pool = configure_db().await;
    let store = MatchStore::new(pool);

    let first = store
        .create(&new_match("A", "B", "2025-01-01"))
        .await
        .unwrap();
    let second = store
        .create(&new_match("C", "D", "2025-01-02"))
        .await
        .unwrap();

    assert_eq!(store.increment_goals(first.id).await.unwrap(), 1);
    assert_eq!(store.increment_goals(first.id).await.unwrap(), 2);
    assert_eq!(store.increment_yellow_cards(first.id).await.unwrap(), 1);

    let untouched = store.get_by_id(second.id).await.unwrap();
    assert_eq!(untouched.goals, 0);
    assert_eq!(untouched.yellow_cards, 0);
}

#[tokio::test]
async fn replace_fields_keeps_counters_and_id() {
    let pool = configure_db().await;
    let store = MatchStore::new(pool);

    let created = store
        .create(&new_match("Home", "Away", "2025-01-01"))
        .await
        .unwrap();
    store.increment_red_cards(created.id).await.unwrap();

    let updated = store
        .replace_fields(
            created.id,
            &MatchUpdate {
                home_team: "New Home".into(),
                away_team: "New Away".into(),
                match_date: "2025-12-31".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.home_team, "New Home");
    assert_eq!(updated.red_cards, 1);
    assert_eq!(updated.goals, created.goals);
}

#[tokio::test]
async fn set_extra_time_overwrites() {
    let pool = configure_db().await;
    let store = MatchStore::new(pool);

    let created = store
        .create(&new_match("A", "B", "2025-01-01"))
        .await
        .unwrap();

    assert_eq!(store.set_extra_time(created.id, 5).await.unwrap(), 5);
    assert_eq!(store.set_extra_time(created.id, 3).await.unwrap(), 3);
    assert_eq!(store.set_extra_time(created.id, -1).await.unwrap(), -1);
}

#[tokio::test]
async fn missing_ids_surface_as_not_found() {
    let pool = configure_db().await;
    let store = MatchStore::new(pool);

    assert!(matches!(
        store.get_by_id(42).await,
        Err(StoreError::NotFound)
    ));
    assert!(matches!(store.delete(42).await, Err(StoreError::NotFound)));
    assert!(matches!(
        store.increment_goals(42).await,
        Err(StoreError::NotFound)
    ));
    assert!(matches!(
        store.set_extra_time(42, 5).await,
        Err(StoreError::NotFound)
    ));
    assert!(matches!(
        store
            .replace_fields(
                42,
                &MatchUpdate {
                    home_team: String::new(),
                    away_team: String::new(),
                    match_date: String::new(),
                }
            )
            .await,
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
async fn seed_runs_once_and_only_on_empty_table() {
    let pool = configure_db().await;

    seed_if_empty(&pool).await.unwrap();
    seed_if_empty(&pool).await.unwrap();

    let store = MatchStore::new(pool);
    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].home_team, "Real Madrid");
    assert_eq!(all[0].away_team, "Barcelona");
    // yyyy-mm-dd
    assert_eq!(all[0].match_date.len(), 10);
}
