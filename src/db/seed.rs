use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use tracing::info;

/// Insert one example fixture when the table is empty at startup.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM matches")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let match_date = (Utc::now() + Duration::days(7)).format("%Y-%m-%d").to_string();
    sqlx::query("INSERT INTO matches (home_team, away_team, match_date) VALUES (?, ?, ?)")
        .bind("Real Madrid")
        .bind("Barcelona")
        .bind(&match_date)
        .execute(pool)
        .await?;

    info!("Seeded initial match Real Madrid vs Barcelona on {}", match_date);
    Ok(())
}
