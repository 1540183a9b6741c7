use sqlx::SqlitePool;
use tracing::info;

use crate::db::error::StoreError;
use crate::models::{Match, MatchUpdate, NewMatch};

const MATCH_COLUMNS: &str =
    "id, home_team, away_team, match_date, goals, yellow_cards, red_cards, extra_time_minutes";

/// All persistence operations for match records. Mutations are single SQL
/// statements, so each read-modify-write happens inside the engine and is
/// atomic with respect to itself.
#[derive(Debug, Clone)]
pub struct MatchStore {
    pool: SqlitePool,
}

impl MatchStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Match>, StoreError> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            "SELECT {} FROM matches ORDER BY id",
            MATCH_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(matches)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Match, StoreError> {
        sqlx::query_as::<_, Match>(&format!(
            "SELECT {} FROM matches WHERE id = ?",
            MATCH_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    /// Insert a new record. The id is assigned by the engine and returned
    /// with the stored row.
    pub async fn create(&self, new_match: &NewMatch) -> Result<Match, StoreError> {
        let created = sqlx::query_as::<_, Match>(&format!(
            r#"
            INSERT INTO matches
                (home_team, away_team, match_date, goals, yellow_cards, red_cards, extra_time_minutes)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            MATCH_COLUMNS
        ))
        .bind(&new_match.home_team)
        .bind(&new_match.away_team)
        .bind(&new_match.match_date)
        .bind(new_match.goals)
        .bind(new_match.yellow_cards)
        .bind(new_match.red_cards)
        .bind(new_match.extra_time_minutes)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Created match {} ({} vs {})",
            created.id, created.home_team, created.away_team
        );
        Ok(created)
    }

    /// Overwrite exactly the descriptive fields; counters and id untouched.
    pub async fn replace_fields(
        &self,
        id: i64,
        update: &MatchUpdate,
    ) -> Result<Match, StoreError> {
        sqlx::query_as::<_, Match>(&format!(
            r#"
            UPDATE matches
            SET home_team = ?, away_team = ?, match_date = ?
            WHERE id = ?
            RETURNING {}
            "#,
            MATCH_COLUMNS
        ))
        .bind(&update.home_team)
        .bind(&update.away_team)
        .bind(&update.match_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM matches WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        info!("Deleted match {}", id);
        Ok(())
    }

    pub async fn increment_goals(&self, id: i64) -> Result<i64, StoreError> {
        self.bump_counter(id, "goals").await
    }

    pub async fn increment_yellow_cards(&self, id: i64) -> Result<i64, StoreError> {
        self.bump_counter(id, "yellow_cards").await
    }

    pub async fn increment_red_cards(&self, id: i64) -> Result<i64, StoreError> {
        self.bump_counter(id, "red_cards").await
    }

    /// Overwrite, not increment. The value is stored as-is, sign included.
    pub async fn set_extra_time(&self, id: i64, minutes: i64) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE matches SET extra_time_minutes = ? WHERE id = ? RETURNING extra_time_minutes",
        )
        .bind(minutes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    // `column` is one of the fixed counter names above, never caller input.
    async fn bump_counter(&self, id: i64, column: &str) -> Result<i64, StoreError> {
        let query = format!(
            "UPDATE matches SET {col} = {col} + 1 WHERE id = ? RETURNING {col}",
            col = column
        );
        sqlx::query_scalar::<_, i64>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }
}
