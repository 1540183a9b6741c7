use serde::{Deserialize, Serialize};

/// A single tracked fixture: two teams, a date, and event counters.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i64,
    pub home_team: String,
    pub away_team: String,
    /// String-encoded date, stored as-is without parsing or validation.
    pub match_date: String,
    pub goals: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
    pub extra_time_minutes: i64,
}

/// Payload accepted on POST. Every field is optional; counters default to zero.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    #[serde(default)]
    pub match_date: String,
    #[serde(default)]
    pub goals: i64,
    #[serde(default)]
    pub yellow_cards: i64,
    #[serde(default)]
    pub red_cards: i64,
    #[serde(default)]
    pub extra_time_minutes: i64,
}

/// Payload accepted on PUT: only the descriptive fields. Counters and the id
/// can never be overwritten through an update request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdate {
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    #[serde(default)]
    pub match_date: String,
}

/// Query parameters for the extra-time PATCH route.
#[derive(Debug, Deserialize)]
pub struct ExtraTimeQuery {
    pub minutes: i64,
}
