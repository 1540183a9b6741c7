pub mod error;
pub mod match_queries;
pub mod seed;

pub use error::StoreError;
pub use match_queries::MatchStore;
pub use seed::seed_if_empty;
