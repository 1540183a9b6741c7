pub mod matches;

pub use matches::{ExtraTimeQuery, Match, MatchUpdate, NewMatch};
