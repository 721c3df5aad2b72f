//! Row-shaped write payload for the players adapter.

use time::OffsetDateTime;

use crate::entities::players::{Profession, Race};

/// Every stored column except the id; used for both inserts and full-row
/// updates (the service always writes a fully-merged record).
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerWrite {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: OffsetDateTime,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}
