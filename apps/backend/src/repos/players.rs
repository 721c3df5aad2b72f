//! Player repository functions for the domain layer (generic over
//! ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::adapters::players_sea as players_adapter;
use crate::entities::players::{Profession, Race};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

pub use players_adapter::PlayerWrite;

/// Player domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
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

/// One optional criterion per filterable column; `None` adds no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFilter {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub banned: Option<bool>,
    pub born_after: Option<OffsetDateTime>,
    pub born_before: Option<OffsetDateTime>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

/// Sortable columns; the core takes this from the caller and does not fix a
/// default (the HTTP boundary defaults to id order).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

/// Zero-based page slice request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

/// One page of players plus total-count metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPage {
    pub items: Vec<Player>,
    pub total: u64,
    pub page: u64,
    pub size: u64,
}

pub async fn find_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &PlayerFilter,
    order: PlayerOrder,
    page: PageRequest,
) -> Result<PlayerPage, DomainError> {
    let (rows, total) = players_adapter::find_page(conn, filter, order, page)
        .await
        .map_err(map_db_err)?;
    Ok(PlayerPage {
        items: rows.into_iter().map(Player::from).collect(),
        total,
        page: page.page,
        size: page.size,
    })
}

pub async fn count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &PlayerFilter,
) -> Result<u64, DomainError> {
    players_adapter::count(conn, filter).await.map_err(map_db_err)
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    row: PlayerWrite,
) -> Result<Player, DomainError> {
    let model = players_adapter::insert_player(conn, row)
        .await
        .map_err(map_db_err)?;
    Ok(Player::from(model))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    row: PlayerWrite,
) -> Result<Player, DomainError> {
    let model = players_adapter::update_player(conn, id, row)
        .await
        .map_err(map_db_err)?;
    Ok(Player::from(model))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Player>, DomainError> {
    let model = players_adapter::find_by_id(conn, id)
        .await
        .map_err(map_db_err)?;
    Ok(model.map(Player::from))
}

pub async fn exists_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    players_adapter::exists_by_id(conn, id)
        .await
        .map_err(map_db_err)
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), DomainError> {
    players_adapter::delete_by_id(conn, id)
        .await
        .map_err(map_db_err)?;
    Ok(())
}

// Conversion between the SeaORM model and the domain model

impl From<crate::entities::players::Model> for Player {
    fn from(model: crate::entities::players::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            title: model.title,
            race: model.race,
            profession: model.profession,
            birthday: model.birthday,
            banned: model.banned,
            experience: model.experience,
            level: model.level,
            until_next_level: model.until_next_level,
        }
    }
}
