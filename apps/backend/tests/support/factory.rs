//! Seed helpers for player tests.

use backend::entities::players::{Profession, Race};
use backend::errors::DomainError;
use backend::repos::players::Player;
use backend::services::players::{CreatePlayer, PlayersService};
use sea_orm::ConnectionTrait;
use time::macros::datetime;
use time::OffsetDateTime;

/// A valid creation payload with sensible defaults; tweak fields per test.
pub fn create_input(name: &str) -> CreatePlayer {
    CreatePlayer {
        name: name.to_string(),
        title: format!("{name} the Tested"),
        race: Race::Human,
        profession: Profession::Warrior,
        birthday: datetime!(2020-05-04 0:00 UTC),
        banned: None,
        experience: 0,
    }
}

pub async fn seed_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    experience: i32,
) -> Result<Player, DomainError> {
    let mut input = create_input(name);
    input.experience = experience;
    PlayersService.create(conn, input).await
}

#[allow(clippy::too_many_arguments)]
pub async fn seed_player_full<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    title: &str,
    race: Race,
    profession: Profession,
    birthday: OffsetDateTime,
    banned: bool,
    experience: i32,
) -> Result<Player, DomainError> {
    PlayersService
        .create(
            conn,
            CreatePlayer {
                name: name.to_string(),
                title: title.to_string(),
                race,
                profession,
                birthday,
                banned: Some(banned),
                experience,
            },
        )
        .await
}
