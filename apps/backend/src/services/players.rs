//! Player lifecycle service: validation, derived-field computation, and
//! persistence orchestration.
//!
//! Validation runs before any write; a failed check leaves the store
//! untouched. Whenever experience is (re)set, `level` and `until_next_level`
//! are recomputed from the fully-merged record.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use tracing::info;

use crate::domain::progression;
use crate::entities::players::{Profession, Race};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::players::{
    self, PageRequest, Player, PlayerFilter, PlayerOrder, PlayerPage, PlayerWrite,
};

pub const NAME_MAX_CHARS: usize = 12;
pub const TITLE_MAX_CHARS: usize = 30;
pub const EXPERIENCE_MAX: i32 = 10_000_000;
pub const BIRTHDAY_MIN_YEAR: i32 = 2000;
pub const BIRTHDAY_MAX_YEAR: i32 = 3000;

/// Caller-supplied fields for a new player. `level` and `until_next_level`
/// are never accepted from outside; they are derived here.
#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: OffsetDateTime,
    pub banned: Option<bool>,
    pub experience: i32,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlayer {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<OffsetDateTime>,
    pub banned: Option<bool>,
    pub experience: Option<i32>,
}

pub struct PlayersService;

impl PlayersService {
    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        filter: &PlayerFilter,
        order: PlayerOrder,
        page: PageRequest,
    ) -> Result<PlayerPage, DomainError> {
        players::find_page(conn, filter, order, page).await
    }

    pub async fn count<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        filter: &PlayerFilter,
    ) -> Result<u64, DomainError> {
        players::count(conn, filter).await
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        input: CreatePlayer,
    ) -> Result<Player, DomainError> {
        check_name(&input.name)?;
        check_title(&input.title)?;
        check_birthday(input.birthday)?;
        check_experience(input.experience)?;

        let derived = progression::progression(input.experience);
        let created = players::insert(
            conn,
            PlayerWrite {
                name: input.name,
                title: input.title,
                race: input.race,
                profession: input.profession,
                birthday: input.birthday,
                banned: input.banned.unwrap_or(false),
                experience: input.experience,
                level: derived.level,
                until_next_level: derived.until_next_level,
            },
        )
        .await?;

        info!(
            player_id = created.id,
            name = %created.name,
            level = created.level,
            "player created"
        );
        Ok(created)
    }

    pub async fn get_by_id<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Player, DomainError> {
        check_id(id)?;
        players::find_by_id(conn, id)
            .await?
            .ok_or_else(|| player_not_found(id))
    }

    pub async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        patch: UpdatePlayer,
    ) -> Result<Player, DomainError> {
        let existing = self.get_by_id(conn, id).await?;

        let mut merged = PlayerWrite {
            name: existing.name,
            title: existing.title,
            race: existing.race,
            profession: existing.profession,
            birthday: existing.birthday,
            banned: existing.banned,
            experience: existing.experience,
            level: existing.level,
            until_next_level: existing.until_next_level,
        };

        if let Some(name) = patch.name {
            check_name(&name)?;
            merged.name = name;
        }
        if let Some(title) = patch.title {
            check_title(&title)?;
            merged.title = title;
        }
        if let Some(race) = patch.race {
            merged.race = race;
        }
        if let Some(profession) = patch.profession {
            merged.profession = profession;
        }
        if let Some(birthday) = patch.birthday {
            check_birthday(birthday)?;
            merged.birthday = birthday;
        }
        if let Some(banned) = patch.banned {
            merged.banned = banned;
        }
        if let Some(experience) = patch.experience {
            check_experience(experience)?;
            merged.experience = experience;
            // Both derived fields follow the merged record, never the raw
            // patch, so they cannot drift apart.
            let derived = progression::progression(merged.experience);
            merged.level = derived.level;
            merged.until_next_level = derived.until_next_level;
        }

        let updated = players::update(conn, id, merged).await?;
        info!(player_id = id, "player updated");
        Ok(updated)
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<(), DomainError> {
        check_id(id)?;
        if !players::exists_by_id(conn, id).await? {
            return Err(player_not_found(id));
        }
        players::delete_by_id(conn, id).await?;
        info!(player_id = id, "player deleted");
        Ok(())
    }
}

fn player_not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Player, format!("Player {id} not found"))
}

fn check_id(id: i64) -> Result<(), DomainError> {
    if id <= 0 {
        return Err(DomainError::invalid_argument(format!(
            "Player id must be positive, got {id}"
        )));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::validation("Player name must not be empty"));
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(DomainError::validation(format!(
            "Player name must be at most {NAME_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

fn check_title(title: &str) -> Result<(), DomainError> {
    if title.is_empty() {
        return Err(DomainError::validation("Player title must not be empty"));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(DomainError::validation(format!(
            "Player title must be at most {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

fn check_birthday(birthday: OffsetDateTime) -> Result<(), DomainError> {
    let year = birthday.year();
    if !(BIRTHDAY_MIN_YEAR..=BIRTHDAY_MAX_YEAR).contains(&year) {
        return Err(DomainError::validation(format!(
            "Birthday year must be between {BIRTHDAY_MIN_YEAR} and {BIRTHDAY_MAX_YEAR}, got {year}"
        )));
    }
    Ok(())
}

fn check_experience(experience: i32) -> Result<(), DomainError> {
    if !(0..=EXPERIENCE_MAX).contains(&experience) {
        return Err(DomainError::validation(format!(
            "Experience must be between 0 and {EXPERIENCE_MAX}, got {experience}"
        )));
    }
    Ok(())
}
