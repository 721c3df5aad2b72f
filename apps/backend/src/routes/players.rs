use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::txn::with_txn;
use crate::entities::players::{Profession, Race};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::repos::players::{PageRequest, Player, PlayerFilter, PlayerOrder, PlayerPage};
use crate::services::players::{CreatePlayer, PlayersService, UpdatePlayer};
use crate::state::app_state::AppState;

// Wire format follows the original admin API: camelCase fields, birthdays as
// epoch milliseconds.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: i64,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
}

impl From<Player> for PlayerResponse {
    fn from(value: Player) -> Self {
        Self {
            id: value.id,
            name: value.name,
            title: value.title,
            race: value.race,
            profession: value.profession,
            birthday: epoch_millis(value.birthday),
            banned: value.banned,
            experience: value.experience,
            level: value.level,
            until_next_level: value.until_next_level,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPageResponse {
    pub items: Vec<PlayerResponse>,
    pub total: u64,
    pub page_number: u64,
    pub page_size: u64,
}

impl From<PlayerPage> for PlayerPageResponse {
    fn from(value: PlayerPage) -> Self {
        Self {
            items: value.items.into_iter().map(PlayerResponse::from).collect(),
            total: value.total,
            page_number: value.page,
            page_size: value.size,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub birthday: Option<i64>,
    #[serde(default)]
    pub banned: Option<bool>,
    pub experience: Option<i32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub race: Option<Race>,
    #[serde(default)]
    pub profession: Option<Profession>,
    #[serde(default)]
    pub birthday: Option<i64>,
    #[serde(default)]
    pub banned: Option<bool>,
    #[serde(default)]
    pub experience: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListQuery {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
    #[serde(default)]
    pub order: PlayerOrder,
    #[serde(default)]
    pub page_number: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    3
}

impl PlayerListQuery {
    fn filter(&self) -> Result<PlayerFilter, AppError> {
        Ok(PlayerFilter {
            name: self.name.clone(),
            title: self.title.clone(),
            race: self.race,
            profession: self.profession,
            banned: self.banned,
            born_after: self.after.map(from_epoch_millis).transpose()?,
            born_before: self.before.map(from_epoch_millis).transpose()?,
            min_experience: self.min_experience,
            max_experience: self.max_experience,
            min_level: self.min_level,
            max_level: self.max_level,
        })
    }

    fn page(&self) -> Result<PageRequest, AppError> {
        if self.page_size == 0 {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "pageSize must be at least 1",
            ));
        }
        Ok(PageRequest {
            page: self.page_number,
            size: self.page_size,
        })
    }
}

fn epoch_millis(t: OffsetDateTime) -> i64 {
    (t.unix_timestamp_nanos() / 1_000_000) as i64
}

fn from_epoch_millis(ms: i64) -> Result<OffsetDateTime, AppError> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000).map_err(|_| {
        AppError::invalid(
            ErrorCode::ValidationError,
            format!("Timestamp out of range: {ms}"),
        )
    })
}

fn require<T>(field: Option<T>, name: &str) -> Result<T, AppError> {
    field.ok_or_else(|| {
        AppError::invalid(ErrorCode::ValidationError, format!("{name} is required"))
    })
}

async fn list_players(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    query: web::Query<PlayerListQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let filter = query.filter()?;
    let page = query.page()?;
    let order = query.order;

    let result = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            PlayersService
                .list(txn, &filter, order, page)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(PlayerPageResponse::from(result)))
}

async fn count_players(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    query: web::Query<PlayerListQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = query.filter()?;

    let total = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            PlayersService
                .count(txn, &filter)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(total))
}

async fn create_player(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreatePlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();

    let input = CreatePlayer {
        name: require(payload.name, "name")?,
        title: require(payload.title, "title")?,
        race: require(payload.race, "race")?,
        profession: require(payload.profession, "profession")?,
        birthday: from_epoch_millis(require(payload.birthday, "birthday")?)?,
        banned: payload.banned,
        experience: require(payload.experience, "experience")?,
    };

    let created = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            PlayersService
                .create(txn, input)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(PlayerResponse::from(created)))
}

async fn get_player(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let player = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            PlayersService
                .get_by_id(txn, id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(PlayerResponse::from(player)))
}

async fn update_player(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: ValidatedJson<UpdatePlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let payload = body.into_inner();

    let patch = UpdatePlayer {
        name: payload.name,
        title: payload.title,
        race: payload.race,
        profession: payload.profession,
        birthday: payload.birthday.map(from_epoch_millis).transpose()?,
        banned: payload.banned,
        experience: payload.experience,
    };

    let updated = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            PlayersService
                .update(txn, id, patch)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(PlayerResponse::from(updated)))
}

async fn delete_player(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            PlayersService
                .delete(txn, id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_players))
            .route(web::post().to(create_player)),
    )
    .service(web::resource("/count").route(web::get().to(count_players)))
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_player))
            .route(web::patch().to(update_player))
            .route(web::delete().to(delete_player)),
    );
}
