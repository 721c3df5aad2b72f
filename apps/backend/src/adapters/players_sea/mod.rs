//! SeaORM adapter for the players table.
//!
//! Builds the conjunctive filter condition and runs the actual queries.
//! Adapter functions return `DbErr`; the repos layer maps to `DomainError`.

use sea_orm::sea_query::Condition;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::players;
use crate::repos::players::{PageRequest, PlayerFilter, PlayerOrder};

pub mod dto;

pub use dto::PlayerWrite;

/// Fold the optional criteria into one AND-condition. Absent criteria add
/// nothing; an all-absent filter yields the match-all condition.
pub fn filter_condition(filter: &PlayerFilter) -> Condition {
    let mut cond = Condition::all();

    if let Some(name) = &filter.name {
        cond = cond.add(players::Column::Name.contains(name));
    }
    if let Some(title) = &filter.title {
        cond = cond.add(players::Column::Title.contains(title));
    }
    if let Some(race) = filter.race {
        cond = cond.add(players::Column::Race.eq(race));
    }
    if let Some(profession) = filter.profession {
        cond = cond.add(players::Column::Profession.eq(profession));
    }
    if let Some(banned) = filter.banned {
        cond = cond.add(players::Column::Banned.eq(banned));
    }

    // Range criteria: a lone bound stays one-sided, both bounds form an
    // inclusive range.
    if let Some(after) = filter.born_after {
        cond = cond.add(players::Column::Birthday.gte(after));
    }
    if let Some(before) = filter.born_before {
        cond = cond.add(players::Column::Birthday.lte(before));
    }
    if let Some(min) = filter.min_experience {
        cond = cond.add(players::Column::Experience.gte(min));
    }
    if let Some(max) = filter.max_experience {
        cond = cond.add(players::Column::Experience.lte(max));
    }
    if let Some(min) = filter.min_level {
        cond = cond.add(players::Column::Level.gte(min));
    }
    if let Some(max) = filter.max_level {
        cond = cond.add(players::Column::Level.lte(max));
    }

    cond
}

fn order_column(order: PlayerOrder) -> players::Column {
    match order {
        PlayerOrder::Id => players::Column::Id,
        PlayerOrder::Name => players::Column::Name,
        PlayerOrder::Experience => players::Column::Experience,
        PlayerOrder::Birthday => players::Column::Birthday,
        PlayerOrder::Level => players::Column::Level,
    }
}

pub async fn find_page<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &PlayerFilter,
    order: PlayerOrder,
    page: PageRequest,
) -> Result<(Vec<players::Model>, u64), sea_orm::DbErr> {
    let paginator = players::Entity::find()
        .filter(filter_condition(filter))
        .order_by(order_column(order), Order::Asc)
        .paginate(conn, page.size);

    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(page.page).await?;
    Ok((items, total))
}

pub async fn count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: &PlayerFilter,
) -> Result<u64, sea_orm::DbErr> {
    players::Entity::find()
        .filter(filter_condition(filter))
        .count(conn)
        .await
}

pub async fn insert_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    row: PlayerWrite,
) -> Result<players::Model, sea_orm::DbErr> {
    let active = players::ActiveModel {
        id: NotSet,
        name: Set(row.name),
        title: Set(row.title),
        race: Set(row.race),
        profession: Set(row.profession),
        birthday: Set(row.birthday),
        banned: Set(row.banned),
        experience: Set(row.experience),
        level: Set(row.level),
        until_next_level: Set(row.until_next_level),
    };

    active.insert(conn).await
}

pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    row: PlayerWrite,
) -> Result<players::Model, sea_orm::DbErr> {
    let active = players::ActiveModel {
        id: Set(id),
        name: Set(row.name),
        title: Set(row.title),
        race: Set(row.race),
        profession: Set(row.profession),
        birthday: Set(row.birthday),
        banned: Set(row.banned),
        experience: Set(row.experience),
        level: Set(row.level),
        until_next_level: Set(row.until_next_level),
    };

    active.update(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(id).one(conn).await
}

pub async fn exists_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let found = players::Entity::find_by_id(id).count(conn).await?;
    Ok(found > 0)
}

pub async fn delete_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = players::Entity::delete_by_id(id).exec(conn).await?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::players::Race;

    #[test]
    fn all_absent_criteria_yield_the_match_all_condition() {
        let cond = filter_condition(&PlayerFilter::default());
        assert_eq!(cond, Condition::all());
    }

    #[test]
    fn a_single_criterion_yields_exactly_its_own_predicate() {
        let filter = PlayerFilter {
            name: Some("bor".to_string()),
            ..Default::default()
        };
        let expected = Condition::all().add(players::Column::Name.contains("bor"));
        assert_eq!(filter_condition(&filter), expected);
    }

    #[test]
    fn equality_criteria_compose_conjunctively() {
        let filter = PlayerFilter {
            race: Some(Race::Orc),
            banned: Some(true),
            ..Default::default()
        };
        let expected = Condition::all()
            .add(players::Column::Race.eq(Race::Orc))
            .add(players::Column::Banned.eq(true));
        assert_eq!(filter_condition(&filter), expected);
    }

    #[test]
    fn a_lone_lower_bound_stays_one_sided() {
        let filter = PlayerFilter {
            min_experience: Some(500),
            ..Default::default()
        };
        let expected = Condition::all().add(players::Column::Experience.gte(500));
        assert_eq!(filter_condition(&filter), expected);
    }

    #[test]
    fn a_lone_upper_bound_stays_one_sided() {
        let filter = PlayerFilter {
            max_level: Some(10),
            ..Default::default()
        };
        let expected = Condition::all().add(players::Column::Level.lte(10));
        assert_eq!(filter_condition(&filter), expected);
    }

    #[test]
    fn both_bounds_form_an_inclusive_range() {
        let filter = PlayerFilter {
            min_experience: Some(100),
            max_experience: Some(200),
            ..Default::default()
        };
        let expected = Condition::all()
            .add(players::Column::Experience.gte(100))
            .add(players::Column::Experience.lte(200));
        assert_eq!(filter_condition(&filter), expected);
    }
}
