use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "race")]
#[serde(rename_all = "UPPERCASE")]
pub enum Race {
    #[sea_orm(string_value = "HUMAN")]
    Human,
    #[sea_orm(string_value = "DWARF")]
    Dwarf,
    #[sea_orm(string_value = "ELF")]
    Elf,
    #[sea_orm(string_value = "GIANT")]
    Giant,
    #[sea_orm(string_value = "ORC")]
    Orc,
    #[sea_orm(string_value = "TROLL")]
    Troll,
    #[sea_orm(string_value = "HOBBIT")]
    Hobbit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "profession")]
#[serde(rename_all = "UPPERCASE")]
pub enum Profession {
    #[sea_orm(string_value = "WARRIOR")]
    Warrior,
    #[sea_orm(string_value = "ROGUE")]
    Rogue,
    #[sea_orm(string_value = "SORCERER")]
    Sorcerer,
    #[sea_orm(string_value = "CLERIC")]
    Cleric,
    #[sea_orm(string_value = "PALADIN")]
    Paladin,
    #[sea_orm(string_value = "NAZGUL")]
    Nazgul,
    #[sea_orm(string_value = "WARLOCK")]
    Warlock,
    #[sea_orm(string_value = "DRUID")]
    Druid,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: OffsetDateTime,
    pub banned: bool,
    pub experience: i32,
    pub level: i32,
    #[sea_orm(column_name = "until_next_level")]
    pub until_next_level: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
