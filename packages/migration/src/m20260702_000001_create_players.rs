use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;
use sea_orm_migration::sea_query::extension::postgres::Type as PgType;
use sea_orm_migration::sea_query::{ColumnDef, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables, columns and enum values -----
#[derive(Iden)]
enum Players {
    Table,
    Id,
    Name,
    Title,
    Race,
    Profession,
    Birthday,
    Banned,
    Experience,
    Level,
    UntilNextLevel,
}

#[derive(Iden)]
enum RaceEnum {
    #[iden = "race"]
    Type,
    #[iden = "HUMAN"]
    Human,
    #[iden = "DWARF"]
    Dwarf,
    #[iden = "ELF"]
    Elf,
    #[iden = "GIANT"]
    Giant,
    #[iden = "ORC"]
    Orc,
    #[iden = "TROLL"]
    Troll,
    #[iden = "HOBBIT"]
    Hobbit,
}

#[derive(Iden)]
enum ProfessionEnum {
    #[iden = "profession"]
    Type,
    #[iden = "WARRIOR"]
    Warrior,
    #[iden = "ROGUE"]
    Rogue,
    #[iden = "SORCERER"]
    Sorcerer,
    #[iden = "CLERIC"]
    Cleric,
    #[iden = "PALADIN"]
    Paladin,
    #[iden = "NAZGUL"]
    Nazgul,
    #[iden = "WARLOCK"]
    Warlock,
    #[iden = "DRUID"]
    Druid,
}

fn race_values() -> [RaceEnum; 7] {
    [
        RaceEnum::Human,
        RaceEnum::Dwarf,
        RaceEnum::Elf,
        RaceEnum::Giant,
        RaceEnum::Orc,
        RaceEnum::Troll,
        RaceEnum::Hobbit,
    ]
}

fn profession_values() -> [ProfessionEnum; 8] {
    [
        ProfessionEnum::Warrior,
        ProfessionEnum::Rogue,
        ProfessionEnum::Sorcerer,
        ProfessionEnum::Cleric,
        ProfessionEnum::Paladin,
        ProfessionEnum::Nazgul,
        ProfessionEnum::Warlock,
        ProfessionEnum::Druid,
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Postgres gets real enum types; SQLite stores the variants as text.
        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .create_type(
                    PgType::create()
                        .as_enum(RaceEnum::Type)
                        .values(race_values())
                        .to_owned(),
                )
                .await?;
            manager
                .create_type(
                    PgType::create()
                        .as_enum(ProfessionEnum::Type)
                        .values(profession_values())
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Players::Name).string_len(12).not_null())
                    .col(ColumnDef::new(Players::Title).string_len(30).not_null())
                    .col(
                        ColumnDef::new(Players::Race)
                            .enumeration(RaceEnum::Type, race_values())
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::Profession)
                            .enumeration(ProfessionEnum::Type, profession_values())
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::Birthday)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::Banned)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Players::Experience).integer().not_null())
                    .col(ColumnDef::new(Players::Level).integer().not_null())
                    .col(
                        ColumnDef::new(Players::UntilNextLevel)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;

        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .drop_type(PgType::drop().name(RaceEnum::Type).to_owned())
                .await?;
            manager
                .drop_type(PgType::drop().name(ProfessionEnum::Type).to_owned())
                .await?;
        }

        Ok(())
    }
}
