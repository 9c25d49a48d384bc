//! Create the read-only catalog tables: `people`, `vehicles`, `planets`.
//!
//! Every attribute besides the name is free text and nullable.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(pk_auto(People::Id))
                    .col(string_len(People::Name, 120))
                    .col(string_len_null(People::Height, 20))
                    .col(string_len_null(People::Weight, 20))
                    .col(string_len_null(People::Gender, 20))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicles::Id))
                    .col(string_len(Vehicles::Name, 120))
                    .col(string_len_null(Vehicles::ModelName, 120))
                    .col(string_len_null(Vehicles::Manufacturer, 120))
                    .col(string_len_null(Vehicles::CostInCredits, 50))
                    .col(string_len_null(Vehicles::Length, 50))
                    .col(string_len_null(Vehicles::Crew, 50))
                    .col(string_len_null(Vehicles::Passengers, 50))
                    .col(string_len_null(Vehicles::CargoCapacity, 50))
                    .col(string_len_null(Vehicles::Consumables, 50))
                    .col(string_len_null(Vehicles::VehicleClass, 120))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string_len(Planets::Name, 120))
                    .col(string_len_null(Planets::RotationPeriod, 100))
                    .col(string_len_null(Planets::OrbitalPeriod, 100))
                    .col(string_len_null(Planets::Terrain, 50))
                    .col(string_len_null(Planets::Diameter, 50))
                    .col(string_len_null(Planets::Climate, 100))
                    .col(string_len_null(Planets::Gravity, 100))
                    .col(string_len_null(Planets::Population, 120))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum People {
    Table,
    Id,
    Name,
    Height,
    Weight,
    Gender,
}

#[derive(DeriveIden)]
enum Vehicles {
    Table,
    Id,
    Name,
    ModelName,
    Manufacturer,
    CostInCredits,
    Length,
    Crew,
    Passengers,
    CargoCapacity,
    Consumables,
    VehicleClass,
}

#[derive(DeriveIden)]
enum Planets {
    Table,
    Id,
    Name,
    RotationPeriod,
    OrbitalPeriod,
    Terrain,
    Diameter,
    Climate,
    Gravity,
    Population,
}
