use sea_orm::{
    ConnectionTrait, EntityTrait, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};
use serde::Serialize;

use crate::{
    entity::{People, Planets, Vehicles, people, planets, vehicles},
    error::{AppError, AppResult},
    middleware::link::BaseUrl,
    models::{
        CatalogDetail, CatalogSummary, DetailResult, ItemType, PersonProperties, PlanetProperties,
        VehicleProperties,
    },
    response::ListResponse,
    state::AppState,
};

/// A row of one of the read-only catalogs.
pub trait CatalogEntry {
    /// Route prefix of the single-item endpoint, e.g. `/personas`.
    const ROUTE: &'static str;
    const DESCRIPTION: &'static str;
    const NOT_FOUND: &'static str;

    type Properties: Serialize;

    fn id(&self) -> i32;
    fn name(&self) -> &str;
    fn into_properties(self) -> Self::Properties;
}

impl CatalogEntry for people::Model {
    const ROUTE: &'static str = "/personas";
    const DESCRIPTION: &'static str = "Un personaje de Star Wars";
    const NOT_FOUND: &'static str = "Personaje no encontrado";

    type Properties = PersonProperties;

    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn into_properties(self) -> PersonProperties {
        PersonProperties {
            name: self.name,
            height: self.height,
            weight: self.weight,
            gender: self.gender,
            id: self.id,
        }
    }
}

impl CatalogEntry for vehicles::Model {
    const ROUTE: &'static str = "/vehiculos";
    const DESCRIPTION: &'static str = "Un vehículo de Star Wars";
    const NOT_FOUND: &'static str = "Vehículo no encontrado";

    type Properties = VehicleProperties;

    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn into_properties(self) -> VehicleProperties {
        VehicleProperties {
            name: self.name,
            model_name: self.model_name,
            manufacturer: self.manufacturer,
            cost_in_credits: self.cost_in_credits,
            length: self.length,
            crew: self.crew,
            passengers: self.passengers,
            cargo_capacity: self.cargo_capacity,
            consumables: self.consumables,
            vehicle_class: self.vehicle_class,
            id: self.id,
        }
    }
}

impl CatalogEntry for planets::Model {
    const ROUTE: &'static str = "/planetas";
    const DESCRIPTION: &'static str = "Un planeta de Star Wars";
    const NOT_FOUND: &'static str = "Planeta no encontrado";

    type Properties = PlanetProperties;

    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn into_properties(self) -> PlanetProperties {
        PlanetProperties {
            name: self.name,
            rotation_period: self.rotation_period,
            orbital_period: self.orbital_period,
            terrain: self.terrain,
            diameter: self.diameter,
            climate: self.climate,
            gravity: self.gravity,
            population: self.population,
            id: self.id,
        }
    }
}

pub async fn list_catalog<E>(
    state: &AppState,
    base: &BaseUrl,
) -> AppResult<ListResponse<CatalogSummary>>
where
    E: EntityTrait,
    E::Model: CatalogEntry,
{
    let mut query = E::find();
    for key in E::PrimaryKey::iter() {
        query = query.order_by_asc(key.into_column());
    }
    let rows = query.all(&state.orm).await?;

    let items = rows
        .iter()
        .map(|row| CatalogSummary {
            id: row.id(),
            name: row.name().to_owned(),
            url: base.link(&format!("{}/{}", <E::Model as CatalogEntry>::ROUTE, row.id())),
        })
        .collect();

    Ok(ListResponse::new(items))
}

pub async fn get_catalog<E>(
    state: &AppState,
    id: i32,
) -> AppResult<CatalogDetail<<E::Model as CatalogEntry>::Properties>>
where
    E: EntityTrait,
    E::Model: CatalogEntry,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let row = find_catalog_item::<E, _>(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::NotFound(<E::Model as CatalogEntry>::NOT_FOUND.into()))?;

    let id = row.id();
    Ok(CatalogDetail {
        result: DetailResult {
            properties: row.into_properties(),
            description: <E::Model as CatalogEntry>::DESCRIPTION.into(),
            id,
        },
    })
}

pub async fn find_catalog_item<E, C>(db: &C, id: i32) -> AppResult<Option<E::Model>>
where
    E: EntityTrait,
    C: ConnectionTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    Ok(E::find_by_id(id).one(db).await?)
}

/// Look up `id` in the catalog selected by `item_type`, returning its id and
/// name when the row exists.
pub async fn resolve_item<C: ConnectionTrait>(
    db: &C,
    item_type: ItemType,
    id: i32,
) -> AppResult<Option<(i32, String)>> {
    let found = match item_type {
        ItemType::Personas => find_catalog_item::<People, _>(db, id)
            .await?
            .map(|row| (row.id, row.name)),
        ItemType::Vehiculos => find_catalog_item::<Vehicles, _>(db, id)
            .await?
            .map(|row| (row.id, row.name)),
        ItemType::Planetas => find_catalog_item::<Planets, _>(db, id)
            .await?
            .map(|row| (row.id, row.name)),
    };
    Ok(found)
}
