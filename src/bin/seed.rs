use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use starwars_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{People, Planets, Vehicles, people, planets, vehicles},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let people = seed_people(&orm).await?;
    let vehicles = seed_vehicles(&orm).await?;
    let planets = seed_planets(&orm).await?;

    tracing::info!(people, vehicles, planets, "seed completed");
    Ok(())
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

async fn seed_people(orm: &DatabaseConnection) -> anyhow::Result<usize> {
    // name, height, mass, gender
    let rows = [
        ("Luke Skywalker", "172", "77", "male"),
        ("C-3PO", "167", "75", "n/a"),
        ("R2-D2", "96", "32", "n/a"),
        ("Darth Vader", "202", "136", "male"),
        ("Leia Organa", "150", "49", "female"),
        ("Owen Lars", "178", "120", "male"),
        ("Beru Whitesun lars", "165", "75", "female"),
        ("Obi-Wan Kenobi", "182", "77", "male"),
    ];

    let mut inserted = 0;
    for (name, height, weight, gender) in rows {
        let exists = People::find()
            .filter(people::Column::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        people::ActiveModel {
            name: Set(name.to_string()),
            height: Set(text(height)),
            weight: Set(text(weight)),
            gender: Set(text(gender)),
            ..Default::default()
        }
        .insert(orm)
        .await?;
        inserted += 1;
    }

    tracing::info!(inserted, "seeded people");
    Ok(inserted)
}

async fn seed_vehicles(orm: &DatabaseConnection) -> anyhow::Result<usize> {
    // name, model, manufacturer, cost, length, crew, passengers, cargo, consumables, class
    let rows = [
        (
            "Sand Crawler", "Digger Crawler", "Corellia Mining Corporation", "150000",
            "36.8", "46", "30", "50000", "2 months", "wheeled",
        ),
        (
            "T-16 skyhopper", "T-16 skyhopper", "Incom Corporation", "14500",
            "10.4", "1", "1", "50", "0", "repulsorcraft",
        ),
        (
            "X-34 landspeeder", "X-34 landspeeder", "SoroSuub Corporation", "10550",
            "3.4", "1", "1", "5", "unknown", "repulsorcraft",
        ),
        (
            "TIE/LN starfighter", "Twin Ion Engine/Ln Starfighter", "Sienar Fleet Systems", "unknown",
            "6.4", "1", "0", "65", "2 days", "starfighter",
        ),
        (
            "Snowspeeder", "t-47 airspeeder", "Incom corporation", "unknown",
            "4.5", "2", "0", "10", "none", "airspeeder",
        ),
    ];

    let mut inserted = 0;
    for (name, model, manufacturer, cost, length, crew, passengers, cargo, consumables, class) in rows {
        let exists = Vehicles::find()
            .filter(vehicles::Column::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        vehicles::ActiveModel {
            name: Set(name.to_string()),
            model_name: Set(text(model)),
            manufacturer: Set(text(manufacturer)),
            cost_in_credits: Set(text(cost)),
            length: Set(text(length)),
            crew: Set(text(crew)),
            passengers: Set(text(passengers)),
            cargo_capacity: Set(text(cargo)),
            consumables: Set(text(consumables)),
            vehicle_class: Set(text(class)),
            ..Default::default()
        }
        .insert(orm)
        .await?;
        inserted += 1;
    }

    tracing::info!(inserted, "seeded vehicles");
    Ok(inserted)
}

async fn seed_planets(orm: &DatabaseConnection) -> anyhow::Result<usize> {
    // name, rotation, orbital, terrain, diameter, climate, gravity, population
    let rows = [
        ("Tatooine", "23", "304", "desert", "10465", "arid", "1 standard", "200000"),
        (
            "Alderaan", "24", "364", "grasslands, mountains", "12500", "temperate",
            "1 standard", "2000000000",
        ),
        ("Yavin IV", "24", "4818", "jungle, rainforests", "10200", "temperate, tropical", "1 standard", "1000"),
        ("Hoth", "23", "549", "tundra, ice caves, mountain ranges", "7200", "frozen", "1.1 standard", "unknown"),
        ("Dagobah", "23", "341", "swamp, jungles", "8900", "murky", "N/A", "unknown"),
        ("Bespin", "12", "5110", "gas giant", "118000", "temperate", "1.5 (surface), 1 standard (Cloud City)", "6000000"),
    ];

    let mut inserted = 0;
    for (name, rotation, orbital, terrain, diameter, climate, gravity, population) in rows {
        let exists = Planets::find()
            .filter(planets::Column::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        planets::ActiveModel {
            name: Set(name.to_string()),
            rotation_period: Set(text(rotation)),
            orbital_period: Set(text(orbital)),
            terrain: Set(text(terrain)),
            diameter: Set(text(diameter)),
            climate: Set(text(climate)),
            gravity: Set(text(gravity)),
            population: Set(text(population)),
            ..Default::default()
        }
        .insert(orm)
        .await?;
        inserted += 1;
    }

    tracing::info!(inserted, "seeded planets");
    Ok(inserted)
}
