use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Public view of a user: the password and flags never leave the service.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    #[serde(rename = "correo")]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
    pub url: String,
}

/// One row of a people/vehicles/planets listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CatalogSummary {
    #[serde(rename = "id_unico")]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogDetail<P> {
    #[serde(rename = "resultado")]
    pub result: DetailResult<P>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DetailResult<P> {
    #[serde(rename = "propiedades")]
    pub properties: P,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "id_unico")]
    pub id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PersonProperties {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "altura")]
    pub height: Option<String>,
    #[serde(rename = "peso")]
    pub weight: Option<String>,
    #[serde(rename = "genero")]
    pub gender: Option<String>,
    #[serde(rename = "id_unico")]
    pub id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VehicleProperties {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "modelo")]
    pub model_name: Option<String>,
    #[serde(rename = "fabricante")]
    pub manufacturer: Option<String>,
    #[serde(rename = "costo_en_creditos")]
    pub cost_in_credits: Option<String>,
    #[serde(rename = "longitud")]
    pub length: Option<String>,
    #[serde(rename = "tripulacion")]
    pub crew: Option<String>,
    #[serde(rename = "pasajeros")]
    pub passengers: Option<String>,
    #[serde(rename = "capacidad_de_carga")]
    pub cargo_capacity: Option<String>,
    #[serde(rename = "consumibles")]
    pub consumables: Option<String>,
    #[serde(rename = "clase")]
    pub vehicle_class: Option<String>,
    #[serde(rename = "id_unico")]
    pub id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlanetProperties {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "periodo_rotacion")]
    pub rotation_period: Option<String>,
    #[serde(rename = "periodo_orbital")]
    pub orbital_period: Option<String>,
    #[serde(rename = "terreno")]
    pub terrain: Option<String>,
    #[serde(rename = "diametro")]
    pub diameter: Option<String>,
    #[serde(rename = "clima")]
    pub climate: Option<String>,
    #[serde(rename = "gravedad")]
    pub gravity: Option<String>,
    #[serde(rename = "poblacion")]
    pub population: Option<String>,
    #[serde(rename = "id_unico")]
    pub id: i32,
}

/// A resolved favorite as returned by the favorites listing.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct FavoriteItem {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
}

/// Catalog a favorite points into.
///
/// The Spanish plural token is what clients send and what is stored.
/// Rows written with the English singular tokens (`person`, `vehicle`,
/// `planet`) still resolve when read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Personas,
    Vehiculos,
    Planetas,
}

impl ItemType {
    pub const ALL: [ItemType; 3] = [ItemType::Personas, ItemType::Vehiculos, ItemType::Planetas];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Personas => "personas",
            ItemType::Vehiculos => "vehiculos",
            ItemType::Planetas => "planetas",
        }
    }

    /// Singular label shown in the favorites listing.
    pub fn label(self) -> &'static str {
        match self {
            ItemType::Personas => "persona",
            ItemType::Vehiculos => "vehiculo",
            ItemType::Planetas => "planeta",
        }
    }

    /// Capitalized token, as used in "not found" messages.
    pub fn title(self) -> &'static str {
        match self {
            ItemType::Personas => "Personas",
            ItemType::Vehiculos => "Vehiculos",
            ItemType::Planetas => "Planetas",
        }
    }

    /// Resolve a stored `item_type` column value.
    pub fn from_stored(token: &str) -> Option<Self> {
        match token {
            "personas" | "person" => Some(ItemType::Personas),
            "vehiculos" | "vehicle" => Some(ItemType::Vehiculos),
            "planetas" | "planet" => Some(ItemType::Planetas),
            _ => None,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = ItemType::ALL.iter().map(|kind| kind.as_str()).collect();
                AppError::BadRequest(format!(
                    "Tipo de item inválido. Debe ser uno de: {}",
                    allowed.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_plural_tokens_on_input() {
        assert_eq!("planetas".parse::<ItemType>().unwrap(), ItemType::Planetas);
        assert!("planet".parse::<ItemType>().is_err());
        assert!("Planetas".parse::<ItemType>().is_err());
    }

    #[test]
    fn invalid_token_lists_allowed_values() {
        let err = "naves".parse::<ItemType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Tipo de item inválido. Debe ser uno de: personas, vehiculos, planetas"
        );
    }

    #[test]
    fn stored_tokens_accept_legacy_singulars() {
        assert_eq!(ItemType::from_stored("person"), Some(ItemType::Personas));
        assert_eq!(ItemType::from_stored("vehiculos"), Some(ItemType::Vehiculos));
        assert_eq!(ItemType::from_stored("starship"), None);
    }
}
