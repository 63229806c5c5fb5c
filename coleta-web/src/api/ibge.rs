use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::http::get_json;
use crate::vars::IBGE_API_URL;

// wire shapes of the IBGE localidades API
#[derive(Debug, Deserialize)]
struct IbgeUf {
    sigla: String,
    nome: String,
}

#[derive(Debug, Deserialize)]
struct IbgeCity {
    nome: String,
}

/// Brazilian federative unit, remapped from the IBGE response.
#[derive(Debug, Clone, PartialEq)]
pub struct Uf {
    pub abbr: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
}

fn ufs_url() -> String {
    format!("{}/estados?orderBy=nome", IBGE_API_URL)
}

fn cities_url(uf: &str) -> String {
    // an unset selection yields an empty path segment here; the request
    // fails and the caller ends up with an empty city list
    format!("{}/estados/{}/municipios?orderBy=nome", IBGE_API_URL, uf)
}

/// Fetches the state list, ordered alphabetically by name.
pub async fn fetch_ufs() -> Result<Vec<Uf>, ApiError> {
    let ufs: Vec<IbgeUf> = get_json(&ufs_url()).await?;
    Ok(ufs
        .into_iter()
        .map(|uf| Uf {
            abbr: uf.sigla,
            name: uf.nome,
        })
        .collect())
}

/// Fetches the municipality list of `uf`, ordered alphabetically by name.
pub async fn fetch_cities(uf: &str) -> Result<Vec<City>, ApiError> {
    let cities: Vec<IbgeCity> = get_json(&cities_url(uf)).await?;
    Ok(cities
        .into_iter()
        .map(|city| City { name: city.nome })
        .collect())
}
