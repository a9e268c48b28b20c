//! Wire format of the countries-with-cities endpoint.

use serde::Deserialize;

use crate::GatewayError;

#[derive(Debug, Deserialize)]
struct CountryEntry {
    cities: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CountriesResponse {
    data: Vec<CountryEntry>,
}

pub(super) fn parse_cities(body: &str) -> Result<Vec<String>, GatewayError> {
    let parsed: CountriesResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::Decode(format!("Failed to parse country list JSON: {e}")))?;

    Ok(parsed.data.into_iter().flat_map(|country| country.cities).collect())
}
