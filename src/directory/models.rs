use serde::{Deserialize, Deserializer};

// record
//  ├── listing_id
//  ├── listing_name
//  ├── brief_desc
//  ├── location_street / _city / _state / _zipcode
//  ├── location_x (lon), location_y (lat)
//  └── distance
//
// Field presence varies per directory; everything except the identifier
// and name is optional in practice.

#[derive(Debug, Deserialize)]
pub struct DirectoryResponse {
    pub data: Option<Vec<RawListing>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListing {
    pub listing_id: Option<String>,
    pub listing_name: Option<String>,
    pub brief_desc: Option<String>,

    pub location_street: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub location_zipcode: Option<String>,

    #[serde(default, deserialize_with = "flexible_f64")]
    pub location_x: Option<f64>,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub location_y: Option<f64>,

    // The API returns distance as a string for some directories and a
    // number for others.
    #[serde(default, deserialize_with = "flexible_f64")]
    pub distance: Option<f64>,

    #[serde(default, deserialize_with = "flexible_f64")]
    pub rating: Option<f64>,
}

/// Accept a JSON number, a numeric string, or null.
fn flexible_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(f64),
        Str(String),
    }

    let v = Option::<NumOrString>::deserialize(deserializer)?;
    Ok(match v {
        None => None,
        Some(NumOrString::Num(n)) => Some(n),
        Some(NumOrString::Str(s)) => s.trim().parse::<f64>().ok(),
    })
}
