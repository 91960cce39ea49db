/// Coarse category of a listing, derived from the source directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmType {
    Farm,
    Market,
    Vendor,
}

impl FarmType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FarmType::Farm => "farm",
            FarmType::Market => "market",
            FarmType::Vendor => "vendor",
        }
    }

    /// Human label for cards and detail pages.
    pub fn label(&self) -> &'static str {
        match self {
            FarmType::Farm => "Farm",
            FarmType::Market => "Market",
            FarmType::Vendor => "Vendor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Canonical listing surfaced to callers of the aggregation pipeline.
/// Built fresh per request and discarded with the response; the persisted
/// farm profile is a separate type (`domain::farm::FarmProfile`).
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub lat: f64,
    pub lon: f64,
    pub address: String,
    pub farm_type: FarmType,
    /// Ranking key only. Units come straight from the source directory.
    pub distance: f64,
    /// Product ids, filled in by the catalog join at presentation time.
    pub products: Vec<String>,
    pub rating: f64,
    pub logo_url: String,
    pub hero_url: String,
}
