use crate::domain::listing::{FarmType, Listing};

/// Persisted farm profile, owned and edited by a single farmer account.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmProfile {
    pub owner_id: i64,
    pub name: String,
    pub bio: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Partial update for a profile save. `None` fields keep their stored
/// values (merge-on-write, never a full replace).
#[derive(Debug, Clone, Default)]
pub struct FarmProfileUpdate {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl FarmProfile {
    /// View a stored profile as a listing so the explore/farms pages can
    /// render persisted and aggregated entries through the same cards.
    pub fn to_listing(&self) -> Listing {
        Listing {
            id: format!("farm:{}", self.owner_id),
            name: self.name.clone(),
            bio: self.bio.clone(),
            lat: self.latitude.unwrap_or(0.0),
            lon: self.longitude.unwrap_or(0.0),
            address: self.address.clone(),
            farm_type: FarmType::Farm,
            distance: 0.0,
            products: Vec::new(),
            rating: 0.0,
            logo_url: String::new(),
            hero_url: String::new(),
        }
    }
}
