// The farm-data aggregation pipeline: one client call per listing
// directory, normalization into `domain::Listing`, concurrent fan-out
// with dedup/sort, and the fallback policy for degraded upstreams.
pub mod aggregate;
pub mod client;
pub mod error;
pub mod fallback;
pub mod models;
pub mod normalize;
pub mod placeholder;
pub mod seed;

pub use aggregate::{aggregate, AggregateOutcome};
pub use client::{DirectoryClient, DirectorySource};
pub use error::DirectoryError;
pub use fallback::{resolve, ListingSource, ResolvedListings, GUEST_LIMIT};

use crate::config::Config;
use crate::domain::listing::{FarmType, GeoPoint};
use placeholder::DefaultPlaceholders;

/// One category of external listing source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directory {
    FarmersMarket,
    Csa,
    OnFarmMarket,
    FoodHub,
    Agritourism,
}

impl Directory {
    pub const ALL: [Directory; 5] = [
        Directory::FarmersMarket,
        Directory::Csa,
        Directory::OnFarmMarket,
        Directory::FoodHub,
        Directory::Agritourism,
    ];

    /// Path segment used by the upstream API.
    pub fn slug(self) -> &'static str {
        match self {
            Directory::FarmersMarket => "farmersmarket",
            Directory::Csa => "csa",
            Directory::OnFarmMarket => "onfarmmarket",
            Directory::FoodHub => "foodhub",
            Directory::Agritourism => "agritourism",
        }
    }

    /// Fixed directory-to-category table. Total: every directory maps to
    /// one of the three farm types.
    pub fn farm_type(self) -> FarmType {
        match self {
            Directory::FarmersMarket => FarmType::Market,
            Directory::OnFarmMarket | Directory::Csa => FarmType::Farm,
            Directory::FoodHub | Directory::Agritourism => FarmType::Vendor,
        }
    }
}

/// The caller-facing entry point for the explore page. Queries every
/// configured directory around `center`, and always resolves to a list:
/// live aggregated data, or the static seed set when the upstream is
/// unavailable, trimmed for anonymous callers. Never fails.
pub fn explore_listings(
    cfg: &Config,
    center: GeoPoint,
    radius_miles: f64,
    authenticated: bool,
) -> ResolvedListings {
    let placeholders = DefaultPlaceholders;

    let fetched = DirectoryClient::from_config(cfg)
        .map(|client| aggregate(&client, center, radius_miles, &Directory::ALL, &placeholders));

    resolve(fetched, authenticated, &placeholders)
}
