use crate::domain::listing::{FarmType, Listing};

// Default center used when neither device location nor a zip code is
// available (Los Angeles).
pub const DEFAULT_LAT: f64 = 34.0522;
pub const DEFAULT_LON: f64 = -118.2437;

/// Bundled listings served when live aggregation is unavailable, so the
/// explore page is never empty for a signed-in user.
pub fn seed_listings() -> Vec<Listing> {
    vec![
        seed(
            "green-valley-greens",
            "Green Valley Greens",
            "Specializing in organic leafy greens and heirloom vegetables.",
            "123 Green Valley Rd, Organica, CA",
            FarmType::Farm,
            4.8,
            &["heirloom-tomatoes", "green-lettuce"],
        ),
        seed(
            "sunrise-eggs",
            "Sunrise Eggs",
            "The freshest free-range eggs, from happy chickens.",
            "456 Chicken Run, Cluckington, CA",
            FarmType::Farm,
            4.9,
            &["free-range-eggs"],
        ),
        seed(
            "honeybee-meadows",
            "Honeybee Meadows",
            "Artisanal honey from local wildflowers. As pure as it gets.",
            "789 Nectar Ln, Buzzville, CA",
            FarmType::Vendor,
            4.7,
            &["wildflower-honey"],
        ),
        seed(
            "riverside-market",
            "Riverside Community Market",
            "A collective of local growers and artisans. Your one-stop shop for local goodness.",
            "101 Market St, Riverside, CA",
            FarmType::Market,
            4.6,
            &["fresh-strawberries", "organic-zucchini"],
        ),
    ]
}

fn seed(
    id: &str,
    name: &str,
    bio: &str,
    address: &str,
    farm_type: FarmType,
    rating: f64,
    products: &[&str],
) -> Listing {
    Listing {
        id: id.to_string(),
        name: name.to_string(),
        bio: bio.to_string(),
        lat: DEFAULT_LAT,
        lon: DEFAULT_LON,
        address: address.to_string(),
        farm_type,
        distance: 0.0,
        products: products.iter().map(|p| p.to_string()).collect(),
        rating,
        logo_url: String::new(),
        hero_url: String::new(),
    }
}
