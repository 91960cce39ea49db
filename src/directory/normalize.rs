use crate::directory::models::RawListing;
use crate::directory::placeholder::PlaceholderData;
use crate::directory::Directory;
use crate::domain::listing::{GeoPoint, Listing};

/// Map one raw directory record into the canonical listing shape.
///
/// Records without a usable identifier and name are dropped (`None`) —
/// partial, lossy normalization is the intended behavior, not an error.
/// Deterministic for a fixed placeholder strategy.
pub fn normalize(
    raw: &RawListing,
    directory: Directory,
    center: GeoPoint,
    placeholders: &dyn PlaceholderData,
) -> Option<Listing> {
    let id = non_empty(raw.listing_id.as_deref())?;
    let name = non_empty(raw.listing_name.as_deref())?;

    let bio = non_empty(raw.brief_desc.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| placeholders.default_bio());

    let address = join_address(&[
        raw.location_street.as_deref(),
        raw.location_city.as_deref(),
        raw.location_state.as_deref(),
        raw.location_zipcode.as_deref(),
    ])
    .unwrap_or_else(|| placeholders.default_address());

    // Directories often omit precise coordinates; fall back to the search
    // origin so every listing can still be placed on a map.
    let lat = raw.location_y.unwrap_or(center.lat);
    let lon = raw.location_x.unwrap_or(center.lon);

    let rating = raw
        .rating
        .filter(|r| (0.0..=5.0).contains(r))
        .unwrap_or_else(|| placeholders.default_rating());

    Some(Listing {
        id: id.to_string(),
        name: name.to_string(),
        bio,
        lat,
        lon,
        address,
        farm_type: directory.farm_type(),
        // No unit conversion: the value is a ranking key only.
        distance: raw.distance.unwrap_or(0.0).max(0.0),
        products: Vec::new(),
        rating,
        logo_url: String::new(),
        hero_url: String::new(),
    })
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Join the available address parts with ", ", skipping blanks.
fn join_address(parts: &[Option<&str>]) -> Option<String> {
    let joined = parts
        .iter()
        .filter_map(|p| non_empty(*p))
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::FarmType;

    struct FixedData;

    impl PlaceholderData for FixedData {
        fn default_rating(&self) -> f64 {
            4.5
        }
        fn default_bio(&self) -> String {
            "default bio".to_string()
        }
        fn default_address(&self) -> String {
            "no address".to_string()
        }
        fn guest_distance(&self) -> f64 {
            9.9
        }
    }

    const CENTER: GeoPoint = GeoPoint {
        lat: 34.0522,
        lon: -118.2437,
    };

    fn raw(id: &str, name: &str) -> RawListing {
        RawListing {
            listing_id: Some(id.to_string()),
            listing_name: Some(name.to_string()),
            ..RawListing::default()
        }
    }

    #[test]
    fn normalizing_twice_yields_identical_listings() {
        let mut r = raw("A", "Main St Market");
        r.distance = Some(1.2);
        r.brief_desc = Some("Organic produce".to_string());

        let a = normalize(&r, Directory::FarmersMarket, CENTER, &FixedData).unwrap();
        let b = normalize(&r, Directory::FarmersMarket, CENTER, &FixedData).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn records_without_id_or_name_are_dropped() {
        let mut no_id = raw("", "Named");
        no_id.listing_id = None;
        assert!(normalize(&no_id, Directory::Csa, CENTER, &FixedData).is_none());

        let blank_id = raw("   ", "Named");
        assert!(normalize(&blank_id, Directory::Csa, CENTER, &FixedData).is_none());

        let mut no_name = raw("A", "");
        no_name.listing_name = None;
        assert!(normalize(&no_name, Directory::Csa, CENTER, &FixedData).is_none());
    }

    #[test]
    fn address_joins_non_empty_parts() {
        let mut r = raw("A", "Farm");
        r.location_street = Some("123 Green Valley Rd".to_string());
        r.location_city = Some("Organica".to_string());
        r.location_state = Some("".to_string());
        r.location_zipcode = Some("90001".to_string());

        let l = normalize(&r, Directory::OnFarmMarket, CENTER, &FixedData).unwrap();
        assert_eq!(l.address, "123 Green Valley Rd, Organica, 90001");
    }

    #[test]
    fn missing_address_uses_placeholder() {
        let l = normalize(&raw("A", "Farm"), Directory::Csa, CENTER, &FixedData).unwrap();
        assert_eq!(l.address, "no address");
        assert_eq!(l.bio, "default bio");
    }

    #[test]
    fn category_comes_from_the_source_directory() {
        let l = normalize(&raw("A", "X"), Directory::FarmersMarket, CENTER, &FixedData).unwrap();
        assert_eq!(l.farm_type, FarmType::Market);

        let l = normalize(&raw("A", "X"), Directory::Agritourism, CENTER, &FixedData).unwrap();
        assert_eq!(l.farm_type, FarmType::Vendor);
    }

    #[test]
    fn missing_coordinates_fall_back_to_search_origin() {
        let l = normalize(&raw("A", "X"), Directory::Csa, CENTER, &FixedData).unwrap();
        assert_eq!(l.lat, CENTER.lat);
        assert_eq!(l.lon, CENTER.lon);
    }

    #[test]
    fn distance_passes_through_and_clamps_negative() {
        let mut r = raw("A", "X");
        r.distance = Some(3.5);
        let l = normalize(&r, Directory::Csa, CENTER, &FixedData).unwrap();
        assert_eq!(l.distance, 3.5);

        r.distance = Some(-2.0);
        let l = normalize(&r, Directory::Csa, CENTER, &FixedData).unwrap();
        assert_eq!(l.distance, 0.0);
    }

    #[test]
    fn rating_defaults_when_absent_or_out_of_range() {
        let mut r = raw("A", "X");
        let l = normalize(&r, Directory::Csa, CENTER, &FixedData).unwrap();
        assert_eq!(l.rating, 4.5);

        r.rating = Some(11.0);
        let l = normalize(&r, Directory::Csa, CENTER, &FixedData).unwrap();
        assert_eq!(l.rating, 4.5);

        r.rating = Some(3.0);
        let l = normalize(&r, Directory::Csa, CENTER, &FixedData).unwrap();
        assert_eq!(l.rating, 3.0);
    }
}
