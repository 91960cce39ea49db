use rand::Rng;

/// Stand-in values for data the upstream does not provide. Kept behind a
/// trait so tests can substitute fixed values and so real computed data
/// can replace the defaults without touching call sites.
pub trait PlaceholderData {
    /// Rating shown when the source has none. A fixed stand-in, not a
    /// computed score.
    fn default_rating(&self) -> f64;

    fn default_bio(&self) -> String;

    fn default_address(&self) -> String;

    /// Synthesized distance for the anonymous guest slice of the static
    /// seed set. Guests see approximate distances on purpose.
    fn guest_distance(&self) -> f64;
}

pub struct DefaultPlaceholders;

impl PlaceholderData for DefaultPlaceholders {
    fn default_rating(&self) -> f64 {
        4.5
    }

    fn default_bio(&self) -> String {
        "A local market providing fresh produce from various vendors.".to_string()
    }

    fn default_address(&self) -> String {
        "Address not provided by the listing directory".to_string()
    }

    fn guest_distance(&self) -> f64 {
        rand::thread_rng().gen_range(0.5..25.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_distance_stays_in_range() {
        let ph = DefaultPlaceholders;
        for _ in 0..50 {
            let d = ph.guest_distance();
            assert!((0.5..25.0).contains(&d));
        }
    }

    #[test]
    fn default_rating_is_mid_high() {
        assert_eq!(DefaultPlaceholders.default_rating(), 4.5);
    }
}
