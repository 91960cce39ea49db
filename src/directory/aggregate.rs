use crate::directory::client::DirectorySource;
use crate::directory::error::DirectoryError;
use crate::directory::models::RawListing;
use crate::directory::normalize::normalize;
use crate::directory::placeholder::PlaceholderData;
use crate::directory::Directory;
use crate::domain::listing::{GeoPoint, Listing};
use std::collections::HashMap;
use std::thread;

/// Combined result of one fan-out. Failed directories are metadata, not
/// errors: the successful subset is always usable.
#[derive(Debug)]
pub struct AggregateOutcome {
    pub listings: Vec<Listing>,
    pub failed: Vec<Directory>,
}

/// Query every directory concurrently, join, then normalize, dedup and
/// sort. One thread per directory: the calls are independent, I/O-bound
/// and order-insensitive, and nothing is shared until the join.
///
/// Partial-failure policy: a failing directory is recorded in `failed`
/// and the rest of the result stands. Callers decide whether an entirely
/// failed fan-out warrants the seed fallback (`fallback::resolve`).
pub fn aggregate<S: DirectorySource + Sync>(
    source: &S,
    center: GeoPoint,
    radius_miles: f64,
    directories: &[Directory],
    placeholders: &dyn PlaceholderData,
) -> AggregateOutcome {
    let results: Vec<(Directory, Result<Vec<RawListing>, DirectoryError>)> = thread::scope(|s| {
        let handles: Vec<_> = directories
            .iter()
            .map(|&d| (d, s.spawn(move || source.fetch(d, center, radius_miles))))
            .collect();

        handles
            .into_iter()
            .map(|(d, h)| match h.join() {
                Ok(res) => (d, res),
                Err(_) => (
                    d,
                    Err(DirectoryError::Network("directory worker panicked".into())),
                ),
            })
            .collect()
    });

    let mut failed = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut listings: Vec<Listing> = Vec::new();

    for (directory, result) in results {
        match result {
            Ok(raws) => {
                for raw in &raws {
                    let Some(listing) = normalize(raw, directory, center, placeholders) else {
                        continue;
                    };
                    match index.get(&listing.id) {
                        // Same listing seen from another directory: keep
                        // whichever record carries more real data. Ties
                        // keep the earlier record.
                        Some(&at) => {
                            if completeness(&listing, placeholders)
                                > completeness(&listings[at], placeholders)
                            {
                                listings[at] = listing;
                            }
                        }
                        None => {
                            index.insert(listing.id.clone(), listings.len());
                            listings.push(listing);
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("⚠️ directory {} failed: {e}", directory.slug());
                failed.push(directory);
            }
        }
    }

    listings.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    AggregateOutcome { listings, failed }
}

/// Count of fields carrying source data rather than placeholder defaults.
fn completeness(listing: &Listing, placeholders: &dyn PlaceholderData) -> u32 {
    let mut score = 0;
    if listing.bio != placeholders.default_bio() {
        score += 1;
    }
    if listing.address != placeholders.default_address() {
        score += 1;
    }
    if listing.distance > 0.0 {
        score += 1;
    }
    if listing.rating != placeholders.default_rating() {
        score += 1;
    }
    score
}
