use crate::directory::aggregate::AggregateOutcome;
use crate::directory::error::DirectoryError;
use crate::directory::placeholder::PlaceholderData;
use crate::directory::seed;
use crate::domain::listing::Listing;

/// Anonymous callers see at most this many listings.
pub const GUEST_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    Live,
    Seed,
}

/// What the caller actually renders. The notice is independent of the
/// list: a degraded fetch still produces listings, plus an explanation.
#[derive(Debug)]
pub struct ResolvedListings {
    pub listings: Vec<Listing>,
    pub notice: Option<String>,
    pub source: ListingSource,
}

/// Decide what a caller gets from an aggregation attempt. Never fails:
/// every path lands on a list.
///
/// - Live data present: full list for members, with an advisory notice
///   when some directories were down.
/// - Config error, or nothing came back and at least one directory
///   failed: bundled seed set plus an error notice (degraded mode).
/// - Healthy-but-empty result: empty live list, no notice; the page
///   renders its own "nothing nearby" state.
/// - Anonymous callers get the first `GUEST_LIMIT` entries of whichever
///   source was selected; seed distances are synthesized for guests so
///   non-members only see approximate proximity.
pub fn resolve(
    fetched: Result<AggregateOutcome, DirectoryError>,
    authenticated: bool,
    placeholders: &dyn PlaceholderData,
) -> ResolvedListings {
    let (mut listings, notice, source) = match fetched {
        Ok(outcome) if !outcome.listings.is_empty() => {
            let notice = if outcome.failed.is_empty() {
                None
            } else {
                let names: Vec<&str> = outcome.failed.iter().map(|d| d.slug()).collect();
                Some(format!(
                    "Some listing directories were unavailable: {}. Results may be incomplete.",
                    names.join(", ")
                ))
            };
            (outcome.listings, notice, ListingSource::Live)
        }
        Ok(outcome) if outcome.failed.is_empty() => {
            // Upstream healthy, genuinely nothing nearby.
            (Vec::new(), None, ListingSource::Live)
        }
        // Missing credentials or every directory failed.
        Ok(_) | Err(_) => (
            seed::seed_listings(),
            Some(
                "Could not fetch farm data. Please try again later. \
                 Ensure your directory API key is set."
                    .to_string(),
            ),
            ListingSource::Seed,
        ),
    };

    if !authenticated {
        listings.truncate(GUEST_LIMIT);
        if source == ListingSource::Seed {
            for listing in &mut listings {
                listing.distance = placeholders.guest_distance();
            }
            listings.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        }
    }

    ResolvedListings {
        listings,
        notice,
        source,
    }
}
