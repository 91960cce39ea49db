// Presentation adapter: decorate normalized listings with display assets
// and the product-catalog join. Consumes the pipeline's output, never
// feeds back into it.
use crate::domain::listing::Listing;
use crate::domain::product;

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x300";
const IMAGE_VARIANTS: usize = 4;

pub fn logo_url(index: usize) -> String {
    format!(
        "{PLACEHOLDER_IMAGE}?text=farm-logo-{}",
        index % IMAGE_VARIANTS + 1
    )
}

pub fn hero_url(index: usize) -> String {
    format!(
        "{PLACEHOLDER_IMAGE}?text=farm-hero-{}",
        index % IMAGE_VARIANTS + 1
    )
}

pub fn product_image_url(product_id: &str) -> String {
    format!("{PLACEHOLDER_IMAGE}?text={product_id}")
}

/// Attach cycling placeholder images to every listing, and join the
/// static product catalog onto entries that don't already carry product
/// ids (live directories never do).
pub fn attach_display_assets(listings: &mut [Listing]) {
    for (index, listing) in listings.iter_mut().enumerate() {
        listing.logo_url = logo_url(index);
        listing.hero_url = hero_url(index);

        if listing.products.is_empty() {
            listing.products = product::for_farm(&listing.id)
                .iter()
                .map(|p| p.id.to_string())
                .collect();
        }
    }
}
