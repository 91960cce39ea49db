pub mod farm;
pub mod listing;
pub mod order;
pub mod product;

pub use farm::{FarmProfile, FarmProfileUpdate};
pub use listing::{FarmType, GeoPoint, Listing};
