pub mod package;
pub mod rating;
pub mod store;

pub use package::{NewPackage, NewReview, PackageUpdate, Review, TransportType, TravelPackage};
pub use rating::recompute_rating;
pub use store::{CatalogError, CatalogStore};
