use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::package::{NewPackage, NewReview, PackageUpdate, Review, TravelPackage};
use crate::rating::recompute_rating;

/// In-memory catalog of travel packages. Sole owner of `TravelPackage`
/// entities; every mutation goes through the operations below.
///
/// Backed by a `Vec` so the public listing keeps insertion order.
pub struct CatalogStore {
    packages: Vec<TravelPackage>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            packages: Vec::new(),
        }
    }

    pub fn with_packages(packages: Vec<TravelPackage>) -> Self {
        Self { packages }
    }

    /// Create a new package with a generated id
    pub fn create_package(&mut self, new: NewPackage) -> Result<&TravelPackage, CatalogError> {
        if new.price <= 0 {
            return Err(CatalogError::InvalidPrice(new.price));
        }

        let package = TravelPackage {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            location: new.location,
            price: new.price,
            duration: new.duration,
            description: new.description,
            rating: new.rating,
            featured: new.featured,
            available_dates: new.available_dates,
            transport_types: new.transport_types,
            included_items: new.included_items,
            excluded_items: new.excluded_items,
            reviews: Vec::new(),
        };

        info!(package_id = %package.id, title = %package.title, "package created");
        self.packages.push(package);
        Ok(self.packages.last().expect("just pushed"))
    }

    /// Apply a partial update. Rating and reviews are untouchable here;
    /// they only change through `add_review`.
    pub fn update_package(
        &mut self,
        id: &str,
        update: PackageUpdate,
    ) -> Result<&TravelPackage, CatalogError> {
        let package = self.get_mut(id)?;

        if let Some(price) = update.price {
            if price <= 0 {
                return Err(CatalogError::InvalidPrice(price));
            }
            package.price = price;
        }
        if let Some(title) = update.title {
            package.title = title;
        }
        if let Some(location) = update.location {
            package.location = location;
        }
        if let Some(duration) = update.duration {
            package.duration = duration;
        }
        if let Some(description) = update.description {
            package.description = description;
        }
        if let Some(featured) = update.featured {
            package.featured = featured;
        }
        if let Some(dates) = update.available_dates {
            package.available_dates = dates;
        }
        if let Some(transport) = update.transport_types {
            package.transport_types = transport;
        }
        if let Some(included) = update.included_items {
            package.included_items = included;
        }
        if let Some(excluded) = update.excluded_items {
            package.excluded_items = excluded;
        }

        Ok(&*package)
    }

    pub fn delete_package(&mut self, id: &str) -> Result<TravelPackage, CatalogError> {
        let index = self
            .packages
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let removed = self.packages.remove(index);
        info!(package_id = %removed.id, "package deleted");
        Ok(removed)
    }

    pub fn get(&self, id: &str) -> Option<&TravelPackage> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn packages(&self) -> &[TravelPackage] {
        &self.packages
    }

    pub fn featured(&self) -> impl Iterator<Item = &TravelPackage> {
        self.packages.iter().filter(|p| p.featured)
    }

    /// Case-insensitive search over title and location
    pub fn search(&self, term: &str) -> Vec<&TravelPackage> {
        let term = term.to_lowercase();
        self.packages
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&term) || p.location.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Prepend a review to the package and recompute its displayed rating
    pub fn add_review(
        &mut self,
        package_id: &str,
        new: NewReview,
        today: NaiveDate,
    ) -> Result<&TravelPackage, CatalogError> {
        if !(1..=5).contains(&new.rating) {
            return Err(CatalogError::InvalidRating(new.rating));
        }

        let package = self.get_mut(package_id)?;

        let review = Review {
            id: Uuid::new_v4().to_string(),
            user_name: new.user_name,
            rating: new.rating,
            comment: new.comment,
            date: today,
        };

        package.reviews.insert(0, review);
        package.rating = recompute_rating(&package.reviews, package.rating);

        info!(package_id = %package.id, rating = package.rating, "review added");
        Ok(&*package)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut TravelPackage, CatalogError> {
        self.packages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Package price must be positive, got {0}")]
    InvalidPrice(i32),

    #[error("Review rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}
